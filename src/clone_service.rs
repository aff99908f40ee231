use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::{
    cloner::Cloner,
    error::PathError,
    folder_name::parse_folder_name,
    locator::RepositoryLocator,
    models::{SubmissionRecord, SubmissionStatus},
    registry::{SubmissionRegistry, UpsertOutcome},
    report::RunSummary,
    scanner::{list_subfolders, resolve_root},
};

/// Runs the whole pipeline over a folder of downloaded submissions:
/// parse folder names, keep each person's latest submission, find the
/// repository links and clone them.
pub struct CloneService<C: Cloner> {
    locator: RepositoryLocator,
    cloner: C,
}

impl<C: Cloner> CloneService<C> {
    pub fn new(locator: RepositoryLocator, cloner: C) -> CloneService<C> {
        CloneService { locator, cloner }
    }

    /// Fails only when `root` cannot be resolved or listed. Per-submission
    /// problems end up in the summary.
    #[tracing::instrument(skip(self))]
    pub fn run(&self, root: &Path) -> Result<RunSummary, PathError> {
        let root = resolve_root(root)?;
        info!("Processing {}", root.display());

        let mut registry = self.collect_submissions(&root)?;
        info!("Found {} submission(s)", registry.len());

        self.locate_repositories(&mut registry);
        self.clone_repositories(&mut registry);

        Ok(RunSummary::new(root, registry.into_records()))
    }

    pub fn collect_submissions(&self, root: &Path) -> Result<SubmissionRegistry, PathError> {
        let mut registry = SubmissionRegistry::new();

        for folder in list_subfolders(root)? {
            let Some(parsed) = folder
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(parse_folder_name)
            else {
                debug!("Skipping {}: not a submission folder", folder.display());
                continue;
            };

            match registry.upsert_latest(SubmissionRecord::new(folder, parsed)) {
                UpsertOutcome::Inserted => {}

                UpsertOutcome::Replaced { previous } => {
                    info!(
                        "Ignoring earlier submission from {}: {}",
                        previous.display_name(),
                        previous.folder.display()
                    );
                }

                UpsertOutcome::KeptExisting { rejected } => {
                    info!(
                        "Ignoring earlier submission from {}: {}",
                        rejected.display_name(),
                        rejected.folder.display()
                    );
                }
            }
        }

        Ok(registry)
    }

    pub fn locate_repositories(&self, registry: &mut SubmissionRegistry) {
        for (_key, record) in registry.iter_mut() {
            self.locator.resolve(record);
        }
    }

    pub fn clone_repositories(&self, registry: &mut SubmissionRegistry) {
        for (key, record) in registry.iter_mut() {
            let address = match (record.status, &record.clone_address) {
                (SubmissionStatus::LinkFound, Some(address)) => address.clone(),
                _ => {
                    warn!("No repository link found for {key}, not cloning");
                    continue;
                }
            };

            info!("Cloning {address} into {}", record.folder.display());

            match self.cloner.clone_repository(&record.folder, &address) {
                Ok(output) => {
                    debug!(stdout = %output.stdout, stderr = %output.stderr, "Clone finished");
                    info!("{key}: cloned");
                    record.mark_cloned();
                }

                Err(err) => {
                    error!("Could not clone {address} for {}: {err}", record.display_name());
                    record.mark_clone_failed(err.to_string());
                }
            }
        }
    }
}
