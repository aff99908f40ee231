use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use regex::Regex;
use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    error::ConfigError,
    models::{RepositoryRef, SubmissionRecord, SubmissionStatus},
};

/// Finds the repository link that a learner pasted into the submission comment.
///
/// The comment is saved as an `.html` file next to the submission. The link is
/// either a hyperlink (`href="https://github.com/owner/repo"`) or a plain paste
/// wrapped in a paragraph (`<p>https://github.com/owner/repo</p>`).
pub struct RepositoryLocator {
    hosting_url: String,
    server_alias: String,
    link_pattern: Regex,
}

impl RepositoryLocator {
    pub fn new(hosting_url: &str, server_alias: &str) -> Result<RepositoryLocator, ConfigError> {
        let hosting_url = hosting_url.trim_end_matches('/');
        let prefix = regex::escape(hosting_url);

        let link_pattern = Regex::new(&format!(
            r#"href="({prefix}/[^"/]+/[^"]+)"|<p>({prefix}/[^</]+/[^<]+)</p>"#
        ))
        .map_err(|_| ConfigError::HostingUrl(hosting_url.to_owned()))?;

        Ok(RepositoryLocator {
            hosting_url: hosting_url.to_owned(),
            server_alias: server_alias.to_owned(),
            link_pattern,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<RepositoryLocator, ConfigError> {
        RepositoryLocator::new(&config.hosting_url, &config.server_alias)
    }

    /// Returns the first link on the line that names a repository.
    pub fn find_in_line(&self, line: &str) -> Option<RepositoryRef> {
        self.link_pattern.captures_iter(line).find_map(|captures| {
            let url = captures.get(1).or_else(|| captures.get(2))?.as_str();
            RepositoryRef::from_url(url, &self.hosting_url)
        })
    }

    /// Scans the `.html` files directly inside `folder`, in name order, and
    /// returns the first repository link found.
    pub fn find_in_folder(&self, folder: &Path) -> Option<RepositoryRef> {
        for html_file in html_files(folder) {
            if let Some(repository) = self.find_in_file(&html_file) {
                debug!("Found {repository} in {}", html_file.display());
                return Some(repository);
            }
        }

        None
    }

    fn find_in_file(&self, path: &Path) -> Option<RepositoryRef> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                warn!("Could not open {}: {err}", path.display());
                return None;
            }
        };

        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!("Could not read {}: {err}", path.display());
                    return None;
                }
            };

            if let Some(repository) = self.find_in_line(&line) {
                return Some(repository);
            }
        }

        None
    }

    /// Moves a pending record to `link-found` or `no-link`. Other records are left alone.
    #[tracing::instrument(skip_all, fields(folder = %record.folder.display()))]
    pub fn resolve(&self, record: &mut SubmissionRecord) {
        if record.status != SubmissionStatus::Pending {
            return;
        }

        match self.find_in_folder(&record.folder) {
            Some(repository) => {
                let address = repository.clone_address(&self.server_alias);
                info!("{}: {address}", record.display_name());
                record.mark_link_found(repository, address);
            }

            None => {
                warn!("No repository link found for {}", record.display_name());
                record.mark_no_link();
            }
        }
    }
}

fn html_files(folder: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Could not list {}: {err}", folder.display());
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "html"))
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use indoc::indoc;
    use tempfile::TempDir;
    use test_log::test;
    use time::macros::datetime;

    use crate::{
        folder_name::ParsedFolderName,
        models::{RepositoryRef, SubmissionRecord, SubmissionStatus},
    };

    use super::RepositoryLocator;

    fn locator() -> RepositoryLocator {
        RepositoryLocator::new("https://github.com", "git@github-fleming").unwrap()
    }

    fn record(folder: PathBuf) -> SubmissionRecord {
        SubmissionRecord::new(
            folder,
            ParsedFolderName {
                first: "Jan".to_owned(),
                last: "Doe".to_owned(),
                submitted_at: datetime!(2025-01-25 14:04),
            },
        )
    }

    #[test]
    fn anchor_link() {
        assert_eq!(
            locator().find_in_line(
                r#"<p><a href="https://github.com/alice/proj" target="_blank">my repo</a></p>"#
            ),
            Some(RepositoryRef::new("alice", "proj"))
        );
    }

    #[test]
    fn paragraph_link() {
        assert_eq!(
            locator().find_in_line("<p>https://github.com/alice/proj</p>"),
            Some(RepositoryRef::new("alice", "proj"))
        );
    }

    #[test]
    fn repeated_git_suffix() {
        assert_eq!(
            locator().find_in_line(r#"href="https://github.com/alice/proj.git.git""#),
            Some(RepositoryRef::new("alice", "proj"))
        );
    }

    #[test]
    fn later_link_on_same_line() {
        assert_eq!(
            locator().find_in_line(
                r#"<a href="https://github.com/alice/.git">x</a> <a href="https://github.com/alice/proj">y</a>"#
            ),
            Some(RepositoryRef::new("alice", "proj"))
        );
    }

    #[test]
    fn trailing_space_in_paragraph() {
        assert_eq!(
            locator().find_in_line("<p>https://github.com/alice/proj </p>"),
            Some(RepositoryRef::new("alice", "proj"))
        );
    }

    #[test]
    fn other_hosts_are_ignored() {
        assert!(locator()
            .find_in_line(r#"<a href="https://gitlab.com/alice/proj">repo</a>"#)
            .is_none());
        assert!(locator()
            .find_in_line(r#"<a href="http://github.com/alice/proj">repo</a>"#)
            .is_none());
    }

    #[test]
    fn profile_link_is_not_a_repository() {
        assert!(locator()
            .find_in_line(r#"<a href="https://github.com/alice">alice</a>"#)
            .is_none());
    }

    #[test]
    fn bare_text_is_ignored() {
        assert!(locator()
            .find_in_line("My repo is https://github.com/alice/proj thanks")
            .is_none());
    }

    #[test]
    fn custom_host() {
        let locator = RepositoryLocator::new("https://git.example.edu/", "git@campus").unwrap();
        let repository = locator
            .find_in_line("<p>https://git.example.edu/bob/lab-3</p>")
            .unwrap();

        assert_eq!(repository, RepositoryRef::new("bob", "lab-3"));
        assert_eq!(
            repository.clone_address("git@campus").as_str(),
            "git@campus:bob/lab-3.git"
        );
    }

    #[test]
    fn first_match_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("comment.html"),
            indoc! {r#"
                <html>
                <body>
                <p>Here is my lab:</p>
                <p><a href="https://github.com/alice/first">first</a></p>
                <p>https://github.com/alice/second</p>
                </body>
                </html>
            "#},
        )
        .unwrap();

        assert_eq!(
            locator().find_in_folder(dir.path()),
            Some(RepositoryRef::new("alice", "first"))
        );
    }

    #[test]
    fn files_are_scanned_in_name_order() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("b.html"),
            "<p>https://github.com/alice/from-b</p>\n",
        )
        .unwrap();
        fs::write(dir.path().join("a.html"), "<p>nothing here</p>\n").unwrap();
        fs::write(
            dir.path().join("c.html"),
            "<p>https://github.com/alice/from-c</p>\n",
        )
        .unwrap();

        assert_eq!(
            locator().find_in_folder(dir.path()),
            Some(RepositoryRef::new("alice", "from-b"))
        );
    }

    #[test]
    fn non_html_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("notes.txt"),
            "<p>https://github.com/alice/proj</p>\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("nested.html")).unwrap();

        assert!(locator().find_in_folder(dir.path()).is_none());
    }

    #[test]
    fn invalid_utf8_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), [0xff, 0xfe, b'\n']).unwrap();
        fs::write(
            dir.path().join("b.html"),
            "<p>https://github.com/alice/proj</p>\n",
        )
        .unwrap();

        assert_eq!(
            locator().find_in_folder(dir.path()),
            Some(RepositoryRef::new("alice", "proj"))
        );
    }

    #[test]
    fn resolve_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("Jan Doe.html"),
            r#"<a href="https://github.com/CSIkid/COMP593-lab2.git">lab</a>"#,
        )
        .unwrap();

        let mut record = record(dir.path().to_owned());
        locator().resolve(&mut record);

        assert_eq!(record.status, SubmissionStatus::LinkFound);
        assert_eq!(
            record.repository,
            Some(RepositoryRef::new("CSIkid", "COMP593-lab2"))
        );
        assert_eq!(
            record.clone_address.unwrap().as_str(),
            "git@github-fleming:CSIkid/COMP593-lab2.git"
        );
    }

    #[test]
    fn resolve_without_link() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("comment.html"), "<p>I forgot the link</p>\n").unwrap();

        let mut record = record(dir.path().to_owned());
        locator().resolve(&mut record);

        assert_eq!(record.status, SubmissionStatus::NoLink);
        assert!(record.repository.is_none());
        assert!(record.clone_address.is_none());
    }

    #[test]
    fn resolve_without_html() {
        let dir = TempDir::new().unwrap();

        let mut record = record(dir.path().to_owned());
        locator().resolve(&mut record);

        assert_eq!(record.status, SubmissionStatus::NoLink);
    }

    #[test]
    fn resolve_skips_processed_records() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("comment.html"),
            "<p>https://github.com/alice/proj</p>\n",
        )
        .unwrap();

        let mut record = record(dir.path().to_owned());
        record.mark_no_link();
        locator().resolve(&mut record);

        assert_eq!(record.status, SubmissionStatus::NoLink);
        assert!(record.repository.is_none());
    }
}
