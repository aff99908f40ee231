use std::path::PathBuf;

use strum::{Display, EnumIter};
use time::PrimitiveDateTime;

use crate::folder_name::ParsedFolderName;

use super::{CloneAddress, RepositoryRef};

/// Lowercase concatenation of the first and last name.
///
/// Two submission folders with the same key belong to the same person.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(first: &str, last: &str) -> NameKey {
        NameKey(first.to_lowercase() + &last.to_lowercase())
    }
}

impl std::fmt::Display for NameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NameKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum SubmissionStatus {
    /// Folder parsed, HTML not scanned yet.
    Pending,
    LinkFound,
    NoLink,
    Cloned,
    CloneFailed,
}

impl SubmissionStatus {
    pub fn can_advance_to(self, next: SubmissionStatus) -> bool {
        use SubmissionStatus::*;

        matches!(
            (self, next),
            (Pending, LinkFound) | (Pending, NoLink) | (LinkFound, Cloned) | (LinkFound, CloneFailed)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub folder: PathBuf,
    pub submitted_at: PrimitiveDateTime,
    pub first: String,
    pub last: String,
    pub repository: Option<RepositoryRef>,
    pub clone_address: Option<CloneAddress>,
    pub status: SubmissionStatus,
    pub clone_error: Option<String>,
}

impl SubmissionRecord {
    pub fn new(folder: PathBuf, parsed: ParsedFolderName) -> SubmissionRecord {
        SubmissionRecord {
            folder,
            submitted_at: parsed.submitted_at,
            first: parsed.first,
            last: parsed.last,
            repository: None,
            clone_address: None,
            status: SubmissionStatus::Pending,
            clone_error: None,
        }
    }

    pub fn key(&self) -> NameKey {
        NameKey::new(&self.first, &self.last)
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    pub fn mark_link_found(&mut self, repository: RepositoryRef, clone_address: CloneAddress) {
        self.advance(SubmissionStatus::LinkFound);
        self.repository = Some(repository);
        self.clone_address = Some(clone_address);
    }

    pub fn mark_no_link(&mut self) {
        self.advance(SubmissionStatus::NoLink);
    }

    pub fn mark_cloned(&mut self) {
        self.advance(SubmissionStatus::Cloned);
    }

    pub fn mark_clone_failed(&mut self, error: String) {
        self.advance(SubmissionStatus::CloneFailed);
        self.clone_error = Some(error);
    }

    fn advance(&mut self, next: SubmissionStatus) {
        debug_assert!(
            self.status.can_advance_to(next),
            "Invalid status transition {} -> {}",
            self.status,
            next
        );
        self.status = next;
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use time::macros::datetime;

    use crate::{
        folder_name::ParsedFolderName,
        models::{RepositoryRef, SubmissionRecord, SubmissionStatus},
    };

    use super::NameKey;

    fn record() -> SubmissionRecord {
        SubmissionRecord::new(
            PathBuf::from("/submissions/101768-164537 - Jan Doe - Jan 25, 2025 204 PM"),
            ParsedFolderName {
                first: "Jan".to_string(),
                last: "Doe".to_string(),
                submitted_at: datetime!(2025-01-25 14:04),
            },
        )
    }

    #[test]
    fn name_key_is_lowercase_concatenation() {
        assert_eq!(NameKey::new("Jan", "Doe").as_ref(), "jandoe");
        assert_eq!(NameKey::new("ÉMILE", "Zola-Dreyfus").as_ref(), "émilezola-dreyfus");
        assert_eq!(NameKey::new("JAN", "DOE"), NameKey::new("jan", "doe"));
    }

    #[test]
    fn status_names() {
        assert_eq!(SubmissionStatus::Pending.to_string(), "pending");
        assert_eq!(SubmissionStatus::LinkFound.to_string(), "link-found");
        assert_eq!(SubmissionStatus::NoLink.to_string(), "no-link");
        assert_eq!(SubmissionStatus::Cloned.to_string(), "cloned");
        assert_eq!(SubmissionStatus::CloneFailed.to_string(), "clone-failed");
    }

    #[test]
    fn transitions() {
        use SubmissionStatus::*;

        assert!(Pending.can_advance_to(LinkFound));
        assert!(Pending.can_advance_to(NoLink));
        assert!(LinkFound.can_advance_to(Cloned));
        assert!(LinkFound.can_advance_to(CloneFailed));

        assert!(!Pending.can_advance_to(Cloned));
        assert!(!NoLink.can_advance_to(Cloned));
        assert!(!Cloned.can_advance_to(CloneFailed));
        assert!(!CloneFailed.can_advance_to(Pending));
    }

    #[test]
    fn new_record_is_pending() {
        let record = record();
        assert_eq!(record.status, SubmissionStatus::Pending);
        assert_eq!(record.key().as_ref(), "jandoe");
        assert_eq!(record.display_name(), "Jan Doe");
        assert!(record.repository.is_none());
        assert!(record.clone_address.is_none());
    }

    #[test]
    fn failed_clone_keeps_error() {
        let mut record = record();
        let repository = RepositoryRef::new("alice", "proj");
        let address = repository.clone_address("git@github-fleming");

        record.mark_link_found(repository.clone(), address.clone());
        record.mark_clone_failed("fatal: repository not found".to_string());

        assert_eq!(record.status, SubmissionStatus::CloneFailed);
        assert_eq!(record.repository, Some(repository));
        assert_eq!(record.clone_address, Some(address));
        assert_eq!(
            record.clone_error.as_deref(),
            Some("fatal: repository not found")
        );
    }
}
