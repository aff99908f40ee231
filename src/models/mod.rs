mod repository_ref;
mod submission;

pub use repository_ref::{CloneAddress, RepositoryRef};
pub use submission::{NameKey, SubmissionRecord, SubmissionStatus};
