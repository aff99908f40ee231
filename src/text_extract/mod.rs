//! Small line-oriented extractors for contact details in plain text files.

mod contact;
mod phone;

pub use contact::{extract_contact, Contact};
pub use phone::{canonical_phone_number, phone_line_report};
