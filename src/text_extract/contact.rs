use std::fmt::Display;

use lazy_regex::regex_captures;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}'s phone number is {}.", self.name, self.phone)
    }
}

/// Extracts `NAME=<name> ... PHONE=<phone>` from a line. Both values end at
/// the first whitespace; the phone may also end the line.
pub fn extract_contact(line: &str) -> Option<Contact> {
    let (_whole, name, phone) = regex_captures!(r"NAME=(.*?)\s.*?PHONE=(\S*)(?:\s|$)", line)?;

    Some(Contact {
        name: name.to_owned(),
        phone: phone.to_owned(),
    })
}
