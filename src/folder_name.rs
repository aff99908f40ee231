use lazy_regex::regex_captures;
use time::{Date, Month, PrimitiveDateTime, Time};
use tracing::debug;

/// Name and submission time recovered from a downloaded submission folder name,
/// e.g. `101768-164537 - Jan Doe - Jan 25, 2025 204 PM`.
///
/// The last name may be a single word, a hyphenated pair or a lone `.`,
/// the latter showing up for learners without a last name on file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedFolderName {
    pub first: String,
    pub last: String,
    pub submitted_at: PrimitiveDateTime,
}

#[derive(thiserror::Error, Debug)]
enum TimestampError {
    #[error("unknown month `{0}`")]
    UnknownMonth(String),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("hour {0} is not on a 12-hour clock")]
    HourOutOfRange(u16),
    #[error(transparent)]
    ComponentRange(#[from] time::error::ComponentRange),
}

/// Returns `None` for anything that is not a submission folder.
pub fn parse_folder_name(name: &str) -> Option<ParsedFolderName> {
    let (_whole, first, last, month, day, year, hhmm, meridiem) = regex_captures!(
        r"\d+-\d+\s-\s(\w+) (\.|\w+|\w+-\w+)\s-\s(\w+)\s(\d+),\s(\d{4})\s(\d{3,4})\s(AM|PM)$",
        name
    )?;

    match submission_timestamp(month, day, year, hhmm, meridiem) {
        Ok(submitted_at) => Some(ParsedFolderName {
            first: first.to_owned(),
            last: last.to_owned(),
            submitted_at,
        }),

        Err(err) => {
            debug!("Folder name {name:?} looks like a submission but has a bad timestamp: {err}");
            None
        }
    }
}

fn submission_timestamp(
    month: &str,
    day: &str,
    year: &str,
    hhmm: &str,
    meridiem: &str,
) -> Result<PrimitiveDateTime, TimestampError> {
    let month = month_from_abbreviation(month)
        .ok_or_else(|| TimestampError::UnknownMonth(month.to_owned()))?;
    let day: u8 = parse_number(day)?;
    let year: i32 = parse_number(year)?;

    // HMM or HHMM: "204" is 2:04, not 204 minutes.
    let hhmm: u16 = parse_number(hhmm)?;
    let (hour, minute) = (hhmm / 100, hhmm % 100);

    if !(1..=12).contains(&hour) {
        return Err(TimestampError::HourOutOfRange(hour));
    }

    let hour = match (hour, meridiem) {
        (12, "AM") => 0,
        (12, _) => 12,
        (hour, "AM") => hour,
        (hour, _) => hour + 12,
    };

    let date = Date::from_calendar_date(year, month, day)?;
    let time = Time::from_hms(hour as u8, minute as u8, 0)?;

    Ok(PrimitiveDateTime::new(date, time))
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, TimestampError> {
    value
        .parse()
        .map_err(|_| TimestampError::InvalidNumber(value.to_owned()))
}

fn month_from_abbreviation(abbreviation: &str) -> Option<Month> {
    use Month::*;

    let month = match abbreviation.to_ascii_lowercase().as_str() {
        "jan" => January,
        "feb" => February,
        "mar" => March,
        "apr" => April,
        "may" => May,
        "jun" => June,
        "jul" => July,
        "aug" => August,
        "sep" => September,
        "oct" => October,
        "nov" => November,
        "dec" => December,
        _ => return None,
    };

    Some(month)
}
