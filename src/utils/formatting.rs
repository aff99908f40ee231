use time::format_description::FormatItem;
use time::macros::format_description;
use time::PrimitiveDateTime;

const DATETIME_FORMAT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

pub fn format_submission_time(date_time: PrimitiveDateTime) -> String {
    date_time
        .format(DATETIME_FORMAT)
        .expect("Hard-coded format should be correct")
}
