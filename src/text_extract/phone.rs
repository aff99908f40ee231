use lazy_regex::regex_captures;

/// Recognizes a phone number with the area code in brackets at the end of
/// `candidate`, e.g. `(705)555-1212` or `(705) 555-1212`, and returns it as
/// `+1.705.555.1212`.
pub fn canonical_phone_number(candidate: &str) -> Option<String> {
    let (_whole, area, exchange, line) =
        regex_captures!(r"\((\d{3})\)\s?(\d{3})-(\d{4})$", candidate.trim())?;

    Some(format!("+1.{area}.{exchange}.{line}"))
}

/// One output line of `phone-numbers`: `<index> <line> <canonical or "no match">`.
pub fn phone_line_report(index: usize, line: &str) -> String {
    let line = line.trim();
    let canonical = canonical_phone_number(line);

    format!(
        "{index} {line} {}",
        canonical.as_deref().unwrap_or("no match")
    )
}
