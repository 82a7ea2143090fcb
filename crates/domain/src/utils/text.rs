//! Text helpers for meeting classification
//!
//! Pure string plumbing shared by the classification heuristics: the
//! combined subject+body text every text heuristic scans, bracket-token
//! extraction, and email domain handling.

/// Build the combined lowercased text for a meeting
///
/// Subject and body are joined with a single space and lowercased; a missing
/// body contributes nothing but the separator stays, so prefix checks see
/// the same shape either way.
pub fn combined_text(subject: &str, body: Option<&str>) -> String {
    let body = body.unwrap_or_default();
    let mut text = String::with_capacity(subject.len() + body.len() + 1);
    text.push_str(subject);
    text.push(' ');
    text.push_str(body);
    text.to_lowercase()
}

/// Extract the contents of the first non-empty `[...]` group
///
/// Scans left to right; an empty pair like `[]` is skipped and the scan
/// continues. Returns `None` when no closed, non-empty group exists.
pub fn first_bracket_token(text: &str) -> Option<&str> {
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let tail = &rest[open + 1..];
        match tail.find(']') {
            Some(0) => rest = &tail[1..],
            Some(close) => return Some(&tail[..close]),
            None => return None,
        }
    }
    None
}

/// Lowercased domain part of an email address
///
/// Takes the text after the last `@`, matching how calendar sources format
/// addressable attendees. Returns `None` for addresses without a domain.
pub fn email_domain(email: &str) -> Option<String> {
    if !email.contains('@') {
        return None;
    }
    email
        .rsplit('@')
        .next()
        .filter(|domain| !domain.is_empty())
        .map(str::to_lowercase)
}
