//! Phone number classification for the local-proof requirements.
//!
//! City pages must carry a local (area-code-matching) number in their NAP
//! block; a toll-free number on a city page is a configuration defect that
//! the content validation pass reports loudly.

/// North American toll-free area codes.
const TOLL_FREE_PREFIXES: &[&str] = &["800", "833", "844", "855", "866", "877", "888"];

/// Strip everything but digits, dropping a leading country code `1`.
pub fn normalize(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.strip_prefix('1') {
        Some(rest) if rest.len() == 10 => rest.to_string(),
        _ => digits,
    }
}

/// Whether a phone number is toll-free (1-800 and friends).
pub fn is_toll_free(phone: &str) -> bool {
    let digits = normalize(phone);
    digits.len() == 10 && TOLL_FREE_PREFIXES.contains(&&digits[..3])
}

/// Format a 10-digit number as `(XXX) XXX-XXXX`; anything else is returned
/// as given.
pub fn format_display(phone: &str) -> String {
    let digits = normalize(phone);
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}
