//! Client-side checks for the page being left.
//!
//! Only required-ness and the two format rules on page 1 are checked here.
//! Everything else is the server's call.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

use super::model::{BasicInfo, CareerInfo, PageData, PreferenceInfo};

/// Exactly eleven ASCII digits.
static CONTACT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("contact pattern is valid"));

pub const MIN_AGE: i64 = 10;
pub const MAX_AGE: i64 = 120;

/// Parse a leading integer the way a browser's `parseInt(s, 10)` does:
/// optional sign, then the longest run of ASCII digits. Trailing text is
/// ignored; no digits at all yields `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Overlong digit runs saturate; they are out of range either way.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

pub fn is_valid_contact(contact: &str) -> bool {
    CONTACT_PATTERN.is_match(contact)
}

/// Empty age is allowed. Otherwise it must parse into `[MIN_AGE, MAX_AGE]`.
pub fn is_valid_age(age: &str) -> bool {
    if age.is_empty() {
        return true;
    }
    matches!(parse_leading_int(age), Some(n) if (MIN_AGE..=MAX_AGE).contains(&n))
}

/// Page 1: name and gender required, contact 11 digits, age optional in range.
///
/// A failing age check wins over a failing contact check; the generic
/// message is only used when neither format rule failed.
pub fn validate_basic(info: &BasicInfo) -> Result<(), ValidationError> {
    let mut valid = !info.name.is_empty() && !info.gender.is_empty();
    let mut specific = None;

    if !is_valid_contact(&info.contact) {
        valid = false;
        specific = Some(ValidationError::ContactFormat);
    }
    if !is_valid_age(&info.age) {
        valid = false;
        specific = Some(ValidationError::AgeOutOfRange);
    }

    if valid {
        Ok(())
    } else {
        Err(specific.unwrap_or(ValidationError::IncompletePage { page: 1 }))
    }
}

/// Page 2: industry and job role required.
pub fn validate_career(info: &CareerInfo) -> Result<(), ValidationError> {
    if info.industry.is_empty() || info.job_role.is_empty() {
        return Err(ValidationError::IncompletePage { page: 2 });
    }
    Ok(())
}

/// Page 3: a preference type must be selected.
pub fn validate_preference(info: &PreferenceInfo) -> Result<(), ValidationError> {
    if info.preference_type.is_empty() {
        return Err(ValidationError::IncompletePage { page: 3 });
    }
    Ok(())
}

/// Validate whichever page `data` belongs to. Page 4 has no required fields.
pub fn validate_page(data: &PageData) -> Result<(), ValidationError> {
    match data {
        PageData::Basic(info) => validate_basic(info),
        PageData::Career(info) => validate_career(info),
        PageData::Preference(info) => validate_preference(info),
        PageData::Extra(_) => Ok(()),
    }
}
