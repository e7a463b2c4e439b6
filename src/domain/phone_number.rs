use std::str::FromStr;

use regex::Regex;

/// Contact phone number.
///
/// Deliberately permissive: an optional leading `+` followed by at least ten
/// digits, spaces, dashes or parentheses. Formatting is preserved as typed.
#[derive(Debug, Clone)]
pub struct PhoneNumber(String);

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lazy_static::lazy_static! {
            static ref PHONE_REGEX: Regex = Regex::new(r"^[+]?[0-9\s\-()]{10,}$").unwrap();
        }

        let value = value.trim();

        if value.is_empty() {
            return Err("Phone is required".into());
        }
        if !PHONE_REGEX.is_match(value) {
            return Err("Please provide a valid phone number".into());
        }

        Ok(Self(value.to_string()))
    }
}
