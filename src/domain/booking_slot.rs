use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

const TATTOO_TYPE_MAX_LEN: usize = 100;

/// Requested tattoo style on a booking
#[derive(Debug, Clone)]
pub struct TattooType(String);

impl AsRef<str> for TattooType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TattooType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err("Tattoo type is required".into());
        }
        if value.graphemes(true).count() > TATTOO_TYPE_MAX_LEN {
            return Err("Tattoo type must be 100 characters or fewer".into());
        }

        Ok(Self(value.to_string()))
    }
}

/// Requested appointment date, kept as submitted
#[derive(Debug, Clone)]
pub struct PreferredDate(String);

impl AsRef<str> for PreferredDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PreferredDate {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err("Preferred date is required".into());
        }

        Ok(Self(value.to_string()))
    }
}

/// Requested appointment time, kept as submitted
#[derive(Debug, Clone)]
pub struct PreferredTime(String);

impl AsRef<str> for PreferredTime {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PreferredTime {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err("Preferred time is required".into());
        }

        Ok(Self(value.to_string()))
    }
}
