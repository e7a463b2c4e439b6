use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

const MAX_LEN: usize = 100;

/// Submitter's name, trimmed and length-bounded
#[derive(Debug, Clone)]
pub struct ClientName(String);

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ClientName {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err("Name is required".into());
        }
        if value.graphemes(true).count() > MAX_LEN {
            return Err("Name must be 100 characters or fewer".into());
        }

        Ok(Self(value.to_string()))
    }
}
