use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

const MAX_LEN: usize = 2000;

/// Free-form message attached to a submission.
///
/// Over-long messages are a validation failure, never silently truncated.
#[derive(Debug, Clone)]
pub struct MessageBody(String);

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for MessageBody {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err("Message is required".into());
        }
        if value.graphemes(true).count() > MAX_LEN {
            return Err("Message must be 2000 characters or fewer".into());
        }

        Ok(Self(value.to_string()))
    }
}
