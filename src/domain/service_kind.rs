use std::str::FromStr;

/// Optional service classification on a contact submission.
///
/// Membership in the fixed set is the only rule; an absent or empty selection
/// maps to [`ServiceKind::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    #[default]
    Unspecified,
    Custom,
    CoverUp,
    Piercing,
    HomeService,
    Consultation,
    Other,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Custom => "custom",
            Self::CoverUp => "cover-up",
            Self::Piercing => "piercing",
            Self::HomeService => "home-service",
            Self::Consultation => "consultation",
            Self::Other => "other",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" => Ok(Self::Unspecified),
            "custom" => Ok(Self::Custom),
            "cover-up" => Ok(Self::CoverUp),
            "piercing" => Ok(Self::Piercing),
            "home-service" => Ok(Self::HomeService),
            "consultation" => Ok(Self::Consultation),
            "other" => Ok(Self::Other),
            _ => Err("Unknown service selection".into()),
        }
    }
}
