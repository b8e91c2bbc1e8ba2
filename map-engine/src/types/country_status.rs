use serde::{Deserialize, Serialize};

/// Availability classification of a country in the library.
///
/// `None` is the default for any code the status table does not know about;
/// such countries render with the neutral land style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryStatus {
    Available,
    ComingSoon,
    Soon,
    #[default]
    None,
}

impl CountryStatus {
    /// Human-readable label for the detail panel.
    pub fn label(&self) -> &'static str {
        match self {
            CountryStatus::Available => "Available",
            CountryStatus::ComingSoon => "Coming soon",
            CountryStatus::Soon => "Soon",
            CountryStatus::None => "Not available yet",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, CountryStatus::Available)
    }
}
