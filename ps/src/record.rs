//! The preferences record and the source catalog

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A selectable news source
#[derive(Debug, Clone, Copy)]
pub struct Source {
    /// Identifier stored in the record
    pub id: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// Fixed, compiled-in catalog of selectable news sources
pub const SOURCE_CATALOG: &[Source] = &[
    Source {
        id: "nzz",
        label: "NZZ",
    },
    Source {
        id: "economist",
        label: "The Economist",
    },
];

/// Check whether a source identifier belongs to the catalog
pub fn is_known_source(id: &str) -> bool {
    SOURCE_CATALOG.iter().any(|s| s.id == id)
}

/// Newsletter delivery frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// All frequencies, in selection order
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    /// Identifier written to the stored record
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Label shown in the form ("Every week")
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Every day",
            Self::Weekly => "Every week",
            Self::Monthly => "Every month",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(eyre::eyre!(
                "Unknown frequency: {} (expected daily, weekly, or monthly)",
                other
            )),
        }
    }
}

/// A user's newsletter subscription preferences
///
/// Field names follow the stored wire format (camelCase on disk). Missing
/// fields take their defaults when an older or partial record is read back;
/// a fresh record seeds the interests list with one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesRecord {
    pub email: String,
    pub selected_sources: Vec<String>,
    pub interests: Vec<String>,
    #[serde(with = "frequency_wire")]
    pub frequency: Option<Frequency>,
}

impl Default for PreferencesRecord {
    fn default() -> Self {
        Self {
            email: String::new(),
            selected_sources: Vec::new(),
            interests: vec![crate::DEFAULT_INTEREST.to_string()],
            frequency: None,
        }
    }
}

impl PreferencesRecord {
    /// Append an interest unless it is empty or already present
    ///
    /// Returns whether the list changed. Insertion order is preserved and
    /// duplicates are disallowed; rejected drafts are a silent no-op for
    /// the caller to surface (or not).
    pub fn add_interest(&mut self, interest: &str) -> bool {
        if interest.is_empty() || self.interests.iter().any(|i| i == interest) {
            return false;
        }
        self.interests.push(interest.to_string());
        true
    }

    /// Remove an interest; no-op if absent, order of the rest preserved
    pub fn remove_interest(&mut self, interest: &str) {
        self.interests.retain(|i| i != interest);
    }

    /// Set membership for a source id; no effect if already in that state
    pub fn set_source(&mut self, id: &str, selected: bool) {
        let present = self.selected_sources.iter().any(|s| s == id);
        if selected && !present {
            self.selected_sources.push(id.to_string());
        } else if !selected && present {
            self.selected_sources.retain(|s| s != id);
        }
    }

    /// Flip membership for a source id, returning the new state
    pub fn toggle_source(&mut self, id: &str) -> bool {
        let selected = !self.selected_sources.iter().any(|s| s == id);
        self.set_source(id, selected);
        selected
    }

    /// Check membership for a source id
    pub fn has_source(&self, id: &str) -> bool {
        self.selected_sources.iter().any(|s| s == id)
    }
}

/// Wire format for the frequency field: `"daily"`/`"weekly"`/`"monthly"`,
/// or the empty string when unset. Unknown strings degrade to unset rather
/// than failing the whole load.
mod frequency_wire {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Frequency;

    pub fn serialize<S: Serializer>(value: &Option<Frequency>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map_or("", Frequency::as_str))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Frequency>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_record_defaults() {
        let record = PreferencesRecord::default();

        assert_eq!(record.email, "");
        assert!(record.selected_sources.is_empty());
        assert_eq!(record.interests, vec!["Technology".to_string()]);
        assert!(record.frequency.is_none());
    }

    #[test]
    fn test_add_interest_rejects_duplicates() {
        let mut record = PreferencesRecord::default();

        assert!(record.add_interest("Climate"));
        assert!(!record.add_interest("Climate"));
        assert_eq!(record.interests, vec!["Technology".to_string(), "Climate".to_string()]);
    }

    #[test]
    fn test_add_interest_rejects_empty() {
        let mut record = PreferencesRecord::default();

        assert!(!record.add_interest(""));
        assert_eq!(record.interests.len(), 1);
    }

    #[test]
    fn test_remove_interest_preserves_order() {
        let mut record = PreferencesRecord::default();
        record.add_interest("Climate");
        record.add_interest("Markets");

        record.remove_interest("Climate");
        assert_eq!(record.interests, vec!["Technology".to_string(), "Markets".to_string()]);

        // Removing an absent entry is a no-op
        record.remove_interest("Climate");
        assert_eq!(record.interests.len(), 2);
    }

    #[test]
    fn test_set_source_is_idempotent() {
        let mut record = PreferencesRecord::default();

        record.set_source("nzz", true);
        record.set_source("nzz", true);
        assert_eq!(record.selected_sources, vec!["nzz".to_string()]);

        record.set_source("nzz", false);
        record.set_source("nzz", false);
        assert!(record.selected_sources.is_empty());
    }

    #[test]
    fn test_toggle_source_final_membership() {
        let mut record = PreferencesRecord::default();

        assert!(record.toggle_source("economist"));
        assert!(!record.toggle_source("economist"));
        assert!(!record.has_source("economist"));
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert!("fortnightly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_wire_format_field_names() {
        let mut record = PreferencesRecord::default();
        record.email = "a@b.com".to_string();
        record.set_source("nzz", true);

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["selectedSources"][0], "nzz");
        assert_eq!(json["interests"][0], "Technology");
        // Unset frequency is stored as the empty string
        assert_eq!(json["frequency"], "");

        record.frequency = Some(Frequency::Weekly);
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["frequency"], "weekly");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let record: PreferencesRecord = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();

        assert_eq!(record.email, "a@b.com");
        assert!(record.selected_sources.is_empty());
        assert_eq!(record.interests, vec!["Technology".to_string()]);
        assert!(record.frequency.is_none());
    }

    #[test]
    fn test_stored_empty_interests_stay_empty() {
        let record: PreferencesRecord = serde_json::from_str(r#"{"interests": []}"#).unwrap();
        assert!(record.interests.is_empty());
    }

    #[test]
    fn test_unknown_frequency_degrades_to_unset() {
        let record: PreferencesRecord = serde_json::from_str(r#"{"frequency": "hourly"}"#).unwrap();
        assert!(record.frequency.is_none());
    }
}
