use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ModeSetError, TravelMode, TravelModeSet};

/// app-facing configuration for the travel modes a query may use. accepts
/// either a comma-separated string of mode names or an explicit list:
///
/// ```json
/// { "modes": "WALK,BUS" }
/// { "modes": ["WALK", "BUS"] }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum ModeSetConfig {
    ModeList(Vec<TravelMode>),
    ModeCsv(String),
}

impl ModeSetConfig {
    /// resolves this configuration into a travel mode set. fails on any
    /// unknown mode name in the csv form; the list form rejects unknown
    /// names during deserialization.
    pub fn build(&self) -> Result<TravelModeSet, ModeSetError> {
        let result = match self {
            ModeSetConfig::ModeList(modes) => TravelModeSet::new(modes),
            ModeSetConfig::ModeCsv(csv) => TravelModeSet::from_str(csv)?,
        };
        log::debug!("built travel mode set {result}");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_csv_form() {
        let config: ModeSetConfig = serde_json::from_str("\"WALK,BUS\"").expect("deserializes");
        let set = config.build().expect("builds");
        assert_eq!(set, TravelModeSet::new(&[TravelMode::Walk, TravelMode::Bus]));
    }

    #[test]
    fn test_build_from_list_form() {
        let config: ModeSetConfig =
            serde_json::from_str("[\"WALK\", \"BUS\"]").expect("deserializes");
        let set = config.build().expect("builds");
        assert_eq!(set, TravelModeSet::new(&[TravelMode::Walk, TravelMode::Bus]));
    }

    #[test]
    fn test_both_forms_build_equal_sets() {
        let csv: ModeSetConfig = serde_json::from_str("\"TRANSIT,BICYCLE\"").expect("deserializes");
        let list: ModeSetConfig =
            serde_json::from_str("[\"TRANSIT\", \"BICYCLE\"]").expect("deserializes");
        assert_eq!(
            csv.build().expect("builds"),
            list.build().expect("builds")
        );
    }

    #[test]
    fn test_unknown_name_in_csv_fails_build() {
        let config: ModeSetConfig = serde_json::from_str("\"WALK,FLYING\"").expect("deserializes");
        assert_eq!(
            config.build(),
            Err(ModeSetError::UnknownModeName {
                name: "FLYING".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_name_in_list_fails_deserialization() {
        let result = serde_json::from_str::<ModeSetConfig>("[\"WALK\", \"FLYING\"]");
        assert!(result.is_err());
    }
}
