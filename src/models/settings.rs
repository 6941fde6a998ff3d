use serde::{Deserialize, Serialize};

/// Troop-wide planning defaults, persisted with the rest of the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub troop_name: String,

    /// Roster size used when a plan does not specify one.
    pub default_scouts: u32,

    /// Budget guideline checked by the audit insights, in dollars.
    pub target_cost_per_scout_per_day: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            troop_name: "Troop 242".to_string(),
            default_scouts: 6,
            target_cost_per_scout_per_day: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.troop_name, "Troop 242");
        assert_eq!(settings.default_scouts, 6);
        assert!((settings.target_cost_per_scout_per_day - 6.0).abs() < 0.001);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"defaultScouts": 12}"#).unwrap();
        assert_eq!(settings.default_scouts, 12);
        assert_eq!(settings.troop_name, "Troop 242");
    }
}
