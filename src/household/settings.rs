//! Household display settings.
//!
//! Known keys are typed; anything else a client stores is kept verbatim so
//! older or newer dashboards can round-trip their own preferences.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{HouseholdData, HouseholdResult, ValidationError};
use crate::schedule::PeriodKind;

fn default_calendar_name() -> String {
    "Office Chores Manager".to_string()
}

fn default_title_week() -> String {
    "Employee of the Week".to_string()
}

fn default_title_month() -> String {
    "Employee of the Month".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,
    #[serde(default = "default_title_week")]
    pub leaderboard_title_week: String,
    #[serde(default = "default_title_month")]
    pub leaderboard_title_month: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            calendar_name: default_calendar_name(),
            leaderboard_title_week: default_title_week(),
            leaderboard_title_month: default_title_month(),
            extra: Map::new(),
        }
    }
}

impl Settings {
    pub fn leaderboard_title(&self, kind: PeriodKind) -> &str {
        match kind {
            PeriodKind::Week => &self.leaderboard_title_week,
            PeriodKind::Month => &self.leaderboard_title_month,
        }
    }
}

impl HouseholdData {
    /// Shallow-merge `patch` into the settings.
    pub fn merge_settings(&mut self, patch: Map<String, Value>) -> HouseholdResult<Settings> {
        let mut merged = match serde_json::to_value(&self.settings) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        merged.extend(patch);
        let settings: Settings = serde_json::from_value(Value::Object(merged))
            .map_err(|e| ValidationError::InvalidSettings(e.to_string()))?;
        self.settings = settings.clone();
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn merge_keeps_unspecified_keys() {
        let mut data = HouseholdData::default();
        let settings = data
            .merge_settings(object(json!({ "calendarName": "Den Duties", "accent": "#ff8c00" })))
            .unwrap();
        assert_eq!(settings.calendar_name, "Den Duties");
        assert_eq!(settings.leaderboard_title_week, "Employee of the Week");
        assert_eq!(settings.extra.get("accent"), Some(&json!("#ff8c00")));

        let settings = data
            .merge_settings(object(json!({ "leaderboardTitleMonth": "Top Dog" })))
            .unwrap();
        assert_eq!(settings.calendar_name, "Den Duties");
        assert_eq!(settings.leaderboard_title(PeriodKind::Month), "Top Dog");
        assert_eq!(settings.extra.get("accent"), Some(&json!("#ff8c00")));
    }

    #[test]
    fn merge_rejects_wrongly_typed_known_keys() {
        let mut data = HouseholdData::default();
        let err = data
            .merge_settings(object(json!({ "calendarName": 7 })))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::household::HouseholdError::Invalid(ValidationError::InvalidSettings(_))
        ));
        assert_eq!(data.settings.calendar_name, "Office Chores Manager");
    }
}
