//! Admin-managed catalog records and platform analytics.
//!
//! Crops, diseases, and cost templates are authored server-side and their
//! field sets evolve independently of this client, so they are carried as
//! opaque JSON objects keyed by `_id` rather than as rigid structs. The
//! only client-side invariant is that `_id` is unique within a fetched
//! list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalog record: an opaque bag of fields with an identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// Backend identifier, empty for records still being composed in a form.
    pub fn id(&self) -> &str {
        self.field_str("_id").unwrap_or("")
    }

    /// A field rendered as `&str`, if present and a string.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// A field coerced to display text. Numbers and bools stringify,
    /// null/missing render empty.
    pub fn display(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    /// Case-insensitive substring match over every string-coerced field
    /// value. This is the whole of client-side search; it never touches
    /// the backend.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.0.values().any(|value| {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            text.to_lowercase().contains(&needle)
        })
    }
}

/// Admin dashboard analytics payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub user_stats: UserStats,
    pub activity_stats: ActivityStats,
    #[serde(default)]
    pub popular_crops: Vec<PopularCrop>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: u64,
    pub active_users: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub total_queries: u64,
    pub disease_detections: u64,
    #[serde(default)]
    pub daily_activity: Vec<DailyActivity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyActivity {
    pub date: String,
    pub users: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopularCrop {
    pub name: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Record {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let wheat = record(json!({"_id": "1", "name": "Wheat", "category": "Cereals"}));
        let rice = record(json!({"_id": "2", "name": "Rice", "category": "Cereals"}));
        assert!(wheat.matches_query("whe"));
        assert!(!rice.matches_query("whe"));
        // every record matches the empty query
        assert!(rice.matches_query(""));
    }

    #[test]
    fn search_coerces_non_string_fields() {
        let rec = record(json!({"_id": "3", "name": "Gram", "duration": 120}));
        assert!(rec.matches_query("120"));
    }

    #[test]
    fn display_renders_missing_and_numeric_fields() {
        let rec = record(json!({"_id": "4", "name": "Arhar", "totalCost": 25000}));
        assert_eq!(rec.id(), "4");
        assert_eq!(rec.display("name"), "Arhar");
        assert_eq!(rec.display("totalCost"), "25000");
        assert_eq!(rec.display("season"), "");
    }
}
