//! # Stored Explanation Record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted explanation, stored as `<slug>.json`.
///
/// Records are written once after a generation passes validation and are
/// never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredExplanation {
    /// Topic exactly as the user typed it
    pub topic_raw: String,
    /// Normalized identifier, also the file stem
    pub slug: String,
    /// Style key the explanation was generated for
    pub level: String,
    /// Only present for the custom analogy style
    #[serde(default)]
    pub analogy: Option<String>,
    pub explanation_text: String,
    pub meta_title: String,
    pub meta_description: String,
    /// Write time, serialized as ISO-8601
    pub created_at: DateTime<Utc>,
}

impl StoredExplanation {
    /// File name of this record inside the store directory
    pub fn file_name(&self) -> String {
        format!("{}.json", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> StoredExplanation {
        StoredExplanation {
            topic_raw: "Квантовые вычисления".to_string(),
            slug: "kvantovye-vychisleniia-simple".to_string(),
            level: "simple".to_string(),
            analogy: None,
            explanation_text: "Кубит может быть сразу 0 и 1.".to_string(),
            meta_title: "title".to_string(),
            meta_description: "description...".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap(),
        }
    }

    #[test]
    fn test_timestamp_is_iso8601() {
        let json = serde_json::to_value(sample()).unwrap();
        let stamp = json["created_at"].as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(stamp).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), sample().created_at);
    }

    #[test]
    fn test_missing_analogy_defaults_to_none() {
        let json = r#"{
            "topic_raw": "t", "slug": "t-simple", "level": "simple",
            "explanation_text": "x", "meta_title": "m", "meta_description": "d",
            "created_at": "2024-03-01T12:30:45+00:00"
        }"#;
        let record: StoredExplanation = serde_json::from_str(json).unwrap();
        assert_eq!(record.analogy, None);
        assert_eq!(record.file_name(), "t-simple.json");
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let json = r#"{"topic_raw": "t", "slug": "t"}"#;
        assert!(serde_json::from_str::<StoredExplanation>(json).is_err());
    }
}
