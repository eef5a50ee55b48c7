//! Explanation request

use serde::{Deserialize, Serialize};

use super::errors::{ExplainError, ExplainResult};

pub const TOPIC_MIN_CHARS: usize = 3;
pub const TOPIC_MAX_CHARS: usize = 200;
pub const ANALOGY_MAX_CHARS: usize = 100;

/// What the user asked to have explained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub topic: String,
    /// Style key, see [`crate::prompt::Level`]; unknown keys are allowed
    pub level: String,
    #[serde(default)]
    pub analogy: Option<String>,
}

impl ExplainRequest {
    pub fn new(topic: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            level: level.into(),
            analogy: None,
        }
    }

    pub fn with_analogy(mut self, analogy: impl Into<String>) -> Self {
        self.analogy = Some(analogy.into());
        self
    }

    /// Check field bounds (lengths in characters)
    pub fn validate(&self) -> ExplainResult<()> {
        let len = self.topic.chars().count();
        if !(TOPIC_MIN_CHARS..=TOPIC_MAX_CHARS).contains(&len) {
            return Err(ExplainError::TopicLength {
                len,
                min: TOPIC_MIN_CHARS,
                max: TOPIC_MAX_CHARS,
            });
        }

        if self.level.is_empty() {
            return Err(ExplainError::MissingLevel);
        }

        if let Some(analogy) = &self.analogy {
            let len = analogy.chars().count();
            if len > ANALOGY_MAX_CHARS {
                return Err(ExplainError::AnalogyLength {
                    len,
                    max: ANALOGY_MAX_CHARS,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid() {
        assert!(ExplainRequest::new("ДНК", "simple").validate().is_ok());
        assert!(ExplainRequest::new("x".repeat(200), "simple").validate().is_ok());
    }

    #[test]
    fn test_topic_bounds() {
        assert_eq!(
            ExplainRequest::new("ab", "simple").validate(),
            Err(ExplainError::TopicLength { len: 2, min: 3, max: 200 })
        );
        assert!(ExplainRequest::new("x".repeat(201), "simple").validate().is_err());
    }

    #[test]
    fn test_analogy_bound() {
        let req = ExplainRequest::new("Recursion", "custom_analogy").with_analogy("y".repeat(101));
        assert!(matches!(
            req.validate(),
            Err(ExplainError::AnalogyLength { len: 101, .. })
        ));
    }

    #[test]
    fn test_missing_level() {
        assert_eq!(
            ExplainRequest::new("Recursion", "").validate(),
            Err(ExplainError::MissingLevel)
        );
    }

    #[test]
    fn test_deserialize_without_analogy() {
        let req: ExplainRequest =
            serde_json::from_str(r#"{"topic":"photosynthesis","level":"5-year-old"}"#).unwrap();
        assert_eq!(req.analogy, None);
    }
}
