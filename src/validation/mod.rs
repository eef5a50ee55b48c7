//! # Output Validation
//!
//! Decides whether generated text is good enough to be cached. The
//! orchestrator only sees the [`Validator`] trait, so the heuristic below
//! can be swapped for a stricter strategy.

use std::fmt;

/// Outcome of checking one generated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Empty,
    TooShort { len: usize, min: usize },
    /// Text contains a phrase that signals an apology or failure
    FailureIndicator(String),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Empty => write!(f, "empty response"),
            Verdict::TooShort { len, min } => write!(f, "too short ({} < {} chars)", len, min),
            Verdict::FailureIndicator(p) => write!(f, "contains failure indicator {:?}", p),
        }
    }
}

/// Strategy that classifies generated text
pub trait Validator: Send + Sync + fmt::Debug {
    fn check(&self, level_key: &str, text: &str) -> Verdict;
}

/// Phrases that mark an apology or an error message rather than an answer
pub const FAILURE_INDICATORS: &[&str] = &[
    "извините",
    "не удалось",
    "ошибка",
    "не могу",
    "ограничений безопасности",
    "невозможно обработать",
    "сервис недоступен",
    "api key not valid",
    "произошла ошибка",
];

/// Length thresholds plus a case-insensitive substring denylist
#[derive(Debug, Clone)]
pub struct HeuristicValidator {
    indicators: Vec<String>,
}

impl HeuristicValidator {
    pub fn new() -> Self {
        Self::with_indicators(FAILURE_INDICATORS.iter().copied())
    }

    /// Build with a custom denylist
    pub fn with_indicators<'a>(indicators: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            indicators: indicators.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Minimum length in characters for `level_key`
    pub fn min_length(level_key: &str) -> usize {
        match level_key {
            "tldr" => 15,
            "5-year-old" => 30,
            _ => 50,
        }
    }
}

impl Default for HeuristicValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for HeuristicValidator {
    fn check(&self, level_key: &str, text: &str) -> Verdict {
        if text.is_empty() {
            return Verdict::Empty;
        }

        let len = text.chars().count();
        let min = Self::min_length(level_key);
        if len < min {
            return Verdict::TooShort { len, min };
        }

        let lower = text.to_lowercase();
        match self.indicators.iter().find(|p| lower.contains(p.as_str())) {
            Some(p) => Verdict::FailureIndicator(p.clone()),
            None => Verdict::Valid,
        }
    }
}
