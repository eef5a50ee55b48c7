//! Explanation level keys

use std::fmt;

/// Explanation style requested by the user.
///
/// Requests carry the raw key string; keys outside this set are accepted
/// and treated as [`Level::Simple`]-like by the prompt builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    FiveYearOld,
    Teenager,
    Simple,
    CustomAnalogy,
    Tldr,
    ProsCons,
    Metaphor,
}

impl Level {
    /// Every level, in the order the form offers them
    pub const ALL: [Level; 7] = [
        Level::Simple,
        Level::Teenager,
        Level::FiveYearOld,
        Level::Tldr,
        Level::ProsCons,
        Level::Metaphor,
        Level::CustomAnalogy,
    ];

    /// Parse a wire key
    pub fn parse(key: &str) -> Option<Level> {
        match key {
            "5-year-old" => Some(Level::FiveYearOld),
            "teenager" => Some(Level::Teenager),
            "simple" => Some(Level::Simple),
            "custom_analogy" => Some(Level::CustomAnalogy),
            "tldr" => Some(Level::Tldr),
            "pros_cons" => Some(Level::ProsCons),
            "metaphor" => Some(Level::Metaphor),
            _ => None,
        }
    }

    /// Wire key
    pub fn as_key(&self) -> &'static str {
        match self {
            Level::FiveYearOld => "5-year-old",
            Level::Teenager => "teenager",
            Level::Simple => "simple",
            Level::CustomAnalogy => "custom_analogy",
            Level::Tldr => "tldr",
            Level::ProsCons => "pros_cons",
            Level::Metaphor => "metaphor",
        }
    }

    /// Label shown on the input form
    pub fn form_label(&self) -> &'static str {
        match self {
            Level::Simple => "Простое объяснение",
            Level::Teenager => "Как подростку",
            Level::FiveYearOld => "Как 5-летнему",
            Level::Tldr => "Кратко (TL;DR)",
            Level::ProsCons => "Плюсы и минусы",
            Level::Metaphor => "Через метафору (AI придумает)",
            Level::CustomAnalogy => "С моей аналогией...",
        }
    }

    /// Label shown on a stored explanation page
    pub fn display_name(key: &str, analogy: Option<&str>) -> String {
        match Level::parse(key) {
            Some(Level::Simple) => "Простое".to_string(),
            Some(Level::Teenager) => "Для подростка".to_string(),
            Some(Level::FiveYearOld) => "Для 5-летнего".to_string(),
            Some(Level::Tldr) => "Кратко (TL;DR)".to_string(),
            Some(Level::ProsCons) => "Плюсы и минусы".to_string(),
            Some(Level::Metaphor) => "Метафора".to_string(),
            Some(Level::CustomAnalogy) => match analogy {
                Some(a) => format!("Аналогия: {}", a),
                None => "Аналогия".to_string(),
            },
            None => key.to_string(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}
