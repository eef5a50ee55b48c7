//! Page metadata derived from a generated explanation

const TITLE_TOPIC_CHARS: usize = 40;
const DESCRIPTION_MAX_CHARS: usize = 160;
const ELLIPSIS: &str = "...";

/// `<title>` for an explanation page
pub fn meta_title(topic: &str) -> String {
    let short: String = topic.chars().take(TITLE_TOPIC_CHARS).collect();
    format!("Как понять '{}' простыми словами | ПростоПонятно.ai", short)
}

/// Meta description: the first one or two sentences, cut back to a word
/// boundary so the result fits 160 characters, always ending in `...`
pub fn meta_description(text: &str) -> String {
    let mut sentences = text.split('.').map(str::trim);
    let mut description = sentences.next().unwrap_or("").to_string();

    if let Some(second) = sentences.next().filter(|s| !s.is_empty()) {
        description.push_str(". ");
        description.push_str(second);
    }

    let budget = DESCRIPTION_MAX_CHARS - ELLIPSIS.len();
    if description.chars().count() > budget {
        let capped: String = description.chars().take(budget).collect();
        description = match capped.rfind(' ') {
            Some(idx) => capped[..idx].to_string(),
            None => capped,
        };
    }

    format!("{}{}", description.trim_end_matches(['.', ',', ' ']), ELLIPSIS)
}
