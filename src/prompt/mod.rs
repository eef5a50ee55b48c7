//! # Prompt Builder
//!
//! Turns an explanation request into the instruction text sent to the
//! generative API. Each level key selects an audience and a style
//! directive from a fixed table; the rest of the prompt is shared.

mod level;

pub use level::Level;

use crate::explain::ExplainRequest;

/// Audience and style directive for one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProfile {
    pub audience: String,
    pub directive: String,
}

const ADULT_AUDIENCE: &str = "для взрослого человека без специальных знаний в этой области";

/// Rules appended to every prompt
const RULES: &str = "ВАЖНЫЕ ПРАВИЛА:\n\
- Отвечай ТОЛЬКО текстом объяснения на языке на котором вопрос.\n\
- НЕ используй приветствия ('Привет!', 'Конечно!'), вступления ('В этом объяснении...') или заключения ('Надеюсь, это помогло!').\n\
- Форматируй ответ с помощью Markdown (заголовки ##, списки *, жирный текст **, курсив *, блоки кода ```), если это улучшает читаемость.\n\
- Если тема предполагает код, используй блоки кода Markdown с указанием языка (например, ```python ... ```).\n\
- Будь точным, но избегай излишней сложности, соответствуй выбранному уровню.\n";

/// Resolve the style profile for `level_key`.
///
/// `custom_analogy` needs a non-blank analogy; without one, and for any
/// unrecognized key, the generic simple profile is used.
pub fn style_for(level_key: &str, analogy: Option<&str>) -> StyleProfile {
    let analogy = analogy.map(str::trim).filter(|a| !a.is_empty());

    let (audience, directive) = match (Level::parse(level_key), analogy) {
        (Some(Level::FiveYearOld), _) => (
            "для ребенка примерно пяти лет",
            "Объясни это ОЧЕНЬ-ОЧЕНЬ просто. Используй самые базовые слова, короткие предложения (максимум 10 слов). Можно использовать детские сравнения (например, 'представь себе...'). Никаких сложных терминов. Главное - передать самую суть идеи на интуитивном уровне.",
        ),
        (Some(Level::Teenager), _) => (
            "для подростка (12-16 лет)",
            "Объясни простыми словами, чтобы понял заинтересованный подросток. Избегай сложного жаргона, но можно использовать базовые аналогии, если они уместны. Сосредоточься на том, почему это интересно или важно. Будь краток и ясен.",
        ),
        (Some(Level::Simple), _) => (
            ADULT_AUDIENCE,
            "Дай максимально простое и понятное объяснение. Фокусируйся на ключевой идее и основной концепции. Избегай глубоких технических деталей и специфической терминологии. Цель - быстрое понимание сути.",
        ),
        (Some(Level::CustomAnalogy), Some(analogy)) => {
            return StyleProfile {
                audience: ADULT_AUDIENCE.to_string(),
                directive: format!(
                    "Объясни, используя аналогию с '{}'. Сделай эту аналогию ЦЕНТРАЛЬНОЙ частью объяснения. Проведи четкие параллели между темой и аналогией на каждом шаге. Убедись, что аналогия помогает понять тему, а не запутывает.",
                    analogy
                ),
            };
        }
        (Some(Level::Tldr), _) => (
            "для любого, кто хочет супер-краткий ответ",
            "Дай ОЧЕНЬ краткое резюме (TL;DR - Too Long; Didn't Read). Объясни самую суть темы в 1-2 предложениях, максимум 40-50 слов. Только ключевая информация.",
        ),
        (Some(Level::ProsCons), _) => (
            "для человека, оценивающего тему",
            "Объясни тему, четко выделив ее основные ПЛЮСЫ (преимущества, сильные стороны) и МИНУСЫ (недостатки, слабые стороны, риски). Структурируй ответ, например, используя подзаголовки 'Плюсы:' и 'Минусы:' или маркированные списки. Будь объективен.",
        ),
        (Some(Level::Metaphor), _) => (
            "для взрослого человека без специальных знаний",
            "Придумай и используй подходящую МЕТАФОРУ или яркую аналогию, чтобы объяснить эту тему. Сначала кратко представь метафору, а затем используй ее для объяснения ключевых аспектов темы. Метафора должна быть оригинальной и помогать интуитивному пониманию.",
        ),
        (Some(Level::CustomAnalogy), None) | (None, _) => (
            ADULT_AUDIENCE,
            "Дай простое и понятное объяснение. Фокусируйся на ключевой идее. Избегай жаргона.",
        ),
    };

    StyleProfile {
        audience: audience.to_string(),
        directive: directive.to_string(),
    }
}

/// Build the full instruction string for `request`
pub fn build_prompt(request: &ExplainRequest) -> String {
    let style = style_for(&request.level, request.analogy.as_deref());

    let mut prompt = String::with_capacity(1024);
    prompt.push_str("Твоя задача - объяснять сложные темы простыми словами. ");
    prompt.push_str(&format!("Тема или вопрос: '{}'.\n", request.topic.trim()));
    prompt.push_str(&format!("Целевая аудитория: {}.\n", style.audience));
    prompt.push_str(&format!("Стиль и фокус объяснения: {}\n", style.directive));
    prompt.push_str(RULES);
    prompt.push_str("Ответ:");
    prompt
}
