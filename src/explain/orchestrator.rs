//! Cache-or-generate orchestration

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::meta::{meta_description, meta_title};
use super::request::ExplainRequest;
use super::{EMPTY_RESPONSE_MESSAGE, INTERNAL_ERROR_MESSAGE};
use crate::gateway::TextGenerator;
use crate::prompt::{build_prompt, Level};
use crate::slug::derive_slug;
use crate::store::{ExplanationStore, StoredExplanation};
use crate::validation::{Validator, Verdict};

/// How an outcome was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Served from the store, nothing generated or written
    Cached,
    /// Generated, validated and persisted
    Generated,
    /// Generated but refused by the validator, or validated but not persisted
    Rejected(Verdict),
    /// Generator client is unusable (missing or rejected key)
    Unavailable,
    /// Generator failed for any other reason
    Failed,
}

/// Result of one explain call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainOutcome {
    /// Explanation body, or a user-facing message when nothing was stored
    pub explanation: String,
    /// Present only when the explanation is stored under this slug
    pub slug: Option<String>,
    #[serde(skip)]
    pub disposition: Disposition,
}

impl ExplainOutcome {
    fn unsaved(explanation: String, disposition: Disposition) -> Self {
        Self {
            explanation,
            slug: None,
            disposition,
        }
    }
}

/// Explain orchestrator.
///
/// Every collaborator is injected, so tests can supply an in-memory store
/// and a canned generator.
#[derive(Debug, Clone)]
pub struct Explainer {
    store: Arc<dyn ExplanationStore>,
    generator: Arc<dyn TextGenerator>,
    validator: Arc<dyn Validator>,
}

impl Explainer {
    pub fn new(
        store: Arc<dyn ExplanationStore>,
        generator: Arc<dyn TextGenerator>,
        validator: Arc<dyn Validator>,
    ) -> Self {
        Self {
            store,
            generator,
            validator,
        }
    }

    pub fn store(&self) -> &Arc<dyn ExplanationStore> {
        &self.store
    }

    /// Return a cached explanation or generate, validate and store a new one.
    ///
    /// Never fails: every non-persisted path yields text without a slug.
    pub async fn explain(&self, request: &ExplainRequest) -> ExplainOutcome {
        tracing::info!(topic = %request.topic, level = %request.level, "processing explain request");

        let slug = derive_slug(&request.topic, &request.level, request.analogy.as_deref());

        if let Some(existing) = self.store.get(&slug).await {
            tracing::info!(slug = %slug, "cache hit");
            return ExplainOutcome {
                explanation: existing.explanation_text,
                slug: Some(slug),
                disposition: Disposition::Cached,
            };
        }

        tracing::info!(slug = %slug, "cache miss, generating");
        let prompt = build_prompt(request);

        let text = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) if e.is_connection() => {
                tracing::error!(error = %e, "generator connection failure");
                return ExplainOutcome::unsaved(
                    format!("Ошибка подключения к сервису AI: {}", e),
                    Disposition::Unavailable,
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "generation failed");
                return ExplainOutcome::unsaved(
                    INTERNAL_ERROR_MESSAGE.to_string(),
                    Disposition::Failed,
                );
            }
        };

        let verdict = self.validator.check(&request.level, &text);
        if !verdict.is_valid() {
            tracing::warn!(
                topic = %request.topic,
                level = %request.level,
                reason = %verdict,
                "explanation will not be saved"
            );
            let body = if text.is_empty() {
                EMPTY_RESPONSE_MESSAGE.to_string()
            } else {
                text
            };
            return ExplainOutcome::unsaved(body, Disposition::Rejected(verdict));
        }

        // The analogy still feeds the slug, but the record only keeps it
        // for the level that actually uses one
        let analogy = match Level::parse(&request.level) {
            Some(Level::CustomAnalogy) => request.analogy.clone(),
            _ => None,
        };

        let record = StoredExplanation {
            topic_raw: request.topic.clone(),
            slug: slug.clone(),
            level: request.level.clone(),
            analogy,
            meta_title: meta_title(&request.topic),
            meta_description: meta_description(&text),
            explanation_text: text,
            created_at: Utc::now(),
        };

        if !self.store.put(&record).await {
            return ExplainOutcome::unsaved(
                record.explanation_text,
                Disposition::Rejected(Verdict::Valid),
            );
        }

        ExplainOutcome {
            explanation: record.explanation_text,
            slug: Some(slug),
            disposition: Disposition::Generated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayError, GatewayResult};
    use crate::store::MemoryStore;
    use crate::validation::HeuristicValidator;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Canned {
        reply: GatewayResult<String>,
        calls: AtomicUsize,
    }

    impl Canned {
        fn text(s: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(s.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn error(e: GatewayError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(e),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _prompt: &str) -> GatewayResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    const GOOD: &str = "Plants eat sunlight and make food, just like you eat breakfast to get energy!";

    fn explainer(store: Arc<MemoryStore>, gen: Arc<Canned>) -> Explainer {
        Explainer::new(store, gen, Arc::new(HeuristicValidator::new()))
    }

    #[tokio::test]
    async fn test_generate_then_cache_hit() {
        let store = Arc::new(MemoryStore::new());
        let gen = Canned::text(GOOD);
        let explainer = explainer(store.clone(), gen.clone());
        let req = ExplainRequest::new("photosynthesis", "5-year-old");

        let first = explainer.explain(&req).await;
        assert_eq!(first.disposition, Disposition::Generated);
        assert_eq!(first.slug.as_deref(), Some("photosynthesis-5-year-old"));
        assert_eq!(first.explanation, GOOD);

        let second = explainer.explain(&req).await;
        assert_eq!(second.disposition, Disposition::Cached);
        assert_eq!(second.slug, first.slug);
        assert_eq!(gen.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_analogy_dropped_for_levels_without_one() {
        let store = Arc::new(MemoryStore::new());
        let explainer = explainer(store.clone(), Canned::text(GOOD));
        let req = ExplainRequest::new("photosynthesis", "simple").with_analogy("pizza");

        let outcome = explainer.explain(&req).await;
        let slug = outcome.slug.unwrap();
        assert_eq!(slug, "photosynthesis-simple-pizza");

        let record = store.get(&slug).await.unwrap();
        assert_eq!(record.level, "simple");
        assert_eq!(record.analogy, None);
    }

    #[tokio::test]
    async fn test_stored_record_fields() {
        let store = Arc::new(MemoryStore::new());
        let explainer = explainer(store.clone(), Canned::text(GOOD));
        let req = ExplainRequest::new("Recursion", "custom_analogy").with_analogy("matryoshka");

        let outcome = explainer.explain(&req).await;
        let slug = outcome.slug.unwrap();
        let record = store.get(&slug).await.unwrap();
        assert_eq!(record.topic_raw, "Recursion");
        assert_eq!(record.analogy.as_deref(), Some("matryoshka"));
        assert_eq!(record.level, "custom_analogy");
        assert!(record.meta_title.contains("Recursion"));
        assert!(record.meta_description.ends_with("..."));
    }

    #[tokio::test]
    async fn test_empty_response_not_saved() {
        let store = Arc::new(MemoryStore::new());
        let explainer = explainer(store.clone(), Canned::text(""));

        let outcome = explainer
            .explain(&ExplainRequest::new("photosynthesis", "5-year-old"))
            .await;
        assert_eq!(outcome.explanation, EMPTY_RESPONSE_MESSAGE);
        assert_eq!(outcome.slug, None);
        assert_eq!(outcome.disposition, Disposition::Rejected(Verdict::Empty));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_apology_returned_verbatim_not_saved() {
        let apology = "Извините, не удалось сгенерировать ответ из-за ограничений или ошибки. (Причина: SAFETY)";
        let store = Arc::new(MemoryStore::new());
        let explainer = explainer(store.clone(), Canned::text(apology));

        let outcome = explainer.explain(&ExplainRequest::new("topic", "simple")).await;
        assert_eq!(outcome.explanation, apology);
        assert_eq!(outcome.slug, None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_short_response_not_saved() {
        let store = Arc::new(MemoryStore::new());
        let explainer = explainer(store.clone(), Canned::text("Too short."));

        let outcome = explainer.explain(&ExplainRequest::new("topic", "simple")).await;
        assert_eq!(outcome.explanation, "Too short.");
        assert!(matches!(
            outcome.disposition,
            Disposition::Rejected(Verdict::TooShort { .. })
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let store = Arc::new(MemoryStore::new());
        let explainer = explainer(store.clone(), Canned::error(GatewayError::NotConfigured));

        let outcome = explainer.explain(&ExplainRequest::new("topic", "simple")).await;
        assert_eq!(outcome.disposition, Disposition::Unavailable);
        assert!(outcome.explanation.starts_with("Ошибка подключения к сервису AI:"));
        assert_eq!(outcome.slug, None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_other_failure() {
        let store = Arc::new(MemoryStore::new());
        let gen = Canned::error(GatewayError::Internal("boom".into()));
        let explainer = explainer(store.clone(), gen);

        let outcome = explainer.explain(&ExplainRequest::new("topic", "simple")).await;
        assert_eq!(outcome.disposition, Disposition::Failed);
        assert_eq!(outcome.explanation, INTERNAL_ERROR_MESSAGE);
    }
}
