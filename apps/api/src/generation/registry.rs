//! Category Policy Registry — the static table mapping each content category
//! to its generation contract: persona instruction, composition strategy, and
//! length vocabulary.
//!
//! The table is fixed at process start and exposed only through read-only
//! lookups. Adding a category is a new `CATEGORIES` entry, not a code branch.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::generation::prompts;

/// How the composer frames the caller's input for a category.
///
/// Categories genuinely split into two families: most treat the input as a
/// subject to write about; summarization treats it as material to condense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStrategy {
    ExpandTopic,
    CondenseText,
}

/// Per-category policy for unknown length keys.
///
/// `Relaxed` substitutes the named descriptor instead of failing; the
/// substitution is logged, never silent. `Strict` rejects the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthFallback {
    Strict,
    Relaxed(&'static str),
}

/// Immutable generation contract for one content category.
#[derive(Debug, Clone)]
pub struct CategoryPolicy {
    pub id: &'static str,
    /// Noun used inside composed prompts ("essay", "social media post").
    pub label: &'static str,
    pub system_instruction: &'static str,
    pub strategy: PromptStrategy,
    /// Category-specific length vocabulary: (key, human-readable constraint).
    pub length_formats: &'static [(&'static str, &'static str)],
    pub length_fallback: LengthFallback,
    /// Fixed placeholder citations, attached only for long-form researched
    /// categories. Not derived from the completion output.
    pub placeholder_sources: &'static [&'static str],
}

impl CategoryPolicy {
    /// Resolves a length key to its human-readable constraint descriptor.
    pub fn resolve_length(&self, length_key: &str) -> Result<&'static str, AppError> {
        if let Some((_, descriptor)) = self
            .length_formats
            .iter()
            .find(|(key, _)| *key == length_key)
        {
            return Ok(descriptor);
        }

        match self.length_fallback {
            LengthFallback::Relaxed(descriptor) => {
                warn!(
                    "Length key '{}' not in category '{}' vocabulary; using fallback '{}'",
                    length_key, self.id, descriptor
                );
                Ok(descriptor)
            }
            LengthFallback::Strict => Err(AppError::UnknownLengthFormat(format!(
                "'{}' is not a valid length for category '{}' (valid keys: {})",
                length_key,
                self.id,
                self.length_keys().collect::<Vec<_>>().join(", ")
            ))),
        }
    }

    pub fn length_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.length_formats.iter().map(|(key, _)| *key)
    }
}

/// Simulated citations carried over from the original backend. A documented
/// limitation: these are fixed strings, not real citation extraction.
const ESSAY_FAMILY_SOURCES: &[&str] = &[
    "Academic Journal Reference 1",
    "Scholarly Article 2",
    "Research Paper 3",
];

static CATEGORIES: &[CategoryPolicy] = &[
    CategoryPolicy {
        id: "essay",
        label: "essay",
        system_instruction: prompts::ESSAY_SYSTEM,
        strategy: PromptStrategy::ExpandTopic,
        length_formats: &[
            ("short", "300-500 words"),
            ("medium", "500-800 words"),
            ("long", "800-1200 words"),
        ],
        length_fallback: LengthFallback::Strict,
        placeholder_sources: ESSAY_FAMILY_SOURCES,
    },
    CategoryPolicy {
        id: "report",
        label: "report",
        system_instruction: prompts::REPORT_SYSTEM,
        strategy: PromptStrategy::ExpandTopic,
        length_formats: &[
            ("brief", "1-2 page brief (400-600 words)"),
            ("standard", "structured report (800-1200 words)"),
            ("comprehensive", "comprehensive report (1500+ words)"),
        ],
        length_fallback: LengthFallback::Strict,
        placeholder_sources: ESSAY_FAMILY_SOURCES,
    },
    CategoryPolicy {
        id: "article",
        label: "article",
        system_instruction: prompts::ARTICLE_SYSTEM,
        strategy: PromptStrategy::ExpandTopic,
        length_formats: &[
            ("short", "400-600 words"),
            ("medium", "700-1000 words"),
            ("long", "1200-1800 words"),
        ],
        length_fallback: LengthFallback::Strict,
        placeholder_sources: ESSAY_FAMILY_SOURCES,
    },
    CategoryPolicy {
        id: "summary",
        label: "summary",
        system_instruction: prompts::SUMMARY_SYSTEM,
        strategy: PromptStrategy::CondenseText,
        length_formats: &[
            ("bullet", "5-8 bullet points"),
            ("paragraph", "one dense paragraph (100-150 words)"),
            ("detailed", "multi-paragraph summary (300-400 words)"),
        ],
        length_fallback: LengthFallback::Strict,
        placeholder_sources: &[],
    },
    CategoryPolicy {
        id: "explanation",
        label: "explanation",
        system_instruction: prompts::EXPLANATION_SYSTEM,
        strategy: PromptStrategy::ExpandTopic,
        length_formats: &[
            ("simple", "short plain-language explanation (150-300 words)"),
            ("standard", "400-700 words"),
            ("deep", "in-depth walkthrough (800-1200 words)"),
        ],
        // Explanations tolerate a loose contract; everything else is strict.
        length_fallback: LengthFallback::Relaxed("appropriate length"),
        placeholder_sources: &[],
    },
    CategoryPolicy {
        id: "audit",
        label: "audit",
        system_instruction: prompts::AUDIT_SYSTEM,
        strategy: PromptStrategy::ExpandTopic,
        length_formats: &[
            ("checklist", "itemized checklist of findings"),
            ("standard", "structured findings with recommendations (500-800 words)"),
            ("full", "full assessment (1000-1500 words)"),
        ],
        length_fallback: LengthFallback::Strict,
        placeholder_sources: &[],
    },
    CategoryPolicy {
        id: "social",
        label: "social media post",
        system_instruction: prompts::SOCIAL_SYSTEM,
        strategy: PromptStrategy::ExpandTopic,
        length_formats: &[
            ("tweet", "Twitter/X post (280 characters)"),
            ("post", "LinkedIn/Facebook post (100-200 words)"),
            ("thread", "thread of 5-8 connected posts"),
        ],
        length_fallback: LengthFallback::Strict,
        placeholder_sources: &[],
    },
];

/// Read-only lookup over the category table. Built once at startup and shared
/// behind an `Arc`; safe for concurrent use.
pub struct CategoryRegistry {
    policies: HashMap<&'static str, &'static CategoryPolicy>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        let policies = CATEGORIES.iter().map(|p| (p.id, p)).collect();
        Self { policies }
    }

    /// Pure lookup; no side effects.
    pub fn resolve(&self, category_id: &str) -> Result<&'static CategoryPolicy, AppError> {
        self.policies.get(category_id).copied().ok_or_else(|| {
            AppError::UnknownCategory(format!(
                "'{}' is not a registered category (known: {})",
                category_id,
                self.category_ids().join(", ")
            ))
        })
    }

    pub fn resolve_length(
        &self,
        category_id: &str,
        length_key: &str,
    ) -> Result<&'static str, AppError> {
        self.resolve(category_id)?.resolve_length(length_key)
    }

    /// Known category ids, sorted for stable output.
    pub fn category_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.policies.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories_resolve() {
        let registry = CategoryRegistry::new();
        for id in ["essay", "report", "article", "summary", "explanation", "audit", "social"] {
            let policy = registry.resolve(id).unwrap();
            assert_eq!(policy.id, id);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let registry = CategoryRegistry::new();
        let err = registry.resolve("poem").unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_CATEGORY");
        // Message names the known ids so the caller can correct the request
        assert!(err.client_message().contains("essay"));
    }

    #[test]
    fn test_category_ids_are_unique() {
        let mut ids: Vec<_> = CATEGORIES.iter().map(|p| p.id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before, "duplicate category id in CATEGORIES");
    }

    #[test]
    fn test_every_category_has_length_formats() {
        for policy in CATEGORIES {
            assert!(
                !policy.length_formats.is_empty(),
                "category '{}' has no length formats",
                policy.id
            );
        }
    }

    #[test]
    fn test_all_valid_pairs_resolve_to_nonempty_descriptors() {
        let registry = CategoryRegistry::new();
        for policy in CATEGORIES {
            for key in policy.length_keys() {
                let descriptor = registry.resolve_length(policy.id, key).unwrap();
                assert!(
                    !descriptor.is_empty(),
                    "empty descriptor for ({}, {})",
                    policy.id,
                    key
                );
            }
        }
    }

    #[test]
    fn test_strict_category_rejects_unknown_length_key() {
        let registry = CategoryRegistry::new();
        let err = registry.resolve_length("essay", "tweet").unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_LENGTH_FORMAT");
        // Message lists the category's valid keys
        assert!(err.client_message().contains("short"));
        assert!(err.client_message().contains("long"));
    }

    #[test]
    fn test_length_vocabularies_are_category_specific() {
        let registry = CategoryRegistry::new();
        // "tweet" is meaningful only within social
        assert!(registry.resolve_length("social", "tweet").is_ok());
        assert!(registry.resolve_length("essay", "tweet").is_err());
        // "bullet" is meaningful only within summary
        assert!(registry.resolve_length("summary", "bullet").is_ok());
        assert!(registry.resolve_length("report", "bullet").is_err());
    }

    #[test]
    fn test_explanation_falls_back_to_named_descriptor() {
        let registry = CategoryRegistry::new();
        let descriptor = registry.resolve_length("explanation", "gigantic").unwrap();
        assert_eq!(descriptor, "appropriate length");
    }

    #[test]
    fn test_unknown_length_on_unknown_category_reports_category_first() {
        let registry = CategoryRegistry::new();
        let err = registry.resolve_length("poem", "short").unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_sources_attached_only_for_essay_family() {
        for policy in CATEGORIES {
            let expects_sources = matches!(policy.id, "essay" | "report" | "article");
            assert_eq!(
                !policy.placeholder_sources.is_empty(),
                expects_sources,
                "unexpected sources config for '{}'",
                policy.id
            );
        }
    }

    #[test]
    fn test_only_summary_condenses_text() {
        for policy in CATEGORIES {
            let expected = if policy.id == "summary" {
                PromptStrategy::CondenseText
            } else {
                PromptStrategy::ExpandTopic
            };
            assert_eq!(policy.strategy, expected, "strategy for '{}'", policy.id);
        }
    }

    #[test]
    fn test_registry_len_matches_table() {
        let registry = CategoryRegistry::new();
        assert_eq!(registry.len(), CATEGORIES.len());
        assert!(!registry.is_empty());
    }
}
