//! Prompt composition — turns a validated request into the single user
//! instruction sent to the completion backend.
//!
//! Dispatch is on the policy's strategy tag: the input string plays a
//! different semantic role per family (subject to expand vs. material to
//! condense), so the two templates are not interchangeable.

use crate::generation::prompts::{
    CONDENSE_TEXT_TEMPLATE, EXPAND_TOPIC_TEMPLATE, QUALITY_DIRECTIVES,
};
use crate::generation::registry::{CategoryPolicy, PromptStrategy};

/// Builds the user instruction for one generation request.
///
/// `tone` is untrusted free text interpolated as-is; no instruction-injection
/// sanitization is applied (open hardening question).
pub fn compose_prompt(
    policy: &CategoryPolicy,
    topic_or_text: &str,
    tone: &str,
    length_descriptor: &str,
) -> String {
    match policy.strategy {
        PromptStrategy::ExpandTopic => EXPAND_TOPIC_TEMPLATE
            .replace("{tone}", tone)
            .replace("{label}", policy.label)
            .replace("{topic}", topic_or_text)
            .replace("{length}", length_descriptor)
            .replace("{quality}", QUALITY_DIRECTIVES),
        PromptStrategy::CondenseText => CONDENSE_TEXT_TEMPLATE
            .replace("{tone}", tone)
            .replace("{length}", length_descriptor)
            .replace("{text}", topic_or_text),
    }
}
