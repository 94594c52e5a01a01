// All prompt constants for the Generation module.
// System instructions are referenced from the category registry; the two
// templates below are filled by the composer before sending.

/// System instruction for the essay category.
pub const ESSAY_SYSTEM: &str = "You are an expert essay writer and researcher. \
    You build a clear thesis, support it with well-structured body paragraphs, \
    and close with a strong conclusion.";

/// System instruction for the report category.
pub const REPORT_SYSTEM: &str = "You are a professional report writer. \
    You organize findings into clearly labeled sections and end with \
    actionable conclusions.";

/// System instruction for the article category.
pub const ARTICLE_SYSTEM: &str = "You are an experienced feature writer for \
    online publications. You hook the reader early, keep paragraphs tight, \
    and maintain momentum to the end.";

/// System instruction for the summary category.
pub const SUMMARY_SYSTEM: &str = "You are a precise summarizer. You condense \
    the given text faithfully, preserving its key claims and structure, and \
    you never add information that is not in the source material.";

/// System instruction for the explanation category.
pub const EXPLANATION_SYSTEM: &str = "You are a patient teacher. You explain \
    concepts step by step in plain language, using concrete examples and \
    avoiding unexplained jargon.";

/// System instruction for the audit category.
pub const AUDIT_SYSTEM: &str = "You are a meticulous auditor. You assess the \
    given subject systematically, noting strengths, weaknesses, risks, and \
    concrete recommendations.";

/// System instruction for the social category.
pub const SOCIAL_SYSTEM: &str = "You are a social media copywriter. You write \
    punchy, shareable posts that respect platform length conventions and end \
    with a clear hook or call to action.";

/// Quality directives appended to every topic-expansion prompt.
pub const QUALITY_DIRECTIVES: &str = "Requirements:\n\
    - Well-structured with a clear opening and closing\n\
    - Engaging throughout\n\
    - Professional quality writing";

/// Prompt template for categories that expand a topic into new text.
/// Replace: {tone}, {label}, {topic}, {length}, {quality}
pub const EXPAND_TOPIC_TEMPLATE: &str = "Write a {tone} {label} about: {topic}\n\n\
    Length: {length}\n\n\
    {quality}";

/// Prompt template for the condense-a-text family. The input is material to
/// be compressed, not a subject to write about.
/// Replace: {tone}, {length}, {text}
pub const CONDENSE_TEXT_TEMPLATE: &str = "Summarize the following text in a {tone} tone.\n\n\
    Target format: {length}\n\n\
    Text to summarize:\n{text}";
