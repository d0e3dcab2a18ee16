//! Rich-text content handling
//!
//! Entry content is either plain text or markup produced by a rich-text
//! editor. Markup is sanitized against a tag allow-list before it is stored,
//! and any content can be reduced to plain text for searching and word
//! counting.

use ammonia::Builder;
use html2text::render::TrivialDecorator;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::warn;

/// Tags kept by `sanitize`. Every other tag is dropped, keeping its text.
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "b", "em", "i", "u", "s", "strike", "h1", "h2", "h3", "ul", "ol",
    "li", "blockquote", "code", "pre",
];

/// Tags removed together with everything inside them.
const BLOCKED_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "svg", "math",
];

/// Lines are only wrapped past this many columns.
const TEXT_WIDTH: usize = 4096;

fn sanitizer() -> &'static Builder<'static> {
    static BUILDER: OnceLock<Builder<'static>> = OnceLock::new();
    BUILDER.get_or_init(|| {
        let mut builder = Builder::default();
        builder
            .tags(ALLOWED_TAGS.iter().copied().collect())
            .clean_content_tags(BLOCKED_TAGS.iter().copied().collect())
            .generic_attributes(HashSet::new())
            .tag_attributes(HashMap::new())
            .strip_comments(true);
        builder
    })
}

/// Whether `content` is editor markup rather than plain text.
pub fn is_markup(content: &str) -> bool {
    content.trim_start().starts_with('<')
}

/// Sanitize content for storage.
///
/// Plain text is stored as typed, `<` and `>` included. Markup is parsed as
/// HTML: blocked elements go with their content, comments go, allowed tags
/// keep no attributes, and other tags are dropped but keep their text.
pub fn sanitize(content: &str) -> String {
    if !is_markup(content) {
        return content.to_string();
    }
    sanitizer().clean(content).to_string()
}

/// Extract the text of a piece of content.
///
/// Plain text is returned unchanged. Markup is rendered to text with block
/// elements on their own lines and character references decoded.
pub fn plain_text(content: &str) -> String {
    if !is_markup(content) {
        return content.to_string();
    }

    match html2text::config::with_decorator(TrivialDecorator::new())
        .string_from_read(content.as_bytes(), TEXT_WIDTH)
    {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("could not render content as text: {}", e);
            String::new()
        }
    }
}

/// Number of whitespace-delimited words in the plain text of `content`.
pub fn word_count(content: &str) -> usize {
    plain_text(content).split_whitespace().count()
}
