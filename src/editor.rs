//! Rich-text capability behind a minimal interface.
//!
//! Policy content is markup produced by whatever editing widget the
//! surrounding layer injects. The core only needs three operations and
//! never depends on a specific widget.

use std::sync::LazyLock;

/// Matches markup tags for the plain-text view.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static TAG_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"<[^>]*>").expect("TAG_RE is a valid regex literal"));

/// Minimal rich-text editing surface.
pub trait RichText {
    /// The text content with markup stripped, trimmed.
    fn get_plain_text(&self) -> String;

    /// The raw markup.
    fn get_markup(&self) -> String;

    /// Replace the buffer's markup.
    fn set_markup(&mut self, markup: &str);
}

/// Default [`RichText`] implementation: a plain markup buffer.
#[derive(Debug, Clone, Default)]
pub struct MarkupBuffer {
    markup: String,
}

impl MarkupBuffer {
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        MarkupBuffer {
            markup: markup.into(),
        }
    }
}

impl RichText for MarkupBuffer {
    fn get_plain_text(&self) -> String {
        plain_text(&self.markup)
    }

    fn get_markup(&self) -> String {
        self.markup.clone()
    }

    fn set_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
    }
}

/// Plain-text view of a markup string: tags stripped, whitespace
/// trimmed. A shell of empty tags yields an empty string.
#[must_use]
pub fn plain_text(markup: &str) -> String {
    TAG_RE.replace_all(markup, "").trim().to_string()
}
