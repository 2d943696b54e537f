//! MIME-keyed display bundle for notebook frontends.

use serde::Serialize;

/// The mapping a notebook display collaborator consumes.
///
/// Serializes with MIME-type keys; absent representations are omitted so the
/// frontend only sees the formats that were produced.
///
/// # Examples
///
/// ```
/// use fluent_chain::RichContent;
///
/// let content = RichContent::plain("2");
/// assert_eq!(
///     serde_json::to_string(&content).unwrap(),
///     r#"{"text/plain":"2"}"#,
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RichContent {
    /// Plain-text representation.
    #[serde(rename = "text/plain", skip_serializing_if = "Option::is_none")]
    pub text_plain: Option<String>,

    /// HTML representation.
    #[serde(rename = "text/html", skip_serializing_if = "Option::is_none")]
    pub text_html: Option<String>,

    /// Markdown representation.
    #[serde(rename = "text/markdown", skip_serializing_if = "Option::is_none")]
    pub text_markdown: Option<String>,
}

impl RichContent {
    /// Bundle with only a plain-text representation.
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text_plain: Some(text.into()), ..Self::default() }
    }

    /// Adds an HTML representation.
    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.text_html = Some(html.into());
        self
    }

    /// Adds a Markdown representation.
    #[must_use]
    pub fn with_markdown(mut self, markdown: impl Into<String>) -> Self {
        self.text_markdown = Some(markdown.into());
        self
    }
}
