//! Markdown renderer entry points.

use crate::escape::escape_html;
use crate::rules::RULES;

/// Markdown to HTML fragment renderer.
///
/// Rendering is a pure function of the input text: the renderer holds no
/// per-call state, so a single instance can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct MarkdownRenderer {
    wrapper_class: Option<String>,
}

impl MarkdownRenderer {
    /// Create a renderer that emits bare fragments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS class of the container used by [`render_wrapped`](Self::render_wrapped).
    #[must_use]
    pub fn with_wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = Some(class.into());
        self
    }

    /// Render markdown to an HTML fragment.
    ///
    /// Never fails. Empty input yields empty output. No wrapping element is
    /// emitted; list items are not grouped into `<ul>`/`<ol>`.
    pub fn render(&self, text: &str) -> String {
        let mut html = escape_html(text);
        for rule in RULES.iter() {
            html = rule.apply(&html);
        }
        html
    }

    /// Render markdown and wrap the fragment in a `<div>` container.
    ///
    /// Without a wrapper class this is the same as [`render`](Self::render).
    pub fn render_wrapped(&self, text: &str) -> String {
        let fragment = self.render(text);
        match &self.wrapper_class {
            Some(class) => format!(r#"<div class="{}">{fragment}</div>"#, escape_html(class)),
            None => fragment,
        }
    }
}

/// Render markdown to an HTML fragment with the default renderer.
///
/// # Examples
///
/// ```
/// use edu_renderer::render;
///
/// assert_eq!(render("**bold**"), "<strong>bold</strong>");
/// assert_eq!(render("<script>"), "&lt;script&gt;");
/// ```
pub fn render(text: &str) -> String {
    MarkdownRenderer::new().render(text)
}
