//! Markdown to HTML fragment renderer.
//!
//! Study material (uploaded notes, generated summaries, error messages) is
//! rendered through a fixed, ordered pipeline of text substitutions rather
//! than a real markdown parser. There is no token stream and no AST: every
//! step rewrites the output of the previous one.
//!
//! # Pipeline
//!
//! 1. Escape `&`, `<` and `>`
//! 2. Headers (`###`, `##`, `#`)
//! 3. Bold, then italic
//! 4. Blockquotes
//! 5. Fenced code, then inline code
//! 6. Horizontal rules
//! 7. List items (no `<ul>`/`<ol>` grouping)
//! 8. Newlines to `<br />`
//! 9. Drop the `<br />` that follows a block element
//!
//! Only the three escaped characters are neutralised. The output is meant for
//! trusted authors and model output, not arbitrary untrusted HTML.
//!
//! # Example
//!
//! ```
//! use edu_renderer::render;
//!
//! assert_eq!(render("# Title"), "<h1>Title</h1>");
//! assert_eq!(render("- a\n- b"), "<li>a</li><li>b</li>");
//! ```

mod escape;
mod renderer;
mod rules;

pub use escape::escape_html;
pub use renderer::{MarkdownRenderer, render};
