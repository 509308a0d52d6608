//! Consumers of the outline forest.

pub mod html;
pub mod text;

pub use html::render_html;
pub use text::render_text;
