pub mod cache;
pub mod corpus;
pub mod outline;
pub mod render;

// Re-export key types for easier usage
pub use cache::OutlineCache;
pub use corpus::{Corpus, CorpusError, Section};
pub use outline::{ListFlavor, OutlineNode, parse_outline};
pub use render::{render_html, render_text};
