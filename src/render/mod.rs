//! Textual and visual output of colored graphs
//!
//! [`dot`] produces the Graphviz description; [`graphviz`] hands it to the
//! external `dot` tool.

pub mod dot;
pub mod graphviz;

pub use dot::{to_dot, to_text, DotOptions};
pub use graphviz::{GraphvizRenderer, RenderError, RenderResult};
