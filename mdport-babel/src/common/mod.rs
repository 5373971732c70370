//! Format agnostic parsing shared by every renderer
//!
//! - [`lines`]: source text → classified [`crate::ir::nodes::Line`]s
//! - [`emphasis`]: paragraph text → styled [`crate::ir::nodes::Segment`]s

pub mod emphasis;
pub mod lines;
