//! Intermediate representation shared by all formats
//!
//! The IR is flat: a document is an ordered list of [`nodes::Line`]s, and a
//! paragraph's text can be expanded into [`nodes::Segment`]s. Nothing nests; the supported
//! Markdown subset has no nesting constructs.

pub mod nodes;
