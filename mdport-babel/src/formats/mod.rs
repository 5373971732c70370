//! Format implementations
//!
//! This module contains all format implementations that render classified Markdown lines
//! into output artifacts.

pub mod docx;
pub mod pdf;
pub mod txt;

pub use docx::DocxFormat;
pub use pdf::{PageSize, PdfFormat};
pub use txt::TxtFormat;
