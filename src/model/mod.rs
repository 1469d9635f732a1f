//! Document model types.
//!
//! This module defines the intermediate representation (IR) that bridges
//! provider payload decoding and content rendering. The model is
//! provider-agnostic and can represent content from any structured
//! document source.

mod document;
mod paragraph;
mod table;

pub use document::{Document, Element, UNTITLED};
pub use paragraph::{NamedStyle, Paragraph, TextRun};
pub use table::{Table, TableCell, TableRow};
