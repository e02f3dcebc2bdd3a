//! Stylesheet emission.
//!
//! Serializes a collated block list. No validation happens here; by the time
//! blocks exist every fragment has been matched to a registered breakpoint.

use crate::collation::{BlockTarget, OutputBlock};
use crate::predicate;

/// Render blocks as a modern stylesheet.
///
/// The universal block is written as-is. Every breakpoint block is wrapped as
/// `@media {predicate} {\n{body}\n}`. Blocks are separated by a blank line.
#[must_use]
pub fn emit_modern(blocks: &[OutputBlock]) -> String {
    blocks
        .iter()
        .map(|block| match &block.target {
            BlockTarget::Universal => block.body.clone(),
            BlockTarget::Breakpoint { media, .. } => {
                format!("@media {} {{\n{}\n}}", predicate::render(*media), block.body)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render blocks as a legacy stylesheet: bodies only, one after another.
///
/// Bodies are concatenated with a single newline between them, so the last
/// rule of one block and the first of the next never share a line. Nothing
/// else is inserted.
#[must_use]
pub fn emit_legacy(blocks: &[OutputBlock]) -> String {
    blocks
        .iter()
        .map(|block| block.body.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
