//! Direct-layout story model
//!
//! The direct-layout strategy does not parse Markdown. It recognises a few
//! line prefixes and turns each line into one [`ContentBlock`].

mod block;
mod inline;

pub use block::{parse_blocks, ContentBlock, Spacing, BULLET, RULE_MARKER};
pub use inline::{plain_text, substitute_markup, Inline};
