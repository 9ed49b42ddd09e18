//! Markup primitives: attribute sets, merging, and single-element rendering

mod attributes;
mod tag;

pub use attributes::{AttrValue, AttributeSet, MatchPolicy, OptionKey, OptionList, Selection};
pub use tag::{escape_attr, escape_html, Content, TagBuilder};
