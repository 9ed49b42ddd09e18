//! Single-element rendering
//!
//! [`TagBuilder`] is the one place where raw strings become markup. Text
//! content and attribute values are escaped here; everything above this
//! layer deals in attribute sets and already-rendered fragments.

use crate::error::{FormError, Result};

use super::attributes::{AttrValue, AttributeSet};

/// Element content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// No content
    Empty,
    /// Plain text, escaped on output
    Text(&'a str),
    /// Markup rendered by another builder, written as-is
    Markup(&'a str),
}

/// Renders HTML elements from a tag name, content and attributes
pub struct TagBuilder;

impl TagBuilder {
    /// Render `<name attr="value" ...>`
    ///
    /// `true` attributes are written bare, `false` and `Null` are omitted.
    pub fn open_tag(name: &str, attrs: &AttributeSet) -> Result<String> {
        Self::validate_name(name)?;

        let mut html = String::with_capacity(16 + attrs.len() * 16);
        html.push('<');
        html.push_str(name);
        for (key, value) in attrs.iter() {
            Self::validate_attr_name(key)?;
            Self::write_attr(&mut html, key, value)?;
        }
        html.push('>');
        Ok(html)
    }

    /// Render `</name>`
    pub fn close_tag(name: &str) -> Result<String> {
        Self::validate_name(name)?;
        Ok(format!("</{name}>"))
    }

    /// Render a complete element
    ///
    /// A self-closing element is the opening tag alone and ignores `content`.
    pub fn tag(
        name: &str,
        content: Content<'_>,
        attrs: &AttributeSet,
        self_closing: bool,
    ) -> Result<String> {
        let mut html = Self::open_tag(name, attrs)?;
        if self_closing {
            return Ok(html);
        }
        match content {
            Content::Empty => {}
            Content::Text(text) => html.push_str(&escape_html(text)),
            Content::Markup(markup) => html.push_str(markup),
        }
        html.push_str(&Self::close_tag(name)?);
        Ok(html)
    }

    /// Render a void element such as `<input ...>`
    pub fn void_tag(name: &str, attrs: &AttributeSet) -> Result<String> {
        Self::tag(name, Content::Empty, attrs, true)
    }

    /// Wrap rendered markup in `<div class="...">`
    pub fn div(markup: &str, class: &str) -> Result<String> {
        let attrs = AttributeSet::new().with("class", class);
        Self::tag("div", Content::Markup(markup), &attrs, false)
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(FormError::EmptyTagName);
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(FormError::InvalidTagName(name.to_string()));
        }
        Ok(())
    }

    fn validate_attr_name(name: &str) -> Result<()> {
        let breaks_tag = |c: char| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        };
        if name.is_empty() || name.chars().any(breaks_tag) {
            return Err(FormError::InvalidAttributeName(name.to_string()));
        }
        Ok(())
    }

    fn write_attr(html: &mut String, name: &str, value: &AttrValue) -> Result<()> {
        match value {
            AttrValue::Null | AttrValue::Bool(false) => {}
            AttrValue::Bool(true) => {
                html.push(' ');
                html.push_str(name);
            }
            AttrValue::List(_) => {
                return Err(FormError::UnrenderableAttribute {
                    key: name.to_string(),
                });
            }
            other => {
                html.push(' ');
                html.push_str(name);
                html.push_str("=\"");
                html.push_str(&escape_attr(&other.to_attr_string()));
                html.push('"');
            }
        }
        Ok(())
    }
}

/// Escape a string for use in an HTML attribute value
#[must_use]
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use in HTML text content
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
