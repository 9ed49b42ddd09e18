//! Field options and the typed views of their control entries
//!
//! [`FieldOptions`] is the terse options mapping callers hand to a builder.
//! It mixes control entries (`label`, `div`, `options`, `empty`, `value`,
//! `tag`, `startYear`, ...) that a builder consumes with pass-through
//! entries that end up as literal HTML attributes.

use serde_json::Value;

use crate::error::{FormError, Result};
use crate::html::{AttrValue, AttributeSet, OptionKey, OptionList};

/// Control entry keys understood by the builders
pub mod keys {
    /// Label text, or `false` for no label
    pub const LABEL: &str = "label";
    /// Wrapper div: `true`, `false` or an explicit class
    pub const DIV: &str = "div";
    /// Option list for select and radio controls
    pub const OPTIONS: &str = "options";
    /// Placeholder entry prepended to a select
    pub const EMPTY: &str = "empty";
    /// Current value used for selection
    pub const VALUE: &str = "value";
    /// Element used by submit controls
    pub const TAG: &str = "tag";
    /// Input type
    pub const TYPE: &str = "type";
    /// First year of the date widget
    pub const START_YEAR: &str = "startYear";
    /// Last year of the date widget
    pub const END_YEAR: &str = "endYear";
    /// Preselected day
    pub const CURRENT_DAY: &str = "currentDay";
    /// Preselected month
    pub const CURRENT_MONTH: &str = "currentMonth";
    /// Preselected year
    pub const CURRENT_YEAR: &str = "currentYear";
}

/// Caller-supplied options for a builder
///
/// # Examples
///
/// ```rust
/// use form_helper::forms::FieldOptions;
/// use form_helper::html::OptionList;
///
/// let options = FieldOptions::new()
///     .options(OptionList::new().with("us", "United States").with("ca", "Canada"))
///     .value("ca")
///     .empty("Choose a country")
///     .attr("class", "wide");
/// assert_eq!(options.attributes().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldOptions(AttributeSet);

impl FieldOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set any entry; non-control keys become HTML attributes
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.0.insert(name, value);
        self
    }

    /// Set the label text
    #[must_use]
    pub fn label(self, label: impl Into<String>) -> Self {
        self.attr(keys::LABEL, AttrValue::Text(label.into()))
    }

    /// Suppress the label
    #[must_use]
    pub fn no_label(self) -> Self {
        self.attr(keys::LABEL, false)
    }

    /// Set the wrapper div behavior
    #[must_use]
    pub fn div(self, wrapper: Wrapper) -> Self {
        let value = match wrapper {
            Wrapper::Off => AttrValue::Bool(false),
            Wrapper::DefaultClass => AttrValue::Bool(true),
            Wrapper::Class(class) => AttrValue::Text(class),
        };
        self.attr(keys::DIV, value)
    }

    /// Set the option list
    #[must_use]
    pub fn options(self, options: OptionList) -> Self {
        self.attr(keys::OPTIONS, options)
    }

    /// Prepend a placeholder entry with an empty value
    #[must_use]
    pub fn empty(self, label: impl Into<String>) -> Self {
        self.attr(keys::EMPTY, AttrValue::Text(label.into()))
    }

    /// Set the current value
    #[must_use]
    pub fn value(self, value: impl Into<AttrValue>) -> Self {
        self.attr(keys::VALUE, value)
    }

    /// Set the input type
    #[must_use]
    pub fn input_type(self, input_type: impl Into<String>) -> Self {
        self.attr(keys::TYPE, AttrValue::Text(input_type.into()))
    }

    /// Set the element used by a submit control
    #[must_use]
    pub fn tag(self, tag: impl Into<String>) -> Self {
        self.attr(keys::TAG, AttrValue::Text(tag.into()))
    }

    /// Set the first year of a date widget
    #[must_use]
    pub fn start_year(self, year: i64) -> Self {
        self.attr(keys::START_YEAR, year)
    }

    /// Set the last year of a date widget
    #[must_use]
    pub fn end_year(self, year: i64) -> Self {
        self.attr(keys::END_YEAR, year)
    }

    /// Preselect a day in a date widget
    #[must_use]
    pub fn current_day(self, day: i64) -> Self {
        self.attr(keys::CURRENT_DAY, day)
    }

    /// Preselect a month in a date widget
    #[must_use]
    pub fn current_month(self, month: i64) -> Self {
        self.attr(keys::CURRENT_MONTH, month)
    }

    /// Preselect a year in a date widget
    #[must_use]
    pub fn current_year(self, year: i64) -> Self {
        self.attr(keys::CURRENT_YEAR, year)
    }

    /// The raw entries
    #[must_use]
    pub const fn attributes(&self) -> &AttributeSet {
        &self.0
    }

    /// Consume into the raw entries
    #[must_use]
    pub fn into_attributes(self) -> AttributeSet {
        self.0
    }

    /// Build options from a JSON object, preserving key order
    ///
    /// Scalars map to attribute values. An array or object is only
    /// accepted under `options`, where it becomes an option list (array
    /// entries are keyed by position).
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidOptions`] if `json` is not an object, a
    /// nested value appears under any other key, or an option label is not
    /// a scalar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_helper::forms::FieldOptions;
    /// use serde_json::json;
    ///
    /// let options = FieldOptions::from_json(json!({
    ///     "options": {"1": "One", "2": "Two"},
    ///     "value": 2,
    /// }))
    /// .unwrap();
    /// assert!(options.attributes().contains_key("options"));
    /// ```
    pub fn from_json(json: Value) -> Result<Self> {
        let map = match json {
            Value::Object(map) => map,
            other => {
                return Err(FormError::InvalidOptions(format!(
                    "expected an object, got {}",
                    json_kind(&other)
                )));
            }
        };

        let mut attrs = AttributeSet::new();
        for (key, value) in map {
            let value = match value {
                Value::Array(_) | Value::Object(_) if key == keys::OPTIONS => {
                    AttrValue::List(option_list_from_json(value)?)
                }
                Value::Array(_) | Value::Object(_) => {
                    return Err(FormError::InvalidOptions(format!(
                        "`{key}` must be a scalar, got {}",
                        json_kind(&value)
                    )));
                }
                scalar => scalar_from_json(scalar),
            };
            attrs.insert(key, value);
        }
        Ok(Self(attrs))
    }
}

impl From<AttributeSet> for FieldOptions {
    fn from(attrs: AttributeSet) -> Self {
        Self(attrs)
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for FieldOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Value> for FieldOptions {
    type Error = FormError;

    fn try_from(json: Value) -> Result<Self> {
        Self::from_json(json)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn scalar_from_json(value: Value) -> AttrValue {
    match value {
        Value::Bool(b) => AttrValue::Bool(b),
        Value::Number(n) => n
            .as_i64()
            .map_or_else(|| AttrValue::Float(n.as_f64().unwrap_or_default()), AttrValue::Int),
        Value::String(s) => AttrValue::Text(s),
        Value::Null | Value::Array(_) | Value::Object(_) => AttrValue::Null,
    }
}

fn option_label_from_json(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(FormError::InvalidOptions(format!(
            "label for option `{key}` must be a scalar, got {}",
            json_kind(&other)
        ))),
    }
}

fn option_list_from_json(value: Value) -> Result<OptionList> {
    let mut list = OptionList::new();
    match value {
        Value::Object(map) => {
            for (key, label) in map {
                let label = option_label_from_json(&key, label)?;
                list.insert(OptionKey::from(key), label);
            }
        }
        Value::Array(items) => {
            for (index, label) in (0_i64..).zip(items) {
                let label = option_label_from_json(&index.to_string(), label)?;
                list.insert(index, label);
            }
        }
        other => {
            return Err(FormError::NotAnOptionList {
                key: format!("{} ({})", keys::OPTIONS, json_kind(&other)),
            });
        }
    }
    Ok(list)
}

/// Wrapper div policy for labeled inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wrapper {
    /// No wrapper
    Off,
    /// Wrap with the default `input {type}` class
    DefaultClass,
    /// Wrap with an explicit class
    Class(String),
}

impl From<AttrValue> for Wrapper {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::Bool(true) => Self::DefaultClass,
            AttrValue::Null | AttrValue::Bool(false) | AttrValue::List(_) => Self::Off,
            AttrValue::Text(class) if class.is_empty() => Self::Off,
            other => Self::Class(other.to_attr_string()),
        }
    }
}

/// Placeholder entry policy for selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyOption {
    /// No placeholder
    Off,
    /// Placeholder with this label and an empty value
    Label(String),
}

impl From<AttrValue> for EmptyOption {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::Null | AttrValue::Bool(false) | AttrValue::List(_) => Self::Off,
            AttrValue::Bool(true) => Self::Label(String::new()),
            other => Self::Label(other.to_attr_string()),
        }
    }
}

impl EmptyOption {
    /// Apply the policy to an option list
    #[must_use]
    pub fn apply(&self, list: OptionList) -> OptionList {
        match self {
            Self::Off => list,
            Self::Label(label) => list.prepended("", label.as_str()),
        }
    }
}

/// Kind of control rendered by [`FormHelper::input`](super::FormHelper::input)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// Select list
    Select,
    /// Radio group
    Radio,
    /// Day/month/year selects
    Date,
    /// Hidden input, never labeled or wrapped
    Hidden,
    /// Multi-line text
    Textarea,
    /// Any other `<input>` type
    Other(String),
}

impl InputKind {
    /// Get the HTML type attribute value
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Date => "date",
            Self::Hidden => "hidden",
            Self::Textarea => "textarea",
            Self::Other(other) => other,
        }
    }
}

impl From<&str> for InputKind {
    fn from(value: &str) -> Self {
        match value {
            "select" => Self::Select,
            "radio" => Self::Radio,
            "date" => Self::Date,
            "hidden" => Self::Hidden,
            "textarea" => Self::Textarea,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
