//! Attribute sets and the merge/extract primitives
//!
//! Every builder starts by merging caller options over its own defaults
//! and then pulls control entries out one at a time. Whatever is left is
//! handed to the tag primitive as literal HTML attributes.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{FormError, Result};

/// A single attribute or control-entry value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttrValue {
    /// No value; never rendered
    #[default]
    Null,
    /// `true` renders as a bare attribute, `false` renders nothing
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    Text(String),
    /// Option list (control entries only)
    List(OptionList),
}

impl AttrValue {
    /// String form used for serialization and loose comparison
    ///
    /// `Null` and `false` both map to the empty string, `true` to `"1"`.
    #[must_use]
    pub fn to_attr_string(&self) -> String {
        match self {
            Self::Null | Self::Bool(false) | Self::List(_) => String::new(),
            Self::Bool(true) => "1".to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Whether the value is `Null` or `false`
    #[must_use]
    pub const fn is_off(&self) -> bool {
        matches!(self, Self::Null | Self::Bool(false))
    }

    /// Integer view of the value, parsing text when possible
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    /// Convert into an option list, failing if the value is something else
    ///
    /// `Null` yields an empty list so an omitted entry degrades gracefully.
    pub fn into_option_list(self, key: &str) -> Result<OptionList> {
        match self {
            Self::List(list) => Ok(list),
            Self::Null => Ok(OptionList::new()),
            _ => Err(FormError::NotAnOptionList { key: key.to_string() }),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<OptionList> for AttrValue {
    fn from(value: OptionList) -> Self {
        Self::List(value)
    }
}

impl From<&OptionKey> for AttrValue {
    fn from(key: &OptionKey) -> Self {
        match key {
            OptionKey::Int(n) => Self::Int(*n),
            OptionKey::Text(s) => Self::Text(s.clone()),
        }
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Key of an entry in an option list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// Integer key
    Int(i64),
    /// String key
    Text(String),
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionKey {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for OptionKey {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// Canonical decimal integers (`"7"`, `"-3"`, not `"07"` or `"+3"`) become
/// integer keys; everything else stays text.
impl From<String> for OptionKey {
    fn from(value: String) -> Self {
        match value.parse::<i64>() {
            Ok(n) if n.to_string() == value => Self::Int(n),
            _ => Self::Text(value),
        }
    }
}

/// Ordered mapping from option value to display label
///
/// Insertion order is render order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionList(IndexMap<OptionKey, String>);

impl OptionList {
    /// Create an empty option list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Integer range where each key is its own label
    ///
    /// Descends when `start > end`.
    #[must_use]
    pub fn range(start: i64, end: i64) -> Self {
        let keys: Box<dyn Iterator<Item = i64>> = if start <= end {
            Box::new(start..=end)
        } else {
            Box::new((end..=start).rev())
        };
        keys.map(|n| (OptionKey::Int(n), n.to_string())).collect()
    }

    /// Append an entry (an existing key keeps its position)
    pub fn insert(&mut self, key: impl Into<OptionKey>, label: impl Into<String>) {
        self.0.insert(key.into(), label.into());
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<OptionKey>, label: impl Into<String>) -> Self {
        self.insert(key, label);
        self
    }

    /// Copy of this list with `(key, label)` placed first
    #[must_use]
    pub fn prepended(&self, key: impl Into<OptionKey>, label: impl Into<String>) -> Self {
        let mut list = Self::new().with(key, label);
        for (k, v) in self.iter() {
            list.0.entry(k.clone()).or_insert_with(|| v.to_string());
        }
        list
    }

    /// Iterate entries in render order
    pub fn iter(&self) -> impl Iterator<Item = (&OptionKey, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<OptionKey>, V: Into<String>> FromIterator<(K, V)> for OptionList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Ordered mapping from attribute name to value
///
/// Order only affects serialization; it is insertion-stable so output is
/// reproducible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeSet(IndexMap<String, AttrValue>);

impl AttributeSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, keeping the position of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    /// Whether the key is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// String form of a value, empty when absent
    #[must_use]
    pub fn get_string(&self, key: &str) -> String {
        self.get(key).map(AttrValue::to_attr_string).unwrap_or_default()
    }

    /// Merge `overrides` over `defaults`
    ///
    /// Keys in `overrides` win. Default keys keep their position; keys only
    /// present in `overrides` are appended in their own order.
    #[must_use]
    pub fn merge(defaults: &Self, overrides: &Self) -> Self {
        let mut merged = defaults.clone();
        for (key, value) in overrides.iter() {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Remove `key`, returning its value (or `fallback`) and the remainder
    #[must_use]
    pub fn extract(mut self, key: &str, fallback: AttrValue) -> (AttrValue, Self) {
        let value = self.0.shift_remove(key).unwrap_or(fallback);
        (value, self)
    }

    /// Iterate entries in serialization order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.0.iter()
    }

    /// Attribute names in serialization order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// How an option key is compared with the current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Compare string forms (`1` matches `"1"`)
    Loose,
    /// Compare kind and value exactly (`1` does not match `"1"`)
    Strict,
}

impl MatchPolicy {
    /// Whether `key` matches `value` under this policy
    #[must_use]
    pub fn matches(self, key: &OptionKey, value: &AttrValue) -> bool {
        match self {
            Self::Loose => key.to_string() == value.to_attr_string(),
            Self::Strict => match (key, value) {
                (OptionKey::Int(k), AttrValue::Int(v)) => k == v,
                (OptionKey::Text(k), AttrValue::Text(v)) => k == v,
                _ => false,
            },
        }
    }
}

/// Current value of a list control, consumed by the first matching key
#[derive(Debug, Clone)]
pub struct Selection {
    policy: MatchPolicy,
    pending: Option<AttrValue>,
}

impl Selection {
    /// Start matching `value` under `policy`
    #[must_use]
    pub const fn new(policy: MatchPolicy, value: AttrValue) -> Self {
        Self {
            policy,
            pending: Some(value),
        }
    }

    /// Returns `true` for the first key that matches, `false` ever after
    pub fn claim(&mut self, key: &OptionKey) -> bool {
        let matched = self
            .pending
            .as_ref()
            .is_some_and(|value| self.policy.matches(key, value));
        if matched {
            self.pending = None;
        }
        matched
    }
}
