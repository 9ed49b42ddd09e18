//! External collaborators consumed by the builders
//!
//! URL resolution, string inflection and the current date live outside the
//! form core. Each is a narrow trait with a default implementation so a
//! [`FormHelper`](crate::forms::FormHelper) works out of the box and tests
//! can swap in deterministic versions.

use std::fmt::Debug;

use chrono::{Datelike, NaiveDate};
use inflector::Inflector as _;

/// Turns a logical action reference into a form `action` attribute value
pub trait UrlResolver: Debug + Send + Sync {
    /// Resolve `action`; `None` means the current location
    fn resolve(&self, action: Option<&str>) -> String;
}

/// Returns the action unchanged (`None` becomes the empty string)
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl UrlResolver for IdentityResolver {
    fn resolve(&self, action: Option<&str>) -> String {
        action.unwrap_or_default().to_string()
    }
}

/// Joins actions onto a base path
///
/// Absolute URLs (containing `://`) pass through untouched.
#[derive(Debug, Clone)]
pub struct PrefixResolver {
    base: String,
}

impl PrefixResolver {
    /// Create a resolver rooted at `base`
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl UrlResolver for PrefixResolver {
    fn resolve(&self, action: Option<&str>) -> String {
        let base = self.base.trim_end_matches('/');
        match action {
            None | Some("") => format!("{base}/"),
            Some(url) if url.contains("://") => url.to_string(),
            Some(path) => format!("{base}/{}", path.trim_start_matches('/')),
        }
    }
}

/// String transforms used to derive default ids and labels
pub trait Inflector: Debug + Send + Sync {
    /// `form_user_name` → `FormUserName`
    fn camelize(&self, s: &str) -> String;

    /// `User Name` → `user_name`
    fn slugify(&self, s: &str) -> String;

    /// `user_name` → `User Name`
    fn humanize(&self, s: &str) -> String;
}

/// [`Inflector`] backed by the `Inflector` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInflector;

impl Inflector for DefaultInflector {
    fn camelize(&self, s: &str) -> String {
        s.to_pascal_case()
    }

    fn slugify(&self, s: &str) -> String {
        s.to_snake_case()
    }

    fn humanize(&self, s: &str) -> String {
        s.to_title_case()
    }
}

/// Day, month and year as plain integers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Today {
    /// Day of month, 1-31
    pub day: u32,
    /// Month, 1-12
    pub month: u32,
    /// Calendar year
    pub year: i32,
}

impl From<NaiveDate> for Today {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

/// Source of the current date for date-widget defaults
pub trait DateSource: Debug + Send + Sync {
    /// Today's date parts
    fn today(&self) -> Today;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl DateSource for SystemClock {
    fn today(&self) -> Today {
        Today::from(chrono::Local::now().date_naive())
    }
}

/// Always returns the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedDate(pub Today);

impl FixedDate {
    /// Fixed date from its parts
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self(Today { day, month, year })
    }
}

impl DateSource for FixedDate {
    fn today(&self) -> Today {
        self.0
    }
}
