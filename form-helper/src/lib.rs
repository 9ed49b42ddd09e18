//! form-helper: declarative HTML form-element builder
//!
//! Given a logical field description (name, type, value, options) the
//! builders produce well-formed markup with consistent attribute handling,
//! label association and grouping conventions.
//!
//! # Design Principles
//!
//! 1. **Pure builders**: every call maps `(name, options)` to a `String`
//! 2. **Copy-on-merge**: caller options are merged into a fresh set and never mutated
//! 3. **One escaping point**: only [`html::TagBuilder`] turns raw strings into markup
//! 4. **Fail fast on misuse**: a missing tag name or a scalar option list is an error
//!
//! # Quick Start
//!
//! ```rust
//! use form_helper::prelude::*;
//!
//! let form = FormHelper::new();
//! let html = [
//!     form.create(Some("/profile"), &FieldOptions::new().attr("method", "file"))?,
//!     form.input("avatar", &FieldOptions::new().input_type("file"))?,
//!     form.date("born_on", &FieldOptions::new().start_year(1950))?,
//!     form.close(Some("Upload"), &FieldOptions::new())?,
//! ]
//! .concat();
//!
//! assert!(html.contains(r#"enctype="multipart/form-data""#));
//! # Ok::<(), FormError>(())
//! ```
//!
//! # Collaborators
//!
//! URL resolution, inflection and the current date are injected through the
//! traits in [`collaborators`]; the defaults need no setup.

#![allow(clippy::missing_errors_doc)]

pub mod collaborators;
pub mod config;
pub mod error;
pub mod forms;
pub mod html;
pub mod observability;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use form_helper::prelude::*;
    //! ```

    pub use crate::collaborators::{
        DateSource, DefaultInflector, FixedDate, IdentityResolver, Inflector, PrefixResolver,
        SystemClock, Today, UrlResolver,
    };
    pub use crate::config::FormConfig;
    pub use crate::error::{FormError, Result};
    pub use crate::forms::{EmptyOption, FieldOptions, FormHelper, InputKind, Wrapper};
    pub use crate::html::{AttrValue, AttributeSet, Content, OptionKey, OptionList, TagBuilder};
}
