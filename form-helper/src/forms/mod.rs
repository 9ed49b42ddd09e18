//! Form element builders
//!
//! This module provides the builders that turn a field name and a terse
//! options mapping into markup:
//! - `create` / `close` / `submit` for the form envelope
//! - `input` for labeled, wrapped controls of any type
//! - `select`, `radio` and `date` for list and composite controls
//!
//! # Quick Start
//!
//! ```rust
//! use form_helper::forms::{FieldOptions, FormHelper};
//! use form_helper::html::OptionList;
//!
//! let form = FormHelper::new();
//! let html = form
//!     .input(
//!         "country",
//!         &FieldOptions::new()
//!             .input_type("select")
//!             .options(OptionList::new().with("us", "United States").with("ca", "Canada"))
//!             .value("ca"),
//!     )
//!     .unwrap();
//!
//! assert!(html.contains(r#"<option value="ca" selected>Canada</option>"#));
//! ```
//!
//! # Upload Forms
//!
//! The `file` method is shorthand for a multipart POST form:
//!
//! ```rust
//! use form_helper::forms::{FieldOptions, FormHelper};
//!
//! let html = FormHelper::new()
//!     .create(Some("/avatars"), &FieldOptions::new().attr("method", "file"))
//!     .unwrap();
//! assert!(html.contains(r#"enctype="multipart/form-data""#));
//! ```

mod helper;
mod options;

pub use helper::FormHelper;
pub use options::{keys, EmptyOption, FieldOptions, InputKind, Wrapper};
