//! Form element builders
//!
//! [`FormHelper`] turns a field name plus [`FieldOptions`] into markup.
//! Every builder follows the same shape: merge caller options over its
//! defaults into a fresh set, extract control entries, and hand the
//! remainder to [`TagBuilder`] as attributes. Caller input is never mutated.

use std::sync::Arc;

use crate::collaborators::{
    DateSource, DefaultInflector, IdentityResolver, Inflector, SystemClock, UrlResolver,
};
use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::html::{
    AttrValue, AttributeSet, Content, MatchPolicy, OptionList, Selection, TagBuilder,
};

use super::options::{keys, EmptyOption, FieldOptions, InputKind, Wrapper};

/// Builds form elements
///
/// Stateless between calls; clone it freely and share it across threads.
///
/// # Examples
///
/// ```rust
/// use form_helper::forms::{FieldOptions, FormHelper};
///
/// let form = FormHelper::new();
/// let html = [
///     form.create(Some("/users/save"), &FieldOptions::new()).unwrap(),
///     form.input("user_name", &FieldOptions::new()).unwrap(),
///     form.close(Some("Save"), &FieldOptions::new()).unwrap(),
/// ]
/// .concat();
///
/// assert!(html.starts_with(r#"<form method="post" action="/users/save">"#));
/// assert!(html.contains(r#"<label for="FormUserName">User Name</label>"#));
/// assert!(html.ends_with(r#"<button type="submit">Save</button></form>"#));
/// ```
#[derive(Debug, Clone)]
pub struct FormHelper {
    config: FormConfig,
    resolver: Arc<dyn UrlResolver>,
    inflector: Arc<dyn Inflector>,
    clock: Arc<dyn DateSource>,
}

impl Default for FormHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl FormHelper {
    /// Create a helper with default configuration and collaborators
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create a helper with custom configuration
    #[must_use]
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            config,
            resolver: Arc::new(IdentityResolver),
            inflector: Arc::new(DefaultInflector),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the URL resolver used for form actions
    #[must_use]
    pub fn resolver(mut self, resolver: impl UrlResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Replace the inflector used for default ids and labels
    #[must_use]
    pub fn inflector(mut self, inflector: impl Inflector + 'static) -> Self {
        self.inflector = Arc::new(inflector);
        self
    }

    /// Replace the date source used by the date widget
    #[must_use]
    pub fn clock(mut self, clock: impl DateSource + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &FormConfig {
        &self.config
    }

    // =========================================================================
    // Form envelope
    // =========================================================================

    /// Open a form
    ///
    /// A `method` equal to the upload sentinel (`"file"` by default) becomes
    /// `post` with a multipart enctype. The form is never closed here.
    pub fn create(&self, action: Option<&str>, options: &FieldOptions) -> Result<String> {
        let defaults = AttributeSet::new()
            .with("method", self.config.form.default_method.as_str())
            .with("action", self.resolver.resolve(action));
        let mut attrs = AttributeSet::merge(&defaults, options.attributes());

        if attrs.get_string("method") == self.config.form.upload_method_sentinel {
            attrs.insert("method", "post");
            attrs.insert("enctype", self.config.form.upload_enctype.as_str());
        }

        tracing::trace!(action = ?action, method = %attrs.get_string("method"), "opening form");
        TagBuilder::open_tag("form", &attrs)
    }

    /// Close a form, optionally preceded by a submit control
    pub fn close(&self, submit: Option<&str>, options: &FieldOptions) -> Result<String> {
        let close = TagBuilder::close_tag("form")?;
        match submit {
            Some(text) => Ok(self.submit(text, options)? + &close),
            None => Ok(close),
        }
    }

    /// Render a submit control
    ///
    /// `tag: "input"` renders `<input type="submit" value="...">`; anything
    /// else renders a `<button>` with the text as content.
    pub fn submit(&self, text: &str, options: &FieldOptions) -> Result<String> {
        let defaults = AttributeSet::new()
            .with("type", "submit")
            .with(keys::TAG, self.config.submit.default_tag.as_str());
        let merged = AttributeSet::merge(&defaults, options.attributes());
        let (tag, mut attrs) = merged.extract(keys::TAG, AttrValue::Null);

        if tag.to_attr_string() == "input" {
            attrs.insert(keys::VALUE, text);
            TagBuilder::void_tag("input", &attrs)
        } else {
            TagBuilder::tag("button", Content::Text(text), &attrs, false)
        }
    }

    // =========================================================================
    // Element composers
    // =========================================================================

    /// Render a select list
    ///
    /// The option whose key string-equals `value` is marked `selected`; only
    /// the first match is marked. An `empty` entry prepends a placeholder
    /// option with an empty value that takes part in matching.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotAnOptionList`]
    /// if `options` holds a scalar.
    pub fn select(&self, name: &str, options: &FieldOptions) -> Result<String> {
        let defaults = AttributeSet::new()
            .with("name", name)
            .with(keys::OPTIONS, OptionList::new())
            .with(keys::VALUE, AttrValue::Null)
            .with(keys::EMPTY, false);
        let merged = AttributeSet::merge(&defaults, options.attributes());

        let (list, rest) = merged.extract(keys::OPTIONS, AttrValue::Null);
        let list = list.into_option_list(keys::OPTIONS)?;
        let (empty, rest) = rest.extract(keys::EMPTY, AttrValue::Bool(false));
        let (value, attrs) = rest.extract(keys::VALUE, AttrValue::Null);

        let list = EmptyOption::from(empty).apply(list);
        let mut selection = Selection::new(MatchPolicy::Loose, value);
        let mut content = String::new();
        for (key, label) in list.iter() {
            let mut option_attrs = AttributeSet::new().with(keys::VALUE, key);
            if selection.claim(key) {
                tracing::trace!(field = name, option = %key, "option selected");
                option_attrs.insert("selected", true);
            }
            content.push_str(&TagBuilder::tag(
                "option",
                Content::Text(label),
                &option_attrs,
                false,
            )?);
        }

        TagBuilder::tag("select", Content::Markup(&content), &attrs, false)
    }

    /// Render a radio group as consecutive input + label pairs
    ///
    /// The radio whose key exactly matches `value` (same kind and value) is
    /// checked. Ids are the camelized `{name}_{key}`. No container is added.
    pub fn radio(&self, name: &str, options: &FieldOptions) -> Result<String> {
        let defaults = AttributeSet::new()
            .with(keys::OPTIONS, OptionList::new())
            .with(keys::VALUE, AttrValue::Null);
        let merged = AttributeSet::merge(&defaults, options.attributes());

        let (list, rest) = merged.extract(keys::OPTIONS, AttrValue::Null);
        let list = list.into_option_list(keys::OPTIONS)?;
        let (value, _) = rest.extract(keys::VALUE, AttrValue::Null);

        let mut selection = Selection::new(MatchPolicy::Strict, value);
        let mut html = String::new();
        for (key, label) in list.iter() {
            let id = self.inflector.camelize(&format!("{name}_{key}"));
            let mut radio_attrs = AttributeSet::new()
                .with("type", "radio")
                .with(keys::VALUE, key)
                .with("id", id.as_str())
                .with("name", name);
            if selection.claim(key) {
                radio_attrs.insert("checked", true);
            }
            html.push_str(&TagBuilder::void_tag("input", &radio_attrs)?);

            let label_attrs = AttributeSet::new().with("for", id);
            html.push_str(&TagBuilder::tag("label", Content::Text(label), &label_attrs, false)?);
        }
        Ok(html)
    }

    /// Render a labeled input, optionally wrapped in a div
    ///
    /// Defaults: `type="text"`, an id derived from the name, a humanized
    /// label, and a wrapper div classed `input {type}`. The `type` entry
    /// picks the control: `select`, `radio`, `date`, `hidden`, `textarea`,
    /// or a plain `<input>` for anything else. A field named `password`
    /// always renders `type="password"`.
    pub fn input(&self, name: &str, options: &FieldOptions) -> Result<String> {
        let defaults = AttributeSet::new()
            .with("name", name)
            .with(keys::TYPE, "text")
            .with("id", self.default_id(name))
            .with(keys::LABEL, self.inflector.humanize(name))
            .with(keys::DIV, self.config.input.wrap_by_default);
        let merged = AttributeSet::merge(&defaults, options.attributes());

        let (label, rest) = merged.extract(keys::LABEL, AttrValue::Bool(false));
        let (div, mut attrs) = rest.extract(keys::DIV, AttrValue::Bool(false));
        let mut label = match label {
            AttrValue::Bool(true) => Some(self.inflector.humanize(name)),
            AttrValue::Text(text) if text.is_empty() => None,
            other if other.is_off() => None,
            other => Some(other.to_attr_string()),
        };
        let mut wrapper = Wrapper::from(div);

        let field_name = attrs.get_string("name");
        let kind = InputKind::from(attrs.get_string(keys::TYPE).as_str());
        tracing::trace!(field = %field_name, kind = %kind, "rendering input");

        let control = match &kind {
            InputKind::Select => {
                let (_, select_attrs) = attrs.clone().extract(keys::TYPE, AttrValue::Null);
                self.select(&field_name, &FieldOptions::from(select_attrs))?
            }
            InputKind::Radio => {
                label = None;
                self.radio(&field_name, &FieldOptions::from(attrs.clone()))?
            }
            InputKind::Date => self.date(&field_name, &FieldOptions::from(attrs.clone()))?,
            InputKind::Hidden => {
                label = None;
                wrapper = Wrapper::Off;
                TagBuilder::void_tag("input", &attrs)?
            }
            InputKind::Textarea => {
                let (_, rest) = attrs.clone().extract(keys::TYPE, AttrValue::Null);
                let (value, textarea_attrs) = rest.extract(keys::VALUE, AttrValue::Null);
                let text = value.to_attr_string();
                TagBuilder::tag("textarea", Content::Text(&text), &textarea_attrs, false)?
            }
            InputKind::Other(input_type) => {
                if field_name == "password" && input_type != "password" {
                    tracing::warn!(
                        field = %field_name,
                        requested = %input_type,
                        "field named password always renders type=\"password\""
                    );
                    attrs.insert(keys::TYPE, "password");
                }
                TagBuilder::void_tag("input", &attrs)?
            }
        };

        let mut html = match label {
            Some(text) => {
                let for_id = attrs.get("id").cloned().unwrap_or_default();
                let label_attrs = AttributeSet::new().with("for", for_id);
                TagBuilder::tag("label", Content::Text(&text), &label_attrs, false)? + &control
            }
            None => control,
        };

        let class = match wrapper {
            Wrapper::Off => None,
            Wrapper::DefaultClass => Some(format!(
                "{} {}",
                self.config.input.wrapper_class_prefix,
                attrs.get_string(keys::TYPE)
            )),
            Wrapper::Class(class) => Some(class),
        };
        if let Some(class) = class {
            html = TagBuilder::div(&html, &class)?;
        }
        Ok(html)
    }

    /// Render a date as three selects named `name[d]`, `name[m]`, `name[y]`
    ///
    /// Days run 1-31, months 1-12 and years `startYear`-`endYear`. Each
    /// select is preselected from `currentDay`/`currentMonth`/`currentYear`,
    /// which default to today. No separators or wrapper are added.
    pub fn date(&self, name: &str, options: &FieldOptions) -> Result<String> {
        let today = self.clock.today();
        let defaults = AttributeSet::new()
            .with(keys::START_YEAR, self.config.date.start_year)
            .with(keys::END_YEAR, today.year)
            .with(keys::CURRENT_DAY, today.day)
            .with(keys::CURRENT_MONTH, today.month)
            .with(keys::CURRENT_YEAR, today.year);
        let merged = AttributeSet::merge(&defaults, options.attributes());

        let int_or_default = |key: &str| {
            merged
                .get(key)
                .and_then(AttrValue::as_int)
                .or_else(|| defaults.get(key).and_then(AttrValue::as_int))
                .unwrap_or_default()
        };
        let start_year = int_or_default(keys::START_YEAR);
        let end_year = int_or_default(keys::END_YEAR);
        let span = start_year.abs_diff(end_year);
        if span > self.config.date.max_year_span {
            return Err(FormError::InvalidOptions(format!(
                "year range {start_year}..{end_year} spans {span} years, more than the {} allowed",
                self.config.date.max_year_span
            )));
        }

        let parts = [
            ("d", OptionList::range(1, 31), keys::CURRENT_DAY),
            ("m", OptionList::range(1, 12), keys::CURRENT_MONTH),
            ("y", OptionList::range(start_year, end_year), keys::CURRENT_YEAR),
        ];

        let mut html = String::new();
        for (suffix, list, current) in parts {
            let select_options = FieldOptions::new()
                .value(merged.get(current).cloned().unwrap_or_default())
                .options(list);
            html.push_str(&self.select(&format!("{name}[{suffix}]"), &select_options)?);
        }
        Ok(html)
    }

    fn default_id(&self, name: &str) -> String {
        let slug = self.inflector.slugify(name);
        self.inflector
            .camelize(&format!("{}_{slug}", self.config.input.id_prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::FixedDate;

    fn helper() -> FormHelper {
        FormHelper::new().clock(FixedDate::new(2024, 3, 15))
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_select_marks_single_match() {
        let options = FieldOptions::new()
            .options(OptionList::new().with(1, "One").with(2, "Two"))
            .value(2);
        let html = helper().select("x", &options).unwrap();

        assert_eq!(
            html,
            r#"<select name="x"><option value="1">One</option><option value="2" selected>Two</option></select>"#
        );
    }

    #[test]
    fn test_select_value_not_present_selects_none() {
        let options = FieldOptions::new()
            .options(OptionList::new().with(1, "One").with(2, "Two"))
            .value(3);
        let html = helper().select("x", &options).unwrap();
        assert_eq!(count(&html, "selected"), 0);
        assert!(!html.contains("value=\"3\""));
    }

    #[test]
    fn test_select_loose_match_on_string_value() {
        let options = FieldOptions::new()
            .options(OptionList::new().with(1, "One").with(2, "Two"))
            .value("2");
        let html = helper().select("x", &options).unwrap();
        assert!(html.contains(r#"<option value="2" selected>"#));
    }

    #[test]
    fn test_select_empty_placeholder() {
        let options = FieldOptions::new()
            .options(OptionList::new().with(1, "A"))
            .empty("Choose");
        let html = helper().select("x", &options).unwrap();
        assert!(html.starts_with(r#"<select name="x"><option value="" selected>Choose</option>"#));
        assert!(html.contains(r#"<option value="1">A</option>"#));
    }

    #[test]
    fn test_select_placeholder_not_selected_when_value_matches() {
        let options = FieldOptions::new()
            .options(OptionList::new().with(1, "A"))
            .empty("Choose")
            .value(1);
        let html = helper().select("x", &options).unwrap();
        assert!(html.contains(r#"<option value="">Choose</option>"#));
        assert!(html.contains(r#"<option value="1" selected>A</option>"#));
    }

    #[test]
    fn test_select_passes_through_attributes() {
        let options = FieldOptions::new()
            .options(OptionList::new().with("a", "A"))
            .attr("id", "Letters")
            .attr("multiple", true);
        let html = helper().select("letters", &options).unwrap();
        assert!(html.starts_with(r#"<select name="letters" id="Letters" multiple>"#));
    }

    #[test]
    fn test_select_rejects_scalar_options() {
        let options = FieldOptions::new().attr("options", "nope");
        assert_eq!(
            helper().select("x", &options),
            Err(FormError::NotAnOptionList {
                key: "options".into()
            })
        );
    }

    #[test]
    fn test_select_does_not_mutate_caller_options() {
        let options = FieldOptions::new()
            .options(OptionList::new().with(1, "A"))
            .empty("Choose")
            .value(1);
        let before = options.clone();
        let _ = helper().select("x", &options).unwrap();
        assert_eq!(options, before);
    }

    #[test]
    fn test_radio_checks_first_identity_match() {
        let options = FieldOptions::new()
            .options(OptionList::new().with(1, "A").with(2, "B"))
            .value(1);
        let html = helper().radio("x", &options).unwrap();

        assert_eq!(count(&html, "<input"), 2);
        assert_eq!(count(&html, "<label"), 2);
        assert_eq!(count(&html, " checked"), 1);
        let first_input = html.split("<label").next().unwrap();
        assert!(first_input.contains(" checked"));
    }

    #[test]
    fn test_radio_string_value_does_not_match_int_key() {
        let options = FieldOptions::new()
            .options(OptionList::new().with(1, "A"))
            .value("1");
        let html = helper().radio("x", &options).unwrap();
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_radio_ids_and_labels() {
        let options = FieldOptions::new().options(OptionList::new().with("m", "Male"));
        let html = helper().radio("gender", &options).unwrap();
        assert_eq!(
            html,
            r#"<input type="radio" value="m" id="GenderM" name="gender"><label for="GenderM">Male</label>"#
        );
    }

    #[test]
    fn test_input_defaults() {
        let html = helper().input("user_name", &FieldOptions::new()).unwrap();
        assert_eq!(
            html,
            r#"<div class="input text"><label for="FormUserName">User Name</label><input name="user_name" type="text" id="FormUserName"></div>"#
        );
    }

    #[test]
    fn test_input_password_override() {
        let options = FieldOptions::new()
            .attr("name", "password")
            .input_type("text");
        let html = helper().input("pwd_field", &options).unwrap();
        assert!(html.contains(r#"type="password""#));
        assert!(!html.contains(r#"type="text""#));
        assert!(html.starts_with(r#"<div class="input password">"#));
    }

    #[test]
    fn test_input_hidden_has_no_label_or_div() {
        let options = FieldOptions::new().input_type("hidden").value(42);
        let html = helper().input("user_id", &options).unwrap();
        assert_eq!(
            html,
            r#"<input name="user_id" type="hidden" id="FormUserId" value="42">"#
        );
    }

    #[test]
    fn test_input_explicit_div_class_and_no_label() {
        let options = FieldOptions::new()
            .div(Wrapper::Class("field".into()))
            .no_label();
        let html = helper().input("email", &options).unwrap();
        assert_eq!(
            html,
            r#"<div class="field"><input name="email" type="text" id="FormEmail"></div>"#
        );
    }

    #[test]
    fn test_input_without_wrapper() {
        let options = FieldOptions::new().div(Wrapper::Off).label("E-mail");
        let html = helper().input("email", &options).unwrap();
        assert!(html.starts_with(r#"<label for="FormEmail">E-mail</label><input"#));
        assert!(!html.contains("<div"));
    }

    #[test]
    fn test_input_select_strips_type() {
        let options = FieldOptions::new()
            .input_type("select")
            .options(OptionList::new().with("us", "United States"))
            .value("us");
        let html = helper().input("country", &options).unwrap();
        assert!(html.starts_with(r#"<div class="input select"><label for="FormCountry">Country</label><select"#));
        assert!(!html.contains(r#"type="select""#));
        assert!(html.contains(r#"<option value="us" selected>United States</option>"#));
    }

    #[test]
    fn test_input_radio_forces_label_off() {
        let options = FieldOptions::new()
            .input_type("radio")
            .options(OptionList::new().with("m", "Male").with("f", "Female"))
            .label("Gender");
        let html = helper().input("gender", &options).unwrap();
        assert!(html.starts_with(r#"<div class="input radio"><input type="radio""#));
        assert!(!html.contains(">Gender<"));
    }

    #[test]
    fn test_input_date_delegates() {
        let options = FieldOptions::new().input_type("date").start_year(2023);
        let html = helper().input("dob", &options).unwrap();
        assert!(html.starts_with(r#"<div class="input date"><label for="FormDob">Dob</label>"#));
        assert_eq!(count(&html, "<select"), 3);
    }

    #[test]
    fn test_input_textarea() {
        let options = FieldOptions::new()
            .input_type("textarea")
            .value("a < b")
            .attr("rows", 5);
        let html = helper().input("bio", &options).unwrap();
        assert_eq!(
            html,
            r#"<div class="input textarea"><label for="FormBio">Bio</label><textarea name="bio" id="FormBio" rows="5">a &lt; b</textarea></div>"#
        );
    }

    #[test]
    fn test_input_never_leaks_control_entries() {
        let options = FieldOptions::new().label("Name").div(Wrapper::DefaultClass);
        let html = helper().input("name", &options).unwrap();
        assert!(!html.contains("label=\""));
        assert!(!html.contains("div=\""));
    }

    #[test]
    fn test_date_selects_current_year() {
        let options = FieldOptions::new()
            .current_year(2020)
            .start_year(2018)
            .end_year(2022);
        let html = helper().date("dob", &options).unwrap();

        assert_eq!(count(&html, "<select"), 3);
        assert!(html.contains(r#"<select name="dob[d]">"#));
        assert!(html.contains(r#"<select name="dob[m]">"#));
        assert!(html.contains(r#"<option value="2020" selected>2020</option>"#));
        assert!(html.contains(r#"<option value="2018">2018</option>"#));
        assert!(html.contains(r#"<option value="2022">2022</option>"#));
        assert!(!html.contains(r#"value="2023""#));
    }

    #[test]
    fn test_date_defaults_to_today() {
        let html = helper().date("when", &FieldOptions::new()).unwrap();
        let (day, rest) = html.split_once("</select>").unwrap();
        let (month, year) = rest.split_once("</select>").unwrap();

        assert!(day.contains(r#"<option value="15" selected>"#));
        assert!(month.contains(r#"<option value="3" selected>"#));
        assert!(year.contains(r#"<option value="2024" selected>"#));
        assert!(year.contains(r#"<option value="1980">"#));
        assert_eq!(count(day, "<option"), 31);
        assert_eq!(count(month, "<option"), 12);
    }

    #[test]
    fn test_date_bad_year_falls_back_to_default() {
        let options = FieldOptions::new().attr("startYear", "soon");
        let html = helper().date("when", &options).unwrap();
        assert!(html.contains(r#"<option value="1980">"#));
    }

    #[test]
    fn test_date_rejects_oversized_year_span() {
        let options = FieldOptions::new().start_year(-100_000_000).end_year(2024);
        assert!(matches!(
            helper().date("when", &options),
            Err(FormError::InvalidOptions(_))
        ));

        let options = FieldOptions::new().start_year(2024).end_year(1824);
        assert!(helper().date("when", &options).is_ok());
    }

    #[test]
    fn test_input_empty_label_and_div_are_off() {
        let options = FieldOptions::new().label("").attr("div", "");
        let html = helper().input("email", &options).unwrap();
        assert_eq!(html, r#"<input name="email" type="text" id="FormEmail">"#);
    }

    #[test]
    fn test_radio_same_from_builder_and_json() {
        let built = FieldOptions::new()
            .options(OptionList::new().with("1", "A").with("2", "B"))
            .value(1);
        let parsed = FieldOptions::from_json(serde_json::json!({
            "options": {"1": "A", "2": "B"},
            "value": 1
        }))
        .unwrap();

        let html = helper().radio("x", &built).unwrap();
        assert_eq!(html, helper().radio("x", &parsed).unwrap());
        assert!(html.contains(r#"<input type="radio" value="1" id="X1" name="x" checked>"#));
    }

    #[test]
    fn test_json_attribute_name_cannot_break_out_of_tag() {
        let options = FieldOptions::from_json(serde_json::json!({
            "x onmouseover=alert(1) y": "z"
        }))
        .unwrap();
        assert_eq!(
            helper().input("q", &options),
            Err(FormError::InvalidAttributeName(
                "x onmouseover=alert(1) y".into()
            ))
        );

        let options = FieldOptions::from_json(serde_json::json!({"": "empty"})).unwrap();
        assert_eq!(
            helper().input("q", &options),
            Err(FormError::InvalidAttributeName(String::new()))
        );
    }

    #[test]
    fn test_create_upload_form() {
        let options = FieldOptions::new().attr("method", "file");
        let html = helper().create(Some("save"), &options).unwrap();
        assert_eq!(
            html,
            r#"<form method="post" action="save" enctype="multipart/form-data">"#
        );
    }

    #[test]
    fn test_create_with_resolver() {
        let form = helper().resolver(crate::collaborators::PrefixResolver::new("/app"));
        let html = form
            .create(Some("users/save"), &FieldOptions::new().attr("method", "get"))
            .unwrap();
        assert_eq!(html, r#"<form method="get" action="/app/users/save">"#);
    }

    #[test]
    fn test_close_with_and_without_submit() {
        let form = helper();
        assert_eq!(form.close(None, &FieldOptions::new()).unwrap(), "</form>");
        assert_eq!(
            form.close(Some("Send"), &FieldOptions::new().attr("class", "primary"))
                .unwrap(),
            r#"<button type="submit" class="primary">Send</button></form>"#
        );
    }

    #[test]
    fn test_submit_as_input() {
        let html = helper()
            .submit("Go & see", &FieldOptions::new().tag("input"))
            .unwrap();
        assert_eq!(html, r#"<input type="submit" value="Go &amp; see">"#);
    }

    #[test]
    fn test_submit_escapes_button_text() {
        let html = helper().submit("<Save>", &FieldOptions::new()).unwrap();
        assert_eq!(html, r#"<button type="submit">&lt;Save&gt;</button>"#);
    }
}
