//! Integration tests for form rendering
//!
//! Builds complete forms through the public API and checks the markup.

use form_helper::prelude::*;
use serde_json::json;

fn helper() -> FormHelper {
    FormHelper::new().clock(FixedDate::new(2020, 6, 1))
}

#[test]
fn test_complete_registration_form() {
    let form = helper();
    let html = [
        form.create(Some("/users/register"), &FieldOptions::new().attr("id", "signup"))
            .unwrap(),
        form.input("email", &FieldOptions::new().input_type("email").attr("required", true))
            .unwrap(),
        form.input("password", &FieldOptions::new()).unwrap(),
        form.input(
            "plan",
            &FieldOptions::new()
                .input_type("radio")
                .options(OptionList::new().with("free", "Free").with("pro", "Pro"))
                .value("free"),
        )
        .unwrap(),
        form.input("token", &FieldOptions::new().input_type("hidden").value("abc"))
            .unwrap(),
        form.close(Some("Register"), &FieldOptions::new()).unwrap(),
    ]
    .concat();

    assert!(html.starts_with(r#"<form method="post" action="/users/register" id="signup">"#));
    assert!(html.contains(
        r#"<div class="input email"><label for="FormEmail">Email</label><input name="email" type="email" id="FormEmail" required></div>"#
    ));
    assert!(html.contains(r#"<div class="input password"><label for="FormPassword">Password</label>"#));
    assert!(html.contains(r#"<input type="radio" value="free" id="PlanFree" name="plan" checked>"#));
    assert!(html.contains(r#"<input name="token" type="hidden" id="FormToken" value="abc">"#));
    assert!(html.ends_with(r#"<button type="submit">Register</button></form>"#));
}

#[test]
fn test_options_from_json_drive_select() {
    let options = FieldOptions::from_json(json!({
        "options": {"1": "One", "2": "Two"},
        "value": 2,
        "class": "numbers"
    }))
    .unwrap();

    let html = helper().select("x", &options).unwrap();
    assert_eq!(
        html,
        r#"<select name="x" class="numbers"><option value="1">One</option><option value="2" selected>Two</option></select>"#
    );
}

#[test]
fn test_json_scalar_options_fail_loudly() {
    let options = FieldOptions::from_json(json!({"options": "one,two"})).unwrap();

    assert!(matches!(
        helper().select("x", &options),
        Err(FormError::NotAnOptionList { .. })
    ));
    assert!(matches!(
        helper().radio("x", &options),
        Err(FormError::NotAnOptionList { .. })
    ));
}

#[test]
fn test_escaping_in_values_and_labels() {
    let options = FieldOptions::new()
        .label(r#"Say "hi" & <wave>"#)
        .value(r#"5" onfocus="alert(1)"#);
    let html = helper().input("greeting", &options).unwrap();

    assert!(html.contains(r#"<label for="FormGreeting">Say "hi" &amp; &lt;wave&gt;</label>"#));
    assert!(html.contains(r#"value="5&quot; onfocus=&quot;alert(1)""#));
    assert!(!html.contains("<wave>"));
}

#[test]
fn test_custom_config_changes_defaults() {
    let mut config = FormConfig::default();
    config.input.wrap_by_default = false;
    config.input.id_prefix = "field".into();
    config.submit.default_tag = "input".into();
    config.date.start_year = 2019;

    let form = FormHelper::with_config(config).clock(FixedDate::new(2020, 1, 1));

    assert_eq!(
        form.input("title", &FieldOptions::new().no_label()).unwrap(),
        r#"<input name="title" type="text" id="FieldTitle">"#
    );
    assert_eq!(
        form.submit("Save", &FieldOptions::new()).unwrap(),
        r#"<input type="submit" value="Save">"#
    );

    let date = form.date("d", &FieldOptions::new()).unwrap();
    let year_select = date.rsplit("<select").next().unwrap();
    assert_eq!(year_select.matches("<option").count(), 2);
}

#[test]
fn test_shared_helper_across_threads() {
    let form = std::sync::Arc::new(helper());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let form = std::sync::Arc::clone(&form);
            std::thread::spawn(move || {
                form.select(
                    "n",
                    &FieldOptions::new()
                        .options(OptionList::range(0, 3))
                        .value(i),
                )
                .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let html = handle.join().unwrap();
        assert!(html.contains(&format!(r#"<option value="{i}" selected>"#)));
        assert_eq!(html.matches("selected").count(), 1);
    }
}
