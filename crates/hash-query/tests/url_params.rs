//! Whole-URL helper tests: only the fragment changes.

use hash_query::url_params::{
    delete_url_value, get_url_base64, get_url_boolean, get_url_float, get_url_integer,
    get_url_json, get_url_value, set_url_base64, set_url_boolean, set_url_float, set_url_integer,
    set_url_json, set_url_value,
};
use serde_json::{json, Value};

#[test]
fn get_from_url_fragment() {
    let url = "https://app.example.com/path?q=1#view?a=1&b=2";
    assert_eq!(get_url_value(url, "a").unwrap().as_deref(), Some("1"));
    assert_eq!(get_url_value(url, "b").unwrap().as_deref(), Some("2"));
    assert_eq!(get_url_value(url, "c").unwrap(), None);
}

#[test]
fn set_touches_only_the_fragment() {
    let url = "https://app.example.com/path?q=1#view?a=1";
    let next = set_url_value(url, "b", Some("2")).unwrap();
    assert_eq!(next, "https://app.example.com/path?q=1#view?a=1&b=2");
}

#[test]
fn set_on_url_without_fragment() {
    let next = set_url_value("https://example.com/", "a", Some("1")).unwrap();
    assert_eq!(next, "https://example.com/#?a=1");
}

#[test]
fn noop_returns_input_unchanged() {
    let url = "https://example.com/#view?a=1";
    assert_eq!(set_url_value(url, "a", Some("1")).unwrap(), url);
}

#[test]
fn delete_removes_the_key() {
    let url = "https://example.com/#view?a=1&b=2";
    assert_eq!(
        delete_url_value(url, "a").unwrap(),
        "https://example.com/#view?b=2"
    );
}

#[test]
fn invalid_url_is_an_error() {
    assert!(get_url_value("not a url", "a").is_err());
    assert!(set_url_value("not a url", "a", Some("1")).is_err());
}

#[test]
fn boolean_in_url() {
    let url = "https://example.com/#view";
    let with = set_url_boolean(url, "debug", true, false).unwrap();
    assert_eq!(with, "https://example.com/#view?debug=true");
    assert!(get_url_boolean(&with, "debug", false).unwrap());
    let without = set_url_boolean(&with, "debug", false, false).unwrap();
    assert!(!get_url_boolean(&without, "debug", false).unwrap());
}

#[test]
fn numbers_in_url() {
    let url = set_url_integer("https://example.com/#view", "page", Some(7)).unwrap();
    assert_eq!(get_url_integer(&url, "page").unwrap(), Some(7));
    let url = set_url_float(&url, "zoom", Some(2.5)).unwrap();
    assert_eq!(get_url_float(&url, "zoom").unwrap(), Some(2.5));
    let url = set_url_integer(&url, "page", Some(0)).unwrap();
    assert_eq!(get_url_integer(&url, "page").unwrap(), None);
}

#[test]
fn base64_text_in_url() {
    let url = set_url_base64("https://example.com/#view", "msg", Some("hi there & bye")).unwrap();
    assert_eq!(
        get_url_base64(&url, "msg").unwrap().as_deref(),
        Some("hi there & bye")
    );
}

#[test]
fn json_blob_in_url() {
    let state = json!({"b": [1, 2], "a": "x"});
    let url = set_url_json("https://example.com/#view", "state", Some(&state)).unwrap();
    assert!(url.starts_with("https://example.com/#view?"));
    let decoded: Option<Value> = get_url_json(&url, "state").unwrap();
    assert_eq!(decoded, Some(state));
}
