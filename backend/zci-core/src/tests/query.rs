// Unit tests for request parameter and URL construction

use crate::query::{FIXED_PARAMS, QueryOptions, build_params, build_url};

use url::Url;

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// **VALUE**: Verifies the default request asks for JSON with safe search on,
/// redirects off, markup stripped and meanings included.
#[test]
fn given_default_options_when_building_params_then_uses_default_flags() {
    let params = build_params("rust", &QueryOptions::default());

    assert_eq!(param(&params, "q"), Some("rust"));
    assert_eq!(param(&params, "o"), Some("json"));
    assert_eq!(param(&params, "kp"), Some("1"));
    assert_eq!(param(&params, "no_redirect"), Some("1"));
    assert_eq!(param(&params, "no_html"), Some("1"));
    assert_eq!(param(&params, "d"), Some("0"));
    assert_eq!(params.len(), FIXED_PARAMS.len());
}

#[test]
fn given_inverted_options_when_building_params_then_flags_flip() {
    let options = QueryOptions::default()
        .with_safe_search(false)
        .with_html(true)
        .with_meanings(false);

    let params = build_params("rust", &options);

    assert_eq!(param(&params, "kp"), Some("-1"));
    assert_eq!(param(&params, "no_html"), Some("0"));
    assert_eq!(param(&params, "d"), Some("1"));
}

/// **VALUE**: Verifies passthrough params are appended but cannot override
/// parameters the builder owns.
///
/// **BUG THIS CATCHES**: Would catch a caller's `o=xml` silently breaking decoding.
#[test]
fn given_passthrough_params_when_building_params_then_fixed_keys_win() {
    let options = QueryOptions::default()
        .with_param("t", "dda")
        .with_param("o", "xml")
        .with_param("q", "something else");

    let params = build_params("rust", &options);

    assert_eq!(param(&params, "t"), Some("dda"));
    assert_eq!(param(&params, "o"), Some("json"));
    assert_eq!(param(&params, "q"), Some("rust"));
    assert_eq!(params.iter().filter(|(key, _)| key == "o").count(), 1);
    assert_eq!(params.last().map(|(key, _)| key.as_str()), Some("t"));
}

#[test]
fn given_query_with_special_characters_when_building_url_then_query_is_encoded() {
    let base = Url::parse("https://api.duckduckgo.com/").unwrap();

    let url = build_url(&base, "\\1 + 1 & more", &QueryOptions::default());

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    assert_eq!(param(&pairs, "q"), Some("\\1 + 1 & more"));
    assert!(!url.as_str().contains(' '));
    assert!(url.as_str().starts_with("https://api.duckduckgo.com/?q="));
}

#[test]
fn given_base_url_with_existing_query_when_building_url_then_query_is_replaced() {
    let base = Url::parse("http://127.0.0.1:8080/api?stale=1").unwrap();

    let url = build_url(&base, "rust", &QueryOptions::default());

    assert_eq!(url.path(), "/api");
    assert!(url.query_pairs().all(|(key, _)| key != "stale"));
}
