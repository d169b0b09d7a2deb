use super::*;

#[test]
fn extracts_bearer_token() {
    let headers = bearer_headers("abc123");

    assert_eq!(bearer_token(&headers), Some("abc123"));
}

#[test]
fn scheme_is_case_insensitive() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer abc123"));

    assert_eq!(bearer_token(&headers), Some("abc123"));
}

#[test]
fn ignores_other_schemes() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));

    assert_eq!(bearer_token(&headers), None);
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}
