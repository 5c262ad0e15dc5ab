use people_api::headers::{build_headers, DEFAULT_USER_AGENT, HEADER_ACCEPT, HEADER_USER_AGENT};
use people_api::{normalize_people_url, Person, PeopleApiClient, PeopleApiConfig};

#[test]
fn http_request_builds_listing_endpoint() {
    let config = PeopleApiConfig::default().with_base_url("https://people.example.test/api");
    let client = PeopleApiClient::new(config).expect("client");

    let http_request = client
        .build_request()
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(
        http_request.url().as_str(),
        normalize_people_url("https://people.example.test/api")
    );
    assert_eq!(http_request.method(), "GET");
    assert_eq!(
        http_request.headers().get(HEADER_ACCEPT).expect("accept"),
        "application/json"
    );
}

#[test]
fn header_map_merges_extra_headers_lowercased() {
    let config = PeopleApiConfig::default().insert_header("X-Request-Source", " pages ");

    let headers = build_headers(&config);
    assert_eq!(headers.get("x-request-source").map(String::as_str), Some("pages"));
    assert_eq!(
        headers.get(HEADER_USER_AGENT).map(String::as_str),
        Some(DEFAULT_USER_AGENT)
    );
}

#[test]
fn header_map_prefers_configured_user_agent() {
    let config = PeopleApiConfig::default().with_user_agent("dir-bot/2");
    let headers = build_headers(&config);
    assert_eq!(headers.get(HEADER_USER_AGENT).map(String::as_str), Some("dir-bot/2"));
}

#[test]
fn person_decodes_camel_case_and_tolerates_nulls() {
    let body = r#"[
        {"id":"a1","firstName":"Albus","lastName":"Dumbledore","elixirs":[{"id":"e1","name":"Felix"}]},
        {"id":"b2","firstName":null,"lastName":"Marcus"}
    ]"#;

    let people = serde_json::from_str::<Vec<Person>>(body).expect("listing decodes");
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].display_name(), "Albus Dumbledore");
    assert_eq!(people[0].elixirs[0].name.as_deref(), Some("Felix"));
    assert_eq!(people[1].display_name(), "Marcus");
    assert!(people[1].elixirs.is_empty());
}
