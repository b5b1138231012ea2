//! Unit tests for the athlete endpoint client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[test]
fn test_athlete_url() {
    let client = EspnClient::with_base_url("http://localhost:9999/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:9999");
    assert_eq!(
        client.athlete_url(EspnId::new(3128390), "overview"),
        "http://localhost:9999/apis/common/v3/sports/football/nfl/athletes/3128390/overview"
    );
}

#[test]
fn test_default_base_url() {
    let client = EspnClient::new().unwrap();
    assert_eq!(client.base_url(), ESPN_WEB_BASE_URL);
}

#[tokio::test]
async fn test_athlete_overview_sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/apis/common/v3/sports/football/nfl/athletes/3916387/overview",
        ))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "athlete": {
                "displayName": "Lamar Jackson",
                "team": { "abbreviation": "BAL" }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = EspnClient::with_base_url(&server.uri()).unwrap();
    let overview = client.athlete_overview(EspnId::new(3916387)).await.unwrap();

    assert_eq!(overview.name(), Some("Lamar Jackson"));
    assert_eq!(overview.team_abbreviation(), "BAL");
}

#[tokio::test]
async fn test_athlete_overview_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = EspnClient::with_base_url(&server.uri()).unwrap();
    let result = client.athlete_overview(EspnId::new(1)).await;
    assert!(matches!(result, Err(crate::DraftError::Http(_))));
}

#[tokio::test]
async fn test_athlete_splits_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = EspnClient::with_base_url(&server.uri()).unwrap();
    assert!(client.athlete_splits(EspnId::new(1)).await.is_err());
}
