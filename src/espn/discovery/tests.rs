//! Unit tests for name matching and id range scanning

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod name_tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("A.J. Brown"), "aj brown");
        assert_eq!(normalize_name("Ja'Marr  Chase "), "jamarr chase");
        assert_eq!(normalize_name("Amon-Ra St. Brown"), "amon-ra st brown");
    }

    #[test]
    fn test_names_match_either_direction() {
        assert!(names_match("Ja'Marr Chase", "JaMarr Chase"));
        assert!(names_match("Kenneth Walker", "Kenneth Walker III"));
        assert!(names_match("Michael Pittman Jr.", "Michael Pittman"));
        assert!(!names_match("Josh Allen", "Josh Jacobs"));
    }

    #[test]
    fn test_empty_names_never_match() {
        assert!(!names_match("", "Josh Allen"));
        assert!(!names_match("Josh Allen", " . "));
    }
}

#[cfg(test)]
mod range_tests {
    use super::*;

    #[test]
    fn test_range_ids_are_stepped_and_half_open() {
        let ids: Vec<u64> = IdRange::new(100, 130, 10).ids().map(|id| id.as_u64()).collect();
        assert_eq!(ids, vec![100, 110, 120]);
    }

    #[test]
    fn test_zero_step_treated_as_one() {
        assert_eq!(IdRange::new(5, 8, 0).len(), 3);
    }

    #[test]
    fn test_empty_range() {
        let range = IdRange::new(10, 10, 1);
        assert!(range.is_empty());
        assert_eq!(range.ids().count(), 0);
    }

    #[test]
    fn test_default_ranges_cover_known_ids() {
        let ranges = default_ranges();
        let covers = |id: u64| ranges.iter().any(|r| r.ids().any(|i| i.as_u64() == id));
        assert!(covers(16800));
        assert!(covers(3128390));
    }
}

async fn mount_athlete(server: &MockServer, id: u64, name: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/apis/common/v3/sports/football/nfl/athletes/{id}/overview"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "athlete": { "displayName": name, "team": { "abbreviation": "TST" } }
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_find_scans_until_match() {
    let server = MockServer::start().await;
    mount_athlete(&server, 10, "Derrick Henry", 1).await;
    mount_athlete(&server, 12, "Ja'Marr Chase", 1).await;

    let client = EspnClient::with_base_url(&server.uri()).unwrap();
    let mut finder = IdFinder::new(&client, Duration::ZERO);
    let ranges = [IdRange::new(10, 20, 1)];

    assert_eq!(finder.find("JaMarr Chase", &ranges).await, Some(EspnId::new(12)));
    // Ids 10-12 are memoised, so the second search refetches nothing.
    assert_eq!(finder.find("Derrick Henry", &ranges).await, Some(EspnId::new(10)));
}

#[tokio::test]
async fn test_find_returns_none_and_records_seen_names() {
    let server = MockServer::start().await;
    mount_athlete(&server, 3, "Josh Jacobs", 1).await;
    mount_athlete(&server, 1, "Aaron Jones", 1).await;

    let client = EspnClient::with_base_url(&server.uri()).unwrap();
    let mut finder = IdFinder::new(&client, Duration::ZERO);

    let found = finder.find("Josh Allen", &[IdRange::new(0, 5, 1)]).await;
    assert_eq!(found, None);
    assert_eq!(
        finder.discovered(),
        vec![
            (EspnId::new(1), "Aaron Jones".to_string()),
            (EspnId::new(3), "Josh Jacobs".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_transient_failure_is_retried_on_next_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apis/common/v3/sports/football/nfl/athletes/1/overview"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_athlete(&server, 1, "Saquon Barkley", 1).await;

    let client = EspnClient::with_base_url(&server.uri()).unwrap();
    let mut finder = IdFinder::new(&client, Duration::ZERO);
    let ranges = [IdRange::new(1, 2, 1)];

    assert_eq!(finder.find("Saquon Barkley", &ranges).await, None);
    assert_eq!(
        finder.find("Saquon Barkley", &ranges).await,
        Some(EspnId::new(1))
    );
}

#[tokio::test]
async fn test_missing_athlete_is_memoised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apis/common/v3/sports/football/nfl/athletes/7/overview"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = EspnClient::with_base_url(&server.uri()).unwrap();
    let mut finder = IdFinder::new(&client, Duration::ZERO);
    let ranges = [IdRange::new(7, 8, 1)];

    assert_eq!(finder.find("Anyone", &ranges).await, None);
    assert_eq!(finder.find("Anyone", &ranges).await, None);
    assert!(finder.discovered().is_empty());
}
