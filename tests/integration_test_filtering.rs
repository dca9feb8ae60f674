mod common;

use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::Value;

fn days_from_today(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

fn names(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|c| c["full_name"].as_str().unwrap())
        .collect()
}

async fn seeded_app() -> TestApp {
    let app = TestApp::new();
    app.signup_and_onboard().await;

    app.create_customer("Ends Today", "1111111111", &days_from_today(0)).await;
    app.create_customer("Ends In Five", "2222222222", &days_from_today(5)).await;
    app.create_customer("Ends In Twelve", "3333333333", &days_from_today(12)).await;
    app.create_customer("Already Expired", "4444444444", &days_from_today(-2)).await;
    app
}

#[tokio::test]
async fn test_window_keeps_active_customers_expiring_inside_it() {
    let app = seeded_app().await;

    let list = parse_body(app.get("/api/v1/customers?expires_within=7").await).await;
    assert_eq!(names(&list), vec!["Ends Today", "Ends In Five"]);

    let wide = parse_body(app.get("/api/v1/customers?expires_within=365").await).await;
    assert_eq!(
        names(&wide),
        vec!["Ends Today", "Ends In Five", "Ends In Twelve"]
    );
}

#[tokio::test]
async fn test_expired_customers_excluded_from_any_window() {
    let app = seeded_app().await;

    let list = parse_body(app.get("/api/v1/customers?expires_within=9999").await).await;
    assert!(!names(&list).contains(&"Already Expired"));
}

#[tokio::test]
async fn test_unparsable_window_is_pass_through() {
    let app = seeded_app().await;

    for query in [
        "/api/v1/customers?expires_within=soon",
        "/api/v1/customers?expires_within=all",
        "/api/v1/customers?expires_within=",
        "/api/v1/customers",
    ] {
        let list = parse_body(app.get(query).await).await;
        assert_eq!(
            list.as_array().unwrap().len(),
            4,
            "query {:?} should not filter anything",
            query
        );
    }
}

#[tokio::test]
async fn test_search_matches_name_or_phone() {
    let app = seeded_app().await;

    let by_name = parse_body(app.get("/api/v1/customers?search=ends%20in").await).await;
    assert_eq!(names(&by_name), vec!["Ends In Five", "Ends In Twelve"]);

    let by_phone = parse_body(app.get("/api/v1/customers?search=4444").await).await;
    assert_eq!(names(&by_phone), vec!["Already Expired"]);

    let nothing = parse_body(app.get("/api/v1/customers?search=zzz").await).await;
    assert!(nothing.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_and_window_intersect() {
    let app = seeded_app().await;

    // "Ends" matches three names, the 7-day window keeps two of them.
    let list = parse_body(app.get("/api/v1/customers?search=ends&expires_within=7").await).await;
    assert_eq!(names(&list), vec!["Ends Today", "Ends In Five"]);
}

#[tokio::test]
async fn test_listing_reports_live_status() {
    let app = seeded_app().await;

    let list = parse_body(app.get("/api/v1/customers?search=Already").await).await;
    assert_eq!(list[0]["status"], "Expired");
}
