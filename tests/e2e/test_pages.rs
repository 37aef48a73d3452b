use crate::e2e::helpers;

use chrono::{TimeZone, Utc};
use helpers::fixtures::{mount_markdown_page, raw_page_path, resource};
use helpers::{TestContext, PAGE_CACHE_TTL};
use hyper::StatusCode;
use portal_front::domain::resources::ResourceKind;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_render_markdown_page_with_resources(ctx: &TestContext) {

    let jan = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let feb = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    ctx.resources.insert(ResourceKind::Dataset, resource("census", &[], jan));
    ctx.resources.insert(ResourceKind::Reuse, resource("older-map", &["tag#"], jan));
    ctx.resources.insert(ResourceKind::Reuse, resource("newer-map", &["tag#"], feb));

    mount_markdown_page(
        &ctx.remote,
        "open-data",
        "---\ntitle: Open data\ndatasets:\n  - census\n  - unknown\nreuses:\n  - tag#maps\n---\n# Open data\n",
    )
    .await;

    let response = ctx.client.get("/en/pages/open-data").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.json();
    assert_eq!(body["metadata"], json!({
        "title": "Open data",
        "datasets": ["census", "unknown"],
        "reuses": ["tag#maps"]
    }));
    assert_eq!(body["body"], json!("# Open data\n"));
    assert_eq!(body["extension"], json!("md"));
    assert_eq!(
        body["gh_url"],
        json!("https://github.com/portal/pages/blob/master/pages/open-data.md")
    );
    assert_eq!(body["datasets"][0]["slug"], json!("census"));
    assert_eq!(body["datasets"].as_array().unwrap().len(), 1);
    let reuses: Vec<_> = body["reuses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["slug"].as_str().unwrap())
        .collect();
    assert_eq!(reuses, vec!["newer-map", "older-map"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_nested_html_page(ctx: &TestContext) {

    Mock::given(method("GET"))
        .and(path(raw_page_path("about/team", "html")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Team</h1>"))
        .mount(&ctx.remote)
        .await;

    let response = ctx.client.get("/fr/pages/about/team/").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["body"], json!("<h1>Team</h1>"));
    assert_eq!(response.json()["extension"], json!("html"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_missing_page(ctx: &TestContext) {

    let response = ctx.client.get("/en/pages/missing").await.unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Page missing not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unsupported_language(ctx: &TestContext) {

    let response = ctx.client.get("/xx/pages/open-data").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(ctx.remote.received_requests().await.unwrap().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_stale_page_when_repository_fails(ctx: &TestContext) {

    Mock::given(method("GET"))
        .and(path(raw_page_path("legal", "html")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>Terms</p>"))
        .up_to_n_times(1)
        .mount(&ctx.remote)
        .await;
    Mock::given(method("GET"))
        .and(path(raw_page_path("legal", "html")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.remote)
        .await;

    ctx.client
        .get("/en/pages/legal")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    tokio::time::sleep(PAGE_CACHE_TTL * 2).await;

    let response = ctx.client.get("/en/pages/legal").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["body"], json!("<p>Terms</p>"));
    assert_eq!(
        response.diagnostic_kinds(),
        vec!["remote_unavailable", "stale_content_served"]
    );
}
