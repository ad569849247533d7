//! End-to-end tests for the catalog pages backed by a Turso database.
//!
//! Requests go through the full router, use cases, and store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use rental_catalog::{AppState, CatalogStore, ListingId, TursoCatalogStore, create_router};
use rust_decimal::Decimal;
use tower::ServiceExt;

async fn app() -> (Router, Arc<TursoCatalogStore>) {
    let store = Arc::new(TursoCatalogStore::in_memory().await.unwrap());
    (create_router(AppState::new(Arc::clone(&store))), store)
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/add")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_add_then_list_loft() {
    let (app, store) = app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "title=Loft+A&description=Sunny+loft&price=1200.50&location=Downtown",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let listings = store.list_all().await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id(), ListingId::new(1));
    assert_eq!(listings[0].title(), "Loft A");
    assert_eq!(listings[0].description(), "Sunny loft");
    assert_eq!(listings[0].price().amount(), Decimal::new(120_050, 2));
    assert_eq!(listings[0].location(), "Downtown");

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<h3>Loft A</h3>"));
    assert!(body.contains("<p>Sunny loft</p>"));
    assert!(body.contains("Price: $1,200.50"));
    assert!(body.contains("Location: Downtown"));
}

#[tokio::test]
async fn test_three_listings_render_in_order() {
    let (app, store) = app().await;

    for title in ["First", "Second", "Third"] {
        let response = app
            .clone()
            .oneshot(post_form(&format!(
                "title={title}&description=Nice&price=500&location=Center"
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let ids: Vec<ListingId> = store
        .list_all()
        .await
        .unwrap()
        .iter()
        .map(|l| l.id())
        .collect();
    assert_eq!(
        ids,
        vec![ListingId::new(1), ListingId::new(2), ListingId::new(3)]
    );

    let body = body_text(app.oneshot(get("/")).await.unwrap()).await;
    let first = body.find("<h3>First</h3>").unwrap();
    let second = body.find("<h3>Second</h3>").unwrap();
    let third = body.find("<h3>Third</h3>").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn test_rejected_submission_is_not_stored() {
    let (app, store) = app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "title=Loft+A&description=Sunny+loft&price=abc&location=Downtown",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Price 'abc' is not a number"));
    assert!(body.contains(r#"value="Loft A""#));
    assert!(store.list_all().await.unwrap().is_empty());

    let body = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(body.contains("No properties listed yet."));
}

#[tokio::test]
async fn test_markup_in_listing_is_escaped() {
    let (app, _store) = app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "title=%3Cscript%3Ealert(1)%3C%2Fscript%3E&description=d&price=1&location=l",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_exponent_price_is_accepted() {
    let (app, store) = app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "title=Loft+A&description=Sunny+loft&price=1e3&location=Downtown",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let listings = store.list_all().await.unwrap();
    assert_eq!(listings[0].price().amount(), Decimal::new(1000, 0));

    let body = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(body.contains("Price: $1,000.00"));
}
