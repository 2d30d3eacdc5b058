//! HTTP contract of `/api/commandes`, served from the in-memory store.

use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use chrono::{Days, NaiveDate};
use commande_service::application::commande_service::CommandeService;
use commande_service::config::RetentionWindow;
use commande_service::configure;
use commande_service::domain::clock::Clock;
use commande_service::domain::ports::CommandeRepository;
use commande_service::handlers::commandes::SharedService;
use commande_service::infrastructure::memory_repo::InMemoryCommandeRepository;
use serde_json::{json, Value};

struct TestClock(Mutex<NaiveDate>);

impl TestClock {
    fn advance(&self, days: u64) {
        let mut today = self.0.lock().unwrap();
        *today = *today + Days::new(days);
    }
}

impl Clock for TestClock {
    fn today(&self) -> NaiveDate {
        *self.0.lock().unwrap()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn service(clock: Arc<TestClock>) -> web::Data<SharedService> {
    let repo: Arc<dyn CommandeRepository> = Arc::new(InMemoryCommandeRepository::new());
    web::Data::new(CommandeService::with_clock(
        repo,
        RetentionWindow::from_days(30).unwrap(),
        clock,
    ))
}

fn fixed_clock() -> Arc<TestClock> {
    Arc::new(TestClock(Mutex::new(today())))
}

fn widget(date: &str) -> Value {
    json!({
        "description": "widget",
        "quantite": 3,
        "date": date,
        "montant": 9.99
    })
}

#[actix_web::test]
async fn create_then_get() {
    let app = test::init_service(App::new().configure(configure(service(fixed_clock())))).await;

    let req = test::TestRequest::post()
        .uri("/api/commandes")
        .set_json(widget("2024-01-01"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;

    let id = created["id"].as_i64().expect("assigned id");
    assert_eq!(created["description"], "widget");
    assert_eq!(created["quantite"], 3);
    assert_eq!(created["date"], "2024-01-01");
    assert_eq!(created["montant"], 9.99);

    let req = test::TestRequest::get()
        .uri(&format!("/api/commandes/{}", id))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn get_unknown_returns_404() {
    let app = test::init_service(App::new().configure(configure(service(fixed_clock())))).await;

    let req = test::TestRequest::get().uri("/api/commandes/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Commande not found" }));
}

#[actix_web::test]
async fn update_replaces_fields() {
    let app = test::init_service(App::new().configure(configure(service(fixed_clock())))).await;

    let req = test::TestRequest::post()
        .uri("/api/commandes")
        .set_json(widget("2024-01-01"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/commandes/{}", id))
        .set_json(json!({ "description": "gadget", "quantite": 7, "date": "2024-06-01" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;

    assert_eq!(
        updated,
        json!({
            "id": id,
            "description": "gadget",
            "quantite": 7,
            "date": "2024-06-01",
            "montant": null
        })
    );
}

#[actix_web::test]
async fn update_unknown_returns_404() {
    let app = test::init_service(App::new().configure(configure(service(fixed_clock())))).await;

    let req = test::TestRequest::put()
        .uri("/api/commandes/12")
        .set_json(widget("2024-01-01"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_returns_204_then_404() {
    let app = test::init_service(App::new().configure(configure(service(fixed_clock())))).await;

    let req = test::TestRequest::post()
        .uri("/api/commandes")
        .set_json(widget("2024-01-01"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/commandes/{}", created["id"].as_i64().unwrap());

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_only_returns_recent_commandes() {
    let clock = fixed_clock();
    let app = test::init_service(App::new().configure(configure(service(clock.clone())))).await;

    let recent = today().to_string();
    let on_cutoff = (today() - Days::new(30)).to_string();
    for date in [&recent, &on_cutoff] {
        let req = test::TestRequest::post()
            .uri("/api/commandes")
            .set_json(widget(date))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/commandes").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let listed = listed.as_array().expect("array body");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["date"], recent.as_str());

    clock.advance(31);

    let req = test::TestRequest::get().uri("/api/commandes").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn malformed_body_returns_400() {
    let app = test::init_service(App::new().configure(configure(service(fixed_clock())))).await;

    let req = test::TestRequest::post()
        .uri("/api/commandes")
        .set_json(json!({ "quantite": "three" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn montant_that_cannot_be_echoed_exactly_returns_400() {
    let app = test::init_service(App::new().configure(configure(service(fixed_clock())))).await;

    for montant in ["1e400", "12345678901234567.89"] {
        let req = test::TestRequest::post()
            .uri("/api/commandes")
            .set_json(json!({ "description": "widget", "montant": montant }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "montant {}", montant);
    }

    let req = test::TestRequest::get().uri("/api/commandes/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
