//! End to end: form bundle -> reqwest adapter -> mock service -> outcome

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cochar_client::presentation::CharacterCard;
use cochar_client::{GenerateError, GenerationService, GenerationSettings, HttpCharacterApi};
use cochar_domain::{Catalog, FieldBundle, FieldId};

fn service_for(server: &MockServer) -> GenerationService {
    let settings = GenerationSettings {
        request_timeout: Duration::from_secs(2),
        reenable_delay: Duration::ZERO,
    };
    let api = HttpCharacterApi::new(&server.uri(), settings.request_timeout).expect("api");
    GenerationService::new(Arc::new(api), Arc::new(Catalog::standard()), settings)
}

fn investigator() -> serde_json::Value {
    json!({
        "first_name": "Adam", "last_name": "Walkiewicz", "sex": "M", "age": 30,
        "occupation": "antique dealer", "country": "PL", "year": 1925,
        "strength": 50, "condition": 45, "size": 60, "dexterity": 55,
        "appearance": 40, "education": 80, "intelligence": 75, "power": 65,
        "luck": 35, "damage_bonus": "0", "build": 0, "doge": 27,
        "move_rate": 8, "hit_points": 10, "magic_points": 13,
        "sanity_points": 65,
        "skills": { "appraise": 60, "history": 50 }
    })
}

#[tokio::test]
async fn full_form_is_translated_and_rendered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/get"))
        .and(query_param("first_name", "Adam"))
        .and(query_param("age", "30"))
        .and(query_param("country", "PL"))
        .and(query_param("sex", "M"))
        .and(query_param("occupation", "antique dealer"))
        .and(query_param("occup_type", "expansion"))
        .and(query_param("era", "classic-1920"))
        .and(query_param("tags", "lovecraftian"))
        .respond_with(ResponseTemplate::new(200).set_body_json(investigator()))
        .expect(1)
        .mount(&server)
        .await;

    let bundle = FieldBundle::new()
        .with(FieldId::FirstName, "Adam")
        .with(FieldId::LastName, "")
        .with(FieldId::Age, "30")
        .with(FieldId::Country, "(PL) Poland")
        .with(FieldId::Sex, "Male")
        .with(FieldId::Occupation, "Antique Dealer")
        .with(FieldId::OccupationSet, "Investigators Handbook")
        .with(FieldId::Era, "Classic 1920")
        .with(FieldId::Tags, "lovecraftian");

    let service = service_for(&server);
    let character = service.submit(&bundle).await.expect("character");

    let card = CharacterCard::new(&character).to_string();
    assert!(card.starts_with("Mr. Adam Walkiewicz\n30 yo, antique dealer, PL\n"));
    assert!(card.contains("  Appraise 60%\n  History 50%\n"));
    assert!(service.control().is_enabled());
}

#[tokio::test]
async fn random_choices_stay_off_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/get"))
        .and(query_param("random_mode", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(investigator()))
        .expect(1)
        .mount(&server)
        .await;

    let bundle = FieldBundle::with_form_defaults()
        .with(FieldId::Sex, "Random")
        .with(FieldId::Occupation, "Random occupation")
        .with(FieldId::OccupationSet, "All");

    service_for(&server).submit(&bundle).await.expect("character");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("country=US&random_mode=true"));
}

#[tokio::test]
async fn rate_limit_is_a_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "status": "fail",
            "message": "rate limited"
        })))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .submit(&FieldBundle::with_form_defaults())
        .await
        .expect_err("rejected");

    match err {
        GenerateError::Rejected(rejection) => {
            assert_eq!(rejection.message, "rate limited");
            assert!(rejection.is_rate_limited());
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn domain_failure_on_200_is_a_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "fail",
            "origin": "cochar",
            "message": "Incorrect occupation"
        })))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .submit(&FieldBundle::new().with(FieldId::Occupation, "wizard"))
        .await
        .expect_err("rejected");
    assert!(matches!(
        err,
        GenerateError::Rejected(ref r) if r.origin.as_deref() == Some("cochar")
    ));
}

#[tokio::test]
async fn server_error_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .submit(&FieldBundle::new())
        .await
        .expect_err("fetch failure");
    assert_eq!(err, GenerateError::Fetch("503 Service Unavailable".into()));
}

#[tokio::test]
async fn invalid_form_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(investigator()))
        .expect(0)
        .mount(&server)
        .await;

    let bundle = FieldBundle::with_form_defaults()
        .with(FieldId::Age, "10")
        .with(FieldId::FirstName, "Bob")
        .with(FieldId::Sex, "Male");

    let err = service_for(&server).submit(&bundle).await.expect_err("invalid");
    assert!(matches!(err, GenerateError::Invalid(ref report) if report.failed_fields() == vec![FieldId::Age]));
}
