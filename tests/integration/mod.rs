//! Integration tests for the plain-text API.
//!
//! These drive the full router in-process; no socket is opened.
//! Run with: cargo test --test integration

use std::collections::HashSet;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use miniapi::api::{create_router, AppState};
use miniapi::dice::DieType;
use miniapi::random::RandomSource;

/// Router with a fixed seed so failures are reproducible.
fn test_router() -> Router {
    create_router(AppState::new(RandomSource::seeded(2024)))
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn sorted_words(sentence: &str) -> Vec<String> {
    let mut words: Vec<String> = sentence.split(' ').map(str::to_string).collect();
    words.sort();
    words
}

#[tokio::test]
async fn dice_values_stay_in_range() {
    let app = test_router();
    for _ in 0..200 {
        let (status, body) = call(&app, get("/dice")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.len(), 4, "not four digits: {body}");
        let value: u32 = body.parse().unwrap();
        assert!((1..=1000).contains(&value));
    }
}

#[tokio::test]
async fn dices_without_type_mix_known_dice() {
    let app = test_router();
    let widths: HashSet<usize> = DieType::all().map(DieType::width).collect();

    for _ in 0..50 {
        let (status, body) = call(&app, get("/dices")).await;
        assert_eq!(status, StatusCode::OK);

        let tokens: Vec<&str> = body.split(' ').collect();
        assert_eq!(tokens.len(), 15);
        for token in tokens {
            let value: u32 = token.parse().unwrap();
            let fits = DieType::all()
                .any(|die| die.width() == token.len() && (1..=die.sides()).contains(&value));
            assert!(widths.contains(&token.len()));
            assert!(fits, "{token} does not match any die");
        }
    }
}

#[tokio::test]
async fn dices_d6_are_single_digits() {
    let app = test_router();
    for _ in 0..50 {
        let (_, body) = call(&app, get("/dices?type=d6")).await;
        for token in body.split(' ') {
            assert_eq!(token.len(), 1);
            let value: u32 = token.parse().unwrap();
            assert!((1..=6).contains(&value));
        }
    }
}

#[tokio::test]
async fn dices_d100_are_three_digits() {
    let app = test_router();
    let (_, body) = call(&app, get("/dices?type=D100")).await;
    let tokens: Vec<&str> = body.split(' ').collect();
    assert_eq!(tokens.len(), 15);
    assert!(tokens.iter().all(|t| t.len() == 3));
}

#[tokio::test]
async fn dices_unknown_type_is_a_text_reply() {
    let app = test_router();
    let (status, body) = call(&app, get("/dices?type=d3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Dice type d3 is not supported");
}

#[tokio::test]
async fn randomize_words_returns_a_permutation() {
    let app = test_router();
    let (status, body) = call(&app, post_form("/randomize-words", "words=the+quick+fox")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sorted_words(&body), sorted_words("the quick fox"));
}

#[tokio::test]
async fn randomize_single_word_is_identity() {
    let app = test_router();
    let (_, body) = call(&app, post_form("/randomize-words", "words=alone")).await;
    assert_eq!(body, "alone");
}

#[tokio::test]
async fn randomize_words_reads_query_when_body_lacks_field() {
    let app = test_router();
    let (_, body) = call(&app, post_form("/randomize-words?words=a+b", "")).await;
    assert_eq!(sorted_words(&body), sorted_words("a b"));
}

#[tokio::test]
async fn semi_capitalize_example() {
    let app = test_router();
    let (status, body) = call(
        &app,
        post_form("/semi-capitalize-sentence", "sentence=hello%20world"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "HeLlO WoRlD");
}

#[tokio::test]
async fn semi_capitalize_is_a_fixed_point() {
    let app = test_router();
    let (_, once) = call(
        &app,
        post_form("/semi-capitalize-sentence", "sentence=abcdefg"),
    )
    .await;
    assert_eq!(once, "AbCdEfG");

    let (_, twice) = call(
        &app,
        post_form("/semi-capitalize-sentence", &format!("sentence={once}")),
    )
    .await;
    assert_eq!(twice, once);
}

#[tokio::test]
async fn empty_inputs_are_reported() {
    let app = test_router();
    for (uri, body) in [
        ("/randomize-words", ""),
        ("/randomize-words", "words="),
        ("/semi-capitalize-sentence", ""),
        ("/semi-capitalize-sentence", "sentence="),
    ] {
        let (status, reply) = call(&app, post_form(uri, body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply, "Sentence is empty", "{uri} with {body:?}");
    }
}

#[tokio::test]
async fn non_form_body_counts_as_empty() {
    let app = test_router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/semi-capitalize-sentence")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"sentence":"hi"}"#))
        .unwrap();
    let (status, body) = call(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Sentence is empty");
}

#[tokio::test]
async fn wrong_methods_are_named_in_reply() {
    let app = test_router();
    let cases = [
        (Method::POST, "/"),
        (Method::DELETE, "/dice"),
        (Method::PUT, "/dices"),
        (Method::GET, "/randomize-words"),
        (Method::PATCH, "/semi-capitalize-sentence"),
    ];

    for (method, uri) in cases {
        let request = Request::builder()
            .method(method.clone())
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!("Method {method} is not supported"));
    }
}

#[tokio::test]
async fn time_reply_is_hh_h_mm() {
    let app = test_router();
    let (status, body) = call(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let (hour, minute) = body.split_once('h').unwrap();
    assert_eq!(hour.len(), 2);
    assert_eq!(minute.len(), 2);
    assert!(hour.parse::<u32>().unwrap() < 24);
    assert!(minute.parse::<u32>().unwrap() < 60);
}

#[tokio::test]
async fn repeated_fields_take_the_first_value() {
    let app = test_router();
    let (_, body) = call(
        &app,
        post_form("/randomize-words", "words=solo&words=other+words"),
    )
    .await;
    assert_eq!(body, "solo");

    let (_, body) = call(&app, get("/dices?type=D100&type=d2")).await;
    assert!(body.split(' ').all(|t| t.len() == 3));
}

#[tokio::test]
async fn every_reply_is_text_plain() {
    let app = test_router();
    let response = app.clone().oneshot(get("/dices")).await.unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
}
