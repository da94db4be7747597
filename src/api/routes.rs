//! HTTP API route definitions.

use axum::http::Method;
use axum::routing::{any, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{
    randomize_words, roll_dice, roll_dices, semi_capitalize_sentence, time, unsupported, AppState,
    ROUTE_DICE, ROUTE_DICES, ROUTE_RANDOMIZE_WORDS, ROUTE_SEMI_CAPITALIZE, ROUTE_TIME,
};

/// Create the API router.
///
/// Methods a route does not serve get a `200` text reply instead of `405`,
/// and unknown paths fall through to the time endpoint instead of `404`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(ROUTE_TIME, any(time))
        .route(
            ROUTE_DICE,
            get(roll_dice).fallback(|method: Method| async move { unsupported(ROUTE_DICE, &method) }),
        )
        .route(
            ROUTE_DICES,
            get(roll_dices)
                .fallback(|method: Method| async move { unsupported(ROUTE_DICES, &method) }),
        )
        .route(
            ROUTE_RANDOMIZE_WORDS,
            post(randomize_words).fallback(|method: Method| async move {
                unsupported(ROUTE_RANDOMIZE_WORDS, &method)
            }),
        )
        .route(
            ROUTE_SEMI_CAPITALIZE,
            post(semi_capitalize_sentence).fallback(|method: Method| async move {
                unsupported(ROUTE_SEMI_CAPITALIZE, &method)
            }),
        )
        .fallback(time)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
