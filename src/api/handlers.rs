//! HTTP API handlers.
//!
//! Every handler answers `200 OK` with a plain-text body, including for
//! unsupported methods, unknown die types and empty sentences.

use std::sync::Arc;

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query, State};
use axum::http::Method;
use tracing::{info, warn};

use crate::clock;
use crate::dice::{self, BATCH_SIZE};
use crate::metrics::{self, LatencyTimer};
use crate::random::RandomSource;
use crate::text::{self, EMPTY_SENTENCE};

/// Time route.
pub const ROUTE_TIME: &str = "/";
/// Single die route.
pub const ROUTE_DICE: &str = "/dice";
/// Batch roll route.
pub const ROUTE_DICES: &str = "/dices";
/// Word shuffle route.
pub const ROUTE_RANDOMIZE_WORDS: &str = "/randomize-words";
/// Alternating case route.
pub const ROUTE_SEMI_CAPITALIZE: &str = "/semi-capitalize-sentence";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process-wide random source.
    pub random: Arc<RandomSource>,
}

impl AppState {
    /// Create new app state around a random source.
    pub fn new(random: RandomSource) -> Self {
        Self {
            random: Arc::new(random),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RandomSource::from_clock())
    }
}

/// Decoded `key=value` pairs, in request order.
///
/// Kept as a list rather than a struct so repeated keys are tolerated.
pub type Fields = Vec<(String, String)>;

/// First value submitted under `key`.
fn first_value(fields: &[(String, String)], key: &str) -> Option<String> {
    fields
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

fn respond(route: &'static str, body: String) -> String {
    metrics::inc_requests(route);
    info!(route, body = %body, "Response sent");
    body
}

/// Text reply for a method the route does not handle.
pub fn unsupported(route: &'static str, method: &Method) -> String {
    warn!("Unsupported {} request received for route '{}'", method, route);
    metrics::inc_unsupported_method(route);
    format!("Method {} is not supported", method)
}

/// Body field first, then the query string, mirroring classic form lookup.
///
/// Unreadable query strings or bodies count as carrying no fields.
fn form_field(
    key: &str,
    query: Result<Query<Fields>, QueryRejection>,
    body: Result<Form<Fields>, FormRejection>,
) -> Option<String> {
    body.ok()
        .and_then(|Form(fields)| first_value(&fields, key))
        .or_else(|| query.ok().and_then(|Query(fields)| first_value(&fields, key)))
}

/// `/` and every unknown path: current local time on GET.
pub async fn time(method: Method) -> String {
    if method != Method::GET && method != Method::HEAD {
        return unsupported(ROUTE_TIME, &method);
    }

    let _timer = LatencyTimer::new(ROUTE_TIME);
    respond(ROUTE_TIME, clock::local_hhmm())
}

/// `GET /dice`: one roll of a thousand-sided die.
pub async fn roll_dice(State(state): State<AppState>) -> String {
    let _timer = LatencyTimer::new(ROUTE_DICE);
    let body = dice::roll_single(&state.random);
    metrics::add_dice_rolled(1);
    respond(ROUTE_DICE, body)
}

/// `GET /dices`: fifteen rolls of the requested die, or of random dice.
pub async fn roll_dices(
    State(state): State<AppState>,
    query: Result<Query<Fields>, QueryRejection>,
) -> String {
    let _timer = LatencyTimer::new(ROUTE_DICES);
    let die_type = query
        .ok()
        .and_then(|Query(fields)| first_value(&fields, "type"));

    let body = match dice::roll_batch(&state.random, die_type.as_deref()) {
        Ok(batch) => {
            metrics::add_dice_rolled(BATCH_SIZE as u64);
            batch.to_string()
        }
        Err(e) => {
            warn!(error = %e, "Batch roll rejected");
            e.to_string()
        }
    };
    respond(ROUTE_DICES, body)
}

/// `POST /randomize-words`: shuffle the words of the `words` field.
pub async fn randomize_words(
    State(state): State<AppState>,
    query: Result<Query<Fields>, QueryRejection>,
    form: Result<Form<Fields>, FormRejection>,
) -> String {
    let _timer = LatencyTimer::new(ROUTE_RANDOMIZE_WORDS);
    let words = form_field("words", query, form);

    let body = match words.as_deref() {
        None | Some("") => EMPTY_SENTENCE.to_string(),
        Some(sentence) => text::shuffle_words(&state.random, sentence),
    };
    respond(ROUTE_RANDOMIZE_WORDS, body)
}

/// `POST /semi-capitalize-sentence`: alternate the case of `sentence`.
pub async fn semi_capitalize_sentence(
    query: Result<Query<Fields>, QueryRejection>,
    form: Result<Form<Fields>, FormRejection>,
) -> String {
    let _timer = LatencyTimer::new(ROUTE_SEMI_CAPITALIZE);
    let sentence = form_field("sentence", query, form);

    let body = match sentence.as_deref() {
        None | Some("") => EMPTY_SENTENCE.to_string(),
        Some(sentence) => text::semi_capitalize(sentence),
    };
    respond(ROUTE_SEMI_CAPITALIZE, body)
}
