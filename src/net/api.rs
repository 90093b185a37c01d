//! REST helpers for fetching list collections from the dashboard API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Off-browser builds get stubs returning an error since these endpoints are
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so a failed or malformed fetch degrades to
//! an empty list at the view layer instead of crashing. The two endpoints
//! return different shapes (`/api/bookings` wraps its array in an envelope,
//! `/api/proposals` returns a bare array); both are modeled explicitly here
//! rather than papered over.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ListItem;
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

/// Build-time API origin. Empty means same-origin relative requests.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn bookings_endpoint(base: &str) -> String {
    format!("{base}/api/bookings")
}

#[cfg(any(test, feature = "hydrate"))]
fn proposals_endpoint(base: &str) -> String {
    format!("{base}/api/proposals")
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(collection: &str, status: u16) -> String {
    format!("{collection} request failed: {status}")
}

/// `/api/bookings` wraps its records in a `bookings` envelope.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct BookingsEnvelope {
    bookings: Vec<ListItem>,
}

/// Fetch the bookings collection from `GET {base}/api/bookings`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not match the enveloped schema.
pub async fn fetch_bookings() -> Result<Vec<ListItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = bookings_endpoint(api_base());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_failed_message("bookings", resp.status()));
        }
        let body: BookingsEnvelope = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.bookings)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available off-browser".to_owned())
    }
}

/// Fetch the proposals collection from `GET {base}/api/proposals`.
///
/// Unlike bookings, the proposals endpoint returns a bare JSON array.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not an array of records.
pub async fn fetch_proposals() -> Result<Vec<ListItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = proposals_endpoint(api_base());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_failed_message("proposals", resp.status()));
        }
        resp.json::<Vec<ListItem>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available off-browser".to_owned())
    }
}
