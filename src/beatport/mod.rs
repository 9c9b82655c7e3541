//! # Beatport Integration Module
//!
//! This module implements the client for the Beatport catalog API: OAuth2
//! authentication, bearer-authorized paginated requests and the typed catalog
//! operations built on top of them.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Catalog operations ([`BeatportClient`] methods in `catalog`)
//!          ↓
//! Request engine (`request`: bearer wrapper, 401 retry, cursor cache)
//!          ↓                         ↘
//! Auth manager (`auth`)          Endpoint table (`endpoints`)
//!          ↓
//! Transport (`transport`: one HTTP request in, status/body/headers out)
//! ```
//!
//! ## Authentication
//!
//! The API uses OAuth2 with two grant paths:
//!
//! - **Refresh grant**: the held refresh token is exchanged for a fresh
//!   access/refresh pair. Tried first whenever a refresh token exists; its
//!   failure is never an error, only the cue to run the full login.
//! - **Authorization code**: a credentials login yields a session cookie,
//!   the cookie-authenticated authorize call answers with a redirect whose
//!   `Location` header carries the code, and the code is exchanged for the
//!   token pair.
//!
//! Tokens are acquired lazily: on the first authorized request, or after a
//! 401 answer (one forced re-authentication, one replay). After every
//! successful acquisition the subscription state is re-read from the
//! introspection endpoint and the new token pair is handed to the attached
//! credential store.
//!
//! ## Pagination
//!
//! Collection endpoints answer with pages carrying a `next` URL. The request
//! engine remembers one continuation cursor per query (keyed by the
//! first-page URL) so that repeated calls walk the collection page by page;
//! an exhausted query yields empty pages without network traffic until the
//! caller resets it.

mod auth;
mod catalog;
pub mod client;
pub mod endpoints;
mod request;
pub mod transport;

pub use client::BeatportClient;
