//! amity-api: HTTP front end for the amity social graph.
//!
//! A thin routing and marshalling layer: each handler extracts path,
//! query, or body parameters, calls one facade operation, and serializes
//! the result (or an error) as JSON.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
