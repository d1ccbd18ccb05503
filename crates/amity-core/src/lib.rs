//! amity-core: shared record types for the amity social graph service.
//!
//! These are the wire-facing shapes produced by the Neo4j facade and
//! serialized by the HTTP layer. Pure data, serde derive only.

pub mod types;

pub use types::{FriendshipSummary, PathResult, Recommendation, SeedSummary, UserRecord};
