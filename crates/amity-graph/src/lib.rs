//! amity-graph: Neo4j client for the amity social graph.
//!
//! This crate is the single point of access to the graph store. Every
//! operation is one Cypher round-trip on a shared, pooled client; all
//! traversal and aggregation (shortest path, mutual-friend counting) is
//! delegated to the Neo4j query engine.

pub mod client;
pub mod mutations;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError};
