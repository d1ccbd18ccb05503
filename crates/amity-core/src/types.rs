//! Record types shared between the graph facade and the HTTP layer.

use serde::{Deserialize, Serialize};

/// A User node as it leaves the graph store.
///
/// `age` is optional on the node itself; when absent it is omitted from
/// the serialized record rather than emitted as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    pub created_at: String,
}

/// A friend-of-friend suggestion with its mutual-friend count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub user: UserRecord,
    pub mutual_friends: i64,
}

/// One shortest path between two users: the ordered node sequence and
/// the number of edges traversed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<UserRecord>,
    pub length: usize,
}

/// Result of creating a friendship: both endpoints plus the relationship tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendshipSummary {
    pub user1: UserRecord,
    pub user2: UserRecord,
    pub relationship: String,
}

/// Counts returned by the sample-data seeder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub message: String,
    pub users_created: usize,
    pub friendships_created: usize,
}
