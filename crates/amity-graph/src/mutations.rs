//! Write operations for the social graph.
//!
//! A friendship is a pair of directed FRIENDS edges. Every mutation here
//! creates or deletes the pair in a single statement, so one edge can
//! never exist without its mirror.

use chrono::Utc;
use neo4rs::query;
use rand::Rng;

use amity_core::{FriendshipSummary, SeedSummary, UserRecord};

use crate::client::{GraphClient, GraphError};
use crate::queries::node_to_user;

/// Users installed by `seed_sample_data`.
const SAMPLE_USERS: [&str; 8] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry",
];

/// Friendship pairs installed by `seed_sample_data`.
const SAMPLE_FRIENDSHIPS: [(&str, &str); 10] = [
    ("Alice", "Bob"),
    ("Alice", "Charlie"),
    ("Bob", "Diana"),
    ("Charlie", "Diana"),
    ("Diana", "Eve"),
    ("Eve", "Frank"),
    ("Frank", "Grace"),
    ("Grace", "Henry"),
    ("Henry", "Alice"),
    ("Bob", "Grace"),
];

impl GraphClient {
    /// Create a user node and return it as stored.
    ///
    /// `age` is written only when present, so an unset age is an absent
    /// property rather than a null or zero.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        age: Option<i64>,
    ) -> Result<UserRecord, GraphError> {
        let q = match age {
            Some(age) => query(
                "CREATE (u:User {name: $name, email: $email, age: $age, created_at: $now})
                 RETURN u",
            )
            .param("age", age),
            None => query(
                "CREATE (u:User {name: $name, email: $email, created_at: $now})
                 RETURN u",
            ),
        }
        .param("name", name.to_string())
        .param("email", email.to_string())
        .param("now", Utc::now().to_rfc3339());

        match self.query_one(q).await? {
            Some(row) => {
                let node: neo4rs::Node = row.get("u").map_err(|e| {
                    GraphError::Serialization(format!("Failed to deserialize user: {e}"))
                })?;
                Ok(node_to_user(&node))
            }
            None => Err(GraphError::CreateFailed {
                name: name.to_string(),
            }),
        }
    }

    /// Create the FRIENDS pair between two existing users.
    ///
    /// Both directed edges are created in one statement. Zero rows means
    /// the MATCH found nothing, i.e. at least one user does not exist.
    pub async fn create_friendship(
        &self,
        user1: &str,
        user2: &str,
    ) -> Result<FriendshipSummary, GraphError> {
        let q = query(
            "MATCH (u1:User {name: $user1}), (u2:User {name: $user2})
             CREATE (u1)-[:FRIENDS {created_at: $now}]->(u2)
             CREATE (u2)-[:FRIENDS {created_at: $now}]->(u1)
             RETURN u1, u2",
        )
        .param("user1", user1.to_string())
        .param("user2", user2.to_string())
        .param("now", Utc::now().to_rfc3339());

        match self.query_one(q).await? {
            Some(row) => {
                let n1: neo4rs::Node = row.get("u1").map_err(|e| {
                    GraphError::Serialization(format!("Failed to deserialize user: {e}"))
                })?;
                let n2: neo4rs::Node = row.get("u2").map_err(|e| {
                    GraphError::Serialization(format!("Failed to deserialize user: {e}"))
                })?;
                Ok(FriendshipSummary {
                    user1: node_to_user(&n1),
                    user2: node_to_user(&n2),
                    relationship: "FRIENDS".to_string(),
                })
            }
            None => Err(GraphError::UsersNotFound {
                user1: user1.to_string(),
                user2: user2.to_string(),
            }),
        }
    }

    /// Delete both directed FRIENDS edges between two users.
    pub async fn delete_friendship(&self, user1: &str, user2: &str) -> Result<(), GraphError> {
        let q = query(
            "MATCH (u1:User {name: $user1})-[r1:FRIENDS]->(u2:User {name: $user2})
             MATCH (u2)-[r2:FRIENDS]->(u1)
             DELETE r1, r2
             RETURN u1.name AS user1, u2.name AS user2",
        )
        .param("user1", user1.to_string())
        .param("user2", user2.to_string());

        match self.query_one(q).await? {
            Some(_) => Ok(()),
            None => Err(GraphError::FriendshipNotFound {
                user1: user1.to_string(),
                user2: user2.to_string(),
            }),
        }
    }

    /// Remove every node and relationship in the database.
    pub async fn clear(&self) -> Result<(), GraphError> {
        self.run(query("MATCH (n) DETACH DELETE n")).await
    }

    /// Clear the database, then install the fixed sample social graph.
    ///
    /// Sub-operations run sequentially with no rollback on partial failure.
    pub async fn seed_sample_data(&self) -> Result<SeedSummary, GraphError> {
        self.clear().await?;

        for name in SAMPLE_USERS {
            let email = format!("{}@example.com", name.to_lowercase());
            let age = rand::thread_rng().gen_range(20..=40);
            self.create_user(name, &email, Some(age)).await?;
        }

        for (user1, user2) in SAMPLE_FRIENDSHIPS {
            self.create_friendship(user1, user2).await?;
        }

        tracing::info!(
            users = SAMPLE_USERS.len(),
            friendships = SAMPLE_FRIENDSHIPS.len(),
            "Sample data seeded"
        );

        Ok(SeedSummary {
            message: "Sample data created successfully".to_string(),
            users_created: SAMPLE_USERS.len(),
            friendships_created: SAMPLE_FRIENDSHIPS.len(),
        })
    }
}
