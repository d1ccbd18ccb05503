//! Read operations for the social graph.
//!
//! Friend listing, recommendations, and pathfinding are all expressed as
//! single Cypher queries; ranking and traversal happen inside Neo4j.

use neo4rs::query;

use amity_core::{PathResult, Recommendation, UserRecord};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// Look up a single user by name. Absence is `None`, not an error.
    pub async fn get_user(&self, name: &str) -> Result<Option<UserRecord>, GraphError> {
        let q = query("MATCH (u:User {name: $name}) RETURN u").param("name", name.to_string());

        match self.query_one(q).await? {
            Some(row) => {
                let node: neo4rs::Node = row.get("u").map_err(|e| {
                    GraphError::Serialization(format!("Failed to deserialize user: {e}"))
                })?;
                Ok(Some(node_to_user(&node)))
            }
            None => Ok(None),
        }
    }

    /// List all users, ordered by name ascending.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, GraphError> {
        let q = query("MATCH (u:User) RETURN u ORDER BY u.name");
        let rows = self.query_rows(q).await?;
        rows_to_users(rows, "u")
    }

    /// Direct friends of a user, ordered by name ascending.
    ///
    /// Follows outgoing FRIENDS edges only; the mirror edge guarantees the
    /// result is the same in either direction.
    pub async fn friends_of(&self, name: &str) -> Result<Vec<UserRecord>, GraphError> {
        let q = query(
            "MATCH (u:User {name: $name})-[:FRIENDS]->(friend:User)
             RETURN friend ORDER BY friend.name",
        )
        .param("name", name.to_string());

        let rows = self.query_rows(q).await?;
        rows_to_users(rows, "friend")
    }

    /// Friend-of-friend recommendations ranked by descending mutual-friend
    /// count, ties broken by name ascending.
    ///
    /// Excludes the user themself and anyone already a direct friend.
    pub async fn recommend_friends(
        &self,
        name: &str,
        limit: i64,
    ) -> Result<Vec<Recommendation>, GraphError> {
        let q = query(
            "MATCH (u:User {name: $name})-[:FRIENDS]->(friend)-[:FRIENDS]->(candidate)
             WHERE NOT (u)-[:FRIENDS]->(candidate) AND u <> candidate
             RETURN candidate, count(*) AS mutual_friends
             ORDER BY mutual_friends DESC, candidate.name
             LIMIT $limit",
        )
        .param("name", name.to_string())
        .param("limit", limit);

        let rows = self.query_rows(q).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let node: neo4rs::Node = row.get("candidate").map_err(|e| {
                GraphError::Serialization(format!("Failed to deserialize candidate: {e}"))
            })?;
            let mutual_friends: i64 = row.get("mutual_friends").unwrap_or(0);
            results.push(Recommendation {
                user: node_to_user(&node),
                mutual_friends,
            });
        }
        Ok(results)
    }

    /// One shortest FRIENDS path between two users.
    ///
    /// Returns the ordered node sequence and the edge count, or `None` when
    /// the users are unconnected. Tie-break among equal-length paths is
    /// whatever Neo4j's shortestPath selects.
    pub async fn shortest_path(
        &self,
        user1: &str,
        user2: &str,
    ) -> Result<Option<PathResult>, GraphError> {
        let q = query(
            "MATCH p = shortestPath(
               (u1:User {name: $user1})-[:FRIENDS*]-(u2:User {name: $user2})
             )
             UNWIND nodes(p) AS n
             RETURN n",
        )
        .param("user1", user1.to_string())
        .param("user2", user2.to_string());

        let rows = self.query_rows(q).await?;
        if rows.is_empty() {
            return Ok(None);
        }

        let mut path = Vec::with_capacity(rows.len());
        for row in rows {
            let node: neo4rs::Node = row.get("n").map_err(|e| {
                GraphError::Serialization(format!("Failed to deserialize path node: {e}"))
            })?;
            path.push(node_to_user(&node));
        }

        let length = path.len() - 1;
        Ok(Some(PathResult { path, length }))
    }
}

/// Convert a neo4rs User node into a UserRecord.
pub(crate) fn node_to_user(node: &neo4rs::Node) -> UserRecord {
    UserRecord {
        name: node.get("name").unwrap_or_default(),
        email: node.get("email").unwrap_or_default(),
        age: node.get::<i64>("age").ok(),
        created_at: node.get("created_at").unwrap_or_default(),
    }
}

fn rows_to_users(rows: Vec<neo4rs::Row>, column: &str) -> Result<Vec<UserRecord>, GraphError> {
    let mut users = Vec::with_capacity(rows.len());
    for row in rows {
        let node: neo4rs::Node = row.get(column).map_err(|e| {
            GraphError::Serialization(format!("Failed to deserialize user node: {e}"))
        })?;
        users.push(node_to_user(&node));
    }
    Ok(users)
}
