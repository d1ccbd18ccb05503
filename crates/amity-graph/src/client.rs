//! Neo4j connection management and shared graph client.

use neo4rs::{ConfigBuilder, Graph, Query};

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("One or both users not found: {user1}, {user2}")]
    UsersNotFound { user1: String, user2: String },

    #[error("Friendship not found between {user1} and {user2}")]
    FriendshipNotFound { user1: String, user2: String },

    #[error("User creation failed for {name}")]
    CreateFailed { name: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Configuration for connecting to Neo4j.
///
/// Host and port are separate fields because the deployment configures
/// them independently; `bolt_uri` assembles the driver URI.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
}

impl GraphConfig {
    pub fn bolt_uri(&self) -> String {
        format!("bolt://{}:{}", self.host, self.port)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            host: "neo4j".to_string(),
            port: 7687,
            user: "neo4j".to_string(),
            password: "password123".to_string(),
            max_connections: 16,
            fetch_size: 256,
        }
    }
}

/// Thread-safe Neo4j graph client with connection pooling.
///
/// Constructed once at startup and shared across requests.
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(config.bolt_uri())
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.bolt_uri(), "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Execute a write-only query (CREATE, DELETE).
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute a read query and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        Ok(stream.next().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_deployment_defaults() {
        let config = GraphConfig::default();
        assert_eq!(config.host, "neo4j");
        assert_eq!(config.port, 7687);
        assert_eq!(config.user, "neo4j");
        assert_eq!(config.password, "password123");
    }

    #[test]
    fn bolt_uri_assembles_host_and_port() {
        let config = GraphConfig {
            host: "graph.internal".to_string(),
            port: 7688,
            ..GraphConfig::default()
        };
        assert_eq!(config.bolt_uri(), "bolt://graph.internal:7688");
    }
}
