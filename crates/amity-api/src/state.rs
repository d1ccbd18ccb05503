use amity_graph::GraphClient;

/// Shared application state: one pooled graph client for the process
/// lifetime, cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub graph: GraphClient,
}

impl AppState {
    pub fn new(graph: GraphClient) -> Self {
        Self { graph }
    }
}
