use thiserror::Error;

use nexus_gateway::GatewayError;
use nexus_graph::GraphError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error aggregation")]
    Aggregate(Vec<AppError>),
    #[error("Gateway call failed")]
    Gateway(#[from] GatewayError),
    #[error("Graph data is invalid")]
    Graph(#[from] GraphError),
    #[error("Terminal operation failed")]
    Io(#[from] std::io::Error),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
}
