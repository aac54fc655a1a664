/// Liveness payload returned by `GET /health`.
pub mod health;

/// `GET /api/message` success and failure payloads.
pub mod message;

/// Result of the CPU load simulation.
pub mod load;

/// Simulated multi-hop call topology.
pub mod chain;
