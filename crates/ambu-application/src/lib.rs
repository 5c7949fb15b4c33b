//! Application layer for AMBU.
//!
//! Use cases that coordinate the domain with whatever gateways and storage
//! the binary wires in: the session store, the login flow and the query
//! orchestrator.

pub mod login_flow;
pub mod query_orchestrator;
pub mod session_store;

pub use login_flow::{LoginFailure, LoginFlow};
pub use query_orchestrator::{QueryOrchestrator, QueryPhase, SearchPanel, Submission};
pub use session_store::SessionStore;
