//! # villastay-api
//!
//! HTTP API layer for VillaStay built on Axum.
//!
//! Provides the REST endpoints, request/response DTOs, the uniform
//! response envelope, and error-to-status mapping.

pub mod dto;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
