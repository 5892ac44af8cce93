//! # villastay-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the VillaStay entities.

pub mod connection;
pub mod migration;
pub mod repositories;
