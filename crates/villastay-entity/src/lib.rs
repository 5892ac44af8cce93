//! # villastay-entity
//!
//! Domain entity models for VillaStay. Every struct in this crate
//! represents a database table row or its insert payload. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod villa;
pub mod villa_number;
