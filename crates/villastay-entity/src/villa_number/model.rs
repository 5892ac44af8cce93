//! Villa number entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A numbered unit belonging to a villa.
///
/// The number is externally assigned, not store-generated, and serves as
/// the primary key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VillaNumber {
    /// The externally assigned unit number.
    pub villa_no: i32,
    /// Free-text detail, unique case-insensitively.
    pub special_details: String,
    /// The villa this unit belongs to.
    pub villa_id: i32,
    /// When the unit was created.
    pub created_at: DateTime<Utc>,
    /// When the unit was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Insert and full-replace payload for a villa number.
///
/// Unlike [`NewVilla`](crate::villa::NewVilla) this carries the identity,
/// because unit numbers are assigned by the caller rather than the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVillaNumber {
    /// The externally assigned unit number.
    pub villa_no: i32,
    /// Free-text detail, unique case-insensitively.
    pub special_details: String,
    /// The villa this unit belongs to.
    pub villa_id: i32,
}
