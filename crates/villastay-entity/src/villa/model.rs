//! Villa entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A rentable villa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Villa {
    /// Unique villa identifier, assigned by the store on insert.
    pub id: i32,
    /// Villa name, unique case-insensitively.
    pub name: String,
    /// Free-text description.
    pub details: String,
    /// Nightly rate.
    pub rate: f64,
    /// Floor area in square feet.
    pub sqft: i32,
    /// Maximum number of guests.
    pub occupancy: i32,
    /// Reference to a promotional image.
    pub image_url: String,
    /// Included amenity description.
    pub amenity: String,
    /// When the villa was created.
    pub created_at: DateTime<Utc>,
    /// When the villa was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Mutable villa fields, used for insert and full-replace update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVilla {
    /// Villa name, unique case-insensitively.
    pub name: String,
    /// Free-text description.
    pub details: String,
    /// Nightly rate.
    pub rate: f64,
    /// Floor area in square feet.
    pub sqft: i32,
    /// Maximum number of guests.
    pub occupancy: i32,
    /// Reference to a promotional image.
    pub image_url: String,
    /// Included amenity description.
    pub amenity: String,
}
