//! Response DTOs.

use serde::{Deserialize, Serialize};

use villastay_entity::villa::Villa;
use villastay_entity::villa_number::VillaNumber;

/// Villa read model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VillaDto {
    /// Villa identity.
    pub id: i32,
    /// Villa name.
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

impl From<Villa> for VillaDto {
    fn from(villa: Villa) -> Self {
        Self {
            id: villa.id,
            name: villa.name,
            details: villa.details,
            rate: villa.rate,
            sqft: villa.sqft,
            occupancy: villa.occupancy,
            image_url: villa.image_url,
            amenity: villa.amenity,
        }
    }
}

/// Villa number read model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VillaNumberDto {
    /// The unit number.
    pub villa_no: i32,
    /// Free-text detail.
    pub special_details: String,
    /// The villa this unit belongs to.
    pub villa_id: i32,
}

impl From<VillaNumber> for VillaNumberDto {
    fn from(number: VillaNumber) -> Self {
        Self {
            villa_no: number.villa_no,
            special_details: number.special_details,
            villa_id: number.villa_id,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database status.
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_villa_dto_conversion_drops_timestamps() {
        let villa = Villa {
            id: 1,
            name: "Pool View".to_string(),
            details: "A villa by the pool".to_string(),
            rate: 200.0,
            sqft: 100,
            occupancy: 4,
            image_url: String::new(),
            amenity: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let dto = VillaDto::from(villa);
        assert_eq!(dto.id, 1);
        assert_eq!(dto.name, "Pool View");

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("created_at").is_none());
        assert!(json.get("updated_at").is_none());
    }
}
