//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use villastay_entity::villa::{NewVilla, Villa};
use villastay_entity::villa_number::{NewVillaNumber, VillaNumber};

/// Create villa request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VillaCreateDto {
    /// Villa name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub details: String,
    /// Nightly rate.
    #[validate(range(min = 0.0, message = "Rate cannot be negative"))]
    #[serde(default)]
    pub rate: f64,
    /// Floor area in square feet.
    #[validate(range(min = 0, message = "Sqft cannot be negative"))]
    #[serde(default)]
    pub sqft: i32,
    /// Maximum number of guests.
    #[validate(range(min = 0, message = "Occupancy cannot be negative"))]
    #[serde(default)]
    pub occupancy: i32,
    /// Reference to a promotional image.
    #[serde(default)]
    pub image_url: String,
    /// Included amenity description.
    #[serde(default)]
    pub amenity: String,
}

impl From<VillaCreateDto> for NewVilla {
    fn from(dto: VillaCreateDto) -> Self {
        Self {
            name: dto.name,
            details: dto.details,
            rate: dto.rate,
            sqft: dto.sqft,
            occupancy: dto.occupancy,
            image_url: dto.image_url,
            amenity: dto.amenity,
        }
    }
}

/// Full-replace villa request body. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VillaUpdateDto {
    /// Villa identity; must match the path id.
    pub id: i32,
    /// Villa name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Free-text description.
    pub details: String,
    /// Nightly rate.
    #[validate(range(min = 0.0, message = "Rate cannot be negative"))]
    pub rate: f64,
    /// Floor area in square feet.
    #[validate(range(min = 0, message = "Sqft cannot be negative"))]
    pub sqft: i32,
    /// Maximum number of guests.
    #[validate(range(min = 0, message = "Occupancy cannot be negative"))]
    pub occupancy: i32,
    /// Reference to a promotional image.
    pub image_url: String,
    /// Included amenity description.
    pub amenity: String,
}

impl From<VillaUpdateDto> for NewVilla {
    fn from(dto: VillaUpdateDto) -> Self {
        Self {
            name: dto.name,
            details: dto.details,
            rate: dto.rate,
            sqft: dto.sqft,
            occupancy: dto.occupancy,
            image_url: dto.image_url,
            amenity: dto.amenity,
        }
    }
}

impl From<&Villa> for VillaUpdateDto {
    fn from(villa: &Villa) -> Self {
        Self {
            id: villa.id,
            name: villa.name.clone(),
            details: villa.details.clone(),
            rate: villa.rate,
            sqft: villa.sqft,
            occupancy: villa.occupancy,
            image_url: villa.image_url.clone(),
            amenity: villa.amenity.clone(),
        }
    }
}

/// Create villa number request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VillaNumberCreateDto {
    /// The externally assigned unit number.
    #[validate(range(min = 1, message = "Villa number must be positive"))]
    pub villa_no: i32,
    /// Free-text detail.
    #[serde(default)]
    pub special_details: String,
    /// The villa this unit belongs to.
    #[validate(range(min = 1, message = "A referenced villa is required"))]
    pub villa_id: i32,
}

impl From<VillaNumberCreateDto> for NewVillaNumber {
    fn from(dto: VillaNumberCreateDto) -> Self {
        Self {
            villa_no: dto.villa_no,
            special_details: dto.special_details,
            villa_id: dto.villa_id,
        }
    }
}

/// Full-replace villa number request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VillaNumberUpdateDto {
    /// Unit identity; must match the path id.
    #[validate(range(min = 1, message = "Villa number must be positive"))]
    pub villa_no: i32,
    /// Free-text detail.
    pub special_details: String,
    /// The villa this unit belongs to.
    #[validate(range(min = 1, message = "A referenced villa is required"))]
    pub villa_id: i32,
}

impl From<VillaNumberUpdateDto> for NewVillaNumber {
    fn from(dto: VillaNumberUpdateDto) -> Self {
        Self {
            villa_no: dto.villa_no,
            special_details: dto.special_details,
            villa_id: dto.villa_id,
        }
    }
}

impl From<&VillaNumber> for VillaNumberUpdateDto {
    fn from(number: &VillaNumber) -> Self {
        Self {
            villa_no: number.villa_no,
            special_details: number.special_details.clone(),
            villa_id: number.villa_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_defaults_optional_fields() {
        let dto: VillaCreateDto =
            serde_json::from_str(r#"{"name": "Pool View", "sqft": 100, "occupancy": 4}"#).unwrap();
        assert!(dto.validate().is_ok());

        let data = NewVilla::from(dto);
        assert_eq!(data.name, "Pool View");
        assert_eq!(data.sqft, 100);
        assert_eq!(data.details, "");
        assert_eq!(data.rate, 0.0);
    }

    #[test]
    fn test_create_dto_rejects_empty_name() {
        let dto: VillaCreateDto = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_dto_requires_all_fields() {
        let result: Result<VillaUpdateDto, _> =
            serde_json::from_str(r#"{"id": 1, "name": "Pool View"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_villa_number_create_rejects_dangling_reference_shape() {
        let dto: VillaNumberCreateDto =
            serde_json::from_str(r#"{"villa_no": 101, "villa_id": 0}"#).unwrap();
        assert!(dto.validate().is_err());
    }
}
