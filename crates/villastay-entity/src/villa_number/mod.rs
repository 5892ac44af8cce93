pub mod model;

pub use model::{NewVillaNumber, VillaNumber};
