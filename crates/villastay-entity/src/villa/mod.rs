pub mod model;

pub use model::{NewVilla, Villa};
