//! Request handlers, one module per entity.

pub mod health;
pub mod villa;
pub mod villa_number;
