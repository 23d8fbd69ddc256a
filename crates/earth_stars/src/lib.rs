pub mod field;

pub use field::{StarFieldParams, StarPoint, generate};
