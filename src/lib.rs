pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::shape_box::ShapeBox;
pub use domain::model::{Circle, Rectangle, Triangle};
pub use domain::ports::Shape;
pub use utils::error::{BoxError, Result};
pub use utils::validation::Validate;
