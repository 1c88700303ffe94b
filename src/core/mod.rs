pub mod shape_box;

pub use crate::domain::model::{Circle, Rectangle, Triangle};
pub use crate::domain::ports::Shape;
pub use crate::utils::error::Result;
