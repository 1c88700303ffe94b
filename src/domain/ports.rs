use std::any::Any;
use std::fmt::Debug;

/// Anything that can report its own perimeter and area.
///
/// Implementations must be pure: the same value always yields the same
/// numbers and computing them never mutates anything.
pub trait Shape: Any + Debug + Send + Sync {
    fn perimeter(&self) -> f64;
    fn area(&self) -> f64;
    fn name(&self) -> &'static str;

    /// Hook for checking the concrete variant behind a `dyn Shape`.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Shape {
    pub fn is<T: Shape>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Shape>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
