use crate::core::{Circle, Shape};
use crate::utils::error::{BoxError, Result};

/// Bounded, ordered collection of shapes.
///
/// Storage order is insertion order and `len() <= capacity()` always holds.
/// Every fallible operation either succeeds completely or leaves the box as
/// it was.
#[derive(Debug)]
pub struct ShapeBox {
    shapes: Vec<Box<dyn Shape>>,
    capacity: usize,
}

impl ShapeBox {
    /// A zero capacity is accepted; such a box rejects every `add`.
    pub fn new(capacity: usize) -> Self {
        Self {
            shapes: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.shapes.len() >= self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.shapes.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Shape> + '_ {
        self.shapes.iter().map(|shape| shape.as_ref())
    }

    /// Appends `shape` to the end of the box.
    pub fn add(&mut self, shape: Box<dyn Shape>) -> Result<()> {
        if self.is_full() {
            return Err(BoxError::BoxFull {
                capacity: self.capacity,
            });
        }

        tracing::debug!("Adding {} at position {}", shape.name(), self.shapes.len());
        self.shapes.push(shape);
        Ok(())
    }

    pub fn add_shape<S: Shape>(&mut self, shape: S) -> Result<()> {
        self.add(Box::new(shape))
    }

    pub fn get_by_index(&self, index: usize) -> Result<&dyn Shape> {
        self.check_index(index)?;
        Ok(self.shapes[index].as_ref())
    }

    /// Removes and returns the shape at `index`; later shapes shift left.
    pub fn extract_by_index(&mut self, index: usize) -> Result<Box<dyn Shape>> {
        self.check_index(index)?;
        let shape = self.shapes.remove(index);
        tracing::debug!("Extracted {} from position {}", shape.name(), index);
        Ok(shape)
    }

    /// Puts `shape` at `index` and hands back the one it displaced.
    pub fn replace_by_index(
        &mut self,
        index: usize,
        shape: Box<dyn Shape>,
    ) -> Result<Box<dyn Shape>> {
        self.check_index(index)?;
        let previous = std::mem::replace(&mut self.shapes[index], shape);
        tracing::debug!(
            "Replaced {} at position {} with {}",
            previous.name(),
            index,
            self.shapes[index].name()
        );
        Ok(previous)
    }

    pub fn sum_perimeter(&self) -> f64 {
        self.shapes.iter().map(|shape| shape.perimeter()).sum()
    }

    pub fn sum_area(&self) -> f64 {
        self.shapes.iter().map(|shape| shape.area()).sum()
    }

    pub fn count_circles(&self) -> usize {
        self.shapes.iter().filter(|shape| shape.is::<Circle>()).count()
    }

    /// Drops every `Circle`, keeping the relative order of everything else.
    /// Returns how many were removed.
    pub fn remove_all_circles(&mut self) -> Result<usize> {
        let circles = self.count_circles();
        if circles == 0 {
            return Err(BoxError::NoCircles);
        }

        self.shapes.retain(|shape| !shape.is::<Circle>());
        tracing::debug!(
            "Removed {} circles, {} shapes left",
            circles,
            self.shapes.len()
        );
        Ok(circles)
    }

    // Positions past the current length are rejected even when they are
    // still below capacity.
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.capacity || index >= self.shapes.len() {
            tracing::trace!(
                "Rejected index {} (len {}, capacity {})",
                index,
                self.shapes.len(),
                self.capacity
            );
            return Err(BoxError::IndexOutOfRange {
                index,
                len: self.shapes.len(),
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}
