use crate::domain::ports::Shape;
use crate::utils::error::Result;
use crate::utils::validation::{validate_dimension, Validate};
use std::any::Any;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub height: f64,
    pub width: f64,
}

impl Rectangle {
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }
}

impl Shape for Rectangle {
    fn perimeter(&self) -> f64 {
        (self.height + self.width) * 2.0
    }

    fn area(&self) -> f64 {
        self.height * self.width
    }

    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Validate for Rectangle {
    fn validate(&self) -> Result<()> {
        validate_dimension("height", self.height)?;
        validate_dimension("width", self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn name(&self) -> &'static str {
        "Circle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Validate for Circle {
    fn validate(&self) -> Result<()> {
        validate_dimension("radius", self.radius)
    }
}

/// Equilateral triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub side: f64,
}

impl Triangle {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape for Triangle {
    fn perimeter(&self) -> f64 {
        self.side * 3.0
    }

    fn area(&self) -> f64 {
        self.side * self.side * 3f64.sqrt() / 4.0
    }

    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Validate for Triangle {
    fn validate(&self) -> Result<()> {
        validate_dimension("side", self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rectangle() {
        let rect = Rectangle::new(2.0, 3.0);
        assert_eq!(rect.perimeter(), 10.0);
        assert_eq!(rect.area(), 6.0);
        assert_eq!(rect.name(), "Rectangle");
    }

    #[test]
    fn test_circle() {
        let circle = Circle::new(1.0);
        assert!((circle.perimeter() - 2.0 * PI).abs() < EPS);
        assert!((circle.area() - PI).abs() < EPS);
    }

    #[test]
    fn test_triangle() {
        let triangle = Triangle::new(2.0);
        assert_eq!(triangle.perimeter(), 6.0);
        assert!((triangle.area() - 3f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_downcast_through_trait_object() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(1.0)),
            Box::new(Rectangle::new(1.0, 1.0)),
        ];
        assert!(shapes[0].is::<Circle>());
        assert!(!shapes[1].is::<Circle>());
        assert_eq!(
            shapes[1].downcast_ref::<Rectangle>(),
            Some(&Rectangle::new(1.0, 1.0))
        );
    }

    #[test]
    fn test_validate_rejects_negative() {
        assert!(Rectangle::new(1.0, 2.0).validate().is_ok());
        assert!(Rectangle::new(1.0, -2.0).validate().is_err());
        assert!(Circle::new(-0.5).validate().is_err());
        assert!(Triangle::new(f64::NAN).validate().is_err());
    }
}
