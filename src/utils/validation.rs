use crate::utils::error::{BoxError, Result};

/// Opt-in sanity check for shape dimensions. `ShapeBox` never calls this;
/// callers that want to reject bad input do so before adding.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_dimension(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BoxError::InvalidDimension {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("radius", 0.0).is_ok());
        assert!(validate_dimension("radius", 2.5).is_ok());
        assert!(validate_dimension("radius", -1.0).is_err());
        assert!(validate_dimension("radius", f64::NAN).is_err());
        assert!(validate_dimension("radius", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_dimension_reports_field() {
        match validate_dimension("width", -3.0) {
            Err(BoxError::InvalidDimension { field, value }) => {
                assert_eq!(field, "width");
                assert_eq!(value, -3.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
