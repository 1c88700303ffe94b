use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxError {
    #[error("Box is full: capacity {capacity} reached")]
    BoxFull { capacity: usize },

    #[error("Index out of range: {index} (len {len}, capacity {capacity})")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        capacity: usize,
    },

    #[error("There are no circles in the box")]
    NoCircles,

    #[error("Invalid dimension: {field} = {value}")]
    InvalidDimension { field: String, value: f64 },
}

impl BoxError {
    /// Every failure leaves the box untouched, so the caller can always carry on.
    pub fn is_recoverable(&self) -> bool {
        true
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BoxError::BoxFull { capacity } => {
                format!("The box already holds {} shapes; remove one first", capacity)
            }
            BoxError::IndexOutOfRange { index, len, .. } => {
                if *len == 0 {
                    format!("No shape at position {}: the box is empty", index)
                } else {
                    format!(
                        "No shape at position {}: valid positions are 0..{}",
                        index,
                        len - 1
                    )
                }
            }
            BoxError::NoCircles => "Nothing to remove: the box holds no circles".to_string(),
            BoxError::InvalidDimension { field, value } => {
                format!("{} must be a finite, non-negative number (got {})", field, value)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BoxError>;
