use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raised by the checked `try_*` helpers when an input breaks the contract
/// of the corresponding fast helper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreconditionError {
    /// Both slices of a dot product must have the same length
    LengthMismatch { lhs: usize, rhs: usize },
    /// A row dot product writes one component per row, so at most 3 rows
    TooManyRows { len: usize },
    /// The integer log2 is only defined for positive values
    NonPositiveLog2 { value: i64 },
    /// Grid cells need a finite, strictly positive size
    InvalidCellSize { cell_size: f32 },
}

impl Error for PreconditionError {}

impl Display for PreconditionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PreconditionError::LengthMismatch { lhs, rhs } => {
                write!(f, "slice length mismatch: {lhs} != {rhs}")
            }
            PreconditionError::TooManyRows { len } => {
                write!(f, "too many rows for a 3 component result: {len}")
            }
            PreconditionError::NonPositiveLog2 { value } => {
                write!(f, "log2 of non-positive value: {value}")
            }
            PreconditionError::InvalidCellSize { cell_size } => {
                write!(f, "invalid cell size: {cell_size}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(
            PreconditionError::LengthMismatch { lhs: 3, rhs: 2 }.to_string(),
            "slice length mismatch: 3 != 2"
        );
        assert_eq!(
            PreconditionError::TooManyRows { len: 4 }.to_string(),
            "too many rows for a 3 component result: 4"
        );
        assert_eq!(
            PreconditionError::NonPositiveLog2 { value: -8 }.to_string(),
            "log2 of non-positive value: -8"
        );
        assert_eq!(
            PreconditionError::InvalidCellSize { cell_size: 0.0 }.to_string(),
            "invalid cell size: 0"
        );
    }
}
