use crate::error::ValidationError;

/// A required cut: an opaque label (frame reference, not necessarily unique) and a length in mm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    label: String,
    length: u64,
}

impl Piece {
    /// Creates a validated piece. Lengths are accepted as signed integers so that
    /// non-positive input coming from a form or file can be rejected explicitly.
    ///
    /// The label is otherwise opaque, but one that is empty or consists only of whitespace
    /// is rejected with [`ValidationError::EmptyLabel`]. It is stored as given, untrimmed.
    pub fn new(label: impl Into<String>, length: i64) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::EmptyLabel);
        }
        if length <= 0 {
            return Err(ValidationError::NonPositiveLength(length));
        }
        Ok(Self {
            label,
            length: length as u64,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Length in millimeters, always > 0
    pub fn length(&self) -> u64 {
        self.length
    }
}
