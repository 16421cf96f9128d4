use thiserror::Error as ThisError;

use crate::frame::Frame;

/// Reasons a reply frame could not be mapped onto the requested type.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum DecodeError {
    #[error("array index out of range; needed {needed} elements, got {len}")]
    ArrayOutOfBounds { needed: usize, len: usize },

    #[error("expected key '{expected}', found '{actual}' instead")]
    KeyMismatch { expected: String, actual: String },

    #[error("failed to decode {actual} to {expected}")]
    TypeMismatch {
        expected: &'static str,
        actual: Frame,
    },

    /// A failure while decoding a structured type. `source` is the error raised by the inner
    /// decoder; `index` is set when the failing element of a sequence is known.
    #[error(
        "failed to decode {actual} to {expected}{}: {source}",
        .index.map(|i| format!(" (element {})", i)).unwrap_or_default()
    )]
    Composite {
        expected: &'static str,
        actual: Frame,
        index: Option<usize>,
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub fn type_mismatch<T>(actual: &Frame) -> Self {
        DecodeError::TypeMismatch {
            expected: std::any::type_name::<T>(),
            actual: actual.clone(),
        }
    }

    pub fn composite<T>(actual: &Frame, source: DecodeError) -> Self {
        DecodeError::Composite {
            expected: std::any::type_name::<T>(),
            actual: actual.clone(),
            index: None,
            source: Box::new(source),
        }
    }

    pub fn element<T>(actual: &Frame, index: usize, source: DecodeError) -> Self {
        DecodeError::Composite {
            expected: std::any::type_name::<T>(),
            actual: actual.clone(),
            index: Some(index),
            source: Box::new(source),
        }
    }

    /// The innermost error, following `Composite` wrappers.
    pub fn root_cause(&self) -> &DecodeError {
        let mut err = self;
        while let DecodeError::Composite { source, .. } = err {
            err = source;
        }
        err
    }
}
