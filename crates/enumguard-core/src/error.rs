use thiserror::Error;

/// Errors from guard construction.
///
/// Policy outcomes are never errors: a blocked request is a
/// [`Verdict::Reject`](crate::verdict::Verdict::Reject), and an identity
/// lookup miss is an `Option::None`. The only thing that can fail is
/// building a guard in the first place.
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("invalid guard pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl GuardError {
    pub fn invalid_pattern(pattern: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}
