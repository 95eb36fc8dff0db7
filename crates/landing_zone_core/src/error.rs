use thiserror::Error;

/// Errors that abort the whole function run.
///
/// None of these are business outcomes; a rejected environment/tier pair is a
/// [`ValidationFailure`](crate::ValidationFailure), not a `FatalError`.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("cannot get Function input from RunFunctionRequest: {0}")]
    InvalidInput(String),

    #[error("cannot get observed composite resource: {0}")]
    MissingObservedComposite(String),

    #[error("unknown UX {0:?}")]
    UnknownUx(String),

    #[error("cannot generate desired composed resources: {0}")]
    Generate(#[from] GenerateError),

    #[error("cannot set desired composed resources: {0}")]
    SetDesired(String),
}

/// Failure of the resource template step.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cannot convert NopResource to unstructured: {0}")]
    Convert(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ux_quotes_value() {
        assert_eq!(FatalError::UnknownUx("retro".into()).to_string(), "unknown UX \"retro\"");
        assert_eq!(FatalError::UnknownUx(String::new()).to_string(), "unknown UX \"\"");
    }

    #[test]
    fn generate_error_is_wrapped() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FatalError = GenerateError::from(cause).into();
        assert!(err.to_string().starts_with(
            "cannot generate desired composed resources: cannot convert NopResource to unstructured"
        ));
    }
}
