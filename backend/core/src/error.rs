use thiserror::Error;

/// Errors surfaced by the duolog facade.
///
/// Logging is best-effort by design; the only synchronous rejection in the
/// whole system is a construction-time precondition violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogError {
    #[error("logger source name must not be empty")]
    EmptySource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_message() {
        assert_eq!(
            LogError::EmptySource.to_string(),
            "logger source name must not be empty"
        );
    }
}
