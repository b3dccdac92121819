// src/error.rs
// =============================================================================
// Error types for the documentation pipeline.
//
// Failures tied to one catalog entry carry the identifier, so the final
// summary can say exactly which units were skipped. Everything else
// (writing outputs, building the HTTP client) goes through anyhow in main.
// =============================================================================

use crate::catalog::Identifier;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    /// A catalog entry that is not of the form `group/member`
    #[error("invalid identifier '{0}': expected 'group/member'")]
    InvalidIdentifier(String),

    /// The source text for a unit could not be retrieved
    #[error("failed to fetch {identifier}: {reason}")]
    FetchFailed {
        identifier: Identifier,
        reason: String,
    },

    /// The source text was retrieved but holds no `/** ... */` comment
    #[error("no documentation comment found in {identifier}")]
    NoCommentFound { identifier: Identifier },
}

/// Returned by the extractor, which does not know which unit it is parsing.
/// The pipeline turns it into `DocError::NoCommentFound`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no documentation comment found")]
pub struct NoCommentFound;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_identifier() {
        let identifier = Identifier::parse("string/pad").unwrap();

        let err = DocError::FetchFailed {
            identifier: identifier.clone(),
            reason: "HTTP 404 Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "failed to fetch string/pad: HTTP 404 Not Found");

        let err = DocError::NoCommentFound { identifier };
        assert_eq!(err.to_string(), "no documentation comment found in string/pad");
    }
}
