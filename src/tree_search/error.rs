use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search invariant violated: {0}")]
    InvariantViolation(&'static str),
    #[error("no candidates to select from")]
    NoCandidates,
}
