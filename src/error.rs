use thiserror::Error;

pub type ArchitectureResult<T> = Result<T, ArchitectureError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArchitectureError {
    /// `Reducer::dispatch` was called outside a tokio runtime.
    #[error("no tokio runtime is available to run the action")]
    RuntimeUnavailable,
}
