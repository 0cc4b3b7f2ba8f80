use thiserror::Error;

pub type BehaviorResult<T> = Result<T, BehaviorError>;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior is not bound: `{operation}` requires a prior bind")]
    NotBound { operation: &'static str },

    #[error("column selection is already borrowed by another caller")]
    ColumnsBusy,

    #[error("invalid opacity: {0}")]
    InvalidOpacity(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
