use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonLogicError {
    /// The rule has an operator node whose shape cannot be compiled.
    #[error("malformed rule at \"{path}\": {reason}")]
    MalformedRule { path: String, reason: String },

    /// No operator is registered under `name` at evaluation time.
    #[error("unknown operator \"{name}\" at \"{path}\"")]
    UnknownOperator { name: String, path: String },

    /// An operand falls outside every coercion path the operator defines.
    #[error("invalid argument for \"{operator}\": {reason}")]
    InvalidArgument { operator: String, reason: String },

    #[error("{0}")]
    EvaluationError(String),

    #[error("evaluation exceeded the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}

impl JsonLogicError {
    pub fn invalid_argument(operator: &str, reason: impl Into<String>) -> Self {
        JsonLogicError::InvalidArgument {
            operator: operator.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JsonLogicError>;
