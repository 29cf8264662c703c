use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid input: {field} = {value:?} is not an integer")]
    InvalidInput { field: String, value: String },

    #[error("Invalid argument: {field} must be a non-negative integer, got {value}")]
    InvalidArgument { field: String, value: i64 },

    #[error("No scoring rule assigns a value for x = {x}, y = {y}")]
    UndefinedScore { x: i64, y: i64 },

    #[error("Unknown remote operation: {token:?}")]
    UnknownOperation { token: String },

    #[error("Remote execution failed: {message}")]
    RemoteError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Caller gave us something we could not use.
    Low,
    /// The computation has no defined answer for these inputs.
    Medium,
    /// A collaborator (executor, serializer) failed.
    High,
}

impl CalcError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::InvalidInput { .. }
            | CalcError::InvalidArgument { .. }
            | CalcError::UnknownOperation { .. } => ErrorSeverity::Low,
            CalcError::UndefinedScore { .. } => ErrorSeverity::Medium,
            CalcError::RemoteError { .. } | CalcError::SerializationError(_) => {
                ErrorSeverity::High
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidInput { field, value } => {
                format!("'{}' is not a valid integer for {}", value, field)
            }
            CalcError::InvalidArgument { field, value } => {
                format!("{} must be zero or greater (got {})", field, value)
            }
            CalcError::UndefinedScore { x, y } => {
                format!("No score is defined for x = {}, y = {}", x, y)
            }
            CalcError::UnknownOperation { token } => {
                format!("'{}' is not an allowed remote operation", token)
            }
            CalcError::RemoteError { message } => {
                format!("The remote operation failed: {}", message)
            }
            CalcError::SerializationError(e) => format!("Could not render output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "Pass plain base-10 integers, e.g. --x 12 --y 15",
            CalcError::InvalidArgument { .. } => "Use a non-negative count, e.g. --n 2",
            CalcError::UndefinedScore { .. } => {
                "The rule table leaves this input combination unassigned; try different values"
            }
            CalcError::UnknownOperation { .. } => {
                "Run the 'ops' subcommand to list the allowed operation tokens"
            }
            CalcError::RemoteError { .. } => "Check the executor logs and retry",
            CalcError::SerializationError(_) => "Re-run without --json to see the plain output",
        }
    }
}
