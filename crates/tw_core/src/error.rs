use std::fmt;

/// Errors returned by guarded league operations.
///
/// Every variant is a refusal, not a failure: the operation leaves league
/// state untouched and the message explains why it was declined.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    InsufficientFunds { needed: i64, available: i64 },
    RosterFull { cap: usize },
    TrainingCapReached(String),
    TradeRejected(String),
    WrongPhase(String),
    NotFound(String),
    InvalidParameter(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoreError::InsufficientFunds { needed, available } => {
                write!(f, "Insufficient funds: needed {}, available {}", needed, available)
            }
            CoreError::RosterFull { cap } => {
                write!(f, "Roster is at the limit of {} players", cap)
            }
            CoreError::TrainingCapReached(msg) => write!(f, "Training refused: {}", msg),
            CoreError::TradeRejected(msg) => write!(f, "Trade rejected: {}", msg),
            CoreError::WrongPhase(msg) => write!(f, "Not allowed in this phase: {}", msg),
            CoreError::NotFound(msg) => write!(f, "Not found: {}", msg),
            CoreError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

pub type Result<T> = std::result::Result<T, CoreError>;
