use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The quantity field's text is not a number. This is the input-side form
    /// of `InvalidArgument`, kept apart so the raw text can be echoed back.
    #[error("invalid quantity {input:?}: {reason}")]
    InvalidQuantity { input: String, reason: String },
    #[error("unknown die {0:?}, expected one of d4, d6, d8, d10, d12, d20")]
    UnknownDie(String),
}
