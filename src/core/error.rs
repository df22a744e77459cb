//! Recoverable errors for user-supplied input.
//!
//! Broken invariants inside a match (updating statistics outside a match,
//! asking for a rate before any round) are programming errors and panic.
//! Only values that come from outside the crate, such as player names on a
//! command line or a config file, produce an `ArenaError`.

/// Errors raised while parsing or validating external input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Strategy name not recognised.
    UnknownStrategy(String),
    /// Raw strategy discriminant outside the defined set.
    StrategyOutOfRange(u8),
    /// Player descriptor is neither `S` nor `W/L/T`.
    MalformedPlayer(String),
    /// Configuration rejected by `ArenaConfig::validate`.
    InvalidConfig(String),
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArenaError::UnknownStrategy(name) => write!(f, "unknown strategy '{}'", name),
            ArenaError::StrategyOutOfRange(raw) => write!(f, "strategy discriminant {} out of range", raw),
            ArenaError::MalformedPlayer(text) => {
                write!(f, "malformed player '{}', expected 'Strategy' or 'Win/Lose/Tie'", text)
            }
            ArenaError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ArenaError {}
