use roulette_qvm::errors::QvmError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// An error which aborts a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouletteError {
    /// The random bit source could not deliver the requested bits.
    BitSource(String),
    /// The quantum virtual machine behind a bit source rejected a program.
    Qvm(QvmError),
    /// A number was requested with a bit width outside `1..=32`.
    InvalidBitWidth(usize),
    /// A uniform choice was requested from an empty set.
    EmptyChoice,
    /// A biased spin was requested without any bets to spy on.
    NoCandidates,
    /// Every configured round has already been played.
    GameFinished {
        /// Rounds the game was configured with.
        rounds: usize,
    },
}

impl RouletteError {
    /// Construct a bit source error.
    pub fn bit_source<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::BitSource(msg.into())
    }
}

/// A result which may contain a roulette error.
pub type RouletteResult<T> = Result<T, RouletteError>;

impl From<QvmError> for RouletteError {
    fn from(err: QvmError) -> Self {
        Self::Qvm(err)
    }
}

impl Error for RouletteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Qvm(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for RouletteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BitSource(msg) => write!(f, "Random bit source failed: {}", msg),
            Self::Qvm(err) => write!(f, "Quantum virtual machine failed: {}", err),
            Self::InvalidBitWidth(width) => {
                write!(f, "Cannot draw a number {} bits wide (expected 1 to 32)", width)
            }
            Self::EmptyChoice => write!(f, "Cannot choose uniformly from an empty set"),
            Self::NoCandidates => write!(f, "A biased spin needs at least one bet to spy on"),
            Self::GameFinished { rounds } => {
                write!(f, "All {} rounds of the game have been played", rounds)
            }
        }
    }
}
