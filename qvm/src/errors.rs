use std::error::Error;
use std::fmt::{Display, Formatter};

/// An error from validating or running a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QvmError {
    /// The program addresses a qubit the machine does not have.
    QubitOutOfRange {
        /// Qubit addressed by the program.
        qubit: usize,
        /// Number of qubits available on the machine.
        capacity: usize,
    },
    /// A measurement writes to a readout slot which was never declared.
    ReadoutOutOfRange {
        /// Slot written by the measurement.
        slot: usize,
        /// Size of the declared readout register.
        declared: usize,
    },
    /// A generic error.
    Generic(String),
}

impl QvmError {
    /// Construct a new error.
    pub fn new<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Generic(msg.into())
    }
}

/// A result which may contain a qvm error.
pub type QvmResult<T> = Result<T, QvmError>;

impl Error for QvmError {}

impl Display for QvmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QubitOutOfRange { qubit, capacity } => write!(
                f,
                "Program addresses qubit {} but the machine only has {} qubits",
                qubit, capacity
            ),
            Self::ReadoutOutOfRange { slot, declared } => write!(
                f,
                "Measurement writes readout slot {} but only {} slots were declared",
                slot, declared
            ),
            Self::Generic(msg) => write!(f, "{}", msg),
        }
    }
}
