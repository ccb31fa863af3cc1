#![forbid(unsafe_code)]
#![deny(
    unreachable_pub,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    missing_docs
)]

//! A deliberately small quantum virtual machine.
//!
//! Programs are flat lists of instructions over a handful of qubits: Hadamard gates and
//! measurements into a classical readout register. The machine keeps a dense state vector,
//! applies each gate to it, and samples measurements according to the Born rule. That is all
//! the roulette needs from a quantum computer: `n` qubits in equal superposition, measured,
//! give `n` independent fair bits.
//!
//! Qubit `i` is bit `i` of a state index, so readouts are little-endian.
//!
//! # Example
//! ```
//! use roulette_qvm::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> QvmResult<()> {
//! // Two qubits in superposition, both measured.
//! let mut program = Program::new();
//! program.declare_readout(2).h(0).h(1).measure(0, 0).measure(1, 1);
//!
//! let mut vm = QuantumVm::<StdRng>::with_rng(DEFAULT_CAPACITY, StdRng::seed_from_u64(7));
//! let readouts = vm.run(&program)?;
//! assert_eq!(readouts.len(), 1);
//! assert!(matches!(readouts[0].value(), Some(v) if v < 4));
//! # Ok(())
//! # }
//! ```

/// Error types for rejected programs.
pub mod errors;
/// The virtual machine which runs programs.
pub mod machine;
/// Programs of gates and measurements.
pub mod program;
/// Parallel iterator helpers.
pub mod rayon_helper;
/// Lower-level state vector operations.
pub mod state_ops;
/// Reusable types.
pub mod types;
/// Utility functions for bit and index manipulation
pub mod utils;

pub use num_complex::Complex;
pub use rand;
pub use types::*;

/// Commonly used types and traits.
/// ```
/// use roulette_qvm::prelude::*;
/// ```
pub mod prelude {
    pub use super::*;
    pub use crate::errors::*;
    pub use crate::machine::{QuantumVm, Readout, DEFAULT_CAPACITY, MAX_QUBITS};
    pub use crate::program::{Instruction, Program};
}
