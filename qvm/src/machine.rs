use crate::errors::{QvmError, QvmResult};
use crate::program::{Instruction, Program};
use crate::state_ops::matrix_ops::{apply_single_qubit_op, hadamard_matrix, zero_state};
use crate::state_ops::measurement_ops::measure;
use crate::utils::bits_to_usize;
use crate::Precision;
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::marker::PhantomData;
use std::mem::swap;

/// Qubits available on a default machine, as on a 9 qubit square lattice.
pub const DEFAULT_CAPACITY: usize = 9;

/// Most qubits any machine will simulate. A dense state over `n` qubits holds `2^n` amplitudes.
pub const MAX_QUBITS: usize = 16;

/// The readout register after one shot. Slot `i` holds the bit measured into `ro[i]`;
/// slots never written stay `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    bits: Vec<bool>,
}

impl Readout {
    /// Bits of the register, slot 0 first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Consume the readout and return its bits.
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// The register read as a little-endian number, `None` when it is wider than a `usize`.
    pub fn value(&self) -> Option<usize> {
        bits_to_usize(&self.bits)
    }
}

/// A state vector simulator with a fixed number of qubits and its own source of measurement
/// randomness.
#[derive(Debug)]
pub struct QuantumVm<R: Rng = StdRng, P: Precision = f64> {
    capacity: usize,
    rng: R,
    phantom: PhantomData<P>,
}

impl Default for QuantumVm {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<P: Precision> QuantumVm<StdRng, P> {
    /// A machine with `capacity` qubits seeded from system entropy.
    pub fn new(capacity: usize) -> Self {
        Self::with_rng(capacity, StdRng::from_entropy())
    }
}

impl<R: Rng, P: Precision> QuantumVm<R, P> {
    /// A machine with `capacity` qubits which samples measurements from `rng`.
    /// Capacities above [`MAX_QUBITS`] are cut down to it.
    pub fn with_rng(capacity: usize, rng: R) -> Self {
        Self {
            capacity: capacity.min(MAX_QUBITS),
            rng,
            phantom: PhantomData,
        }
    }

    /// Number of qubits on this machine.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Run `program` once per shot, starting each shot from `|0...0>`.
    pub fn run(&mut self, program: &Program) -> QvmResult<Vec<Readout>> {
        self.validate(program)?;
        trace!(
            "Running {} instructions on {} qubits for {} shots",
            program.instructions().len(),
            program.num_qubits(),
            program.shots()
        );
        Ok((0..program.shots())
            .map(|_| self.run_shot(program))
            .collect())
    }

    fn validate(&self, program: &Program) -> QvmResult<()> {
        if program.shots() == 0 {
            return Err(QvmError::new("Program must run at least one shot"));
        }
        program
            .instructions()
            .iter()
            .try_for_each(|inst| -> QvmResult<()> {
                if inst.qubit() >= self.capacity {
                    return Err(QvmError::QubitOutOfRange {
                        qubit: inst.qubit(),
                        capacity: self.capacity,
                    });
                }
                match inst {
                    Instruction::Measure { slot, .. } if *slot >= program.readout_size() => {
                        Err(QvmError::ReadoutOutOfRange {
                            slot: *slot,
                            declared: program.readout_size(),
                        })
                    }
                    _ => Ok(()),
                }
            })
    }

    fn run_shot(&mut self, program: &Program) -> Readout {
        // Qubits beyond those the program touches stay in |0> and can be left out.
        let mut state = zero_state::<P>(program.num_qubits());
        let mut scratch = state.clone();
        let mut bits = vec![false; program.readout_size()];
        let h = hadamard_matrix::<P>();

        for inst in program.instructions() {
            match *inst {
                Instruction::H(qubit) => {
                    apply_single_qubit_op(qubit, &h, &state, &mut scratch);
                }
                Instruction::Measure { qubit, slot } => {
                    let (m, _) = measure(qubit, &state, &mut scratch, &mut self.rng);
                    bits[slot] = m;
                }
            }
            swap(&mut state, &mut scratch);
        }
        Readout { bits }
    }
}

#[cfg(test)]
mod machine_tests {
    use super::*;

    fn seeded(capacity: usize, seed: u64) -> QuantumVm<StdRng, f64> {
        QuantumVm::with_rng(capacity, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_unprepared_qubits_measure_zero() -> QvmResult<()> {
        let mut program = Program::new();
        program.declare_readout(3).measure(0, 0).measure(1, 1).measure(2, 2);
        let readouts = seeded(DEFAULT_CAPACITY, 1).run(&program)?;
        assert_eq!(readouts, vec![Readout { bits: vec![false; 3] }]);
        Ok(())
    }

    #[test]
    fn test_double_hadamard_measures_zero() -> QvmResult<()> {
        let mut program = Program::new();
        program
            .declare_readout(1)
            .h(0)
            .h(0)
            .measure(0, 0)
            .wrap_in_shots_loop(20);
        let readouts = seeded(DEFAULT_CAPACITY, 2).run(&program)?;
        assert_eq!(readouts.len(), 20);
        assert!(readouts.iter().all(|r| r.value() == Some(0)));
        Ok(())
    }

    #[test]
    fn test_measurement_is_repeatable() -> QvmResult<()> {
        // A second measurement of a collapsed qubit must agree with the first.
        let mut program = Program::new();
        program
            .declare_readout(2)
            .h(0)
            .measure(0, 0)
            .measure(0, 1)
            .wrap_in_shots_loop(50);
        let readouts = seeded(DEFAULT_CAPACITY, 3).run(&program)?;
        assert!(readouts.iter().all(|r| r.bits()[0] == r.bits()[1]));
        Ok(())
    }

    #[test]
    fn test_uniform_bits_cover_range() -> QvmResult<()> {
        let mut program = Program::uniform_bits(3);
        program.wrap_in_shots_loop(400);
        let readouts = seeded(DEFAULT_CAPACITY, 4).run(&program)?;
        let mut seen = [0usize; 8];
        readouts
            .iter()
            .filter_map(Readout::value)
            .for_each(|v| seen[v] += 1);
        assert!(seen.iter().all(|count| *count > 20), "{:?}", seen);
        Ok(())
    }

    #[test]
    fn test_rejects_qubit_beyond_capacity() {
        let program = Program::uniform_bits(4);
        let err = seeded(3, 5).run(&program).unwrap_err();
        assert_eq!(
            err,
            QvmError::QubitOutOfRange {
                qubit: 3,
                capacity: 3
            }
        );
    }

    #[test]
    fn test_capacity_is_capped() {
        let mut vm = seeded(64, 8);
        assert_eq!(vm.capacity(), MAX_QUBITS);

        let program = Program::uniform_bits(MAX_QUBITS + 1);
        let err = vm.run(&program).unwrap_err();
        assert_eq!(
            err,
            QvmError::QubitOutOfRange {
                qubit: MAX_QUBITS,
                capacity: MAX_QUBITS
            }
        );
    }

    #[test]
    fn test_runs_in_single_precision() -> QvmResult<()> {
        let mut vm: QuantumVm<StdRng, f32> =
            QuantumVm::with_rng(DEFAULT_CAPACITY, StdRng::seed_from_u64(9));
        let mut program = Program::uniform_bits(2);
        program.wrap_in_shots_loop(200);
        let readouts = vm.run(&program)?;
        let mut seen = [0usize; 4];
        readouts
            .iter()
            .filter_map(Readout::value)
            .for_each(|v| seen[v] += 1);
        assert!(seen.iter().all(|count| *count > 20), "{:?}", seen);
        Ok(())
    }

    #[test]
    fn test_rejects_undeclared_readout() {
        let mut program = Program::new();
        program.declare_readout(1).h(0).measure(0, 1);
        let err = seeded(DEFAULT_CAPACITY, 6).run(&program).unwrap_err();
        assert_eq!(
            err,
            QvmError::ReadoutOutOfRange {
                slot: 1,
                declared: 1
            }
        );
    }

    #[test]
    fn test_oversized_readout_has_no_value() {
        let readout = Readout {
            bits: vec![false; 65],
        };
        assert_eq!(readout.value(), None);
    }

    #[test]
    fn test_rejects_zero_shots() {
        let mut program = Program::uniform_bits(1);
        program.wrap_in_shots_loop(0);
        assert!(seeded(DEFAULT_CAPACITY, 7).run(&program).is_err());
    }
}
