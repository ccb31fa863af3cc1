use crate::errors::{RouletteError, RouletteResult};
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roulette_qvm::machine::{QuantumVm, DEFAULT_CAPACITY};
use roulette_qvm::program::Program;
use smallvec::SmallVec;
use std::cmp::min;
use std::collections::VecDeque;

/// Bits as returned by a source, first drawn bit first.
pub type Bits = SmallVec<[bool; 8]>;

/// A provider of independent, uniformly distributed random bits.
///
/// Every actor at the table owns its own source; nothing is shared between them.
pub trait RandomBitSource {
    /// Draw `n` bits. Blocks until they are available.
    fn draw_bits(&mut self, n: usize) -> RouletteResult<Bits>;
}

impl<S: RandomBitSource + ?Sized> RandomBitSource for &mut S {
    fn draw_bits(&mut self, n: usize) -> RouletteResult<Bits> {
        (**self).draw_bits(n)
    }
}

impl<S: RandomBitSource + ?Sized> RandomBitSource for Box<S> {
    fn draw_bits(&mut self, n: usize) -> RouletteResult<Bits> {
        (**self).draw_bits(n)
    }
}

/// Bits measured from qubits prepared in equal superposition on a quantum virtual machine.
///
/// Each request runs `H` on every qubit followed by a measurement into a readout register.
/// Requests wider than the machine are split over several programs.
#[derive(Debug)]
pub struct QuantumBitSource<R: Rng = StdRng> {
    vm: QuantumVm<R, f64>,
}

impl Default for QuantumBitSource {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantumBitSource {
    /// A source backed by its own default machine.
    pub fn new() -> Self {
        Self::with_vm(QuantumVm::default())
    }
}

impl<R: Rng> QuantumBitSource<R> {
    /// A source backed by `vm`.
    pub fn with_vm(vm: QuantumVm<R, f64>) -> Self {
        Self { vm }
    }

    /// A source backed by a default sized machine sampling measurements from `rng`.
    pub fn from_rng(rng: R) -> Self {
        Self::with_vm(QuantumVm::with_rng(DEFAULT_CAPACITY, rng))
    }
}

impl<R: Rng> RandomBitSource for QuantumBitSource<R> {
    fn draw_bits(&mut self, n: usize) -> RouletteResult<Bits> {
        let mut bits = Bits::with_capacity(n);
        while bits.len() < n {
            // A machine without qubits still gets a one qubit program so it reports the error.
            let width = min(n - bits.len(), self.vm.capacity()).max(1);
            let program = Program::uniform_bits(width);
            let readouts = self.vm.run(&program)?;
            readouts
                .into_iter()
                .for_each(|readout| bits.extend(readout.into_bits()));
        }
        trace!("Measured {} qubits: {:?}", n, bits);
        Ok(bits)
    }
}

/// Bits from a classical pseudo random generator.
#[derive(Debug)]
pub struct RngBitSource<R: Rng = StdRng> {
    rng: R,
}

impl RngBitSource {
    /// A source with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngBitSource<R> {
    /// A source drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomBitSource for RngBitSource<R> {
    fn draw_bits(&mut self, n: usize) -> RouletteResult<Bits> {
        Ok((0..n).map(|_| self.rng.gen::<bool>()).collect())
    }
}

/// Replays a fixed sequence of bits, then fails once it runs dry.
///
/// ```
/// use qroulette::bit_source::{RandomBitSource, ScriptedBitSource};
///
/// // 37 then 0, each six bits wide.
/// let mut source = ScriptedBitSource::new().with_number(37, 6).with_number(0, 6);
/// let bits = source.draw_bits(6).unwrap();
/// assert_eq!(bits.as_slice(), &[true, false, true, false, false, true]);
/// assert_eq!(source.remaining(), 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedBitSource {
    bits: VecDeque<bool>,
}

impl ScriptedBitSource {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bits given as `0`/`1`, any nonzero value is a one.
    pub fn with_bits(mut self, bits: &[u8]) -> Self {
        self.bits.extend(bits.iter().map(|b| *b != 0));
        self
    }

    /// Append the `width` little-endian bits of `value`.
    pub fn with_number(mut self, value: u32, width: usize) -> Self {
        self.bits
            .extend((0..width).map(|i| i < 32 && (value >> i) & 1 == 1));
        self
    }

    /// Bits not yet drawn.
    pub fn remaining(&self) -> usize {
        self.bits.len()
    }
}

impl RandomBitSource for ScriptedBitSource {
    fn draw_bits(&mut self, n: usize) -> RouletteResult<Bits> {
        if n > self.bits.len() {
            return Err(RouletteError::bit_source(format!(
                "script exhausted: {} bits requested, {} left",
                n,
                self.bits.len()
            )));
        }
        Ok(self.bits.drain(..n).collect())
    }
}

#[cfg(test)]
mod bit_source_tests {
    use super::*;

    #[test]
    fn test_scripted_replays_in_order() -> RouletteResult<()> {
        let mut source = ScriptedBitSource::new().with_bits(&[1, 0, 1]);
        assert_eq!(source.draw_bits(2)?.as_slice(), &[true, false]);
        assert_eq!(source.draw_bits(1)?.as_slice(), &[true]);
        assert_eq!(source.remaining(), 0);
        Ok(())
    }

    #[test]
    fn test_scripted_exhaustion_is_an_error() {
        let mut source = ScriptedBitSource::new().with_bits(&[1]);
        let err = source.draw_bits(2).unwrap_err();
        assert!(matches!(err, RouletteError::BitSource(_)));
        // A failed draw consumes nothing.
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_quantum_source_on_oversized_machine() -> RouletteResult<()> {
        let vm = QuantumVm::with_rng(64, StdRng::seed_from_u64(19));
        let mut source = QuantumBitSource::with_vm(vm);
        assert_eq!(source.draw_bits(64)?.len(), 64);
        Ok(())
    }

    #[test]
    fn test_quantum_source_splits_wide_requests() -> RouletteResult<()> {
        let vm = QuantumVm::with_rng(4, StdRng::seed_from_u64(17));
        let mut source = QuantumBitSource::with_vm(vm);
        assert_eq!(source.draw_bits(11)?.len(), 11);
        assert_eq!(source.draw_bits(0)?.len(), 0);
        Ok(())
    }

    #[test]
    fn test_quantum_source_without_qubits_fails() {
        let vm = QuantumVm::with_rng(0, StdRng::seed_from_u64(17));
        let mut source = QuantumBitSource::with_vm(vm);
        let err = source.draw_bits(1).unwrap_err();
        assert!(matches!(err, RouletteError::Qvm(_)));
    }

    #[test]
    fn test_boxed_source_forwards() -> RouletteResult<()> {
        let mut source: Box<dyn RandomBitSource> =
            Box::new(ScriptedBitSource::new().with_bits(&[0, 1]));
        assert_eq!(source.draw_bits(2)?.as_slice(), &[false, true]);
        Ok(())
    }

    #[test]
    fn test_rng_source_is_reproducible() -> RouletteResult<()> {
        let a = RngBitSource::seeded(5).draw_bits(32)?;
        let b = RngBitSource::seeded(5).draw_bits(32)?;
        assert_eq!(a, b);
        Ok(())
    }
}
