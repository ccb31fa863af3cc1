/// A single step of a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Hadamard gate on a qubit.
    H(usize),
    /// Measure a qubit and store the bit in a readout slot.
    Measure {
        /// Qubit to measure.
        qubit: usize,
        /// Readout slot receiving the bit.
        slot: usize,
    },
}

impl Instruction {
    /// Qubit touched by this instruction.
    pub fn qubit(&self) -> usize {
        match self {
            Instruction::H(qubit) => *qubit,
            Instruction::Measure { qubit, .. } => *qubit,
        }
    }
}

/// A program: instructions, a classical readout register, and how many times to run it.
///
/// Builder methods return `&mut Self` so they can be chained.
/// ```
/// use roulette_qvm::program::{Instruction, Program};
///
/// let mut program = Program::new();
/// program.declare_readout(1).h(0).measure(0, 0).wrap_in_shots_loop(3);
///
/// assert_eq!(program.instructions()[0], Instruction::H(0));
/// assert_eq!(program.num_qubits(), 1);
/// assert_eq!(program.shots(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    readout_size: usize,
    shots: usize,
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Program {
    /// An empty program which runs a single shot.
    pub fn new() -> Self {
        Self {
            instructions: vec![],
            readout_size: 0,
            shots: 1,
        }
    }

    /// `n` qubits each put through a hadamard and measured, qubit `i` into slot `i`.
    /// Every readout is then `n` independent fair bits.
    ///
    /// ```
    /// use roulette_qvm::program::Program;
    ///
    /// let program = Program::uniform_bits(6);
    /// assert_eq!(program.num_qubits(), 6);
    /// assert_eq!(program.readout_size(), 6);
    /// assert_eq!(program.instructions().len(), 12);
    /// ```
    pub fn uniform_bits(n: usize) -> Self {
        let mut program = Self::new();
        program.declare_readout(n);
        (0..n).for_each(|i| {
            program.h(i);
        });
        (0..n).for_each(|i| {
            program.measure(i, i);
        });
        program
    }

    /// Declare a readout register of `size` bits.
    pub fn declare_readout(&mut self, size: usize) -> &mut Self {
        self.readout_size = size;
        self
    }

    /// Append a hadamard on `qubit`.
    pub fn h(&mut self, qubit: usize) -> &mut Self {
        self.instructions.push(Instruction::H(qubit));
        self
    }

    /// Append a measurement of `qubit` into readout `slot`.
    pub fn measure(&mut self, qubit: usize, slot: usize) -> &mut Self {
        self.instructions.push(Instruction::Measure { qubit, slot });
        self
    }

    /// Run the program `shots` times per execution.
    pub fn wrap_in_shots_loop(&mut self, shots: usize) -> &mut Self {
        self.shots = shots;
        self
    }

    /// The instructions in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Size of the readout register.
    pub fn readout_size(&self) -> usize {
        self.readout_size
    }

    /// Shots per execution.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Number of qubits the program needs: one past the highest addressed qubit.
    pub fn num_qubits(&self) -> usize {
        self.instructions
            .iter()
            .map(|inst| inst.qubit() + 1)
            .max()
            .unwrap_or(0)
    }
}
