#[cfg(feature = "parallel")]
pub(crate) use rayon::prelude::*;

use crate::iter_mut;
use crate::utils::{flip_bit, get_bit};
use crate::{Complex, Precision};
use num_traits::{One, Zero};

/// A 2x2 single qubit matrix in row major order.
pub type SingleQubitMatrix<P> = [Complex<P>; 4];

/// Make a vector of complex numbers whose reals are given by `data`
///
/// # Example
/// ```
/// use roulette_qvm::state_ops::matrix_ops::from_reals;
/// use roulette_qvm::Complex;
///
/// let state = from_reals(&[1.0, 0.0]);
/// assert_eq!(state, vec![Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)]);
/// ```
pub fn from_reals<P: Precision>(data: &[P]) -> Vec<Complex<P>> {
    data.iter()
        .map(|x| Complex::<P> {
            re: *x,
            im: P::zero(),
        })
        .collect()
}

/// The state `|0...0>` over `n` qubits.
///
/// Allocates `2^n` amplitudes; callers keep `n` within [`MAX_QUBITS`](crate::machine::MAX_QUBITS).
pub fn zero_state<P: Precision>(n: usize) -> Vec<Complex<P>> {
    let mut state = vec![Complex::<P>::zero(); 1 << n];
    state[0] = Complex::one();
    state
}

/// The hadamard matrix.
pub fn hadamard_matrix<P: Precision>() -> SingleQubitMatrix<P> {
    let mult = P::one() / (P::one() + P::one()).sqrt();
    let re = |x: P| Complex::<P> { re: x, im: P::zero() };
    [re(mult), re(mult), re(mult), re(-mult)]
}

/// Apply `mat` to qubit `index` of `input` and write the result to `output`.
///
/// Qubit `index` is bit `index` of the row number, so the `|0>` and `|1>` partners of a row
/// differ only in that bit.
///
/// # Example
/// ```
/// use roulette_qvm::state_ops::matrix_ops::*;
///
/// let input = zero_state::<f64>(1);
/// let mut output = input.clone();
/// apply_single_qubit_op(0, &hadamard_matrix(), &input, &mut output);
/// assert!((output[0].re - output[1].re).abs() < 1e-12);
/// ```
pub fn apply_single_qubit_op<P: Precision>(
    index: usize,
    mat: &SingleQubitMatrix<P>,
    input: &[Complex<P>],
    output: &mut [Complex<P>],
) {
    let f = |(row, out): (usize, &mut Complex<P>)| {
        let partner = flip_bit(row, index);
        let (zero_row, one_row, mat_row) = if get_bit(row, index) {
            (partner, row, 2)
        } else {
            (row, partner, 0)
        };
        *out = mat[mat_row] * input[zero_row] + mat[mat_row + 1] * input[one_row];
    };
    iter_mut!(output).enumerate().for_each(f);
}
