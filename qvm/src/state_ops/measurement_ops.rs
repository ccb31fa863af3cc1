#[cfg(feature = "parallel")]
pub(crate) use rayon::prelude::*;

use crate::utils::get_bit;
use crate::{iter, iter_mut};
use crate::{Complex, Precision};
use num_traits::Zero;
use rand::Rng;

/// Calculate the probability that measuring qubit `index` of `input` gives `measured`.
///
/// # Examples
/// ```
/// use roulette_qvm::state_ops::matrix_ops::from_reals;
/// use roulette_qvm::state_ops::measurement_ops::measure_prob;
///
/// // Make the state |q1 q0> = |10>
/// let input = from_reals(&[0.0, 0.0, 1.0, 0.0]);
///
/// assert_eq!(measure_prob(0, false, &input), 1.0);
/// assert_eq!(measure_prob(1, false, &input), 0.0);
/// assert_eq!(measure_prob(1, true, &input), 1.0);
/// ```
pub fn measure_prob<P: Precision>(index: usize, measured: bool, input: &[Complex<P>]) -> P {
    let f = |(row, amp): (usize, &Complex<P>)| -> Option<P> {
        if get_bit(row, index) == measured && !amp.is_zero() {
            Some(amp.norm_sqr())
        } else {
            None
        }
    };
    iter!(input).enumerate().filter_map(f).sum()
}

/// Sample a measurement of qubit `index` from a state `input`, without changing the state.
/// The state does not need to be normalized.
///
/// # Examples
/// ```
/// use roulette_qvm::state_ops::matrix_ops::from_reals;
/// use roulette_qvm::state_ops::measurement_ops::soft_measure;
///
/// let input = from_reals(&[0.0, 0.0, 1.0, 0.0]);
/// let mut rng = rand::thread_rng();
///
/// assert!(!soft_measure(0, &input, &mut rng));
/// assert!(soft_measure(1, &input, &mut rng));
/// ```
pub fn soft_measure<P: Precision, R: Rng + ?Sized>(
    index: usize,
    input: &[Complex<P>],
    rng: &mut R,
) -> bool {
    let p_zero = measure_prob(index, false, input);
    let p_one = measure_prob(index, true, input);
    // A branch with no weight is never picked.
    let r = P::from(rng.gen::<f64>()).unwrap_or_else(P::zero) * (p_zero + p_one);
    r >= p_zero
}

/// Normalize the output state such that it matches only states which produce the `measured`
/// result and has the same magnitude.
/// This is done by zeroing out the states which cannot give `measured`, and dividing the remaining
/// by the `sqrt(1/p)` for p=`measured_prob`.
pub fn measure_state<P: Precision>(
    index: usize,
    measured: (bool, P),
    input: &[Complex<P>],
    output: &mut [Complex<P>],
) {
    let (measured, measured_prob) = measured;
    if !measured_prob.is_zero() {
        let p_mult = P::one() / measured_prob.sqrt();

        let f = |(row, (input, output)): (usize, (&Complex<P>, &mut Complex<P>))| {
            if get_bit(row, index) != measured {
                // This is not a valid measurement, zero out the entry.
                *output = Complex::default();
            } else {
                *output = (*input) * p_mult;
            }
        };

        iter!(input).zip(iter_mut!(output)).enumerate().for_each(f);
    }
}

/// Samples qubit `index` from `input`, then calls `measure_state` to collapse `output`.
/// Returns the measured bit and its probability.
pub fn measure<P: Precision, R: Rng + ?Sized>(
    index: usize,
    input: &[Complex<P>],
    output: &mut [Complex<P>],
    rng: &mut R,
) -> (bool, P) {
    let m = soft_measure(index, input, rng);
    let p = measure_prob(index, m, input);
    let measured = (m, p);

    measure_state(index, measured, input, output);
    measured
}

#[cfg(test)]
mod measurement_tests {
    use super::*;
    use crate::state_ops::matrix_ops::from_reals;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn approx_eq(a: &[Complex<f64>], b: &[Complex<f64>]) {
        assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .for_each(|(a, b)| assert!((a - b).norm() < 1e-10, "{:?} != {:?}", a, b));
    }

    #[test]
    fn test_measure_state() {
        let input = from_reals(&[0.5, 0.5, 0.5, 0.5]);
        let p = measure_prob(1, false, &input);
        assert!((p - 0.5f64).abs() < f64::EPSILON);

        let mut output = input.clone();
        measure_state(1, (false, p), &input, &mut output);

        let half: f64 = 1.0 / 2.0;
        approx_eq(&output, &from_reals(&[half.sqrt(), half.sqrt(), 0.0, 0.0]));
    }

    #[test]
    fn test_measure_state_one() {
        let input = from_reals(&[0.5, 0.5, 0.5, 0.5]);
        let p = measure_prob(0, true, &input);
        assert!((p - 0.5f64).abs() < f64::EPSILON);

        let mut output = input.clone();
        measure_state(0, (true, p), &input, &mut output);

        let half: f64 = 1.0 / 2.0;
        approx_eq(&output, &from_reals(&[0.0, half.sqrt(), 0.0, half.sqrt()]));
    }

    #[test]
    fn test_measure_collapses_consistently() {
        let mut rng = StdRng::seed_from_u64(11);
        let input = from_reals(&[0.5, 0.5, 0.5, 0.5]);
        let mut output = input.clone();
        let (m, p) = measure(0, &input, &mut output, &mut rng);
        assert!((p - 0.5f64).abs() < 1e-10);
        assert!((measure_prob(0, m, &output) - 1.0).abs() < 1e-10);
        let total = measure_prob(0, false, &output) + measure_prob(0, true, &output);
        assert!((total - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_soft_measure_is_roughly_fair() {
        let mut rng = StdRng::seed_from_u64(3);
        let half: f64 = 0.5;
        let input = from_reals(&[half.sqrt(), half.sqrt()]);
        let ones = (0..2000)
            .filter(|_| soft_measure(0, &input, &mut rng))
            .count();
        assert!(ones > 800 && ones < 1200, "{} ones out of 2000", ones);
    }
}
