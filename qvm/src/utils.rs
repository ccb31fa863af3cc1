/// Get the value of bit `index` in `num`.
///
/// # Example
/// ```
/// use roulette_qvm::utils::get_bit;
///
/// assert!(get_bit(0b100, 2));
/// assert!(!get_bit(0b100, 1));
/// ```
#[inline]
pub fn get_bit(num: usize, index: usize) -> bool {
    ((num >> index) & 1) == 1
}

/// Flip bit `index` in `num`.
///
/// # Example
/// ```
/// use roulette_qvm::utils::flip_bit;
///
/// assert_eq!(flip_bit(0b101, 0), 0b100);
/// assert_eq!(flip_bit(0b101, 1), 0b111);
/// ```
#[inline]
pub fn flip_bit(num: usize, index: usize) -> usize {
    num ^ (1 << index)
}

/// Read a little-endian list of bits as a number, bit `i` contributes `2^i`.
/// Returns `None` for more bits than a `usize` holds.
///
/// # Example
/// ```
/// use roulette_qvm::utils::bits_to_usize;
///
/// assert_eq!(bits_to_usize(&[true, false, true, true]), Some(13));
/// assert_eq!(bits_to_usize(&[false; 65]), None);
/// ```
pub fn bits_to_usize(bits: &[bool]) -> Option<usize> {
    if bits.len() > usize::BITS as usize {
        return None;
    }
    Some(
        bits.iter()
            .enumerate()
            .fold(0, |acc, (i, bit)| acc | (usize::from(*bit) << i)),
    )
}
