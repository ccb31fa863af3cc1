use crate::bit_source::{Bits, RandomBitSource};
use crate::errors::{RouletteError, RouletteResult};
use log::trace;

/// Widest number a single draw can produce.
pub const MAX_BIT_WIDTH: usize = 32;

/// Read little-endian bits as a number, bit `i` contributes `2^i`.
/// More than [`MAX_BIT_WIDTH`] bits is an `InvalidBitWidth` error.
///
/// ```
/// use qroulette::number_generator::bits_to_value;
///
/// assert_eq!(bits_to_value(&[true, false, true, true, false, false]), Ok(13));
/// assert!(bits_to_value(&[false; 33]).is_err());
/// ```
pub fn bits_to_value(bits: &[bool]) -> RouletteResult<u32> {
    if bits.len() > MAX_BIT_WIDTH {
        return Err(RouletteError::InvalidBitWidth(bits.len()));
    }
    Ok(bits
        .iter()
        .enumerate()
        .fold(0, |acc, (i, bit)| acc | (u32::from(*bit) << i)))
}

/// An accepted number together with the bits it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDraw {
    /// The number.
    pub value: u32,
    /// Little-endian bits of `value`, exactly as drawn.
    pub bits: Bits,
}

impl RawDraw {
    /// Wrap drawn bits. Fails like [`bits_to_value`] on more than [`MAX_BIT_WIDTH`] bits.
    pub fn from_bits(bits: Bits) -> RouletteResult<Self> {
        Ok(Self {
            value: bits_to_value(&bits)?,
            bits,
        })
    }

    /// A copy with bit `position` flipped.
    ///
    /// ```
    /// use qroulette::number_generator::RawDraw;
    ///
    /// # fn main() -> qroulette::errors::RouletteResult<()> {
    /// let five = RawDraw::from_bits([true, false, true, false, false, false].into_iter().collect())?;
    /// assert_eq!(five.flip(0)?.value, 4);
    /// assert_eq!(five.flip(5)?.value, 37);
    /// # Ok(())
    /// # }
    /// ```
    pub fn flip(&self, position: usize) -> RouletteResult<Self> {
        let mut bits = self.bits.clone();
        if let Some(bit) = bits.get_mut(position) {
            *bit = !*bit;
        }
        Self::from_bits(bits)
    }
}

/// Turns a bit source into bounded integers by rejection sampling.
///
/// Holds no state of its own between draws: every draw is independent.
#[derive(Debug)]
pub struct NumberGenerator<S> {
    source: S,
}

impl<S: RandomBitSource> NumberGenerator<S> {
    /// Draw numbers from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Give back the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// A number uniform over `[0, 2^bit_width - 1]`.
    pub fn draw(&mut self, bit_width: usize) -> RouletteResult<u32> {
        Ok(self.draw_raw(bit_width)?.value)
    }

    /// Like `draw` but keeps the bits.
    pub fn draw_raw(&mut self, bit_width: usize) -> RouletteResult<RawDraw> {
        if bit_width == 0 || bit_width > MAX_BIT_WIDTH {
            return Err(RouletteError::InvalidBitWidth(bit_width));
        }
        let bits = self.source.draw_bits(bit_width)?;
        if bits.len() != bit_width {
            return Err(RouletteError::bit_source(format!(
                "asked for {} bits, got {}",
                bit_width,
                bits.len()
            )));
        }
        RawDraw::from_bits(bits)
    }

    /// A number uniform over `[0, max_value]`. Draws above `max_value` are thrown away and
    /// drawn again, there is no bound on how many times.
    pub fn draw_in_range(&mut self, bit_width: usize, max_value: u32) -> RouletteResult<u32> {
        Ok(self.draw_raw_in_range(bit_width, max_value)?.value)
    }

    /// Like `draw_in_range` but keeps the bits of the accepted draw.
    pub fn draw_raw_in_range(
        &mut self,
        bit_width: usize,
        max_value: u32,
    ) -> RouletteResult<RawDraw> {
        loop {
            let draw = self.draw_raw(bit_width)?;
            if draw.value <= max_value {
                return Ok(draw);
            }
            trace!("Rejected {} (above {}), drawing again", draw.value, max_value);
        }
    }

    /// A single fair bit.
    pub fn draw_bit(&mut self) -> RouletteResult<bool> {
        Ok(self.draw(1)? == 1)
    }

    /// An index uniform over `0..len`, using as few bits as `len - 1` needs.
    pub fn choose_index(&mut self, len: usize) -> RouletteResult<usize> {
        match len {
            0 => Err(RouletteError::EmptyChoice),
            1 => Ok(0),
            _ => {
                let max = len - 1;
                let width = (usize::BITS - max.leading_zeros()) as usize;
                let max =
                    u32::try_from(max).map_err(|_| RouletteError::InvalidBitWidth(width))?;
                let index = self.draw_in_range(width, max)?;
                Ok(index as usize)
            }
        }
    }
}
