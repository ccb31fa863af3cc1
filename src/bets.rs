use crate::bit_source::RandomBitSource;
use crate::errors::RouletteResult;
use crate::number_generator::NumberGenerator;
use log::debug;
use std::fmt::{Display, Formatter};

/// Highest number on the wheel.
pub const MAX_NUMBER: u32 = 36;
/// Bits needed to cover every number on the wheel.
pub const NUMBER_BIT_WIDTH: usize = 6;
/// Bits used to pick a bet kind.
pub const SELECTOR_BIT_WIDTH: usize = 2;

/// Color of a pocket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Odd numbers.
    Red,
    /// Even numbers other than 0.
    Black,
    /// Only 0.
    Green,
}

/// The color side of a color bet. There is no bet on green.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BetColor {
    /// Odd numbers.
    Red,
    /// Even numbers other than 0.
    Black,
}

impl From<BetColor> for Color {
    fn from(color: BetColor) -> Self {
        match color {
            BetColor::Red => Color::Red,
            BetColor::Black => Color::Black,
        }
    }
}

/// Parity of a nonzero number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Even ("pair").
    Even,
    /// Odd ("impair").
    Odd,
}

/// Which half of the wheel a nonzero number falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Half {
    /// 1 to 18 ("manque").
    Low,
    /// 19 to 36 ("passe").
    High,
}

/// The four kinds of bet, in selector order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BetKind {
    /// A single number.
    Number,
    /// Even or odd.
    Parity,
    /// Low or high half.
    Range,
    /// Red or black.
    Color,
}

impl BetKind {
    /// Kind for a 2 bit selector: 0 number, 1 parity, 2 range, 3 color.
    /// Only the low two bits are read.
    pub fn from_selector(selector: u32) -> Self {
        match selector & 0b11 {
            0 => BetKind::Number,
            1 => BetKind::Parity,
            2 => BetKind::Range,
            _ => BetKind::Color,
        }
    }
}

/// A bet on the next spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bet {
    /// Wins on exactly this number.
    Number(u32),
    /// Wins on a nonzero number of this parity.
    Parity(Parity),
    /// Wins on a nonzero number in this half.
    Range(Half),
    /// Wins on a number of this color.
    Color(BetColor),
}

/// Color of `number`: 0 is green, even numbers are black and odd numbers red.
///
/// ```
/// use qroulette::bets::{color_of, Color};
///
/// assert_eq!(color_of(0), Color::Green);
/// assert_eq!(color_of(2), Color::Black);
/// assert_eq!(color_of(3), Color::Red);
/// ```
pub fn color_of(number: u32) -> Color {
    if number == 0 {
        Color::Green
    } else if number % 2 == 0 {
        Color::Black
    } else {
        Color::Red
    }
}

/// Parity of `number`, `None` for 0.
pub fn parity_of(number: u32) -> Option<Parity> {
    match number {
        0 => None,
        n if n % 2 == 0 => Some(Parity::Even),
        _ => Some(Parity::Odd),
    }
}

/// Half of the wheel holding `number`, `None` for 0 and anything off the wheel.
pub fn range_of(number: u32) -> Option<Half> {
    match number {
        1..=18 => Some(Half::Low),
        19..=MAX_NUMBER => Some(Half::High),
        _ => None,
    }
}

impl Bet {
    /// The kind of this bet.
    pub fn kind(&self) -> BetKind {
        match self {
            Bet::Number(_) => BetKind::Number,
            Bet::Parity(_) => BetKind::Parity,
            Bet::Range(_) => BetKind::Range,
            Bet::Color(_) => BetKind::Color,
        }
    }

    /// Whether this bet wins when the wheel lands on `number`.
    /// The three even-money bets all lose on 0.
    pub fn wins(&self, number: u32) -> bool {
        match self {
            Bet::Number(n) => *n == number,
            Bet::Parity(p) => parity_of(number) == Some(*p),
            Bet::Range(h) => range_of(number) == Some(*h),
            Bet::Color(c) => color_of(number) == Color::from(*c),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Black => "black",
            Color::Green => "green",
        };
        write!(f, "{}", name)
    }
}

impl Display for Bet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Bet::Number(n) => write!(f, "number = {}", n),
            Bet::Parity(Parity::Even) => write!(f, "parity = even"),
            Bet::Parity(Parity::Odd) => write!(f, "parity = odd"),
            Bet::Range(Half::Low) => write!(f, "range = manque (1-18)"),
            Bet::Range(Half::High) => write!(f, "range = passe (19-36)"),
            Bet::Color(c) => write!(f, "color = {}", Color::from(*c)),
        }
    }
}

/// Generates random bets from a bit source and checks them against the wheel.
#[derive(Debug)]
pub struct BetEngine<S> {
    numbers: NumberGenerator<S>,
}

impl<S: RandomBitSource> BetEngine<S> {
    /// Bets drawn from `source`.
    pub fn new(source: S) -> Self {
        Self {
            numbers: NumberGenerator::new(source),
        }
    }

    /// Draw a bet: a 2 bit selector picks the kind, then either six bits (rejection sampled to
    /// 0..=36) for a number or a single bit for the side of an even-money bet.
    pub fn generate_bet(&mut self) -> RouletteResult<Bet> {
        let kind = BetKind::from_selector(self.numbers.draw(SELECTOR_BIT_WIDTH)?);
        let bet = match kind {
            BetKind::Number => {
                Bet::Number(self.numbers.draw_in_range(NUMBER_BIT_WIDTH, MAX_NUMBER)?)
            }
            BetKind::Parity => Bet::Parity(if self.numbers.draw_bit()? {
                Parity::Odd
            } else {
                Parity::Even
            }),
            BetKind::Range => Bet::Range(if self.numbers.draw_bit()? {
                Half::High
            } else {
                Half::Low
            }),
            BetKind::Color => Bet::Color(if self.numbers.draw_bit()? {
                BetColor::Black
            } else {
                BetColor::Red
            }),
        };
        debug!("Generated bet: {}", bet);
        Ok(bet)
    }
}

/// Whether `bet` wins against `number`.
///
/// ```
/// use qroulette::bets::{evaluate, Bet, BetColor};
///
/// assert!(evaluate(&Bet::Number(0), 0));
/// assert!(!evaluate(&Bet::Color(BetColor::Black), 0));
/// ```
pub fn evaluate(bet: &Bet, number: u32) -> bool {
    bet.wins(number)
}
