use crate::bets::{Bet, MAX_NUMBER, NUMBER_BIT_WIDTH};
use crate::bit_source::RandomBitSource;
use crate::errors::{RouletteError, RouletteResult};
use crate::number_generator::NumberGenerator;
use log::debug;

/// A bet as placed at the table, tagged with the player who made it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedBet {
    /// Name of the player.
    pub player: String,
    /// Their bet for this round.
    pub bet: Bet,
}

impl PlacedBet {
    /// Tag `bet` with `player`.
    pub fn new<S: Into<String>>(player: S, bet: Bet) -> Self {
        Self {
            player: player.into(),
            bet,
        }
    }
}

/// Whether a wheel can tamper with its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelMode {
    /// Every spin is an honest draw.
    Fair,
    /// The dealer may flip one bit of the draw.
    Biased,
}

/// What the dealer did to one spin.
///
/// `attempted` with `!outcome_changed` means a bit was flipped but the flipped number was off
/// the wheel, so the original stood. That is not the same as not trying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiasAttemptReport {
    /// Player the dealer spied on.
    pub target_player: String,
    /// That player's bet.
    pub target_bet: Bet,
    /// Honest draw.
    pub original_outcome: u32,
    /// Number the wheel actually shows.
    pub final_outcome: u32,
    /// Bit position flipped, if any.
    pub flipped_bit: Option<usize>,
    /// Whether a bit flip was applied.
    pub attempted: bool,
    /// Whether the flip moved the outcome.
    pub outcome_changed: bool,
}

impl BiasAttemptReport {
    /// A cheat succeeds when it was attempted and the spied bet loses on the final number.
    pub fn succeeded(&self) -> bool {
        self.attempted && !self.target_bet.wins(self.final_outcome)
    }
}

/// Result of one spin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spin {
    /// Number in `0..=36`.
    pub outcome: u32,
    /// Present for biased wheels.
    pub report: Option<BiasAttemptReport>,
}

/// Something the game can spin.
pub trait Wheel {
    /// Spin once. `bets` are the bets on the table; a fair wheel ignores them.
    fn spin(&mut self, bets: &[PlacedBet]) -> RouletteResult<Spin>;

    /// Whether this wheel may tamper with results.
    fn mode(&self) -> WheelMode;
}

impl<W: Wheel + ?Sized> Wheel for Box<W> {
    fn spin(&mut self, bets: &[PlacedBet]) -> RouletteResult<Spin> {
        (**self).spin(bets)
    }

    fn mode(&self) -> WheelMode {
        (**self).mode()
    }
}

/// An honest wheel: six random bits, redrawn until the number is on the wheel.
#[derive(Debug)]
pub struct FairWheel<S> {
    numbers: NumberGenerator<S>,
}

impl<S: RandomBitSource> FairWheel<S> {
    /// A wheel drawing from `source`.
    pub fn new(source: S) -> Self {
        Self {
            numbers: NumberGenerator::new(source),
        }
    }
}

impl<S: RandomBitSource> Wheel for FairWheel<S> {
    fn spin(&mut self, _bets: &[PlacedBet]) -> RouletteResult<Spin> {
        let outcome = self.numbers.draw_in_range(NUMBER_BIT_WIDTH, MAX_NUMBER)?;
        debug!("Fair spin: {}", outcome);
        Ok(Spin {
            outcome,
            report: None,
        })
    }

    fn mode(&self) -> WheelMode {
        WheelMode::Fair
    }
}

/// A wheel run by a dealer who spies on one player per spin and, if that player is about to
/// win, flips one random bit of the drawn number.
#[derive(Debug)]
pub struct BiasedWheel<S> {
    numbers: NumberGenerator<S>,
}

impl<S: RandomBitSource> BiasedWheel<S> {
    /// A wheel drawing from `source`. Target and bit choices come from the same source.
    pub fn new(source: S) -> Self {
        Self {
            numbers: NumberGenerator::new(source),
        }
    }

    /// Spin, possibly tampering with the result against one of `candidate_bets`.
    ///
    /// Randomness is consumed in a fixed order: the six bit draw (with redraws), the target
    /// index, then the bit position only if the target would win.
    pub fn spin_with_bias(
        &mut self,
        candidate_bets: &[PlacedBet],
    ) -> RouletteResult<(u32, BiasAttemptReport)> {
        if candidate_bets.is_empty() {
            return Err(RouletteError::NoCandidates);
        }
        let original = self
            .numbers
            .draw_raw_in_range(NUMBER_BIT_WIDTH, MAX_NUMBER)?;
        let target = &candidate_bets[self.numbers.choose_index(candidate_bets.len())?];

        let mut report = BiasAttemptReport {
            target_player: target.player.clone(),
            target_bet: target.bet,
            original_outcome: original.value,
            final_outcome: original.value,
            flipped_bit: None,
            attempted: false,
            outcome_changed: false,
        };

        if !target.bet.wins(original.value) {
            debug!(
                "Spied on {} ({}), {} already loses",
                target.player, target.bet, original.value
            );
            return Ok((original.value, report));
        }

        let position = self.numbers.choose_index(NUMBER_BIT_WIDTH)?;
        let mutated = original.flip(position)?;
        report.attempted = true;
        report.flipped_bit = Some(position);
        if mutated.value <= MAX_NUMBER {
            report.final_outcome = mutated.value;
            report.outcome_changed = true;
            debug!(
                "Flipped bit {} against {}: {} -> {}",
                position, target.player, original.value, mutated.value
            );
        } else {
            debug!(
                "Flipping bit {} gives {} (off the wheel), keeping {}",
                position, mutated.value, original.value
            );
        }
        Ok((report.final_outcome, report))
    }
}

impl<S: RandomBitSource> Wheel for BiasedWheel<S> {
    fn spin(&mut self, bets: &[PlacedBet]) -> RouletteResult<Spin> {
        let (outcome, report) = self.spin_with_bias(bets)?;
        Ok(Spin {
            outcome,
            report: Some(report),
        })
    }

    fn mode(&self) -> WheelMode {
        WheelMode::Biased
    }
}
