use crate::bets::{color_of, Bet, BetEngine, Color};
use crate::bit_source::RandomBitSource;
use crate::errors::{RouletteError, RouletteResult};
use crate::wheel::{BiasAttemptReport, PlacedBet, Wheel, WheelMode};
use log::{debug, info};

/// Coins won or lost by each player per round.
pub const STAKE: i64 = 1;

/// Someone at the table placing bets. Owns the bit source their bets come from.
#[derive(Debug)]
pub struct Player<S> {
    name: String,
    balance: i64,
    bets: BetEngine<S>,
}

impl<S: RandomBitSource> Player<S> {
    /// A player starting with `balance` coins, drawing bets from `source`.
    pub fn new<N: Into<String>>(name: N, balance: i64, source: S) -> Self {
        Self {
            name: name.into(),
            balance,
            bets: BetEngine::new(source),
        }
    }

    /// Name at the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coins held. May be negative.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    fn place_bet(&mut self) -> RouletteResult<PlacedBet> {
        Ok(PlacedBet::new(self.name.clone(), self.bets.generate_bet()?))
    }
}

/// The house side of every bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dealer {
    balance: i64,
}

impl Dealer {
    /// A dealer starting with `balance` coins.
    pub fn new(balance: i64) -> Self {
        Self { balance }
    }

    /// Coins held. May be negative.
    pub fn balance(&self) -> i64 {
        self.balance
    }
}

/// Table setup. There is no file or command line behind this; `Default` is the standard game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Rounds to play.
    pub rounds: usize,
    /// One player per name.
    pub player_names: Vec<String>,
    /// Starting coins for each player.
    pub player_balance: i64,
    /// Starting coins for the dealer.
    pub dealer_balance: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            player_names: vec!["Alice".to_string(), "Bob".to_string()],
            player_balance: 10,
            dealer_balance: 20,
        }
    }
}

impl GameConfig {
    /// Players with their starting balances, each given its own source by `source_for`.
    pub fn players<S, F>(&self, mut source_for: F) -> Vec<Player<S>>
    where
        S: RandomBitSource,
        F: FnMut(&str) -> S,
    {
        self.player_names
            .iter()
            .map(|name| Player::new(name.as_str(), self.player_balance, source_for(name.as_str())))
            .collect()
    }

    /// The dealer with its starting balance.
    pub fn dealer(&self) -> Dealer {
        Dealer::new(self.dealer_balance)
    }
}

/// Where a game is within its current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Players are about to bet.
    AwaitingBets,
    /// Bets are in, the wheel is spinning.
    Resolving,
    /// Balances are settled and the summary handed out.
    RoundComplete,
    /// All rounds played.
    Finished,
}

/// Dealer cheating tally over a whole game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheatStatistics {
    /// Spins where a bit was flipped.
    pub total_cheat_attempts: usize,
    /// Attempts after which the spied player lost.
    pub successful_cheats: usize,
}

impl CheatStatistics {
    /// Fold one spin into the tally.
    pub fn record(&mut self, report: &BiasAttemptReport) {
        if report.attempted {
            self.total_cheat_attempts += 1;
            if report.succeeded() {
                self.successful_cheats += 1;
            }
        }
    }

    /// Attempts which did not make the spied player lose.
    pub fn failed_cheats(&self) -> usize {
        self.total_cheat_attempts - self.successful_cheats
    }

    /// Successful attempts as a percentage, `None` before any attempt.
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_cheat_attempts == 0 {
            None
        } else {
            Some(100.0 * self.successful_cheats as f64 / self.total_cheat_attempts as f64)
        }
    }
}

/// One player's part of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerResult {
    /// Player name.
    pub player: String,
    /// Their bet.
    pub bet: Bet,
    /// Whether it won.
    pub won: bool,
    /// Balance after settlement.
    pub balance: i64,
}

/// Everything that happened in a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    /// Round number, starting at 1.
    pub round: usize,
    /// Per player results, in seating order.
    pub results: Vec<PlayerResult>,
    /// Number the wheel landed on.
    pub outcome: u32,
    /// Color of `outcome`.
    pub color: Color,
    /// Dealer balance after settlement.
    pub dealer_balance: i64,
    /// What the dealer did, for biased wheels.
    pub bias: Option<BiasAttemptReport>,
}

/// Balances and statistics of a game so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// Rounds completed.
    pub rounds_played: usize,
    /// `(name, balance)` per player, in seating order.
    pub balances: Vec<(String, i64)>,
    /// Dealer balance.
    pub dealer_balance: i64,
    /// Mode of the wheel in play.
    pub mode: WheelMode,
    /// Cheat tally, for biased wheels.
    pub cheats: Option<CheatStatistics>,
}

/// A roulette table: players, a dealer and a wheel, played for a fixed number of rounds.
///
/// ```
/// use qroulette::prelude::*;
///
/// # fn main() -> RouletteResult<()> {
/// let config = GameConfig::default();
/// let wheel = FairWheel::new(RngBitSource::seeded(1));
/// let mut seed = 1;
/// let mut game = RouletteGame::from_config(&config, |_| { seed += 1; RngBitSource::seeded(seed) }, wheel);
///
/// let summary = game.run(|_round| {})?;
/// assert_eq!(summary.rounds_played, 10);
/// // Every coin won by a player is lost by the dealer.
/// let total: i64 = summary.balances.iter().map(|(_, b)| b).sum::<i64>() + summary.dealer_balance;
/// assert_eq!(total, 40);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RouletteGame<S, W> {
    players: Vec<Player<S>>,
    dealer: Dealer,
    wheel: W,
    rounds: usize,
    rounds_played: usize,
    phase: RoundPhase,
    cheats: CheatStatistics,
}

impl<S: RandomBitSource, W: Wheel> RouletteGame<S, W> {
    /// A game of `rounds` rounds.
    pub fn new(players: Vec<Player<S>>, dealer: Dealer, wheel: W, rounds: usize) -> Self {
        Self {
            players,
            dealer,
            wheel,
            rounds,
            rounds_played: 0,
            phase: if rounds == 0 {
                RoundPhase::Finished
            } else {
                RoundPhase::AwaitingBets
            },
            cheats: CheatStatistics::default(),
        }
    }

    /// A game laid out by `config`, each player getting a source from `source_for`.
    pub fn from_config<F>(config: &GameConfig, source_for: F, wheel: W) -> Self
    where
        F: FnMut(&str) -> S,
    {
        Self::new(
            config.players(source_for),
            config.dealer(),
            wheel,
            config.rounds,
        )
    }

    /// Players in seating order.
    pub fn players(&self) -> &[Player<S>] {
        &self.players
    }

    /// The dealer.
    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// The current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Rounds completed.
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Cheat tally so far. Stays at zero for a fair wheel.
    pub fn cheat_statistics(&self) -> CheatStatistics {
        self.cheats
    }

    /// Whether every round has been played.
    pub fn is_finished(&self) -> bool {
        self.phase == RoundPhase::Finished
    }

    /// Play one round: collect bets, spin, settle, tally cheating.
    ///
    /// An error from any bit source aborts the round before balances are touched; calling
    /// again replays the round from the start.
    pub fn play_round(&mut self) -> RouletteResult<RoundSummary> {
        if self.is_finished() {
            return Err(RouletteError::GameFinished {
                rounds: self.rounds,
            });
        }
        let round = self.rounds_played + 1;

        self.phase = RoundPhase::AwaitingBets;
        let bets = self
            .players
            .iter_mut()
            .map(Player::place_bet)
            .collect::<RouletteResult<Vec<_>>>()?;

        self.phase = RoundPhase::Resolving;
        let spin = self.wheel.spin(&bets)?;

        let mut results = Vec::with_capacity(bets.len());
        for (player, placed) in self.players.iter_mut().zip(bets) {
            let won = placed.bet.wins(spin.outcome);
            if won {
                player.balance += STAKE;
                self.dealer.balance -= STAKE;
            } else {
                player.balance -= STAKE;
                self.dealer.balance += STAKE;
            }
            results.push(PlayerResult {
                player: placed.player,
                bet: placed.bet,
                won,
                balance: player.balance,
            });
        }
        if let Some(report) = &spin.report {
            self.cheats.record(report);
        }

        self.rounds_played = round;
        self.phase = if self.rounds_played >= self.rounds {
            info!("Game over after {} rounds", self.rounds_played);
            RoundPhase::Finished
        } else {
            RoundPhase::RoundComplete
        };
        debug!(
            "Round {} landed on {}, dealer now at {}",
            round, spin.outcome, self.dealer.balance
        );

        Ok(RoundSummary {
            round,
            results,
            outcome: spin.outcome,
            color: color_of(spin.outcome),
            dealer_balance: self.dealer.balance,
            bias: spin.report,
        })
    }

    /// Play every remaining round, handing each summary to `on_round`.
    pub fn run<F>(&mut self, mut on_round: F) -> RouletteResult<GameSummary>
    where
        F: FnMut(&RoundSummary),
    {
        while !self.is_finished() {
            let summary = self.play_round()?;
            on_round(&summary);
        }
        Ok(self.summary())
    }

    /// Balances and statistics as they stand.
    pub fn summary(&self) -> GameSummary {
        let mode = self.wheel.mode();
        GameSummary {
            rounds_played: self.rounds_played,
            balances: self
                .players
                .iter()
                .map(|p| (p.name.clone(), p.balance))
                .collect(),
            dealer_balance: self.dealer.balance,
            mode,
            cheats: match mode {
                WheelMode::Biased => Some(self.cheats),
                WheelMode::Fair => None,
            },
        }
    }
}
