#![forbid(unsafe_code)]
#![deny(
    unreachable_pub,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    missing_docs
)]

//! French roulette played with quantum random numbers.
//!
//! Every participant owns a [`RandomBitSource`](bit_source::RandomBitSource). By default that is
//! a small quantum virtual machine which prepares qubits with Hadamard gates and measures them,
//! but anything producing fair independent bits will do, including a scripted source for tests.
//!
//! Numbers on the wheel (0 to 36) are read from six bits, little-endian, and any draw above 36 is
//! thrown away and drawn again. Players pick their bets the same way. A [`BiasedWheel`] lets the
//! dealer spy on one player per spin and flip a single bit of the draw when that player would
//! otherwise win.
//!
//! # Example
//! ```
//! use qroulette::prelude::*;
//!
//! # fn main() -> RouletteResult<()> {
//! // Alice bets on 7, the wheel lands on 7.
//! let alice = Player::new(
//!     "Alice",
//!     10,
//!     ScriptedBitSource::new().with_bits(&[0, 0]).with_number(7, 6),
//! );
//! let wheel = FairWheel::new(ScriptedBitSource::new().with_number(7, 6));
//! let mut game = RouletteGame::new(vec![alice], Dealer::new(20), wheel, 1);
//!
//! let round = game.play_round()?;
//! assert_eq!(round.outcome, 7);
//! assert!(round.results[0].won);
//! assert_eq!(game.players()[0].balance(), 11);
//! assert_eq!(game.dealer().balance(), 19);
//! # Ok(())
//! # }
//! ```
//!
//! [`BiasedWheel`]: wheel::BiasedWheel

/// Player bets and how they are judged.
pub mod bets;
/// Sources of random bits.
pub mod bit_source;
/// Error types.
pub mod errors;
/// Rounds, balances and cheat statistics.
pub mod game;
/// Text output for the command line games.
pub mod narration;
/// Bounded random numbers by rejection sampling.
pub mod number_generator;
/// Fair and biased wheels.
pub mod wheel;

pub use roulette_qvm as qvm;

/// Commonly used types and traits.
/// ```
/// use qroulette::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bets::*;
    pub use crate::bit_source::*;
    pub use crate::errors::*;
    pub use crate::game::*;
    pub use crate::number_generator::*;
    pub use crate::wheel::*;
}
