extern crate qroulette;

use qroulette::prelude::*;

fn categorical_bets() -> Vec<Bet> {
    vec![
        Bet::Parity(Parity::Even),
        Bet::Parity(Parity::Odd),
        Bet::Range(Half::Low),
        Bet::Range(Half::High),
        Bet::Color(BetColor::Red),
        Bet::Color(BetColor::Black),
    ]
}

#[test]
fn test_zero_beats_categorical_bets() {
    for bet in categorical_bets() {
        assert!(!evaluate(&bet, 0), "{}", bet);
    }
}

#[test]
fn test_zero_pays_number_bet() {
    assert!(Bet::Number(0).wins(0));
    assert!(!Bet::Number(0).wins(1));
}

#[test]
fn test_color_mapping() {
    assert!(Bet::Color(BetColor::Black).wins(2));
    assert!(!Bet::Color(BetColor::Red).wins(2));
    assert!(Bet::Color(BetColor::Red).wins(3));
    assert!(!Bet::Color(BetColor::Red).wins(0));
    assert!(!Bet::Color(BetColor::Black).wins(0));
}

#[test]
fn test_even_money_bets_split_the_wheel() {
    // Every nonzero number pays exactly one side of each even-money bet.
    for n in 1..=36 {
        let pairs = [
            (Bet::Parity(Parity::Even), Bet::Parity(Parity::Odd)),
            (Bet::Range(Half::Low), Bet::Range(Half::High)),
            (Bet::Color(BetColor::Red), Bet::Color(BetColor::Black)),
        ];
        for (a, b) in pairs.iter() {
            assert_ne!(a.wins(n), b.wins(n), "{} vs {} on {}", a, b, n);
        }
    }
}

#[test]
fn test_parity_and_range() {
    assert!(Bet::Parity(Parity::Odd).wins(7));
    assert!(Bet::Parity(Parity::Even).wins(36));
    assert!(Bet::Range(Half::Low).wins(18));
    assert!(Bet::Range(Half::High).wins(19));
    assert!(!Bet::Range(Half::High).wins(18));
}

#[test]
fn test_generate_each_kind() -> RouletteResult<()> {
    // Selector bits are read little-endian: [b0, b1] -> b0 + 2 * b1.
    let cases: Vec<(Vec<u8>, Bet)> = vec![
        (vec![0, 0, 1, 1, 1, 0, 0, 0], Bet::Number(7)),
        (vec![1, 0, 1], Bet::Parity(Parity::Odd)),
        (vec![1, 0, 0], Bet::Parity(Parity::Even)),
        (vec![0, 1, 0], Bet::Range(Half::Low)),
        (vec![0, 1, 1], Bet::Range(Half::High)),
        (vec![1, 1, 0], Bet::Color(BetColor::Red)),
        (vec![1, 1, 1], Bet::Color(BetColor::Black)),
    ];
    for (bits, expected) in cases {
        let mut engine = BetEngine::new(ScriptedBitSource::new().with_bits(&bits));
        assert_eq!(engine.generate_bet()?, expected);
    }
    Ok(())
}

#[test]
fn test_generated_number_bet_is_rejection_sampled() -> RouletteResult<()> {
    let source = ScriptedBitSource::new()
        .with_bits(&[0, 0])
        .with_number(50, 6)
        .with_number(36, 6);
    let mut engine = BetEngine::new(source);
    assert_eq!(engine.generate_bet()?, Bet::Number(36));
    Ok(())
}

#[test]
fn test_generated_bets_cover_every_kind() -> RouletteResult<()> {
    let mut engine = BetEngine::new(RngBitSource::seeded(21));
    let mut kinds = std::collections::HashSet::new();
    for _ in 0..200 {
        let bet = engine.generate_bet()?;
        if let Bet::Number(n) = bet {
            assert!(n <= MAX_NUMBER);
        }
        kinds.insert(bet.kind());
    }
    assert_eq!(kinds.len(), 4);
    Ok(())
}
