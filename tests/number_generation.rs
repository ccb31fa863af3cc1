extern crate qroulette;

use qroulette::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_draw_reads_little_endian() -> RouletteResult<()> {
    let source = ScriptedBitSource::new().with_bits(&[1, 0, 1, 1, 0, 0]);
    let mut numbers = NumberGenerator::new(source);
    assert_eq!(numbers.draw(6)?, 13);
    Ok(())
}

#[test]
fn test_draw_in_range_accepts_in_range_value() -> RouletteResult<()> {
    let source = ScriptedBitSource::new().with_bits(&[1, 0, 1, 1, 0, 0]);
    let mut numbers = NumberGenerator::new(source);
    assert_eq!(numbers.draw_in_range(6, 36)?, 13);
    Ok(())
}

#[test]
fn test_draw_in_range_redraws_37() -> RouletteResult<()> {
    // 37 is 100101, drawn first and never returned.
    let source = ScriptedBitSource::new()
        .with_bits(&[1, 0, 1, 0, 0, 1])
        .with_bits(&[0, 0, 0, 0, 0, 0]);
    let mut numbers = NumberGenerator::new(source);
    assert_eq!(numbers.draw_in_range(6, 36)?, 0);
    assert_eq!(numbers.into_source().remaining(), 0);
    Ok(())
}

#[test]
fn test_draw_in_range_keeps_redrawing() -> RouletteResult<()> {
    let source = ScriptedBitSource::new()
        .with_number(63, 6)
        .with_number(40, 6)
        .with_number(37, 6)
        .with_number(36, 6);
    let mut numbers = NumberGenerator::new(source);
    let draw = numbers.draw_raw_in_range(6, 36)?;
    assert_eq!(draw.value, 36);
    assert_eq!(draw.bits.as_slice(), &[false, false, true, false, false, true]);
    Ok(())
}

#[test]
fn test_source_failure_propagates() {
    // Only 37 is available, so the redraw hits an exhausted script.
    let source = ScriptedBitSource::new().with_number(37, 6);
    let mut numbers = NumberGenerator::new(source);
    assert!(matches!(
        numbers.draw_in_range(6, 36),
        Err(RouletteError::BitSource(_))
    ));
}

#[test]
fn test_range_invariant_classical() -> RouletteResult<()> {
    let mut numbers = NumberGenerator::new(RngBitSource::seeded(42));
    let mut seen = [false; 37];
    for _ in 0..5000 {
        let v = numbers.draw_in_range(6, 36)?;
        assert!(v <= 36);
        seen[v as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
    Ok(())
}

#[test]
fn test_range_invariant_quantum() -> RouletteResult<()> {
    let source = QuantumBitSource::from_rng(StdRng::seed_from_u64(9));
    let mut numbers = NumberGenerator::new(source);
    for _ in 0..300 {
        assert!(numbers.draw_in_range(6, 36)? <= 36);
    }
    Ok(())
}

#[test]
fn test_choose_index_is_uniformish() -> RouletteResult<()> {
    let mut numbers = NumberGenerator::new(RngBitSource::seeded(8));
    let mut counts = [0usize; 6];
    for _ in 0..6000 {
        counts[numbers.choose_index(6)?] += 1;
    }
    assert!(counts.iter().all(|c| *c > 800 && *c < 1200), "{:?}", counts);
    Ok(())
}
