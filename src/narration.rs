use crate::game::{CheatStatistics, GameSummary, RoundSummary};
use std::io::{Result, Write};

const RULE_WIDTH: usize = 60;

fn rule<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn heading<W: Write>(out: &mut W, title: &str) -> Result<()> {
    rule(out)?;
    writeln!(out, "{}", title)?;
    rule(out)
}

/// Title and starting balances.
pub fn write_opening<W: Write>(out: &mut W, title: &str, summary: &GameSummary) -> Result<()> {
    heading(out, title)?;
    writeln!(out)?;
    writeln!(out, "Starting coins:")?;
    for (name, balance) in &summary.balances {
        writeln!(out, "  {}: {}", name, balance)?;
    }
    writeln!(out, "  Dealer: {}", summary.dealer_balance)
}

/// Bets, the dealer's meddling if any, the outcome and the settled balances of one round.
pub fn write_round<W: Write>(out: &mut W, round: &RoundSummary) -> Result<()> {
    writeln!(out)?;
    heading(out, &format!("ROUND {}", round.round))?;
    for result in &round.results {
        writeln!(out, "{} bets: {}", result.player, result.bet)?;
    }

    let flipped = round
        .bias
        .as_ref()
        .and_then(|r| match (r.attempted, r.flipped_bit) {
            (true, Some(bit)) => Some((r, bit)),
            _ => None,
        });
    if let Some((report, bit)) = flipped {
        writeln!(out)?;
        writeln!(
            out,
            "  [bias] Dealer spies on {} ({})",
            report.target_player, report.target_bet
        )?;
        writeln!(out, "  [bias] Honest number: {}", report.original_outcome)?;
        if report.outcome_changed {
            writeln!(
                out,
                "  [bias] Flipping qubit {}: {} -> {}",
                bit, report.original_outcome, report.final_outcome
            )?;
        } else {
            writeln!(
                out,
                "  [bias] Flipping qubit {} leaves the wheel, keeping {}",
                bit, report.original_outcome
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Result: {} ({})", round.outcome, round.color)?;
    writeln!(out)?;
    for result in &round.results {
        let verdict = if result.won { "WINS" } else { "LOSES" };
        writeln!(
            out,
            "  {} {} - coins: {}",
            result.player, verdict, result.balance
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Dealer - coins: {}", round.dealer_balance)
}

fn write_cheats<W: Write>(out: &mut W, cheats: &CheatStatistics) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "CHEATING STATISTICS:")?;
    writeln!(out, "  Cheat attempts: {}", cheats.total_cheat_attempts)?;
    writeln!(
        out,
        "  Successful (spied player lost): {}",
        cheats.successful_cheats
    )?;
    if let Some(rate) = cheats.success_rate() {
        writeln!(out, "  Success rate: {:.1}%", rate)?;
        writeln!(out, "  Failed attempts: {}", cheats.failed_cheats())?;
    }

    writeln!(out)?;
    writeln!(out, "ANALYSIS:")?;
    if cheats.total_cheat_attempts == 0 {
        return writeln!(out, "  The dealer never had a reason to cheat.");
    }
    writeln!(
        out,
        "  The dealer tried to cheat {} times.",
        cheats.total_cheat_attempts
    )?;
    if cheats.failed_cheats() > 0 {
        writeln!(out, "  Some attempts failed:")?;
        writeln!(out, "  - the flipped number can fall off the wheel (>36)")?;
        writeln!(out, "  - the flipped number can still pay the spied player")?;
    }
    if cheats.successful_cheats == 0 {
        writeln!(out, "  Not a single attempt worked.")?;
    }
    Ok(())
}

/// Final balances and, for a biased wheel, the cheating statistics.
pub fn write_final<W: Write>(out: &mut W, summary: &GameSummary) -> Result<()> {
    writeln!(out)?;
    heading(out, "FINAL RESULTS")?;
    for (name, balance) in &summary.balances {
        writeln!(out, "{}: {} coins", name, balance)?;
    }
    writeln!(out, "Dealer: {} coins", summary.dealer_balance)?;
    if let Some(cheats) = &summary.cheats {
        write_cheats(out, cheats)?;
    }
    Ok(())
}
