use qroulette::narration;
use qroulette::prelude::*;
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

fn play() -> Result<(), Box<dyn Error>> {
    let config = GameConfig::default();
    let wheel = BiasedWheel::new(QuantumBitSource::new());
    let mut game = RouletteGame::from_config(&config, |_| QuantumBitSource::new(), wheel);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    narration::write_opening(
        &mut out,
        "QUANTUM FRENCH ROULETTE - CROOKED DEALER",
        &game.summary(),
    )?;
    while !game.is_finished() {
        let round = game.play_round()?;
        narration::write_round(&mut out, &round)?;
    }
    narration::write_final(&mut out, &game.summary())?;

    writeln!(out)?;
    writeln!(
        out,
        "A cheat only counts as successful when the spied player loses."
    )?;
    writeln!(
        out,
        "Flipping one qubit of the result can miss the wheel or still pay out."
    )?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match play() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
