use qroulette::narration;
use qroulette::prelude::*;
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

fn play() -> Result<(), Box<dyn Error>> {
    let config = GameConfig::default();
    let wheel = FairWheel::new(QuantumBitSource::new());
    let mut game = RouletteGame::from_config(&config, |_| QuantumBitSource::new(), wheel);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    narration::write_opening(&mut out, "QUANTUM FRENCH ROULETTE - FAIR GAME", &game.summary())?;
    while !game.is_finished() {
        let round = game.play_round()?;
        narration::write_round(&mut out, &round)?;
    }
    narration::write_final(&mut out, &game.summary())?;
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
