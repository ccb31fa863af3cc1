#[macro_use]
extern crate bencher;
extern crate qroulette;

use bencher::Bencher;

use qroulette::prelude::*;
use qroulette::qvm::prelude::*;

fn bench_quantum_bits(b: &mut Bencher) {
    let mut source = QuantumBitSource::new();
    b.iter(|| source.draw_bits(6));
}

fn bench_classical_bits(b: &mut Bencher) {
    let mut source = RngBitSource::seeded(0);
    b.iter(|| source.draw_bits(6));
}

fn bench_uniform_program(b: &mut Bencher) {
    let mut vm: QuantumVm = QuantumVm::default();
    let program = Program::uniform_bits(DEFAULT_CAPACITY);
    b.iter(|| vm.run(&program));
}

fn bench_biased_spin(b: &mut Bencher) {
    let mut wheel = BiasedWheel::new(RngBitSource::seeded(1));
    let table = vec![
        PlacedBet::new("Alice", Bet::Parity(Parity::Odd)),
        PlacedBet::new("Bob", Bet::Color(BetColor::Black)),
    ];
    b.iter(|| wheel.spin_with_bias(&table));
}

fn bench_fair_game(b: &mut Bencher) {
    b.iter(|| {
        let config = GameConfig::default();
        let wheel = FairWheel::new(RngBitSource::seeded(2));
        let mut game = RouletteGame::from_config(&config, |_| RngBitSource::seeded(3), wheel);
        game.run(|_| {})
    });
}

benchmark_group!(
    benches,
    bench_quantum_bits,
    bench_classical_bits,
    bench_uniform_program,
    bench_biased_spin,
    bench_fair_game
);
benchmark_main!(benches);
