use criterion::{black_box, criterion_group, criterion_main, Criterion};
use go_rules::{Board, Game, GameConfig, KoRule};

/// A 19x19 board with one long black snake and scattered white stones.
fn busy_board() -> Board {
    let mut s = String::with_capacity(361);
    for y in 0..19 {
        for x in 0..19 {
            let c = if (y % 2 == 0 && x < 18) || (y % 4 == 1 && x == 17) || (y % 4 == 3 && x == 0) {
                '1'
            } else if (x + y) % 5 == 0 {
                '0'
            } else {
                '2'
            };
            s.push(c);
        }
    }
    s.parse().unwrap()
}

fn bench_board(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("chain_19x19_snake", |b| {
        b.iter(|| black_box(&board).chain(0, 0).len())
    });
    c.bench_function("is_captured_19x19_snake", |b| {
        b.iter(|| black_box(&board).is_captured(0, 0))
    });
    c.bench_function("board_clone_19x19", |b| b.iter(|| black_box(&board).clone()));
}

fn bench_game(c: &mut Criterion) {
    let config = GameConfig::default().with_ko_rule(KoRule::Situational);

    c.bench_function("place_100_stones_situational", |b| {
        b.iter(|| {
            let mut game = Game::new(config).unwrap();
            for i in 0..100 {
                let _ = game.place_stone((i * 7) % 361);
            }
            game
        })
    });
}

criterion_group!(benches, bench_board, bench_game);
criterion_main!(benches);
