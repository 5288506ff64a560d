use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dropfour::core::Board;
use dropfour::types::{COLS, ROWS};

fn bench_fill_and_drain(c: &mut Criterion) {
    c.bench_function("fill_and_drain_board", |b| {
        b.iter(|| {
            let board = Board::new();
            for col in 0..COLS {
                for _ in 0..ROWS {
                    board.drop_disc(black_box(col)).unwrap();
                }
            }
            while board.undo_move().is_ok() {}
            board
        })
    });
}

fn bench_next_turn(c: &mut Criterion) {
    let board = Board::new();
    for col in [3, 3, 4, 2, 5] {
        board.drop_disc(col).unwrap();
    }

    c.bench_function("next_turn", |b| b.iter(|| black_box(&board).next_turn()));
}

fn bench_display(c: &mut Criterion) {
    let board = Board::new();
    for col in 0..COLS {
        board.drop_disc(col).unwrap();
        board.drop_disc(col).unwrap();
    }

    c.bench_function("display_board", |b| {
        b.iter(|| black_box(&board).to_string())
    });
}

fn bench_equality(c: &mut Criterion) {
    let a = Board::new();
    let b2 = Board::new();
    for col in [0, 1, 2, 3, 4, 5, 6, 0, 1, 2] {
        a.drop_disc(col).unwrap();
        b2.drop_disc(col).unwrap();
    }

    c.bench_function("board_equality", |b| {
        b.iter(|| black_box(&a) == black_box(&b2))
    });
}

criterion_group!(
    benches,
    bench_fill_and_drain,
    bench_next_turn,
    bench_display,
    bench_equality
);
criterion_main!(benches);
