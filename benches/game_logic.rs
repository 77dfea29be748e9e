use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{Board, Session2d, Session3d};
use tui_blockfall::types::{Color, Control, HeldKeys, Offset};

fn bench_update(c: &mut Criterion) {
    let mut session = Session2d::standard(12345);
    session.start();

    c.bench_function("session_update_16ms", |b| {
        b.iter(|| {
            if session.is_over() {
                session.reset();
                session.start();
            }
            session.update(black_box(16.0), HeldKeys::default());
        })
    });
}

fn bench_update_3d(c: &mut Criterion) {
    let mut session = Session3d::standard(12345);
    session.start();
    let held: HeldKeys = [Control::Down].into_iter().collect();

    c.bench_function("volume_update_held_down", |b| {
        b.iter(|| {
            if session.is_over() {
                session.reset();
                session.start();
            }
            session.update(black_box(16.0), held);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let color = Color::new(0, 255, 255);
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::standard();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(color));
                }
            }
            board.clear_full_lines()
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut session = Session2d::standard(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| session.spawn())
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut session = Session2d::standard(12345);
    session.start();

    c.bench_function("try_move", |b| {
        b.iter(|| session.try_move(black_box(Offset::flat(1, 0))))
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut session = Session2d::standard(12345);
    session.start();

    c.bench_function("try_rotate", |b| {
        b.iter(|| session.try_rotate_cw())
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_update_3d,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
