use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use tictac_core::game::{Board, Mark, minimax_move};

fn bench_first_move_empty_board() {
    minimax_move(&Board::new(), Mark::O);
}

fn bench_full_self_play_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while let Some(index) = minimax_move(&board, current_mark) {
        board.place(index, current_mark).unwrap();
        current_mark = current_mark.opponent().unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sampling_mode(SamplingMode::Flat).sample_size(10);

    group.bench_function("first_move_empty_board", |b| {
        b.iter(bench_first_move_empty_board)
    });

    group.bench_function("full_self_play_game", |b| b.iter(bench_full_self_play_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
