use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{Board, Cell, GameController, GameMode, Outcome, Player, best_move};

fn bench_best_move_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_empty_board", |b| {
        b.iter(|| {
            let mut board = Board::new();
            best_move(&mut board, Player::X, Player::X)
        });
    });
}

fn bench_best_move_midgame(c: &mut Criterion) {
    c.bench_function("minimax_midgame", |b| {
        let cells = [
            Cell::X,
            Cell::Empty,
            Cell::O,
            Cell::Empty,
            Cell::X,
            Cell::Empty,
            Cell::Empty,
            Cell::O,
            Cell::Empty,
        ];

        b.iter(|| {
            let mut board = Board::from_cells(cells);
            best_move(&mut board, Player::X, Player::X)
        });
    });
}

fn bench_full_selfplay_game(c: &mut Criterion) {
    c.bench_function("minimax_full_selfplay_game", |b| {
        b.iter(|| {
            let mut controller = GameController::new();
            controller.new_game(GameMode::HumanVsAuto {
                auto_player: Player::X,
            });

            loop {
                let outcome = if controller.current_player() == Player::X {
                    controller.request_auto_move().map(|(_, o)| o)
                } else {
                    let mut board = Board::from_cells(controller.current_board());
                    let chosen = best_move(&mut board, Player::O, Player::O)
                        .expect("non-terminal position has a move");
                    controller.apply_move(chosen.index)
                };
                if outcome.expect("legal move") != Outcome::InProgress {
                    break;
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_best_move_empty_board,
    bench_best_move_midgame,
    bench_full_selfplay_game
);
criterion_main!(benches);
