mod config;
#[macro_use]
mod logger;

use clap::Parser;
use config::{AutoSide, Config, ConfigMode, get_config_path, load_config, save_config};
use std::io::Write;
use std::time::Duration;
use tictactoe_engine::{Cell, GameController, GameMode, Outcome};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to the YAML config file; defaults to a file next to the
    /// executable.
    #[arg(long)]
    config: Option<String>,

    /// Override the configured game mode.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    TwoHuman,
    HumanVsAuto,
}

impl From<ModeArg> for ConfigMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoHuman => ConfigMode::TwoHuman,
            ModeArg::HumanVsAuto => ConfigMode::HumanVsAuto,
        }
    }
}

fn main() {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(get_config_path);
    let mut config = match load_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            log!("{}; using defaults", err);
            Config::default()
        }
    };
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }

    loop {
        let mode = select_mode(&config);
        run_game(mode, Duration::from_millis(config.auto_move_delay_ms));

        if !prompt_yes("Play again? [y/N] ") {
            break;
        }
    }

    if let Err(err) = save_config(&config_path, &config) {
        log!("{}", err);
    }
}

fn select_mode(config: &Config) -> GameMode {
    match config.mode {
        ConfigMode::TwoHuman => GameMode::TwoHuman,
        ConfigMode::HumanVsAuto => {
            let auto_player = config.auto_side.resolve();
            if config.auto_side == AutoSide::Random {
                log!("Automated side drawn at random: {}", auto_player);
            }
            GameMode::HumanVsAuto { auto_player }
        }
    }
}

fn run_game(mode: GameMode, auto_move_delay: Duration) {
    let mut controller = GameController::new();
    controller.new_game(mode);

    match mode {
        GameMode::TwoHuman => log!("New game: two players, X moves first"),
        GameMode::HumanVsAuto { auto_player } => {
            log!(
                "New game: you are {}, the engine plays {}",
                auto_player.opponent(),
                auto_player
            );
        }
    }

    loop {
        render(&controller.current_board());

        let outcome = if is_auto_turn(&controller) {
            log!("{} is thinking...", controller.current_player());
            std::thread::sleep(auto_move_delay);
            match controller.request_auto_move() {
                Ok((index, outcome)) => {
                    log!("Engine plays cell {}", index);
                    outcome
                }
                Err(err) => {
                    log!("{}", err);
                    return;
                }
            }
        } else {
            match human_turn(&mut controller) {
                Some(outcome) => outcome,
                None => {
                    log!("Game abandoned");
                    return;
                }
            }
        };

        if outcome != Outcome::InProgress {
            render(&controller.current_board());
            report(&controller, outcome);
            return;
        }
    }
}

fn is_auto_turn(controller: &GameController) -> bool {
    matches!(
        controller.mode(),
        Some(GameMode::HumanVsAuto { auto_player }) if auto_player == controller.current_player()
    )
}

/// Prompts until a legal move is applied. Returns `None` if the player
/// quits.
fn human_turn(controller: &mut GameController) -> Option<Outcome> {
    loop {
        print!(
            "Player {}, choose a cell [0-8] (q quits): ",
            controller.current_player()
        );
        std::io::stdout().flush().ok();

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return None;
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return None;
        }

        let index: usize = match input.parse() {
            Ok(index) => index,
            Err(_) => {
                log!("'{}' is not a cell index", input);
                continue;
            }
        };

        match controller.apply_move(index) {
            Ok(outcome) => return Some(outcome),
            Err(err) => log!("{}", err),
        }
    }
}

fn render(cells: &[Cell; 9]) {
    for row in 0..3 {
        let line: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match cells[index] {
                    Cell::Empty => index.to_string(),
                    Cell::X => "X".to_string(),
                    Cell::O => "O".to_string(),
                }
            })
            .collect();
        println!(" {}", line.join(" | "));
        if row < 2 {
            println!("---+---+---");
        }
    }
}

fn report(controller: &GameController, outcome: Outcome) {
    match outcome {
        Outcome::Win(player) => match controller.winning_line() {
            Ok(Some(line)) => log!("{} wins on line {:?}", player, line),
            Ok(None) => log!("{} wins", player),
            Err(err) => log!("{} wins ({})", player, err),
        },
        Outcome::Draw => log!("It's a draw"),
        Outcome::InProgress => {}
    }
}

fn prompt_yes(question: &str) -> bool {
    print!("{}", question);
    std::io::stdout().flush().ok();
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    line.trim().eq_ignore_ascii_case("y")
}
