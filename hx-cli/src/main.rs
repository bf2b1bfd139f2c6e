//! hx: Hex demo CLI.
//!
//! Subcommands:
//! - tournament    AI vs AI series with live board rendering

use std::env;
use std::io::{self, Write};
use std::process;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, execute, queue};

use hx_core::{toggle_player, HexBoard, EMPTY, PLAYER_ONE};
use hx_logging::{DecisionEventV1, EventLog, GameEventV1};
use hx_mcts::{get_move_with, Difficulty, SearchParams};

struct TournamentConfig {
    size: i32,
    games: u32,
    d1: Difficulty,
    d2: Difficulty,
    delay: Duration,
    log_path: Option<String>,
    params_path: Option<String>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            size: 7,
            games: 4,
            d1: Difficulty::Hard,
            d2: Difficulty::Hard,
            delay: Duration::from_millis(50),
            log_path: None,
            params_path: None,
        }
    }
}

fn parse_difficulty(s: &str) -> Difficulty {
    match s {
        "1" => Difficulty::Easy,
        "2" => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

fn required_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i + 1) {
        Some(v) => v,
        None => {
            eprintln!("Missing value for {flag}");
            process::exit(1);
        }
    }
}

fn cmd_tournament(args: &[String]) {
    let mut cfg = TournamentConfig::default();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"hx tournament

USAGE:
    hx tournament [--size N] [--games G] [--d1 1|2|3] [--d2 1|2|3]
                  [--delay-ms MS] [--log PATH] [--params PATH]

OPTIONS:
    --size N        Board side length (default: 7)
    --games G       Number of games (default: 4)
    --d1 1|2|3      AI #1 difficulty: 1=Easy 2=Medium 3=Hard (default: 3)
    --d2 1|2|3      AI #2 difficulty (default: 3)
    --delay-ms MS   Pause after each rendered move (default: 50)
    --log PATH      Append NDJSON decision/game events to PATH
    --params PATH   Load search parameter overrides from YAML
"#
                );
                return;
            }
            "--size" => {
                let v = required_value(args, i, "--size");
                cfg.size = v.parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --size value: {v}");
                    process::exit(1);
                });
                if cfg.size < 1 {
                    eprintln!("--size must be at least 1");
                    process::exit(1);
                }
                i += 2;
            }
            "--games" => {
                let v = required_value(args, i, "--games");
                cfg.games = v.parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --games value: {v}");
                    process::exit(1);
                });
                i += 2;
            }
            "--d1" => {
                cfg.d1 = parse_difficulty(required_value(args, i, "--d1"));
                i += 2;
            }
            "--d2" => {
                cfg.d2 = parse_difficulty(required_value(args, i, "--d2"));
                i += 2;
            }
            "--delay-ms" => {
                let v = required_value(args, i, "--delay-ms");
                let ms: u64 = v.parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --delay-ms value: {v}");
                    process::exit(1);
                });
                cfg.delay = Duration::from_millis(ms);
                i += 2;
            }
            "--log" => {
                cfg.log_path = Some(required_value(args, i, "--log").to_string());
                i += 2;
            }
            "--params" => {
                cfg.params_path = Some(required_value(args, i, "--params").to_string());
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `hx tournament`: {other}");
                eprintln!("Run `hx tournament --help` for usage.");
                process::exit(1);
            }
        }
    }

    if let Err(e) = run_tournament(&cfg) {
        eprintln!("tournament failed: {e}");
        process::exit(1);
    }
}

struct Screen<'a> {
    out: io::StdoutLock<'a>,
}

impl Screen<'_> {
    fn progress_bar(&mut self, current: u32, total: u32) -> io::Result<()> {
        const WIDTH: u32 = 20;
        let filled = current * WIDTH / total.max(1);

        write!(self.out, "[")?;
        for j in 0..WIDTH {
            if j < filled {
                write!(self.out, "=")?;
            } else if j == filled {
                write!(self.out, ">")?;
            } else {
                write!(self.out, " ")?;
            }
        }
        writeln!(self.out, "] {}%", current * 100 / total.max(1))
    }

    fn update(
        &mut self,
        board: &HexBoard,
        cfg: &TournamentConfig,
        game_idx: u32,
        wins: (u32, u32),
        mover_is_algo1: bool,
        mover: u8,
        last: (i32, i32),
    ) -> io::Result<()> {
        let name1 = format!("AI#1({})", cfg.d1.label());
        let name2 = format!("AI#2({})", cfg.d2.label());
        let mover_name = if mover_is_algo1 { &name1 } else { &name2 };

        // Home the cursor without clearing to avoid flicker; erase below
        // the redraw at the end.
        queue!(self.out, cursor::MoveTo(0, 0))?;

        writeln!(self.out, "=== TOURNAMENT ({}/{}) ===", game_idx + 1, cfg.games)?;
        self.progress_bar(game_idx, cfg.games)?;
        writeln!(
            self.out,
            "Total Score: {name1}: {} | {name2}: {}        ",
            wins.0, wins.1
        )?;
        writeln!(self.out, "{}", "-".repeat(40))?;

        let styled_mover = if mover == PLAYER_ONE {
            mover_name.clone().red()
        } else {
            mover_name.clone().blue()
        };
        writeln!(
            self.out,
            "Last Move: {} -> ({}, {})        ",
            styled_mover, last.0, last.1
        )?;

        board.render(&mut self.out)?;

        queue!(self.out, Clear(ClearType::FromCursorDown))?;
        self.out.flush()
    }
}

fn run_tournament(cfg: &TournamentConfig) -> io::Result<()> {
    let params = match &cfg.params_path {
        Some(path) => match SearchParams::load(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("bad --params file: {e}");
                process::exit(1);
            }
        },
        None => SearchParams::default(),
    };

    let mut log = match &cfg.log_path {
        Some(path) => match EventLog::open_append(path) {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("cannot open --log file: {e}");
                process::exit(1);
            }
        },
        None => None,
    };

    let stdout = io::stdout();
    let mut screen = Screen { out: stdout.lock() };
    execute!(screen.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let mut wins1 = 0u32;
    let mut wins2 = 0u32;
    let mut moves_total = 0u64;
    let started = Instant::now();

    for game_idx in 0..cfg.games {
        let mut board = HexBoard::new(cfg.size, cfg.size);

        // Even games: AI#1 plays RED (player 1). Odd games: sides swap.
        let p1_is_algo1 = game_idx % 2 == 0;
        let red_diff = if p1_is_algo1 { cfg.d1 } else { cfg.d2 };
        let blue_diff = if p1_is_algo1 { cfg.d2 } else { cfg.d1 };

        let mut player = PLAYER_ONE;
        let mut move_count = 0u32;

        loop {
            let winner = board.check_win();
            if winner != EMPTY {
                let algo1_won = (winner == PLAYER_ONE) == p1_is_algo1;
                if algo1_won {
                    wins1 += 1;
                } else {
                    wins2 += 1;
                }
                if let Some(log) = &mut log {
                    let event = GameEventV1 {
                        event: GameEventV1::EVENT,
                        game_id: game_idx as u64,
                        rows: cfg.size,
                        cols: cfg.size,
                        winner,
                        moves: move_count,
                    };
                    if let Err(e) = log.append(&event).and_then(|_| log.flush()) {
                        eprintln!("log write failed: {e}");
                    }
                }
                break;
            }

            let difficulty = if player == PLAYER_ONE { red_diff } else { blue_diff };
            let (mv, report) = get_move_with(&board, player, difficulty, &params);
            if mv < 0 {
                break;
            }

            let (r, c) = board.coord(mv as usize);
            board.make_move(r, c, player);
            move_count += 1;

            if let Some(log) = &mut log {
                let event = DecisionEventV1 {
                    event: DecisionEventV1::EVENT,
                    game_id: game_idx as u64,
                    ply: move_count,
                    player,
                    difficulty: difficulty.label(),
                    row: r,
                    col: c,
                    elapsed_ms: report.elapsed.as_millis() as u64,
                    iterations: report.iterations,
                    tree_nodes: report.nodes as u64,
                    best_visits: report.best_visits,
                };
                if let Err(e) = log.append(&event) {
                    eprintln!("log write failed: {e}");
                }
            }

            let mover_is_algo1 = (player == PLAYER_ONE) == p1_is_algo1;
            screen.update(
                &board,
                cfg,
                game_idx,
                (wins1, wins2),
                mover_is_algo1,
                player,
                (r, c),
            )?;
            thread::sleep(cfg.delay);

            player = toggle_player(player);
        }

        moves_total += move_count as u64;
    }

    let elapsed = started.elapsed();
    writeln!(screen.out)?;
    writeln!(screen.out, "=== FINAL STATISTICS ===")?;
    writeln!(screen.out, "AI#1({}) Total Wins: {wins1}", cfg.d1.label())?;
    writeln!(screen.out, "AI#2({}) Total Wins: {wins2}", cfg.d2.label())?;
    writeln!(screen.out, "Total Time: {:.2}s", elapsed.as_secs_f64())?;
    writeln!(
        screen.out,
        "Avg Moves:  {}",
        moves_total / u64::from(cfg.games.max(1))
    )?;
    screen.out.flush()
}

fn print_help() {
    eprintln!(
        r#"hx - Hex engine CLI

USAGE:
    hx <COMMAND> [OPTIONS]

COMMANDS:
    tournament      AI vs AI series with live board rendering

OPTIONS:
    -h, --help      Print this help message
    -V, --version   Print version

Run `hx <COMMAND> --help` for command options.
"#
    );
}

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("tournament") => cmd_tournament(&args[2..]),
        Some("-V") | Some("--version") => {
            println!("hx {}", env!("CARGO_PKG_VERSION"));
        }
        Some("-h") | Some("--help") | None => print_help(),
        Some(other) => {
            eprintln!("Unknown command: {other}");
            print_help();
            process::exit(1);
        }
    }
}
