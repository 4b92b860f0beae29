#![forbid(unsafe_code)]

//! stepviz demo: play an algorithm trace in the terminal.
//!
//! # Running
//!
//! ```sh
//! cargo run -p stepviz-demo -- --list
//! cargo run -p stepviz-demo -- binary-search
//! cargo run -p stepviz-demo -- permutations --speed-ms 50
//! cargo run -p stepviz-demo -- level-order --export trace.json
//! ```
//!
//! The demo subscribes a plain-text renderer to the player, loads the chosen
//! problem's trace, plays it to completion, and exits. `--export` writes the
//! generated trace as JSON before playing.

mod render;

use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;

use stepviz_playback::{Player, PlayerConfig, trace_for};
use stepviz_trace::{Problem, catalog, find};
use tracing_subscriber::EnvFilter;

const DEFAULT_DEMO_SPEED: Duration = Duration::from_millis(250);

struct Args {
    problem_id: Option<String>,
    speed: Duration,
    export: Option<String>,
    list: bool,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut args = Args {
        problem_id: None,
        speed: DEFAULT_DEMO_SPEED,
        export: None,
        list: false,
    };
    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => args.list = true,
            "--speed-ms" => {
                let value = iter.next().ok_or("--speed-ms needs a value")?;
                let ms: u64 = value
                    .parse()
                    .map_err(|_| format!("invalid --speed-ms value: {value}"))?;
                if ms == 0 {
                    return Err("--speed-ms must be positive".into());
                }
                args.speed = Duration::from_millis(ms);
            }
            "--export" => {
                args.export = Some(iter.next().ok_or("--export needs a path")?.clone());
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown flag: {other}"));
            }
            other => {
                if args.problem_id.is_some() {
                    return Err(format!("unexpected argument: {other}"));
                }
                args.problem_id = Some(other.to_string());
            }
        }
    }
    Ok(args)
}

fn print_catalog() {
    println!("available problems:");
    for problem in catalog() {
        println!(
            "  {:<20} {:<24} [{}] {}",
            problem.id,
            problem.pattern.label(),
            problem.difficulty,
            problem.name
        );
    }
}

fn pick_problem(id: Option<&str>) -> Result<&'static Problem, String> {
    match id {
        Some(id) => find(id).ok_or_else(|| {
            format!("unknown problem: {id} (use --list to see the catalog)")
        }),
        // first catalog entry is the default, as in the original selector
        None => catalog().first().ok_or_else(|| "catalog is empty".to_string()),
    }
}

fn run(raw: &[String]) -> Result<(), Box<dyn Error>> {
    let args = parse_args(raw)?;
    if args.list {
        print_catalog();
        return Ok(());
    }

    let problem = pick_problem(args.problem_id.as_deref())?;
    tracing::debug!(problem = problem.id, speed_ms = args.speed.as_millis() as u64, "starting playback");
    println!("{} - {} ({})", problem.name, problem.pattern, problem.difficulty);
    println!("{}", problem.description);
    println!();

    let trace = trace_for(problem);
    if let Some(path) = &args.export {
        let json = serde_json::to_string_pretty(trace.as_slice())?;
        std::fs::write(path, json)?;
        println!("exported {} snapshots to {path}", trace.len());
    }

    let player = Player::with_config(PlayerConfig::default().with_speed(args.speed));
    // play/pause transitions keep the cursor in place; only repaint on movement
    let last_painted: std::sync::Mutex<Option<usize>> = std::sync::Mutex::new(None);
    let _guard = player.observe(move |state| {
        let mut last = last_painted.lock().unwrap_or_else(|e| e.into_inner());
        if *last == Some(state.current_step()) {
            return;
        }
        *last = Some(state.current_step());
        println!("{}", render::render_step(state));
        if let Some(cells) = render::render_cells(stepviz_playback::current_snapshot(state)) {
            println!("{cells}");
        }
    });

    player.load_trace(trace);
    player.play();
    while player.summary().playing {
        std::thread::sleep(Duration::from_millis(20));
    }

    let summary = player.summary();
    println!();
    println!(
        "finished at step {}/{}",
        summary.current_step + 1,
        summary.trace_len
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    match run(&raw) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_problem_and_flags() {
        let raw: Vec<String> = ["binary-search", "--speed-ms", "50"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let args = parse_args(&raw).unwrap();
        assert_eq!(args.problem_id.as_deref(), Some("binary-search"));
        assert_eq!(args.speed, Duration::from_millis(50));
        assert!(!args.list);
    }

    #[test]
    fn rejects_zero_speed() {
        let raw: Vec<String> = ["--speed-ms", "0"].iter().map(|s| s.to_string()).collect();
        assert!(parse_args(&raw).is_err());
    }

    #[test]
    fn rejects_unknown_flags() {
        let raw = vec!["--frobnicate".to_string()];
        assert!(parse_args(&raw).is_err());
    }

    #[test]
    fn default_problem_is_the_first_catalog_entry() {
        let problem = pick_problem(None).unwrap();
        assert_eq!(problem.id, catalog()[0].id);
    }

    #[test]
    fn unknown_problem_is_an_error() {
        assert!(pick_problem(Some("nope")).is_err());
    }
}
