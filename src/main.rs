//! Headless replay runner (default binary).
//!
//! Reads a replay script, plays it against a fresh session and prints the final
//! observation as one JSON line on stdout (or one line per step with
//! `--every-step`). Progress and the summary go to stderr.

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use blockfall::core::{
    Board, GameConfig, GameState, KindSource, ScriptedSource, UniformSource,
};
use blockfall::protocol::ObservationMessage;
use blockfall::replay::{parse_script, run_script, ReplayStep};

#[derive(Parser, Debug)]
#[command(name = "blockfall-replay", version, about = "Replay a scripted falling-block session")]
struct Args {
    /// Replay script (reads stdin when omitted)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Seed for the uniform piece generator (random when absent)
    #[arg(long, env = "BLOCKFALL_SEED")]
    seed: Option<u64>,

    /// Fixed piece sequence such as "IOTSZJL", replayed cyclically (overrides --seed)
    #[arg(long)]
    pieces: Option<String>,

    /// Print an observation after every step, not only at the end
    #[arg(long)]
    every_step: bool,

    /// Gravity interval at level 1 (raised to the 100ms floor if lower)
    #[arg(long)]
    fall_interval_ms: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("replay: cannot read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("replay: cannot read stdin")?;
            buf
        }
    };
    let steps = parse_script(&text)?;

    let mut config = GameConfig::default();
    if let Some(ms) = args.fall_interval_ms {
        config = config.with_initial_fall_interval_ms(ms);
    }

    match &args.pieces {
        Some(pieces) => {
            let source = ScriptedSource::parse(pieces)
                .ok_or_else(|| anyhow!("replay: invalid piece sequence {:?}", pieces))?;
            if args.seed.is_some() {
                eprintln!("[Replay] --pieces given, ignoring seed");
            }
            eprintln!("[Replay] Scripted pieces: {}", pieces.trim());
            run(source, config, &steps, args.every_step)
        }
        None => {
            let source = match args.seed {
                Some(seed) => UniformSource::new(seed),
                None => UniformSource::from_entropy(),
            };
            eprintln!("[Replay] Seed: {}", source.seed());
            run(source, config, &steps, args.every_step)
        }
    }
}

fn run<S: KindSource>(
    source: S,
    config: GameConfig,
    steps: &[ReplayStep],
    every_step: bool,
) -> Result<()> {
    let mut game: GameState<S> = GameState::from_parts(source, config, Board::new());
    if game.game_over() {
        eprintln!("[Replay] Spawn blocked on an empty board");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut seq: u64 = 0;
    let mut write_error: Option<anyhow::Error> = None;
    let mut announced_over = game.game_over();

    let report = run_script(&mut game, steps, |game, step, lock| {
        if let (true, Some(event)) = (every_step, lock) {
            eprintln!(
                "[Replay] Locked {} ({} lines, +{})",
                event.kind.as_str(),
                event.lines_cleared,
                event.score_awarded
            );
        }
        if game.game_over() && !announced_over {
            announced_over = true;
            if let ReplayStep::Action(action) = step {
                eprintln!("[Replay] Game over after {}", action.as_str());
            } else {
                eprintln!("[Replay] Game over");
            }
        }
        if !every_step || write_error.is_some() {
            return;
        }

        seq += 1;
        let obs = ObservationMessage::from_snapshot(seq, &game.snapshot(), lock);
        if let Err(e) = write_observation(&mut out, &obs) {
            write_error = Some(e);
        }
    });

    if let Some(e) = write_error {
        return Err(e);
    }

    if !every_step {
        seq += 1;
        let obs = ObservationMessage::from_snapshot(seq, &game.snapshot(), None);
        write_observation(&mut out, &obs)?;
    }
    out.flush().context("replay: cannot write output")?;

    eprintln!(
        "[Replay] Done: {} steps, {} locks, {} lines, score {}, level {}{}{}",
        report.steps_applied,
        report.locks,
        report.lines_cleared,
        game.score(),
        game.level(),
        if report.quit { ", quit" } else { "" },
        if game.game_over() { ", game over" } else { "" },
    );
    Ok(())
}

fn write_observation(out: &mut impl Write, obs: &ObservationMessage) -> Result<()> {
    serde_json::to_writer(&mut *out, obs).context("replay: cannot encode observation")?;
    writeln!(out).context("replay: cannot write output")?;
    Ok(())
}
