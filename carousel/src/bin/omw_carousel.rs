//! omw-carousel CLI binary
//!
//! Developer tooling for the landing-page carousel: validate content, run
//! the state machine against a virtual clock, or watch the tokio driver in
//! real time.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use omw_carousel::{
    Carousel, CarouselConfig, CarouselSnapshot, ItemRepository, Motion, Role, Transition,
};

/// Testimonial carousel tooling.
#[derive(Parser, Debug)]
#[command(name = "omw-carousel")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate testimonials and config, then list the records.
    Check(Source),
    /// Drive the carousel with a virtual clock and print every transition.
    Simulate(SimulateArgs),
    /// Run the autoplay driver in real time until Ctrl+C.
    Play(PlayArgs),
}

#[derive(Args, Debug, Clone)]
struct Source {
    /// Testimonials JSON (array of records)
    testimonials: PathBuf,
    /// Carousel TOML config (defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct SimulateArgs {
    #[command(flatten)]
    source: Source,
    /// Number of autoplay ticks to simulate
    #[arg(long, default_value = "10")]
    ticks: u64,
    /// Emit JSON lines instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct PlayArgs {
    #[command(flatten)]
    source: Source,
    /// Override the autoplay interval
    #[arg(long)]
    interval_ms: Option<u64>,
}

/// One printed line of `simulate`.
#[derive(Debug, Serialize)]
struct Frame {
    tick: u64,
    now_ms: u64,
    from: usize,
    to: usize,
    motion: Motion,
    offset: f64,
    dot: usize,
    strip: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    let result = match cli.command {
        Command::Check(source) => run_check(&source),
        Command::Simulate(args) => run_simulate(&args),
        Command::Play(args) => run_play(&args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[omw-carousel] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load(source: &Source) -> Result<(ItemRepository, CarouselConfig)> {
    let repository = ItemRepository::load(&source.testimonials)
        .with_context(|| format!("invalid testimonials in {}", source.testimonials.display()))?;
    let config = match &source.config {
        Some(path) => load_config(path)?,
        None => CarouselConfig::default(),
    };
    Ok((repository, config))
}

fn load_config(path: &Path) -> Result<CarouselConfig> {
    CarouselConfig::load_from_path(path)
        .with_context(|| format!("invalid carousel config {}", path.display()))
}

fn run_check(source: &Source) -> Result<()> {
    let (repository, config) = load(source)?;
    println!(
        "{} testimonials, {} looped slots, card width {} px, autoplay every {} ms",
        repository.len(),
        repository.looped_len(),
        config.card_width,
        config.autoplay_interval_ms
    );
    for record in repository.list() {
        println!(
            "  #{:<3} {} ({}): \"{}\"",
            record.id, record.name, record.company, record.quote
        );
    }
    Ok(())
}

fn run_simulate(args: &SimulateArgs) -> Result<()> {
    let (repository, config) = load(&args.source)?;
    let mut carousel = Carousel::new(repository, &config, 0)?;

    for tick in 1..=args.ticks {
        let now = tick.saturating_mul(config.autoplay_interval_ms);
        let update = carousel.tick(now);
        let settled = carousel.settle();
        for transition in update.transitions().chain(settled.transitions()) {
            let frame = frame(&carousel, tick, now, transition);
            if args.json {
                println!("{}", serde_json::to_string(&frame)?);
            } else {
                println!(
                    "tick {:>3} @ {:>6} ms  {:>2} -> {:<2} {:<8} offset {:>8.1}  dot {}  {}",
                    frame.tick,
                    frame.now_ms,
                    frame.from,
                    frame.to,
                    format!("{:?}", frame.motion).to_lowercase(),
                    frame.offset,
                    frame.dot,
                    frame.strip
                );
            }
        }
    }
    Ok(())
}

fn frame(carousel: &Carousel, tick: u64, now_ms: u64, transition: Transition) -> Frame {
    let snapshot = carousel.snapshot();
    Frame {
        tick,
        now_ms,
        from: transition.from,
        to: transition.to,
        motion: transition.motion,
        offset: omw_carousel::position::offset(transition.to, carousel.card_width()),
        dot: omw_carousel::position::progress_dot(transition.to, snapshot.base_len),
        strip: strip(snapshot.roles.len(), transition.to, snapshot.base_len),
    }
}

/// Roles as characters with the copies separated: `#` current, `+` neighbor.
fn strip(len: usize, current: usize, base_len: usize) -> String {
    (0..len)
        .map(|i| {
            let c = match omw_carousel::role::role(i, current) {
                Role::Current => '#',
                Role::Neighbor => '+',
                Role::Far => '.',
            };
            if i > 0 && i % base_len == 0 {
                format!("|{c}")
            } else {
                c.to_string()
            }
        })
        .collect()
}

async fn run_play(args: &PlayArgs) -> Result<()> {
    let (repository, mut config) = load(&args.source)?;
    if let Some(ms) = args.interval_ms {
        config.autoplay_interval_ms = ms;
    }

    let shutdown = CancellationToken::new();
    let shutdown_signal = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl+C; stopping");
        }
        shutdown_signal.cancel();
    });

    let (handle, task) = omw_carousel::runtime::spawn(repository, &config, shutdown.clone())?;
    info!(
        interval_ms = config.autoplay_interval_ms,
        "playing; Ctrl+C to stop"
    );

    let mut snapshots = handle.subscribe();
    print_snapshot(&snapshots.borrow_and_update());
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                print_snapshot(&snapshot);
                // nothing animates here, so every step settles at once
                if snapshot.pending_rewind.is_some() {
                    handle.settle();
                }
            }
        }
    }

    let carousel = task.await.context("carousel driver panicked")?;
    println!("stopped at index {}", carousel.current_index());
    Ok(())
}

fn print_snapshot(snapshot: &CarouselSnapshot) {
    println!(
        "index {:>2}  dot {}  offset {:>8.1}  {}",
        snapshot.current_index,
        snapshot.progress_dot_index,
        snapshot.offset,
        strip(
            snapshot.roles.len(),
            snapshot.current_index,
            snapshot.base_len
        )
    );
}
