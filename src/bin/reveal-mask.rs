use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use reveal_mask::{Fps, MaskConfig, Trace};

#[derive(Parser, Debug)]
#[command(name = "reveal-mask", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a recorded trace and print per-frame channel samples as JSON.
    Replay(ReplayArgs),
    /// Print the raw sink pushes a trace produces.
    Pushes(PushesArgs),
    /// Print the default configuration.
    Config,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input trace JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Mask configuration JSON (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host animation frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write output here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PushesArgs {
    /// Input trace JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Mask configuration JSON (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write output here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Pushes(args) => cmd_pushes(args),
        Command::Config => emit(&MaskConfig::default(), None),
    }
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let trace = load_trace(&args.in_path)?;
    let config = load_config(args.config.as_deref())?;
    let fps = Fps::new(args.fps, 1)?;
    let frames = reveal_mask::replay(&trace, &config, fps)?;
    emit(&frames, args.out.as_deref())
}

fn cmd_pushes(args: PushesArgs) -> anyhow::Result<()> {
    let trace = load_trace(&args.in_path)?;
    let config = load_config(args.config.as_deref())?;
    let pushes = reveal_mask::record_pushes(&trace, &config)?;
    emit(&pushes, args.out.as_deref())
}

fn load_trace(path: &Path) -> anyhow::Result<Trace> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read trace {}", path.display()))?;
    Trace::from_json_str(&s).with_context(|| format!("parse trace {}", path.display()))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MaskConfig> {
    match path {
        Some(p) => Ok(MaskConfig::from_path(p)?),
        None => Ok(MaskConfig::default()),
    }
}

fn emit<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {}", parent.display()))?;
            }
            std::fs::write(path, json).with_context(|| format!("write {}", path.display()))
        }
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
