use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gripline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize a timeline from a recorded action log.
    Timeline(TimelineArgs),
    /// Run a full session and write the host command plan as JSON.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Action log JSON (first entry must be `init`).
    #[arg(long)]
    log: PathBuf,

    /// Move speed in distance units per time unit.
    #[arg(long, default_value_t = gripline::DEFAULT_VELOCITY)]
    velocity: f64,

    /// Time cost of each open/close.
    #[arg(long, default_value_t = gripline::DEFAULT_GRIP_DURATION)]
    grip_duration: f64,

    /// Pre/post roll around the motion.
    #[arg(long, default_value_t = gripline::DEFAULT_PADDING)]
    padding: f64,

    /// Output timeline JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Session config JSON. Falls back to `$GRIPLINE_CONFIG`, then `gripline-config.json`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Action log JSON replayed through the session gripper.
    #[arg(long)]
    log: PathBuf,

    /// Run identifier embedded in the render output name.
    #[arg(long, default_value_t = 0)]
    run: u64,

    /// Output plan JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn read_log(path: &Path) -> anyhow::Result<gripline::ActionLog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read action log '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse action log '{}'", path.display()))
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let log = read_log(&args.log)?;
    let timing = gripline::TimingModel::new(args.velocity, args.grip_duration)?;
    let synth = gripline::TimelineSynthesizer::new(timing, args.padding)?;
    let timeline = synth.synthesize(&log);
    let json = serde_json::to_string_pretty(&timeline)?;

    match args.out {
        Some(out) => {
            gripline::ensure_parent_dir(&out)?;
            std::fs::write(&out, json)
                .with_context(|| format!("write timeline '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => gripline::SessionConfig::from_path(path)?,
        None => gripline::SessionConfig::from_env()?,
    };
    let log = read_log(&args.log)?;
    let start = config.input.resolve_start(log.init_pose())?;

    let mut plan = gripline::CommandPlan::new();
    let mut session = gripline::Session::begin(
        &mut plan,
        config,
        gripline::RunId(args.run),
        start,
    )?;
    for action in log.commands() {
        session.issue(action)?;
    }
    let report = session.finish()?;

    plan.write_to(&args.out)?;
    eprintln!(
        "wrote {} ({} keyframes, frames {}..{}, render -> {})",
        args.out.display(),
        report.timeline.keyframes.len(),
        report.frame_range.0,
        report.frame_range.1,
        report.output.display()
    );
    Ok(())
}
