//! scrawl - handwritten equation capture with remote recognition

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use ink::NullSurface;
use scrawl_config::ScrawlConfig;
use scrawl_ipc::EquationInput;
use scrawl_recognition::RemoteRecognizer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod presenter;
mod script;
mod session;
mod svg;

use presenter::TerminalPresenter;
use script::Script;
use session::Session;
use svg::SvgSurface;

/// Capture handwritten strokes and recognize them as equations.
#[derive(Parser)]
#[command(name = "scrawl", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a recorded input script and recognize the drawing.
    Replay {
        /// JSON event script.
        script: PathBuf,

        /// Write the final drawing as SVG.
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Print the request payload a script would produce, without sending it.
    Payload {
        /// JSON event script.
        script: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scrawl=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => ScrawlConfig::from_file(path)?,
        None => ScrawlConfig::default(),
    };
    config.apply_env()?;

    match cli.command {
        Command::Replay { script, svg } => run_replay(&config, &script, svg.as_deref()).await,
        Command::Payload { script } => run_payload(&config, &script),
    }
}

async fn run_replay(config: &ScrawlConfig, script: &Path, svg: Option<&Path>) -> anyhow::Result<()> {
    let script = Script::from_file(script)
        .with_context(|| format!("loading script {}", script.display()))?;

    let recognizer = RemoteRecognizer::from_config(&config.recognition);
    info!("Replaying {} events against {}", script.events.len(), recognizer.endpoint());

    let mut session = Session::new(
        SvgSurface::new(),
        Some(recognizer),
        TerminalPresenter::stdout(),
        &config.recognition,
    )
    .with_origin(script.origin);

    for event in &script.events {
        session.handle(event.to_input());
        session.try_apply_ready();
    }
    if session.in_flight() > 0 {
        info!("Waiting for {} outstanding requests", session.in_flight());
    }
    session.drain_responses().await;

    let state = session.control_state();
    println!(
        "strokes: {} (undo: {}, redo: {})",
        session.controller().history().len(),
        state.can_undo,
        state.can_redo
    );
    if let Some(formula) = session.presenter().current() {
        println!("final: {formula}");
    }

    if let Some(path) = svg {
        let document = session.controller().surface().to_svg(&config.canvas);
        std::fs::write(path, document).with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote drawing to {}", path.display());
    }

    Ok(())
}

fn run_payload(config: &ScrawlConfig, script: &Path) -> anyhow::Result<()> {
    let script = Script::from_file(script)
        .with_context(|| format!("loading script {}", script.display()))?;

    let mut session: Session<RemoteRecognizer, _, _> = Session::new(
        NullSurface,
        None,
        TerminalPresenter::new(std::io::sink()),
        &config.recognition,
    )
    .with_origin(script.origin);

    for event in &script.events {
        session.handle(event.to_input());
    }

    let input = EquationInput::new(
        session.controller().history().to_components(),
        session.result_type(),
    );
    println!("{}", input.to_json_string()?);
    Ok(())
}
