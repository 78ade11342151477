//! CLI entry point for vimdemux.
//!
//! The editor calls `vimdemux run <path> <line>` or `vimdemux debug <path>
//! <line>` and shows stdout as the status message.

mod cli;

use clap::Parser;
use vimdemux::config::{initialize_default_global_config, load_config, ConfigInitResult};
use vimdemux::error::DemuxError;
use vimdemux::logging;
use vimdemux::mux::Tmux;
use vimdemux::orchestrator::{Orchestrator, TargetLocation};
use vimdemux::render::Renderer;
use vimdemux::Mode;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::Args::parse();
    logging::init();
    let renderer = Renderer::new(!args.no_color, args.json);

    let (mode, location) = match args.command {
        cli::Command::Init => {
            run_init(&renderer);
            return;
        }
        cli::Command::Run(location) => (Mode::Run, location),
        cli::Command::Debug(location) => (Mode::Debug, location),
    };

    // Loaded exactly once; the orchestrator owns it from here on.
    let loaded = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => fail(&renderer, DemuxError::from(e)),
    };
    tracing::debug!(source = %loaded.source, "using configuration");

    let mux = Tmux::new().with_current_pane(args.pane);
    let orchestrator = Orchestrator::new(loaded.config, mux);
    let target = TargetLocation::new(location.path, location.line);

    if args.dry_run {
        match orchestrator.prepare(mode, &target).await {
            Ok(prepared) => renderer.report(&prepared),
            Err(e) => fail(&renderer, e),
        }
        return;
    }

    let result = match mode {
        Mode::Run => orchestrator.run(&target).await,
        Mode::Debug => orchestrator.debug(&target).await,
    };
    match result {
        Ok(dispatch) => renderer.report(&dispatch),
        Err(e) => fail(&renderer, e),
    }
}

fn run_init(renderer: &Renderer) {
    match initialize_default_global_config() {
        Ok(ConfigInitResult::Created { path }) => {
            renderer.status(&format!("wrote {}", path.display()));
        }
        Ok(ConfigInitResult::AlreadyInitialized { path }) => {
            renderer.status(&format!("{} already exists; left unchanged", path.display()));
        }
        Err(e) => fail(renderer, DemuxError::from(e)),
    }
}

fn fail(renderer: &Renderer, error: DemuxError) -> ! {
    tracing::debug!(error = ?error, "invocation failed");
    renderer.error(&error.to_string());
    std::process::exit(1);
}
