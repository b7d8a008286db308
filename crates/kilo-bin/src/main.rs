use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{Editor, HELP_MESSAGE, io_ops};
use core_config::{Config, LogConfig};
use core_input::{KeyDecoder, StdinSource};
use core_render::Compositor;
use core_state::{Document, EditorState};
use core_terminal::{TerminalOutput, TermiosBackend, clear_screen, window_size};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser, Debug)]
#[command(name = "kilo", version, about = "A small terminal text editor")]
struct Args {
    /// File to edit. A path that does not exist yet is created on first save.
    pub path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = core_config::load_from(None);
    let _log_guard = configure_logging(&config.log);
    install_panic_hook();

    let mut backend = TermiosBackend::new();
    match run(&args, &config, &mut backend) {
        Ok(()) => {
            info!(target: "runtime", "shutdown");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(target: "runtime", error = %format!("{e:#}"), "fatal");
            eprintln!("kilo: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Raw mode is held only inside this call; the screen is cleared and the
/// terminal restored before the caller reports anything.
fn run(args: &Args, config: &Config, backend: &mut TermiosBackend) -> Result<()> {
    let guard = backend.enter_guard().context("enable raw mode")?;
    let mut out = TerminalOutput::stdout().context("open terminal output")?;
    let result = edit(args.path.as_deref(), config, &mut out);
    let cleared = clear_screen(&mut out);
    drop(guard);
    result?;
    cleared.context("clear screen")?;
    Ok(())
}

fn edit(path: Option<&Path>, config: &Config, out: &mut TerminalOutput) -> Result<()> {
    let (rows, cols) = window_size(&mut StdinSource::new(), out).context("get window size")?;
    let document = match path {
        Some(p) => io_ops::open_document(p).with_context(|| format!("open {}", p.display()))?,
        None => Document::new(),
    };
    info!(target: "runtime.startup", rows, cols, lines = document.num_rows(), "bootstrap_complete");

    let mut state = EditorState::new(document, rows, cols);
    state.set_status(HELP_MESSAGE);
    let compositor = Compositor::new(
        format!("Kilo editor -- version {}", env!("CARGO_PKG_VERSION")),
        config.editor.message_timeout(),
    );
    let mut editor = Editor::new(
        state,
        KeyDecoder::new(StdinSource::new()),
        out,
        compositor,
        config.editor.quit_times,
    );
    editor.run()?;
    Ok(())
}

/// File logging is opt-in: without `[log] file` no subscriber is installed.
fn configure_logging(cfg: &LogConfig) -> Option<WorkerGuard> {
    let path = cfg.file.as_ref()?;
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let name = path.file_name()?;
    let file_appender = tracing_appender::rolling::never(dir, name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = tracing_subscriber::EnvFilter::try_new(&cfg.filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Some(guard),
        // Global subscriber already installed; dropping the guard shuts the writer down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}
