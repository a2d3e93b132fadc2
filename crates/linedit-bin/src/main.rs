//! linedit entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{Action, CommandParser, dispatch};
use core_config::{RenderConfig, load_from};
use core_render::render;
use core_state::{EditorState, HistoryOptions, StatusKind};
use core_text::Buffer;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

const PROMPT: &str = "> ";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "linedit", version, about = "Line-oriented text editor")]
struct Args {
    /// Optional path to open at startup. A missing file starts an empty buffer bound to that name.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `linedit.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Disable ANSI styling in the rendered buffer.
    #[arg(long = "plain")]
    pub plain: bool,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

struct Session {
    state: EditorState,
    render: RenderConfig,
    config_source: Option<PathBuf>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn run(&mut self, args: &Args) -> Result<Session> {
        self.configure_logging()?;
        Self::install_panic_hook();

        info!(target: "runtime", "startup");
        let session = bootstrap(args, !io::stdout().is_terminal())?;
        let path_str = args.path.as_ref().map(|p| p.display().to_string());
        let config_str = session
            .config_source
            .as_ref()
            .map(|p| p.display().to_string());
        info!(
            target: "runtime.startup",
            buffer = session.state.buffer().name.as_str(),
            path = path_str.as_deref(),
            config_override = args.config.is_some(),
            config = config_str.as_deref(),
            history_depth = session.state.history_capacity(),
            ansi = session.render.ansi,
            "bootstrap_complete"
        );
        Ok(session)
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join("linedit.log");
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, "linedit.log");
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
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
}

/// Build the editor session from arguments and configuration. `force_plain`
/// strips escape codes regardless of config (non-terminal stdout).
fn bootstrap(args: &Args, force_plain: bool) -> Result<Session> {
    let config = load_from(args.config.clone())?;
    let options = HistoryOptions {
        depth: config.history_depth(),
        clamp_cursor: config.file.history.clamp_cursor,
    };
    let mut state = EditorState::with_options(Buffer::empty("untitled"), options);
    if let Some(path) = args.path.as_ref() {
        dispatch(Action::Load(path.clone()), &mut state);
    }
    let render = if args.plain || force_plain {
        config.file.render.plain()
    } else {
        config.file.render
    };
    Ok(Session {
        state,
        render,
        config_source: config.source,
    })
}

fn write_status<W: Write>(state: &mut EditorState, out: &mut W) -> io::Result<()> {
    if let Some(msg) = state.take_status() {
        match msg.kind {
            StatusKind::Info => writeln!(out, "{}", msg.text)?,
            StatusKind::Error => writeln!(out, "Error: {}", msg.text)?,
        }
    }
    Ok(())
}

/// Read commands until `quit` or end of input. Each round prints the frame,
/// any pending status message, then the prompt.
fn run_loop<R: BufRead, W: Write>(session: &mut Session, mut input: R, out: &mut W) -> Result<()> {
    let mut raw = String::new();
    let mut commands = 0usize;
    loop {
        out.write_all(render(&session.state, &session.render).as_bytes())?;
        write_status(&mut session.state, out)?;
        out.write_all(PROMPT.as_bytes())?;
        out.flush()?;

        raw.clear();
        let read = input.read_line(&mut raw).context("failed to read command")?;
        if read == 0 {
            writeln!(out)?;
            info!(target: "runtime", commands, "input_closed");
            break;
        }
        let action = match CommandParser::parse(&raw) {
            Ok(action) => action,
            Err(err) => {
                debug!(target: "runtime", error = %err, "parse_rejected");
                session.state.set_status(err.to_string(), StatusKind::Error);
                continue;
            }
        };
        commands += 1;
        if dispatch(action, &mut session.state).quit {
            info!(target: "runtime", commands, "quit");
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    let mut session = startup.run(&args)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_loop(&mut session, stdin.lock(), &mut stdout)?;
    info!(target: "runtime", "shutdown");
    Ok(())
}
