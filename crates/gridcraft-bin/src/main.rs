//! gridcraft entrypoint.
use anyhow::Result;
use clap::{Parser, ValueEnum};
use core_actions::ClipboardSink;
use core_codegen::Syntax;
use core_config::{Config, load_from};
use core_events::{EVENT_CHANNEL_CAP, Event, EventSourceRegistry, TickEventSource};
use core_state::{DesignerState, TracingObserver};
use core_terminal::{CrosstermBackend, TerminalBackend};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, trace, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod session;

use session::{Session, ShutdownReason, pump};

const LOG_FILE: &str = "gridcraft.log";
const TICK_INTERVAL: Duration = Duration::from_millis(250);
const SOURCE_JOIN_TIMEOUT: Duration = Duration::from_millis(200);

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "gridcraft", version, about = "Terminal CSS grid layout designer")]
struct Args {
    /// Configuration file path (overrides discovery of `gridcraft.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Initial output syntax; wins over the config file.
    #[arg(long = "syntax", value_enum)]
    syntax: Option<SyntaxArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SyntaxArg {
    Tailwind,
    Css,
}

impl From<SyntaxArg> for Syntax {
    fn from(arg: SyntaxArg) -> Self {
        match arg {
            SyntaxArg::Tailwind => Syntax::Tailwind,
            SyntaxArg::Css => Syntax::Css,
        }
    }
}

/// Copies through the terminal with OSC 52.
struct TerminalClipboard;

impl ClipboardSink for TerminalClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        core_terminal::copy_osc52(text)
    }
}

/// Initial designer state from the loaded config and CLI overrides.
fn build_state(args: &Args, config: &Config) -> DesignerState {
    let syntax = args.syntax.map(Syntax::from).unwrap_or_else(|| config.syntax());
    let mut state = DesignerState::new(config.grid_configuration(), syntax)
        .with_status_ttl(config.status_ttl());
    state.subscribe(TracingObserver::default());
    state
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

struct RuntimeContext<'a> {
    state: DesignerState,
    size: (u16, u16),
    terminal_guard: core_terminal::TerminalGuard<'a>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn run<'a>(&'a mut self, args: &Args) -> Result<RuntimeContext<'a>> {
        self.configure_logging()?;
        Self::install_panic_hook();

        info!(target: "runtime", "startup");
        let config = load_from(args.config.clone())?;
        let state = build_state(args, &config);
        let config_path = config
            .source
            .as_ref()
            .map(|p| p.to_string_lossy().to_string());
        info!(
            target: "runtime.startup",
            config = config_path.as_deref(),
            syntax = state.syntax().label(),
            columns = state.config().columns,
            rows = state.config().rows,
            "bootstrap_complete"
        );

        let size = self.backend.size()?;
        self.backend.set_title("gridcraft")?;
        let guard = self.backend.enter_guard()?;
        Ok(RuntimeContext {
            state,
            size,
            terminal_guard: guard,
        })
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
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

fn log_shutdown_stage(reason: ShutdownReason, stage: &'static str) {
    info!(
        target: "runtime.shutdown",
        reason = reason.as_str(),
        stage = stage,
        "shutdown_stage"
    );
}

/// Tasks feeding the event channel, torn down in a fixed order on exit: the runtime sender is
/// dropped, the input task is signalled, then every source and the input task are joined with a
/// bounded wait.
struct BackgroundTasks {
    tx: Option<mpsc::Sender<Event>>,
    source_handles: Vec<tokio::task::JoinHandle<()>>,
    input: Option<(tokio::task::JoinHandle<()>, core_input::AsyncInputShutdown)>,
}

impl BackgroundTasks {
    async fn shutdown(&mut self, reason: ShutdownReason) {
        if let Some(tx) = self.tx.take() {
            trace!(
                target: "runtime.shutdown",
                reason = reason.as_str(),
                "dropping_runtime_sender"
            );
            drop(tx);
        }

        let input_task = self.input.take().map(|(handle, shutdown)| {
            trace!(
                target: "runtime.shutdown",
                reason = reason.as_str(),
                "input_task_shutdown_signal"
            );
            shutdown.signal();
            handle
        });

        while let Some(handle) = self.source_handles.pop() {
            match tokio::time::timeout(SOURCE_JOIN_TIMEOUT, handle).await {
                Ok(Ok(_)) => trace!(
                    target: "runtime.shutdown",
                    reason = reason.as_str(),
                    "event_source_task_stopped"
                ),
                Ok(Err(err)) if err.is_cancelled() => trace!(
                    target: "runtime.shutdown",
                    reason = reason.as_str(),
                    "event_source_task_cancelled"
                ),
                Ok(Err(err)) => error!(
                    target: "runtime.shutdown",
                    reason = reason.as_str(),
                    ?err,
                    "event_source_task_error"
                ),
                Err(_) => warn!(
                    target: "runtime.shutdown",
                    reason = reason.as_str(),
                    "event_source_task_timeout"
                ),
            }
        }

        if let Some(handle) = input_task {
            match tokio::time::timeout(SOURCE_JOIN_TIMEOUT, handle).await {
                Ok(Ok(_)) => trace!(
                    target: "runtime.shutdown",
                    reason = reason.as_str(),
                    "input_task_joined"
                ),
                Ok(Err(err)) if err.is_cancelled() => trace!(
                    target: "runtime.shutdown",
                    reason = reason.as_str(),
                    "input_task_cancelled"
                ),
                Ok(Err(err)) => error!(
                    target: "runtime.shutdown",
                    reason = reason.as_str(),
                    ?err,
                    "input_task_join_failed"
                ),
                Err(_) => warn!(
                    target: "runtime.shutdown",
                    reason = reason.as_str(),
                    "input_task_timeout"
                ),
            }
        }
    }
}

struct DesignerRuntime<'a> {
    session: Session<TerminalClipboard>,
    rx: mpsc::Receiver<Event>,
    tasks: BackgroundTasks,
    _terminal_guard: core_terminal::TerminalGuard<'a>,
}

impl<'a> DesignerRuntime<'a> {
    fn new(
        context: RuntimeContext<'a>,
        rx: mpsc::Receiver<Event>,
        tasks: BackgroundTasks,
    ) -> Self {
        let RuntimeContext {
            state,
            size,
            terminal_guard,
        } = context;
        Self {
            session: Session::new(state, size, TerminalClipboard),
            rx,
            tasks,
            _terminal_guard: terminal_guard,
        }
    }

    async fn run(&mut self) -> Result<()> {
        let mut out = stdout();
        if let Err(e) = self.session.render_to(&mut out) {
            error!(target: "render", ?e, "initial_render_error");
        }

        let reason = pump(&mut self.session, &mut self.rx, &mut out).await;

        self.rx.close();
        self.finalize_shutdown(reason).await;
        Ok(())
    }

    async fn finalize_shutdown(&mut self, reason: ShutdownReason) {
        log_shutdown_stage(reason, "begin");
        info!(
            target: "runtime.shutdown",
            areas = self.session.state().registry().len(),
            "session_summary"
        );
        self.tasks.shutdown(reason).await;
        log_shutdown_stage(reason, "complete");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    let context = startup.run(&args)?;
    let (tx, rx) = mpsc::channel::<Event>(EVENT_CHANNEL_CAP);
    let (input_task, input_shutdown) = core_input::spawn_async_input(tx.clone());
    let mut registry = EventSourceRegistry::new();
    registry.register(TickEventSource::new(TICK_INTERVAL));
    let source_handles = registry.spawn_all(&tx);

    let tasks = BackgroundTasks {
        tx: Some(tx),
        source_handles,
        input: Some((input_task, input_shutdown)),
    };
    let mut runtime = DesignerRuntime::new(context, rx, tasks);
    runtime.run().await
}
