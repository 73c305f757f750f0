use std::path::PathBuf;
use std::time::Duration;

use cs_app::app_paths::AppPaths;
use cs_app::SyncSettings;
use cs_core::ports::AppDirsPort;
use cs_core::ViewerConfig;
use cs_infra::DirsAppDirsAdapter;
use tracing::{error, info, warn};

use super::config::load_optional_config;
use super::runtime::{create_runtime, ViewerRuntime};
use super::tracing::init_tracing_subscriber;

/// Options collected by the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Config file; defaults to `config.toml` in the app data directory.
    pub config_path: Option<PathBuf>,
    /// Entries the in-memory backend starts with, newest first.
    pub seed: Vec<String>,
    /// Number of sync ticks to run before exiting; unbounded when `None`.
    pub ticks: Option<u32>,
    /// Overrides `[sync] poll_interval_ms`.
    pub interval_ms: Option<u64>,
    /// Overrides `[sync] change_detection`.
    pub detection: Option<String>,
}

impl RunOptions {
    /// Command-line values win over the file.
    fn apply_overrides(&self, mut config: ViewerConfig) -> ViewerConfig {
        if let Some(ms) = self.interval_ms {
            config.poll_interval_ms = ms;
        }
        if let Some(detection) = &self.detection {
            config.change_detection = detection.clone();
        }
        config
    }
}

/// How long to run so that exactly `ticks` syncs start.
///
/// Ends half an interval after the last tick, so the run never races the
/// tick that would come next.
fn run_duration(settings: &SyncSettings, ticks: u32) -> Duration {
    if ticks == 0 {
        return Duration::ZERO;
    }
    let period = settings.poll_interval;
    let first = if settings.sync_on_activate {
        Duration::ZERO
    } else {
        period
    };
    first + period * (ticks - 1) + period / 2
}

/// Runs the headless viewer until the tick budget is spent or Ctrl-C.
///
/// ## Startup order
///
/// 1. Resolve the app directories (`CS_PROFILE` aware)
/// 2. Load the config file, then apply command-line overrides
/// 3. Install the tracing subscriber; a config error is logged only now
/// 4. Wire the runtime and drive the sync loop
///
/// The document markup is printed to stdout on start and after every
/// rebuild. A zero tick budget returns before the loop is started.
///
/// ```no_run
/// use cs_host::bootstrap::{run_app, RunOptions};
///
/// # async fn demo() -> anyhow::Result<()> {
/// run_app(RunOptions {
///     seed: vec!["hello".into()],
///     ticks: Some(2),
///     ..RunOptions::default()
/// })
/// .await
/// # }
/// ```
///
/// ## Errors
///
/// Returns `Err` if the tracing subscriber cannot be installed or the sync
/// loop task fails.
pub async fn run_app(options: RunOptions) -> anyhow::Result<()> {
    let app_paths = match DirsAppDirsAdapter::new().get_app_dirs() {
        Ok(dirs) => Some(AppPaths::from_app_dirs(&dirs)),
        Err(err) => {
            eprintln!("Failed to resolve application directories: {err}");
            None
        }
    };

    let config_path = options
        .config_path
        .clone()
        .or_else(|| app_paths.as_ref().map(|p| p.config_path.clone()));

    let (file_config, config_error) = match config_path.as_deref().map(load_optional_config) {
        Some(Ok(Some(config))) => (config, None),
        Some(Err(err)) => (ViewerConfig::empty(), Some(err)),
        Some(Ok(None)) | None => (ViewerConfig::empty(), None),
    };
    let config = options.apply_overrides(file_config);
    let settings = SyncSettings::from_config(&config);

    let logs_dir = app_paths
        .as_ref()
        .filter(|_| settings.log_to_file)
        .map(|p| p.logs_dir.as_path());
    init_tracing_subscriber(logs_dir)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    if let Some(err) = config_error {
        error!(error = %format!("{err:#}"), "Failed to load config, using defaults");
    }
    info!(
        config_path = ?config_path,
        seeded = options.seed.len(),
        "Starting ClipShelf viewer"
    );

    let runtime = create_runtime(settings, options.seed);
    drive(&runtime, options.ticks).await
}

async fn drive(runtime: &ViewerRuntime, ticks: Option<u32>) -> anyhow::Result<()> {
    if ticks == Some(0) {
        info!("Tick budget is zero, not starting the sync loop");
        return Ok(());
    }

    let mut changes = runtime.document.subscribe();
    let mut last_rebuild = changes.borrow_and_update().rebuild_count;
    println!("{}", runtime.document.to_markup());

    let handle = runtime.start();

    let budget = ticks.map(|n| run_duration(&runtime.settings, n));
    let deadline = async move {
        match budget {
            Some(d) => tokio::time::sleep(d).await,
            None => std::future::pending::<()>().await,
        }
    };
    tokio::pin!(deadline);
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            _ = &mut deadline => {
                info!("Tick budget spent");
                break;
            }
            res = &mut interrupt => {
                if let Err(e) = res {
                    warn!(error = %e, "Failed to listen for Ctrl-C");
                }
                info!("Interrupted");
                break;
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let rebuild = changes.borrow_and_update().rebuild_count;
                if rebuild != last_rebuild {
                    last_rebuild = rebuild;
                    println!("{}", runtime.document.to_markup());
                }
            }
        }
    }

    handle.shutdown().await
}
