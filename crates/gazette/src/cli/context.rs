//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use gazette_config::Config;
use gazette_results::ResultsBuffer;
use gazette_ui::{HeadlessSurface, ModalController};
use gazette_view::DetailViewBuilder;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Returns a detail view builder for the loaded configuration.
    pub fn builder(&self) -> DetailViewBuilder {
        DetailViewBuilder::from_config(&self.config)
    }

    /// Loads a results file relative to the working directory.
    pub fn load_results(&self, path: &Path) -> Result<ResultsBuffer, ExitCode> {
        let path = self.cwd.join(path);
        ResultsBuffer::load(&path).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }

    /// Loads a results file and opens the overlay on `position`.
    ///
    /// The controller ignores out-of-range positions; here that is reported as an error.
    pub fn open_result(
        &self,
        path: &Path,
        position: usize,
    ) -> Result<ModalController<HeadlessSurface>, ExitCode> {
        let buffer = self.load_results(path)?;
        let len = buffer.len();
        let mut modal = ModalController::new(buffer, self.builder(), HeadlessSurface::new());
        if !modal.open(position) {
            eprintln!("error: no result at position {position} ({len} results loaded)");
            return Err(ExitCode::FAILURE);
        }
        Ok(modal)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
