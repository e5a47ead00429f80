use crate::args::OutputFormat;
use crate::presentation::ConsoleRenderer;
use anyhow::{Result, anyhow};
use hypodesk_runtime::{Config, HypoDesk};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Per-invocation state shared by the handlers. The desk (config, HTTP
/// client and session) is opened on first use so commands that never touch
/// the services do not read the config file.
pub struct ExecutionContext {
    data_dir: PathBuf,
    api_url: Option<String>,
    format: OutputFormat,
    desk: OnceCell<HypoDesk>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, api_url: Option<String>, format: OutputFormat) -> Self {
        Self {
            data_dir,
            api_url,
            format,
            desk: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format == OutputFormat::Json)
    }

    pub fn desk(&self) -> Result<&HypoDesk> {
        Ok(self
            .desk
            .get_or_try_init(|| HypoDesk::open(self.data_dir.clone(), self.api_url.as_deref()))?)
    }

    pub fn desk_mut(&mut self) -> Result<&mut HypoDesk> {
        self.desk()?;
        self.desk
            .get_mut()
            .ok_or_else(|| anyhow!("workspace could not be opened"))
    }
}
