use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use hypodesk_runtime::Config;

/// Effective configuration: the file (or defaults) with `--api-url` applied.
pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let path = ctx.config_path();
    let mut config = Config::load_from(&path)?;
    if let Some(url) = ctx.api_url() {
        config.api.override_base(url);
    }

    let view_model = presenters::present_config(&path, path.exists(), config);
    ctx.renderer().render(view_model)
}

pub fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    let existed = path.exists();
    if existed && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    let mut config = Config::default();
    if let Some(url) = ctx.api_url() {
        config.api.override_base(url);
    }
    config.save_to(&path)?;
    tracing::info!(path = %path.display(), "config written");

    let view_model = presenters::present_config_init(&path, existed);
    ctx.renderer().render(view_model)
}
