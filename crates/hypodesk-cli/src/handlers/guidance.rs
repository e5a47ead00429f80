use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::Result;

/// What `hypodesk` prints with no subcommand: where data lives and what to
/// run next. A broken config file is not fatal here.
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config_exists = ctx.config_path().exists();

    let session = match ctx.desk() {
        Ok(desk) => desk.session().current().cloned(),
        Err(e) => {
            tracing::warn!(error = %e, "could not open workspace");
            None
        }
    };

    let view_model = presenters::present_guidance(ctx.data_dir(), config_exists, session.as_ref());
    ctx.renderer().render(view_model)
}
