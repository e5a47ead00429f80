use crate::context::ExecutionContext;
use crate::tui;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The dashboard needs an interactive terminal; use `hypodesk topics list` instead");
    }

    let desk = ctx.desk()?;
    let ops = desk.dashboard()?;
    let user_name = desk
        .session()
        .current()
        .map(|s| s.user_name.clone())
        .unwrap_or_default();

    tui::run(ops, user_name)
}
