use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::{Context, Result, bail};
use hypodesk_runtime::LoginStep;
use hypodesk_types::Role;
use is_terminal::IsTerminal;
use std::io::{self, BufRead, Write};

fn read_password() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        io::stderr().flush()?;
    }

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("A password is required; pass --password or pipe it on stdin");
    }
    Ok(password)
}

pub fn login(
    ctx: &mut ExecutionContext,
    user_id: &str,
    role: Role,
    password: Option<String>,
) -> Result<()> {
    let (session, message) = {
        let desk = ctx.desk()?;
        let mut flow = desk.login_flow();

        let message = flow.validate_user(user_id, role)?;
        if let LoginStep::Password { user_name, .. } = flow.step() {
            tracing::info!(user_id, user_name = %user_name, "user validated");
        }

        let password = match password {
            Some(p) => p,
            None => read_password()?,
        };
        (flow.sign_in(&password)?, message)
    };

    ctx.desk_mut()?.session_mut().establish(session.clone())?;

    let view_model = presenters::present_login(&session, &message);
    ctx.renderer().render(view_model)
}

pub fn logout(ctx: &mut ExecutionContext) -> Result<()> {
    let ended = ctx.desk_mut()?.session_mut().logout()?;

    let view_model = presenters::present_logout(ended.as_ref());
    ctx.renderer().render(view_model)
}

pub fn whoami(ctx: &ExecutionContext) -> Result<()> {
    let session = ctx.desk()?.session().current();

    let view_model = presenters::present_whoami(session);
    ctx.renderer().render(view_model)
}
