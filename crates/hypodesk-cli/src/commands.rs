use super::args::{Cli, Commands, ConfigCommand, HypothesisCommand, TopicsCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;
use hypodesk_runtime::resolve_workspace_path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;

    let interactive = matches!(cli.command, Some(Commands::Dashboard));
    let log_file = interactive.then(|| data_dir.join("hypodesk.log"));
    logging::init(cli.log_level, log_file.as_deref())?;

    let mut ctx = ExecutionContext::new(data_dir, cli.api_url, cli.format);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    match command {
        Commands::Login {
            user_id,
            role,
            password,
        } => handlers::auth::login(&mut ctx, &user_id, role.into(), password),

        Commands::Logout => handlers::auth::logout(&mut ctx),

        Commands::Whoami => handlers::auth::whoami(&ctx),

        Commands::Topics { command } => match command {
            TopicsCommand::List {
                status,
                tile,
                sort,
                desc,
                page,
                page_size,
            } => handlers::topics::list(
                &ctx,
                handlers::topics::ListOptions {
                    statuses: status.into_iter().map(Into::into).collect(),
                    tile: tile.map(Into::into),
                    sort: sort.map(Into::into),
                    descending: desc,
                    page,
                    page_size,
                },
            ),
            TopicsCommand::Counts => handlers::topics::counts(&ctx),
        },

        Commands::Feed { page, expand } => handlers::feed::handle(&ctx, page, &expand),

        Commands::Hypothesis { command } => match command {
            HypothesisCommand::List => handlers::hypothesis::list(&ctx),
            HypothesisCommand::Show { id } => handlers::hypothesis::show(&ctx, &id),
            HypothesisCommand::Save {
                id,
                name,
                details,
                rationale,
                file,
            } => handlers::hypothesis::save(
                &ctx,
                handlers::hypothesis::SaveOptions {
                    id,
                    name,
                    details,
                    rationale,
                    file,
                },
            ),
            HypothesisCommand::Delete { id, yes } => handlers::hypothesis::delete(&ctx, &id, yes),
            HypothesisCommand::Analysis { tab, competitor } => {
                handlers::hypothesis::analysis(&ctx, tab.into(), competitor.selected())
            }
        },

        Commands::Dashboard => handlers::dashboard::handle(&ctx),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },
    }
}
