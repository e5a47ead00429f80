use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::{Context, Result, anyhow, bail};
use hypodesk_runtime::{HypothesisWorkspace, SelectedFile};
use hypodesk_types::{AnalysisTab, Competitor, RecordId};
use is_terminal::IsTerminal;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub struct SaveOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub details: Option<String>,
    pub rationale: Option<String>,
    pub file: Option<PathBuf>,
}

fn loaded_workspace(ctx: &ExecutionContext) -> Result<HypothesisWorkspace> {
    let mut workspace = ctx.desk()?.workspace()?;
    let count = workspace.load()?;
    tracing::debug!(count, "hypotheses loaded");
    Ok(workspace)
}

pub fn list(ctx: &ExecutionContext) -> Result<()> {
    let workspace = loaded_workspace(ctx)?;

    let view_model = presenters::present_hypothesis_list(workspace.items());
    ctx.renderer().render(view_model)
}

pub fn show(ctx: &ExecutionContext, id: &str) -> Result<()> {
    let workspace = loaded_workspace(ctx)?;
    let hypothesis = workspace
        .items()
        .iter()
        .find(|h| h.id.as_str() == id)
        .ok_or_else(|| anyhow!("Hypothesis not found: {}", id))?;

    let view_model = presenters::present_hypothesis(hypothesis);
    ctx.renderer().render(view_model)
}

pub fn save(ctx: &ExecutionContext, options: SaveOptions) -> Result<()> {
    let mut workspace = loaded_workspace(ctx)?;

    match (options.id, options.name) {
        (Some(id), _) => workspace.select(&RecordId::from(id))?,
        (None, Some(name)) => {
            // Reuse a record that already carries this name so fields not
            // given on the command line keep their saved text.
            let existing = workspace
                .items()
                .iter()
                .find(|h| h.name == name.trim())
                .map(|h| h.id.clone());
            match existing {
                Some(id) => workspace.select(&id)?,
                None => {
                    workspace
                        .create_or_rename(&name)
                        .ok_or_else(|| anyhow!("--name must not be blank"))?;
                }
            }
        }
        (None, None) => bail!("Pass --id to update a hypothesis or --name to create one"),
    }

    if let Some(details) = options.details {
        workspace.set_details(details);
    }
    if let Some(rationale) = options.rationale {
        workspace.set_rationale(rationale);
    }
    if let Some(path) = &options.file {
        let file = SelectedFile::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        workspace.select_file(file);
    }

    let report = workspace.save()?;

    let view_model = presenters::present_save(&report, workspace.selected(), workspace.status());
    ctx.renderer().render(view_model)
}

fn confirm(name: &str) -> Result<bool> {
    eprint!("Are you sure you want to delete \"{}\"? [y/N] ", name);
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Deleting needs confirmation: `--yes`, or an answer on an interactive
/// terminal. Otherwise the request is reported and nothing is sent.
pub fn delete(ctx: &ExecutionContext, id: &str, yes: bool) -> Result<()> {
    let mut workspace = loaded_workspace(ctx)?;
    let target = workspace.request_delete(&RecordId::from(id))?.clone();

    let confirmed = yes || (io::stdin().is_terminal() && confirm(&target.name)?);
    if !confirmed {
        workspace.cancel_delete();
        let view_model = presenters::present_delete_pending(&target);
        return ctx.renderer().render(view_model);
    }

    let deleted = workspace.confirm_delete()?;

    let view_model = presenters::present_delete(&deleted);
    ctx.renderer().render(view_model)
}

pub fn analysis(
    ctx: &ExecutionContext,
    tab: AnalysisTab,
    competitor: Option<Competitor>,
) -> Result<()> {
    let findings = ctx.desk()?.analysis(tab, competitor)?;

    let view_model = presenters::present_analysis(tab, competitor, &findings);
    ctx.renderer().render(view_model)
}
