use crate::presentation::view_models::{
    AnalysisRowViewModel, AnalysisViewModel, CommandResultViewModel, DeleteResultViewModel,
    Guidance, HypothesisDetailViewModel, HypothesisListViewModel, HypothesisSummaryViewModel,
    SaveResultViewModel, StatusBadge, UploadViewModel,
};
use hypodesk_runtime::{SaveReport, UploadOutcome};
use hypodesk_types::wire::UpsertAction;
use hypodesk_types::{AnalysisFinding, AnalysisTab, Competitor, Hypothesis};

fn detail_vm(h: &Hypothesis) -> HypothesisDetailViewModel {
    HypothesisDetailViewModel {
        id: h.id.to_string(),
        name: h.name.clone(),
        details: h.details.clone(),
        rationale: h.rationale.clone(),
        last_edit: h.last_edit,
        lobs: h.lobs.iter().map(|l| l.label().to_string()).collect(),
        category: h.category.clone(),
        market: h.market.map(|m| m.label().to_string()),
    }
}

pub fn present_hypothesis_list(
    items: &[Hypothesis],
) -> CommandResultViewModel<HypothesisListViewModel> {
    let content = HypothesisListViewModel {
        items: items
            .iter()
            .map(|h| HypothesisSummaryViewModel {
                id: h.id.to_string(),
                name: h.name.clone(),
                last_edit: h.last_edit,
                category: h.category.clone(),
            })
            .collect(),
    };

    if content.items.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("No hypotheses yet"))
            .with_suggestion(
                Guidance::new("Create one")
                    .with_command("hypodesk hypothesis save --name <NAME> --details <TEXT>"),
            );
    }

    CommandResultViewModel::new(content).with_suggestion(
        Guidance::new("Show one in full").with_command("hypodesk hypothesis show <ID>"),
    )
}

pub fn present_hypothesis(h: &Hypothesis) -> CommandResultViewModel<HypothesisDetailViewModel> {
    CommandResultViewModel::new(detail_vm(h))
}

pub fn present_save(
    report: &SaveReport,
    saved: Option<&Hypothesis>,
    status: Option<&str>,
) -> CommandResultViewModel<SaveResultViewModel> {
    let upload = report.upload.as_ref().map(|outcome| match outcome {
        UploadOutcome::Uploaded { file_name, message } => UploadViewModel {
            file_name: file_name.clone(),
            uploaded: true,
            message: message.clone(),
        },
        UploadOutcome::Failed { file_name, message } => UploadViewModel {
            file_name: file_name.clone(),
            uploaded: false,
            message: message.clone(),
        },
    });
    let upload_failed = upload.as_ref().is_some_and(|u| !u.uploaded);

    let content = SaveResultViewModel {
        action: match report.action {
            UpsertAction::Inserted => "inserted".to_string(),
            UpsertAction::Updated => "updated".to_string(),
        },
        message: report.message.clone(),
        status: status.map(str::to_string),
        upload,
        hypothesis: saved.map(detail_vm),
    };

    let badge = if upload_failed {
        StatusBadge::warning(format!("{} but the file upload failed", report.message))
    } else {
        StatusBadge::success(report.message.clone())
    };

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(
            Guidance::new("Review the saved record")
                .with_command(format!("hypodesk hypothesis show {}", report.id)),
        )
}

pub fn present_delete(deleted: &Hypothesis) -> CommandResultViewModel<DeleteResultViewModel> {
    CommandResultViewModel::new(DeleteResultViewModel {
        id: deleted.id.to_string(),
        name: deleted.name.clone(),
        deleted: true,
    })
    .with_badge(StatusBadge::success(format!("Deleted \"{}\"", deleted.name)))
}

/// Delete requested without confirmation: nothing was sent.
pub fn present_delete_pending(
    target: &Hypothesis,
) -> CommandResultViewModel<DeleteResultViewModel> {
    CommandResultViewModel::new(DeleteResultViewModel {
        id: target.id.to_string(),
        name: target.name.clone(),
        deleted: false,
    })
    .with_badge(StatusBadge::warning(format!(
        "Are you sure you want to delete \"{}\"?",
        target.name
    )))
    .with_suggestion(
        Guidance::new("Confirm the deletion")
            .with_command(format!("hypodesk hypothesis delete {} --yes", target.id)),
    )
}

pub fn present_analysis(
    tab: AnalysisTab,
    competitor: Option<Competitor>,
    findings: &[AnalysisFinding],
) -> CommandResultViewModel<AnalysisViewModel> {
    let content = AnalysisViewModel {
        tab: tab.label().to_string(),
        competitor: competitor.map(|c| c.label().to_string()),
        rows: findings
            .iter()
            .map(|f| AnalysisRowViewModel {
                source: f.source.clone(),
                competitor: f.competitor.map(|c| c.label().to_string()),
                language: f.language.clone(),
                aligns: f.aligns,
            })
            .collect(),
    };

    if content.rows.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info(format!("No findings for {}", tab.label())));
    }
    CommandResultViewModel::new(content)
}
