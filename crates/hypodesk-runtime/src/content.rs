//! Static content shipped with the application.

use crate::{Error, Result};
use hypodesk_types::{AnalysisFinding, AnalysisTab, Competitor, FeedItem};
use std::path::Path;

fn item(
    tag: &str,
    title: &str,
    body: Option<&str>,
    bullets: &[&str],
    footer: Option<&str>,
) -> FeedItem {
    FeedItem {
        tag: tag.to_string(),
        title: title.to_string(),
        body: body.map(str::to_string),
        bullets: bullets.iter().map(|b| b.to_string()).collect(),
        footer: footer.map(str::to_string),
        link: Some("#".to_string()),
    }
}

/// The activity feed bundled with the application.
pub fn default_feed() -> Vec<FeedItem> {
    vec![
        item(
            "Information",
            "What is hypothesis?",
            Some(
                "A Reimbursement Policy Hypothesis is a testable, evidence-based statement that predicts how a proposed or existing reimbursement policy will affect clinical, financial, operational, or member-experience outcomes.",
            ),
            &[],
            None,
        ),
        item(
            "Announcement",
            "App Announcement",
            Some("We are excited to bring you a faster, smarter, and more intuitive app experience:"),
            &[
                "Brand-new Activity Feed – stay up-to-date with policy hypotheses, announcements and release notes.",
                "Reimbursement Policy Hypothesis Tracking – now you can search, view and monitor all active hypothesis in the app.",
            ],
            Some("Thank you for your continued feedback – this release is built for you!"),
        ),
        item(
            "Release Notes",
            "v2.8.0 — 02 Dec 2025",
            None,
            &[
                "Introduced Activity Feed with real-time announcements and hypothesis updates.",
                "Added Reimbursement Policy Hypothesis Module.",
                "Implemented global search across policies.",
            ],
            None,
        ),
        item(
            "Information",
            "Policy Guidelines Update",
            Some(
                "New guidelines for policy evaluation and assessment procedures have been released. These comprehensive updates include enhanced criteria for evaluating policy effectiveness, streamlined assessment workflows, and improved documentation standards. The guidelines also incorporate feedback from healthcare professionals and policy experts to ensure practical implementation. Additionally, new compliance requirements have been established to maintain consistency across all policy evaluations. Training materials and resources are being developed to support teams in adopting these updated procedures.",
            ),
            &[],
            None,
        ),
        item(
            "Announcement",
            "System Maintenance",
            Some("Scheduled maintenance window for system upgrades and performance improvements."),
            &[],
            None,
        ),
        item(
            "Release Notes",
            "v2.9.0 — 10 Dec 2025",
            Some("Enhanced user interface with improved navigation and new dashboard features."),
            &[],
            None,
        ),
        item(
            "Information",
            "Training Resources",
            Some("New training materials and documentation are now available to help you get started."),
            &[],
            None,
        ),
        item(
            "Announcement",
            "Feature Enhancement",
            Some("We added speed improvements, guided steps, and better policy search."),
            &[],
            None,
        ),
        item(
            "Release Notes",
            "v3.0.0 — 15 Dec 2025",
            Some("Major release with new collaboration features and enhanced workflow management."),
            &[],
            None,
        ),
    ]
}

/// Feed content: the JSON array at `source` when configured, else the
/// bundled feed.
pub fn load_feed(source: Option<&Path>) -> Result<Vec<FeedItem>> {
    let Some(path) = source else {
        return Ok(default_feed());
    };

    let content = std::fs::read_to_string(path)?;
    let items: Vec<FeedItem> = serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("feed source {}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), items = items.len(), "loaded feed source");
    Ok(items)
}

/// Published competitor policies compared in the analysis preview.
pub fn competitive_findings() -> Vec<AnalysisFinding> {
    vec![
        AnalysisFinding {
            tab: AnalysisTab::Competitors,
            competitor: Some(Competitor::Uhc),
            source: "UHC (Actual Document)".to_string(),
            language: "Preventive Medicine Policy does not separately reimburse other E/Ms, screening services, prolonged services, counseling services, VMT, Visual Function. Bundle 99499 into the primary annual/preventive E/M; not reimbursed separately.".to_string(),
            aligns: true,
        },
        AnalysisFinding {
            tab: AnalysisTab::Competitors,
            competitor: Some(Competitor::Cigna),
            source: "Cigna (Actual Document)".to_string(),
            language: "Notification: Effective June 1, 2025, except in the case of preventive E/M services, Cigna will not separately reimburse CPT code 99499 when reported with E/M CPT codes 99202 – 99205 and 99212 – 99215; it is considered included in the E/M service.".to_string(),
            aligns: true,
        },
    ]
}

/// Rows of one analysis tab, optionally narrowed to one competitor.
pub fn findings_for(tab: AnalysisTab, competitor: Option<Competitor>) -> Vec<AnalysisFinding> {
    competitive_findings()
        .into_iter()
        .filter(|f| f.tab == tab)
        .filter(|f| competitor.is_none() || f.competitor == competitor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_feed_shape() {
        let feed = default_feed();
        let lengths: Vec<usize> = feed.iter().map(FeedItem::content_len).collect();

        assert_eq!(feed.len(), 9);
        assert_eq!(lengths, vec![212, 362, 164, 598, 78, 76, 83, 68, 79]);
    }

    #[test]
    fn test_findings_filter_by_tab_and_competitor() {
        assert_eq!(findings_for(AnalysisTab::Competitors, None).len(), 2);
        assert_eq!(findings_for(AnalysisTab::Competitors, Some(Competitor::Cigna)).len(), 1);
        assert!(findings_for(AnalysisTab::Cms, None).is_empty());
    }

    #[test]
    fn test_feed_source_overrides_bundle() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("feed.json");
        std::fs::write(&path, r#"[{"tag":"Information","title":"Only one"}]"#)?;

        let items = load_feed(Some(&path))?;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Only one");
        Ok(())
    }
}
