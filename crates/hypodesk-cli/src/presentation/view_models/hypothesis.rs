use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HypothesisSummaryViewModel {
    pub id: String,
    pub name: String,
    pub last_edit: Option<NaiveDate>,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct HypothesisListViewModel {
    pub items: Vec<HypothesisSummaryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HypothesisDetailViewModel {
    pub id: String,
    pub name: String,
    pub details: String,
    pub rationale: String,
    pub last_edit: Option<NaiveDate>,
    pub lobs: Vec<String>,
    pub category: String,
    pub market: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadViewModel {
    pub file_name: String,
    pub uploaded: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SaveResultViewModel {
    /// "inserted" or "updated"
    pub action: String,
    pub message: String,
    pub status: Option<String>,
    pub upload: Option<UploadViewModel>,
    pub hypothesis: Option<HypothesisDetailViewModel>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResultViewModel {
    pub id: String,
    pub name: String,
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRowViewModel {
    pub source: String,
    pub competitor: Option<String>,
    pub language: String,
    pub aligns: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalysisViewModel {
    pub tab: String,
    pub competitor: Option<String>,
    pub rows: Vec<AnalysisRowViewModel>,
}
