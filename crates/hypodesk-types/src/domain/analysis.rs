use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Source category shown as a tab of the competitive analysis preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisTab {
    #[default]
    Competitors,
    Cms,
    OtherBluePlans,
    SpecialtySociety,
}

impl AnalysisTab {
    pub const ALL: [AnalysisTab; 4] = [
        AnalysisTab::Competitors,
        AnalysisTab::Cms,
        AnalysisTab::OtherBluePlans,
        AnalysisTab::SpecialtySociety,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisTab::Competitors => "Competitors",
            AnalysisTab::Cms => "CMS",
            AnalysisTab::OtherBluePlans => "Other Blue Plans",
            AnalysisTab::SpecialtySociety => "Specialty Society or Other Agency",
        }
    }
}

impl fmt::Display for AnalysisTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnalysisTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "competitors" => Ok(AnalysisTab::Competitors),
            "cms" => Ok(AnalysisTab::Cms),
            "other_blue_plans" | "blue" => Ok(AnalysisTab::OtherBluePlans),
            "specialty_society" | "specialty" | "specialty_society_or_other_agency" => {
                Ok(AnalysisTab::SpecialtySociety)
            }
            _ => Err(Error::UnknownOption {
                kind: "analysis tab",
                value: s.to_string(),
            }),
        }
    }
}

/// Competitor whose published policy is compared against a hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competitor {
    Uhc,
    Cigna,
}

impl Competitor {
    pub const ALL: [Competitor; 2] = [Competitor::Uhc, Competitor::Cigna];

    pub fn label(self) -> &'static str {
        match self {
            Competitor::Uhc => "UHC",
            Competitor::Cigna => "Cigna",
        }
    }
}

impl FromStr for Competitor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Competitor::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownOption {
                kind: "competitor",
                value: s.to_string(),
            })
    }
}

/// One row of the competitive analysis table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFinding {
    pub tab: AnalysisTab,
    pub competitor: Option<Competitor>,
    pub source: String,
    pub language: String,
    pub aligns: bool,
}

impl AnalysisFinding {
    pub fn alignment_label(&self) -> &'static str {
        if self.aligns { "Aligns" } else { "Not Aligns" }
    }
}
