use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RecordId;
use crate::Error;

/// Line of business a hypothesis applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LineOfBusiness {
    Commercial,
    Medicare,
    Medicaid,
}

impl LineOfBusiness {
    pub const ALL: [LineOfBusiness; 3] = [
        LineOfBusiness::Commercial,
        LineOfBusiness::Medicare,
        LineOfBusiness::Medicaid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LineOfBusiness::Commercial => "Commercial",
            LineOfBusiness::Medicare => "Medicare",
            LineOfBusiness::Medicaid => "Medicaid",
        }
    }
}

impl fmt::Display for LineOfBusiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LineOfBusiness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineOfBusiness::ALL
            .into_iter()
            .find(|lob| lob.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownOption {
                kind: "line of business",
                value: s.to_string(),
            })
    }
}

/// Market segment a hypothesis targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    #[serde(rename = "Individual Market")]
    Individual,
    #[serde(rename = "Small Group Market")]
    SmallGroup,
    #[serde(rename = "Large Group Market")]
    LargeGroup,
    #[serde(rename = "Medicare Market")]
    Medicare,
    #[serde(rename = "Medicaid Market")]
    Medicaid,
}

impl Market {
    pub const ALL: [Market; 5] = [
        Market::Individual,
        Market::SmallGroup,
        Market::LargeGroup,
        Market::Medicare,
        Market::Medicaid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Market::Individual => "Individual Market",
            Market::SmallGroup => "Small Group Market",
            Market::LargeGroup => "Large Group Market",
            Market::Medicare => "Medicare Market",
            Market::Medicaid => "Medicaid Market",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Market {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Market::ALL
            .into_iter()
            .find(|m| {
                m.label().eq_ignore_ascii_case(needle)
                    || m.label()
                        .trim_end_matches(" Market")
                        .eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::UnknownOption {
                kind: "market",
                value: s.to_string(),
            })
    }
}

/// A policy hypothesis as edited in the hypothesis workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub rationale: String,
    pub last_edit: Option<NaiveDate>,
    #[serde(default)]
    pub lobs: Vec<LineOfBusiness>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub market: Option<Market>,
}

impl Hypothesis {
    /// A local, not-yet-saved hypothesis with only a name.
    pub fn draft(name: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            details: String::new(),
            rationale: String::new(),
            last_edit: Some(today),
            lobs: Vec::new(),
            category: String::new(),
            market: None,
        }
    }
}
