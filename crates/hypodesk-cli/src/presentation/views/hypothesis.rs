use std::fmt;

use crate::presentation::formatters::style;
use crate::presentation::formatters::text::single_line;
use crate::presentation::formatters::time::format_optional_date;
use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{
    AnalysisViewModel, CreateView, DeleteResultViewModel, HypothesisDetailViewModel,
    HypothesisListViewModel, SaveResultViewModel,
};

impl CreateView for HypothesisListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(HypothesisListView { data: self })
    }
}

impl CreateView for HypothesisDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(HypothesisDetailView { data: self })
    }
}

impl CreateView for SaveResultViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(SaveResultView { data: self })
    }
}

impl CreateView for DeleteResultViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(DeleteResultView { data: self })
    }
}

impl CreateView for AnalysisViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(AnalysisView { data: self })
    }
}

struct HypothesisListView<'a> {
    data: &'a HypothesisListViewModel,
}

impl<'a> fmt::Display for HypothesisListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.data.items {
            writeln!(
                f,
                "{:<10}  {:<40}  {}",
                truncate(&item.id, 10),
                truncate(&single_line(&item.name), 40),
                style::dimmed(&format!("Last edit: {}", format_optional_date(item.last_edit)))
            )?;
        }
        Ok(())
    }
}

struct HypothesisDetailView<'a> {
    data: &'a HypothesisDetailViewModel,
}

impl<'a> fmt::Display for HypothesisDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.data;
        writeln!(f, "{}  {}", style::bold(&h.name), style::dimmed(&format!("({})", h.id)))?;
        writeln!(f, "Last edit: {}", format_optional_date(h.last_edit))?;
        if !h.category.is_empty() {
            writeln!(f, "Category:  {}", h.category)?;
        }
        if !h.lobs.is_empty() {
            writeln!(f, "LOB:       {}", h.lobs.join(", "))?;
        }
        if let Some(market) = &h.market {
            writeln!(f, "Market:    {}", market)?;
        }

        writeln!(f, "\n{}", style::bold("Hypothesis Details"))?;
        writeln!(f, "{}", if h.details.is_empty() { "-" } else { h.details.as_str() })?;
        writeln!(f, "\n{}", style::bold("Rationale"))?;
        writeln!(f, "{}", if h.rationale.is_empty() { "-" } else { h.rationale.as_str() })
    }
}

struct SaveResultView<'a> {
    data: &'a SaveResultViewModel,
}

impl<'a> fmt::Display for SaveResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(h) = &self.data.hypothesis {
            writeln!(f, "  ID:        {}", h.id)?;
            writeln!(f, "  Name:      {}", h.name)?;
            writeln!(f, "  Last edit: {}", format_optional_date(h.last_edit))?;
        }
        if let Some(upload) = &self.data.upload {
            let state = if upload.uploaded { "uploaded" } else { "not uploaded" };
            writeln!(f, "  File:      {} ({}: {})", upload.file_name, state, upload.message)?;
        }
        Ok(())
    }
}

struct DeleteResultView<'a> {
    data: &'a DeleteResultViewModel,
}

impl<'a> fmt::Display for DeleteResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.deleted {
            return Ok(());
        }
        writeln!(f, "  {} ({}) was not deleted.", self.data.name, self.data.id)
    }
}

struct AnalysisView<'a> {
    data: &'a AnalysisViewModel,
}

impl<'a> fmt::Display for AnalysisView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        let scope = data.competitor.as_deref().unwrap_or("All");
        writeln!(f, "{}  {}", style::bold(&data.tab), style::dimmed(&format!("({})", scope)))?;
        writeln!(f)?;

        for row in &data.rows {
            let alignment = if row.aligns { "Aligns" } else { "Not Aligns" };
            match &row.competitor {
                Some(c) => writeln!(f, "{} - {}  [{}]", style::bold(&row.source), c, alignment)?,
                None => writeln!(f, "{}  [{}]", style::bold(&row.source), alignment)?,
            }
            writeln!(f, "    {}", row.language)?;
        }
        Ok(())
    }
}
