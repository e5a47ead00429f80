use std::fmt;

use crate::presentation::formatters::{format_login, style};
use crate::presentation::view_models::{
    CreateView, GuidanceViewModel, LogoutViewModel, SessionViewModel, WhoamiViewModel,
};

impl CreateView for SessionViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(SessionView { data: self })
    }
}

impl CreateView for WhoamiViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(WhoamiView { data: self })
    }
}

impl CreateView for LogoutViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(LogoutView)
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct SessionView<'a> {
    data: &'a SessionViewModel,
}

impl<'a> fmt::Display for SessionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.data;
        writeln!(f, "  User:        {} ({})", s.user_name, s.user_id)?;
        writeln!(f, "  Role:        {}", s.role)?;
        writeln!(f, "  Application: {}", s.application_code)?;
        writeln!(f, "  Last login:  {}", format_login(s.signed_in_at))
    }
}

struct WhoamiView<'a> {
    data: &'a WhoamiViewModel,
}

impl<'a> fmt::Display for WhoamiView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.session {
            Some(session) => write!(f, "{}", SessionView { data: session }),
            None => Ok(()),
        }
    }
}

struct LogoutView;

impl fmt::Display for LogoutView {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", style::bold("hypodesk - reimbursement policy hypotheses"))?;
        writeln!(f)?;
        writeln!(f, "  Data directory: {}", self.data.data_dir)?;
        writeln!(
            f,
            "  Config file:    {}",
            if self.data.config_exists { "present" } else { "not written (defaults in use)" }
        )?;
        match &self.data.session {
            Some(s) => writeln!(f, "  Signed in as:   {} ({}, {})", s.user_name, s.user_id, s.role),
            None => writeln!(f, "  Signed in as:   {}", style::dimmed("nobody")),
        }
    }
}
