use std::fmt;

use crate::presentation::formatters::style;
use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel, CreateView};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.data.config;
        writeln!(f, "{}", style::dimmed(&format!("# {}", self.data.path)))?;
        match toml::to_string_pretty(config) {
            Ok(text) => write!(f, "{}", text),
            Err(_) => Err(fmt::Error),
        }
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.overwritten {
            writeln!(f, "  Replaced the existing file with defaults.")?;
        }
        Ok(())
    }
}
