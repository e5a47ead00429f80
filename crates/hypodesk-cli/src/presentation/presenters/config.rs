use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};
use hypodesk_runtime::Config;
use std::path::Path;

pub fn present_config(
    path: &Path,
    exists: bool,
    config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let result = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config,
    });

    if exists {
        return result;
    }
    result
        .with_badge(StatusBadge::info("No config file; showing defaults"))
        .with_suggestion(
            Guidance::new("Write the defaults to disk").with_command("hypodesk config init"),
        )
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success(format!("Wrote {}", path.display())))
}
