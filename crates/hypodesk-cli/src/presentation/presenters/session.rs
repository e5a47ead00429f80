use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, GuidanceViewModel, LogoutViewModel, SessionViewModel,
    StatusBadge, WhoamiViewModel,
};
use hypodesk_types::Session;
use std::path::Path;

fn session_vm(session: &Session) -> SessionViewModel {
    SessionViewModel {
        user_id: session.user_id.clone(),
        user_name: session.user_name.clone(),
        role: session.role.as_str().to_string(),
        application_code: session.application_code.clone(),
        signed_in_at: session.signed_in_at,
    }
}

pub fn present_login(session: &Session, message: &str) -> CommandResultViewModel<SessionViewModel> {
    CommandResultViewModel::new(session_vm(session))
        .with_badge(StatusBadge::success(format!(
            "Signed in as {} ({})",
            session.user_name, message
        )))
        .with_suggestion(Guidance::new("See your topics").with_command("hypodesk topics list"))
}

pub fn present_logout(ended: Option<&Session>) -> CommandResultViewModel<LogoutViewModel> {
    let content = LogoutViewModel {
        user_id: ended.map(|s| s.user_id.clone()),
    };

    match ended {
        Some(session) => CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success(format!("Signed out {}", session.user_id))),
        None => CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("No active session")),
    }
}

pub fn present_whoami(session: Option<&Session>) -> CommandResultViewModel<WhoamiViewModel> {
    let result = CommandResultViewModel::new(WhoamiViewModel {
        session: session.map(session_vm),
    });

    if session.is_none() {
        return result
            .with_badge(StatusBadge::info("Not signed in"))
            .with_suggestion(
                Guidance::new("Sign in first").with_command("hypodesk login --user-id <ID>"),
            );
    }
    result
}

pub fn present_guidance(
    data_dir: &Path,
    config_exists: bool,
    session: Option<&Session>,
) -> CommandResultViewModel<GuidanceViewModel> {
    let mut result = CommandResultViewModel::new(GuidanceViewModel {
        data_dir: data_dir.display().to_string(),
        config_exists,
        session: session.map(session_vm),
    });

    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Write a config file with the service URLs")
                .with_command("hypodesk config init"),
        );
    }

    if session.is_some() {
        result
            .with_suggestion(Guidance::new("Browse topics").with_command("hypodesk topics list"))
            .with_suggestion(Guidance::new("Read the activity feed").with_command("hypodesk feed"))
            .with_suggestion(
                Guidance::new("Open the interactive dashboard").with_command("hypodesk dashboard"),
            )
    } else {
        result.with_suggestion(
            Guidance::new("Sign in").with_command("hypodesk login --user-id <ID> --role user"),
        )
    }
}
