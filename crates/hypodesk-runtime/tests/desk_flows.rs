use hypodesk_engine::TopicColumn;
use hypodesk_runtime::{
    Config, Error, HypoDesk, LoginStep, SelectedFile, SubmitGuard, UploadOutcome,
};
use hypodesk_testing::{FakeBackend, fixtures};
use hypodesk_types::wire::{HypothesisRecord, UpsertAction};
use hypodesk_types::{
    AnalysisTab, Competitor, LineOfBusiness, RecordId, Role, RowStatus, TopicStatus,
};
use std::sync::Arc;
use tempfile::TempDir;

fn open(backend: Arc<FakeBackend>, temp: &TempDir) -> HypoDesk {
    HypoDesk::with_backend(
        temp.path().to_path_buf(),
        Config::default(),
        backend.clone(),
        backend,
    )
    .unwrap()
}

fn logged_in(backend: Arc<FakeBackend>, temp: &TempDir) -> HypoDesk {
    let mut desk = open(backend, temp);
    desk.session_mut().establish(fixtures::session("u1")).unwrap();
    desk
}

#[test]
fn test_login_persists_session_across_opens() {
    let temp = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::new().with_user("u1", "Dana", "pw"));

    let mut desk = open(backend.clone(), &temp);
    assert!(matches!(desk.dashboard(), Err(Error::NotAuthenticated)));

    let session = {
        let mut flow = desk.login_flow();
        let message = flow.validate_user("u1", Role::Admin).unwrap();
        assert_eq!(message, "User validated successfully");
        assert!(
            matches!(flow.step(), LoginStep::Password { user_name, .. } if user_name == "Dana")
        );
        flow.sign_in("pw").unwrap()
    };
    assert_eq!(session.role, Role::Admin);
    desk.session_mut().establish(session).unwrap();

    let reopened = open(backend, &temp);
    assert_eq!(reopened.session().current().map(|s| s.user_id.as_str()), Some("u1"));
    assert!(reopened.dashboard().is_ok());
}

#[test]
fn test_unknown_user_stays_on_first_step() {
    let temp = TempDir::new().unwrap();
    let desk = open(Arc::new(FakeBackend::new()), &temp);

    let mut flow = desk.login_flow();
    let err = flow.validate_user("ghost", Role::User).unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(flow.step(), &LoginStep::Identify);
}

#[test]
fn test_logout_removes_session() {
    let temp = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::new());
    let mut desk = logged_in(backend.clone(), &temp);

    let ended = desk.session_mut().logout().unwrap();
    assert_eq!(ended.map(|s| s.user_id), Some("u1".to_string()));
    assert!(!open(backend, &temp).session().is_logged_in());
}

#[test]
fn test_dashboard_table_and_feed() {
    let temp = TempDir::new().unwrap();
    let desk = logged_in(Arc::new(FakeBackend::with_fixture_topics()), &temp);
    let dashboard = desk.dashboard().unwrap();

    let mut table = dashboard.table().unwrap();
    let tiles: Vec<usize> = table.tiles().iter().map(|t| t.value).collect();
    assert_eq!(tiles, vec![10, 5, 5, 5]);

    table.toggle_tile(TopicStatus::Draft);
    assert_eq!(table.view().rows.len(), 10);

    let feed = dashboard.feed().unwrap();
    assert_eq!(feed.page_count(), 2);
    assert_eq!(feed.cards().len(), 4);
}

#[test]
fn test_records_without_dates_or_known_status_are_kept() {
    let temp = TempDir::new().unwrap();
    let mut records = fixtures::topic_records();
    records[0].hypothesis_last_updtd_dt = None;
    records[1].hypothesis_last_updtd_dt = Some("not a date".to_string());
    records[2].hypothesis_status = Some("Archived".to_string());
    let desk = logged_in(Arc::new(FakeBackend::new().with_records(records)), &temp);

    let topics = desk.dashboard().unwrap().load_topics().unwrap();

    assert_eq!(topics.len(), 25);
    assert_eq!(topics[0].updated_at, None);
    assert_eq!(topics[1].updated_at, None);
    assert_eq!(topics[2].status, RowStatus::Other("Archived".to_string()));

    let mut table = desk.dashboard().unwrap().table().unwrap();
    assert_eq!(table.visible_count(), 25);
    let tiles: Vec<usize> = table.tiles().iter().map(|t| t.value).collect();
    assert_eq!(tiles, vec![9, 5, 5, 5]);

    table.cycle_sort(TopicColumn::UpdatedAt);
    table.cycle_sort(TopicColumn::UpdatedAt);
    let view = table.view();
    let ids: Vec<&str> = view.rows.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 25);
    assert_eq!(&ids[23..], ["1", "2"]);
}

#[test]
fn test_same_day_updates_sort_by_time_of_day() {
    let temp = TempDir::new().unwrap();
    let mut records = fixtures::topic_records();
    records.truncate(2);
    records[0].hypothesis_nm = "morning".to_string();
    records[0].hypothesis_last_updtd_dt = Some("2025-10-30T08:00:00".to_string());
    records[1].hypothesis_nm = "night".to_string();
    records[1].hypothesis_last_updtd_dt = Some("2025-10-30T23:00:00".to_string());
    let desk = logged_in(Arc::new(FakeBackend::new().with_records(records)), &temp);

    let mut table = desk.dashboard().unwrap().table().unwrap();
    table.cycle_sort(TopicColumn::UpdatedAt);
    table.cycle_sort(TopicColumn::UpdatedAt);

    let names: Vec<&str> = table.view().rows.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["night", "morning"]);
}

#[test]
fn test_analysis_narrows_by_competitor() {
    let temp = TempDir::new().unwrap();
    let desk = logged_in(Arc::new(FakeBackend::new()), &temp);

    assert_eq!(desk.analysis(AnalysisTab::Competitors, None).unwrap().len(), 2);
    let cigna = desk
        .analysis(AnalysisTab::Competitors, Some(Competitor::Cigna))
        .unwrap();
    assert_eq!(cigna.len(), 1);
    assert_eq!(cigna[0].alignment_label(), "Aligns");
    assert!(desk.analysis(AnalysisTab::Cms, None).unwrap().is_empty());
}

#[test]
fn test_new_hypothesis_is_replaced_by_server_copy() {
    let temp = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::with_fixture_topics());
    let desk = logged_in(backend.clone(), &temp);
    let mut workspace = desk.workspace().unwrap();
    workspace.load().unwrap();

    let local_id = workspace.create_or_rename("Bundle 99499").unwrap();
    workspace.set_details("Deny separate payment");
    workspace.toggle_lob(LineOfBusiness::Medicare);

    let report = workspace.save().unwrap();

    assert_eq!(report.action, UpsertAction::Inserted);
    assert_ne!(report.id, local_id);
    assert_eq!(workspace.items().len(), 26);
    assert!(workspace.items().iter().all(|h| h.id != local_id));
    let saved = workspace.selected().unwrap();
    assert_eq!(saved.id, report.id);
    assert_eq!(saved.details, "Deny separate payment");
    assert_eq!(saved.lobs, vec![LineOfBusiness::Medicare]);
    assert_eq!(workspace.status(), Some("Hypothesis saved successfully!"));
    assert_eq!(backend.records().len(), 26);
}

#[test]
fn test_save_with_file_uploads_and_refetches() {
    let temp = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::with_fixture_topics());
    let desk = logged_in(backend.clone(), &temp);
    let mut workspace = desk.workspace().unwrap();
    workspace.load().unwrap();
    workspace.select(&RecordId::from("2")).unwrap();
    workspace.select_file(SelectedFile {
        name: "evidence.pdf".to_string(),
        bytes: vec![1, 2, 3],
    });

    let report = workspace.save().unwrap();

    assert_eq!(report.action, UpsertAction::Updated);
    assert!(matches!(report.upload, Some(UploadOutcome::Uploaded { .. })));
    assert_eq!(
        backend.calls(),
        vec!["get-topic", "add-hypothesis", "upload-hypothesis-file", "get-hypothesis"]
    );
    assert_eq!(workspace.status(), Some("File upload completed successfully!"));
    assert!(workspace.form().file.is_none());
}

#[test]
fn test_failed_upload_keeps_the_save() {
    let temp = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::with_fixture_topics());
    backend.fail_next("upload-hypothesis-file", 500, "disk full");
    let desk = logged_in(backend.clone(), &temp);
    let mut workspace = desk.workspace().unwrap();
    workspace.load().unwrap();
    workspace.select(&RecordId::from("2")).unwrap();
    workspace.set_rationale("Updated rationale");
    workspace.select_file(SelectedFile {
        name: "evidence.pdf".to_string(),
        bytes: vec![0; 16],
    });

    let report = workspace.save().unwrap();

    assert!(matches!(
        report.upload,
        Some(UploadOutcome::Failed { ref message, .. }) if message == "disk full"
    ));
    assert_eq!(workspace.status(), Some("Upload failed: disk full"));
    assert_eq!(workspace.selected().unwrap().rationale, "Updated rationale");
    assert!(backend.uploads().is_empty());
}

#[test]
fn test_failed_save_leaves_local_entries_alone() {
    let temp = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::with_fixture_topics());
    let desk = logged_in(backend.clone(), &temp);
    let mut workspace = desk.workspace().unwrap();
    workspace.load().unwrap();
    let before = workspace.items().to_vec();

    workspace.select(&RecordId::from("4")).unwrap();
    workspace.set_details("never stored");
    backend.fail_next("add-hypothesis", 500, "database locked");

    assert!(workspace.save().is_err());
    assert_eq!(workspace.items(), before.as_slice());
    assert!(!workspace.guard().is_busy());
}

#[test]
fn test_delete_waits_for_confirmation() {
    let temp = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::with_fixture_topics());
    let desk = logged_in(backend.clone(), &temp);
    let mut workspace = desk.workspace().unwrap();
    workspace.load().unwrap();
    workspace.select(&RecordId::from("1")).unwrap();

    workspace.request_delete(&RecordId::from("1")).unwrap();
    backend.fail_next("delete-hypothesis", 500, "locked");
    assert!(workspace.confirm_delete().is_err());
    assert_eq!(workspace.items().len(), 25);

    workspace.request_delete(&RecordId::from("1")).unwrap();
    let removed = workspace.confirm_delete().unwrap();

    assert_eq!(removed.name, "Topic Name 1");
    assert_eq!(workspace.items().len(), 24);
    assert_eq!(workspace.selected_id(), Some(&RecordId::from("2")));
}

#[test]
fn test_shared_guard_rejects_overlapping_mutations() {
    let temp = TempDir::new().unwrap();
    let desk = logged_in(Arc::new(FakeBackend::with_fixture_topics()), &temp);
    let guard = SubmitGuard::new();
    let mut workspace = desk.workspace().unwrap().with_guard(guard.clone());
    workspace.load().unwrap();
    workspace.select(&RecordId::from("1")).unwrap();

    let _held = guard.try_begin("Refreshing").unwrap();
    assert!(matches!(workspace.save(), Err(Error::Busy(_))));
    assert!(matches!(workspace.save_for_now(), Err(Error::Busy(_))));
}

#[test]
fn test_save_for_now_does_not_touch_entries() {
    let temp = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::with_fixture_topics());
    let desk = logged_in(backend.clone(), &temp);
    let mut workspace = desk.workspace().unwrap();
    workspace.load().unwrap();
    workspace.select(&RecordId::from("5")).unwrap();
    workspace.set_details("half written");

    let message = workspace.save_for_now().unwrap();

    assert_eq!(message, "Topic saved");
    assert_eq!(workspace.selected().unwrap().details, fixtures::SUMMARY);
    let saved: Vec<String> = backend
        .saved_for_now()
        .into_iter()
        .map(|r| r.details)
        .collect();
    assert_eq!(saved, vec!["half written"]);
}

#[test]
fn test_missing_status_loads_as_draft() {
    let temp = TempDir::new().unwrap();
    let record = HypothesisRecord {
        hypothesis_status: None,
        ..fixtures::topic_records().remove(6)
    };
    let desk = logged_in(Arc::new(FakeBackend::new().with_records(vec![record])), &temp);

    let topics = desk.dashboard().unwrap().load_topics().unwrap();
    assert_eq!(topics[0].status, TopicStatus::Draft);
}

#[test]
fn test_draft_with_existing_name_merges_into_record() {
    let temp = TempDir::new().unwrap();
    let desk = logged_in(Arc::new(FakeBackend::with_fixture_topics()), &temp);
    let mut workspace = desk.workspace().unwrap();
    workspace.load().unwrap();

    workspace.create_or_rename("Topic Name 3").unwrap();
    workspace.set_details("rewritten");
    let report = workspace.save().unwrap();

    assert_eq!(report.action, UpsertAction::Updated);
    assert_eq!(report.id, RecordId::from("3"));
    assert_eq!(workspace.items().len(), 25);
    assert_eq!(workspace.selected().unwrap().details, "rewritten");
}
