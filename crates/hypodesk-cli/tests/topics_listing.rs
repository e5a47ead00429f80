//! `topics list` / `topics counts` over the 25 fixture topics.

use anyhow::Result;
use hypodesk_testing::{FakeBackend, MockServer, TestWorld, assertions, fixtures};

fn world(server: &MockServer) -> TestWorld {
    TestWorld::new().with_api(server.url()).logged_in("u1")
}

#[test]
fn test_default_listing_shows_every_topic_and_tiles() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());

    let result = world(&server).run(&["topics", "list"])?;
    assert!(result.success(), "{}", result.stderr());

    let json = result.json()?;
    assertions::assert_row_count(&json, 25)?;
    assertions::assert_tile_counts(&json, &[10, 5, 5, 5])?;
    assert!(json["content"]["sort"].is_null());
    assert_eq!(json["content"]["page"]["total"], 25);
    Ok(())
}

#[test]
fn test_status_dropdown_filter() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());

    let json = world(&server)
        .run(&["topics", "list", "--status", "draft"])?
        .json()?;

    assertions::assert_row_count(&json, 10)?;
    assertions::assert_all_status(&json, "Draft")?;
    // Tiles always count the unfiltered load
    assertions::assert_tile_counts(&json, &[10, 5, 5, 5])?;
    Ok(())
}

#[test]
fn test_multiple_statuses_union() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());

    let json = world(&server)
        .run(&["topics", "list", "--status", "submitted", "--status", "approved"])?
        .json()?;

    assertions::assert_row_count(&json, 10)?;
    assert_eq!(json["content"]["filter"]["statuses"], serde_json::json!(["Submitted", "Approved"]));
    Ok(())
}

#[test]
fn test_tile_overrides_dropdown_selection() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());

    let json = world(&server)
        .run(&["topics", "list", "--status", "draft", "--tile", "reviewed"])?
        .json()?;

    assertions::assert_all_status(&json, "Reviewed")?;
    assert_eq!(assertions::row_ids(&json)?, vec!["11", "12", "13", "14", "15"]);

    let active: Vec<bool> = json["content"]["tiles"]
        .as_array()
        .map(|t| t.iter().map(|tile| tile["active"].as_bool().unwrap_or(false)).collect())
        .unwrap_or_default();
    assert_eq!(active, vec![false, false, true, false]);
    Ok(())
}

#[test]
fn test_sort_by_status_ascending() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());

    let json = world(&server)
        .run(&["topics", "list", "--sort", "status"])?
        .json()?;

    let ids = assertions::row_ids(&json)?;
    assert_eq!(&ids[..5], &["16", "17", "18", "19", "20"]);
    assert_eq!(json["content"]["sort"]["column"], "status");
    assert_eq!(json["content"]["sort"]["direction"], "ascending");
    Ok(())
}

#[test]
fn test_descending_sort_on_equal_dates_keeps_order() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());

    let json = world(&server)
        .run(&["topics", "list", "--sort", "updated", "--desc"])?
        .json()?;

    let expected: Vec<String> = (1..=25).map(|i| i.to_string()).collect();
    assert_eq!(assertions::row_ids(&json)?, expected);
    assert_eq!(json["content"]["sort"]["direction"], "descending");
    Ok(())
}

#[test]
fn test_paging_and_clamping() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());
    let world = world(&server);

    let json = world
        .run(&["topics", "list", "--page-size", "10", "--page", "3"])?
        .json()?;
    assert_eq!(assertions::row_ids(&json)?, vec!["21", "22", "23", "24", "25"]);
    assert_eq!(json["content"]["page"]["from"], 21);
    assert_eq!(json["content"]["page"]["to"], 25);
    assert_eq!(json["content"]["page"]["page_count"], 3);

    let clamped = world
        .run(&["topics", "list", "--page-size", "10", "--page", "9"])?
        .json()?;
    assert_eq!(clamped["content"]["page"]["page"], 3);

    let zero = world.run(&["topics", "list", "--page-size", "0"])?;
    assert!(!zero.success());
    assert!(zero.stderr().contains("--page-size must be greater than 0"));
    Ok(())
}

#[test]
fn test_page_size_from_config() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());
    let world = world(&server).with_config("[table]\npage_size = 4\n");

    let json = world.run(&["topics", "list", "--tile", "draft", "--page", "3"])?.json()?;

    assert_eq!(assertions::row_ids(&json)?, vec!["24", "25"]);
    assert_eq!(json["content"]["page"]["from"], 9);
    assert_eq!(json["content"]["page"]["total"], 10);
    Ok(())
}

#[test]
fn test_records_without_dates_or_known_status_are_listed() -> Result<()> {
    let mut records = fixtures::topic_records();
    records[0].hypothesis_last_updtd_dt = None;
    records[1].hypothesis_last_updtd_dt = Some("not a date".to_string());
    records[2].hypothesis_status = Some("Archived".to_string());
    records[3].hypothesis_last_updtd_dt = Some("2025-10-30T23:00:00".to_string());
    let server = MockServer::start(FakeBackend::new().with_records(records));
    let world = world(&server);

    let json = world.run(&["topics", "list", "--sort", "updated", "--desc"])?.json()?;

    assertions::assert_row_count(&json, 25)?;
    assertions::assert_tile_counts(&json, &[9, 5, 5, 5])?;
    let ids = assertions::row_ids(&json)?;
    assert_eq!(ids[0], "4");
    assert_eq!(&ids[23..], &["1", "2"]);

    let rows = json["content"]["rows"].as_array().cloned().unwrap_or_default();
    assert!(rows[24]["updated_at"].is_null());
    assert_eq!(rows[0]["updated_at"], "2025-10-30T23:00:00");
    assert_eq!(rows[1]["status"], "Archived");

    let drafts = world.run(&["topics", "list", "--status", "draft"])?.json()?;
    assertions::assert_row_count(&drafts, 9)?;
    Ok(())
}

#[test]
fn test_counts() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());

    let json = world(&server).run(&["topics", "counts"])?.json()?;

    assertions::assert_tile_counts(&json, &[10, 5, 5, 5])?;
    assert_eq!(json["content"]["total"], 25);
    insta::assert_json_snapshot!(json["content"]["tiles"][0], @r###"
    {
      "active": false,
      "id": "draft",
      "label": "Draft",
      "status": "Draft",
      "value": 10
    }
    "###);
    Ok(())
}

#[test]
fn test_service_error_is_reported() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());
    server.backend().fail_next("get-topic", 503, "maintenance");

    let result = world(&server).run(&["topics", "list"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("HTTP 503: maintenance"));
    Ok(())
}

#[test]
fn test_plain_output_is_a_table() -> Result<()> {
    let server = MockServer::start(FakeBackend::with_fixture_topics());

    let result = world(&server)
        .plain()
        .run(&["topics", "list", "--tile", "approved"])?;
    assert!(result.success());

    let out = result.stdout();
    assert!(out.contains("[Approved: 5]"));
    assert!(out.contains("Topic Name 16"));
    assert!(!out.contains("Topic Name 15"));
    assert!(out.contains("30-Oct-25"));
    assert!(out.contains("1-5 of 5"));
    assert!(!out.contains('\u{1b}'), "plain output must not carry ANSI codes");
    Ok(())
}
