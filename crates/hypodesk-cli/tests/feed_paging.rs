//! `feed` over the bundled nine-item activity feed.

use anyhow::Result;
use hypodesk_testing::TestWorld;

fn classes(json: &serde_json::Value) -> Vec<String> {
    json["content"]["cards"]
        .as_array()
        .map(|cards| {
            cards
                .iter()
                .filter_map(|c| c["size_class"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_first_and_second_page() -> Result<()> {
    let world = TestWorld::new().logged_in("u1");

    let first = world.run(&["feed"])?.json()?;
    assert_eq!(classes(&first), vec!["medium", "medium", "small", "large"]);
    assert_eq!(first["content"]["page_count"], 2);
    assert_eq!(first["content"]["has_prev"], false);
    assert_eq!(first["content"]["has_next"], true);

    let second = world.run(&["feed", "--page", "2"])?.json()?;
    assert_eq!(classes(&second), vec!["small"; 5]);
    assert_eq!(second["content"]["cards"][0]["position"], 5);
    assert_eq!(second["content"]["has_next"], false);
    Ok(())
}

#[test]
fn test_page_past_the_end_clamps() -> Result<()> {
    let world = TestWorld::new().logged_in("u1");

    let json = world.run(&["feed", "--page", "7"])?.json()?;

    assert_eq!(json["content"]["page"], 2);
    Ok(())
}

#[test]
fn test_expand_shows_full_body() -> Result<()> {
    let world = TestWorld::new().logged_in("u1");

    let collapsed = world.run(&["feed"])?.json()?;
    let body = collapsed["content"]["cards"][0]["body"].as_str().unwrap_or_default();
    assert!(body.ends_with("..."));
    assert_eq!(collapsed["content"]["cards"][0]["truncatable"], true);

    let expanded = world.run(&["feed", "--expand", "1"])?.json()?;
    let card = &expanded["content"]["cards"][0];
    assert_eq!(card["expanded"], true);
    assert!(!card["body"].as_str().unwrap_or_default().ends_with("..."));
    // Other truncatable cards stay collapsed
    assert_eq!(expanded["content"]["cards"][3]["expanded"], false);
    Ok(())
}

#[test]
fn test_expand_out_of_range_fails() -> Result<()> {
    let world = TestWorld::new().logged_in("u1");

    let result = world.run(&["feed", "--expand", "42"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("No feed card #42"));
    Ok(())
}

#[test]
fn test_feed_source_from_config() -> Result<()> {
    let world = TestWorld::new().logged_in("u1");
    let path = world.write_file(
        "feed.json",
        br#"[{"tag":"Release","title":"v2 shipped","body":"Short note"}]"#,
    );
    let world = world.with_config(&format!("[feed]\nsource = {:?}\n", path.display().to_string()));

    let json = world.run(&["feed"])?.json()?;

    assert_eq!(json["content"]["total_items"], 1);
    assert_eq!(json["content"]["cards"][0]["title"], "v2 shipped");
    Ok(())
}
