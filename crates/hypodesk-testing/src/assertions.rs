//! Custom assertions for hypodesk JSON output.
//!
//! Every command renders a `{ content, badge, suggestions }` envelope in JSON
//! mode; these helpers reach into `content`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the number of topic rows on the rendered page.
pub fn assert_row_count(json: &Value, expected: usize) -> Result<()> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?;

    if rows.len() != expected {
        anyhow::bail!("Expected {} rows, got {}", expected, rows.len());
    }

    Ok(())
}

/// Assert every row has the given status label.
pub fn assert_all_status(json: &Value, status: &str) -> Result<()> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?;

    for (i, row) in rows.iter().enumerate() {
        let actual = row["status"]
            .as_str()
            .with_context(|| format!("Row {} missing status", i))?;
        if actual != status {
            anyhow::bail!("Row {} has status {} but expected {}", i, actual, status);
        }
    }

    Ok(())
}

/// Ids of the rendered rows, in order.
pub fn row_ids(json: &Value) -> Result<Vec<String>> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row["id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Row {} missing id", i))
        })
        .collect()
}

/// Assert the status tile counts, in tile order.
pub fn assert_tile_counts(json: &Value, expected: &[u64]) -> Result<()> {
    let tiles = json["content"]["tiles"]
        .as_array()
        .context("Expected 'content.tiles' array in JSON")?;

    let counts: Vec<u64> = tiles.iter().filter_map(|t| t["value"].as_u64()).collect();
    if counts != expected {
        anyhow::bail!("Expected tile counts {:?}, got {:?}", expected, counts);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_row_count() {
        let json = json!({
            "content": {
                "rows": [
                    {"id": "1", "status": "Draft"},
                    {"id": "2", "status": "Draft"}
                ]
            }
        });

        assert!(assert_row_count(&json, 2).is_ok());
        assert!(assert_row_count(&json, 1).is_err());
        assert!(assert_all_status(&json, "Draft").is_ok());
        assert!(assert_all_status(&json, "Approved").is_err());
        assert_eq!(row_ids(&json).unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn test_assert_tile_counts() {
        let json = json!({
            "content": { "tiles": [ {"value": 10}, {"value": 5} ] }
        });

        assert!(assert_tile_counts(&json, &[10, 5]).is_ok());
        assert!(assert_tile_counts(&json, &[5, 10]).is_err());
    }
}
