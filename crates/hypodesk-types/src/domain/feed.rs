use serde::{Deserialize, Serialize};

/// A card in the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Category label ("Information", "Announcement", "Release Notes", ...)
    pub tag: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl FeedItem {
    /// Character length of the textual content (body, bullets, footer).
    /// The title and tag are not counted.
    pub fn content_len(&self) -> usize {
        let body = self.body.as_deref().map_or(0, |b| b.chars().count());
        let bullets: usize = self.bullets.iter().map(|b| b.chars().count()).sum();
        let footer = self.footer.as_deref().map_or(0, |f| f.chars().count());
        body + bullets + footer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_len_counts_chars_not_bytes() {
        let item = FeedItem {
            tag: "Announcement".to_string(),
            title: "ignored in length".to_string(),
            body: Some("ab".to_string()),
            bullets: vec!["x – y".to_string(), "z".to_string()],
            footer: Some("end".to_string()),
            link: None,
        };

        assert_eq!(item.content_len(), 2 + 5 + 1 + 3);
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let item: FeedItem =
            serde_json::from_str(r#"{"tag":"Information","title":"Hello"}"#).unwrap();

        assert!(item.body.is_none());
        assert!(item.bullets.is_empty());
        assert_eq!(item.content_len(), 0);
    }
}
