use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One shared-list entry as the server returns it. The client never
/// mutates these; new entries go through [`crate::NewEntry`] and the list
/// is re-fetched whole to observe the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieEntry {
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub added_by: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Assigned by the server. A value that fails to parse degrades to
    /// `None` instead of failing the whole list.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        DateTime::parse_from_rfc3339(&value)
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn deserializes_full_entry() {
        let entry: MovieEntry = serde_json::from_value(json!({
            "title": "The Matrix",
            "year": "1999",
            "media_type": "movie",
            "imdb_id": "tt0133093",
            "added_by": "Alex",
            "poster_url": "https://posters.example/matrix.jpg",
            "created_at": "2026-08-01T18:45:00Z"
        }))
        .unwrap();

        assert_eq!(entry.title, "The Matrix");
        assert_eq!(entry.added_by.as_deref(), Some("Alex"));
        assert_eq!(
            entry.created_at,
            Some(Utc.with_ymd_and_hms(2026, 8, 1, 18, 45, 0).unwrap())
        );
    }

    #[test]
    fn deserializes_entry_with_only_title() {
        let entry: MovieEntry = serde_json::from_value(json!({"title": "Alien"})).unwrap();
        assert_eq!(entry.title, "Alien");
        assert_eq!(entry.year, None);
        assert_eq!(entry.added_by, None);
        assert_eq!(entry.created_at, None);
    }

    #[test]
    fn unparseable_timestamp_degrades_to_none() {
        let entry: MovieEntry = serde_json::from_value(json!({
            "title": "Alien",
            "created_at": "last tuesday"
        }))
        .unwrap();
        assert_eq!(entry.created_at, None);
    }

    #[test]
    fn one_bad_timestamp_does_not_fail_the_list() {
        let entries: Vec<MovieEntry> = serde_json::from_value(json!([
            {"title": "Alien", "created_at": "not-a-date"},
            {"title": "Heat", "created_at": "2026-08-02T09:10:00Z"}
        ]))
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].created_at, None);
        assert!(entries[1].created_at.is_some());
    }
}
