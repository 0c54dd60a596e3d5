/// The search provider uses this literal to say "no poster available".
const SENTINEL: &str = "N/A";

/// Collapse absent, empty, and sentinel poster values to `None`.
pub fn normalize(value: Option<&str>) -> Option<String> {
    match value {
        Some(url) if !url.is_empty() && url != SENTINEL => Some(url.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_and_sentinel_yield_none() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("N/A")), None);
    }

    #[test]
    fn other_values_pass_through() {
        assert_eq!(
            normalize(Some("https://posters.example/x.jpg")),
            Some("https://posters.example/x.jpg".to_string())
        );
        // Only the exact sentinel is special.
        assert_eq!(normalize(Some("n/a")), Some("n/a".to_string()));
    }
}
