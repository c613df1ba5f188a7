/// Fixed denylist of substrings that block an execution result.
///
/// Note the trailing space in "rm " — it keeps words like "farm" or
/// "confirm" from tripping the check.
pub const DANGEROUS_KEYWORDS: [&str; 5] = ["drop", "delete", "rm ", "shutdown", "truncate"];

/// Scan lower-cased content for denylisted keywords, in denylist order.
pub fn scan(content: &str) -> Vec<&'static str> {
    let lowered = content.to_lowercase();
    DANGEROUS_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_content_matches_nothing() {
        assert!(scan("list the current directory").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(scan("DROP TABLE users"), vec!["drop"]);
    }

    #[test]
    fn multiple_keywords_all_reported() {
        let matches = scan("delete the table then shutdown the host");
        assert_eq!(matches, vec!["delete", "shutdown"]);
    }

    #[test]
    fn rm_requires_trailing_space() {
        assert!(scan("confirm the change").is_empty());
        assert_eq!(scan("rm -rf /tmp/scratch"), vec!["rm "]);
    }
}
