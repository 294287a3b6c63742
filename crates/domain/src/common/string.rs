//! String splitting utilities for user-entered lists and search queries.

/// Comma variants accepted as list separators: ASCII, ideographic and full-width.
pub const COMMA_SEPARATORS: [char; 3] = [',', '、', '，'];

fn is_comma(c: char) -> bool {
    COMMA_SEPARATORS.contains(&c)
}

/// Splits a comma separated field into trimmed, non-empty entries.
///
/// # Examples
///
/// ```
/// use stratmemo_domain::common::split_list;
///
/// assert_eq!(split_list("herb, ore、gem，"), vec!["herb", "ore", "gem"]);
/// assert!(split_list("  ").is_empty());
/// ```
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(is_comma)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenizes a search string on whitespace and comma variants.
///
/// Empty tokens are discarded, so a blank query yields no tokens.
///
/// # Examples
///
/// ```
/// use stratmemo_domain::common::query_tokens;
///
/// assert_eq!(query_tokens("slime  cave,boss"), vec!["slime", "cave", "boss"]);
/// assert!(query_tokens(" \u{3000} ").is_empty());
/// ```
pub fn query_tokens(query: &str) -> Vec<String> {
    query
        .split(|c: char| c.is_whitespace() || is_comma(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_all_comma_variants() {
        assert_eq!(split_list("a,b、c，d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_list_trims_entries() {
        assert_eq!(split_list(" potion , ether "), vec!["potion", "ether"]);
    }

    #[test]
    fn test_split_list_drops_empty_entries() {
        assert_eq!(split_list(",,a,,"), vec!["a"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_split_list_keeps_inner_whitespace() {
        assert_eq!(split_list("iron ore, copper ore"), vec!["iron ore", "copper ore"]);
    }

    #[test]
    fn test_query_tokens_mixed_separators() {
        assert_eq!(query_tokens("a b\tc,d、e，f"), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_query_tokens_full_width_space() {
        assert_eq!(query_tokens("dragon\u{3000}egg"), vec!["dragon", "egg"]);
    }

    #[test]
    fn test_query_tokens_empty() {
        assert!(query_tokens("").is_empty());
        assert!(query_tokens(" , ").is_empty());
    }
}
