/// Splits the extracted text blob into trimmed, non-empty lines, preserving
/// document order. Handles both `\n` and `\r\n` conventions. Pure and total.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|l| l.trim_end_matches('\r').trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_whitespace_and_drops_empty_lines() {
        let lines = normalize_lines("  Jane Doe  \n\n   \nEngineer\n");
        assert_eq!(lines, vec!["Jane Doe", "Engineer"]);
    }

    #[test]
    fn test_handles_crlf() {
        let lines = normalize_lines("one\r\ntwo\r\n\r\nthree");
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_preserves_order() {
        let lines = normalize_lines("b\na\nc");
        assert_eq!(lines, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_blob_yields_no_lines() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("   \n\r\n \n").is_empty());
    }

    #[test]
    fn test_no_output_line_is_blank() {
        let lines = normalize_lines(" a \n\t\n b\t\nc ");
        assert!(lines.iter().all(|l| !l.trim().is_empty()));
        assert_eq!(lines.len(), 3);
    }
}
