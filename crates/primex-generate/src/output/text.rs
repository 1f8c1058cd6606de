/// Lines joined with `\n`, no trailing newline.
pub fn to_plain_text(lines: &[String]) -> String {
    lines.join("\n")
}

/// Split an imported text document back into lines, dropping blank ones.
pub fn parse_plain_text(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_drops_blank_lines_and_carriage_returns() {
        let lines = parse_plain_text("a:1\r\n\n  \nb:2\n");
        assert_eq!(lines, vec!["a:1".to_string(), "b:2".to_string()]);
    }

    #[test]
    fn plain_text_has_no_trailing_newline() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(to_plain_text(&lines), "a\nb");
        assert_eq!(parse_plain_text(&to_plain_text(&lines)), lines);
    }
}
