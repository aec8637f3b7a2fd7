//! Question parser — turns raw model output into an ordered list of questions.
//!
//! Grammar, applied in order:
//! 1. Strip surrounding code fences.
//! 2. If the remainder is a JSON array of strings, use it (entries trimmed,
//!    empty entries dropped).
//! 3. Otherwise split on line breaks. Each line is trimmed; empty lines and
//!    lines starting with `[` or `]` are dropped. One trailing `,` and a pair
//!    of surrounding `"` quotes are removed from what is left, so a truncated
//!    JSON array still yields clean questions.

use crate::llm_client::strip_json_fences;

pub fn parse_questions(raw: &str) -> Vec<String> {
    let body = strip_json_fences(raw);

    match serde_json::from_str::<Vec<String>>(body) {
        Ok(questions) => questions
            .into_iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect(),
        Err(_) => split_lines(body),
    }
}

fn split_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('[') && !line.starts_with(']'))
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect()
}

fn clean_line(line: &str) -> String {
    let line = line.strip_suffix(',').unwrap_or(line).trim_end();
    let line = match line.strip_prefix('"').and_then(|l| l.strip_suffix('"')) {
        Some(inner) => inner,
        None => line,
    };
    line.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_json_array() {
        let raw = r#"["Tell me about yourself.", "Why Acme?", "Describe a conflict."]"#;
        let questions = parse_questions(raw);
        assert_eq!(
            questions,
            vec!["Tell me about yourself.", "Why Acme?", "Describe a conflict."]
        );
    }

    #[test]
    fn test_fenced_json_array() {
        let raw = "```json\n[\n  \"What is REST?\",\n  \"How do you test APIs?\"\n]\n```";
        assert_eq!(
            parse_questions(raw),
            vec!["What is REST?", "How do you test APIs?"]
        );
    }

    #[test]
    fn test_json_entries_trimmed_and_blank_dropped() {
        let raw = r#"["  Padded question?  ", "", "   "]"#;
        assert_eq!(parse_questions(raw), vec!["Padded question?"]);
    }

    #[test]
    fn test_plain_lines_fallback() {
        let raw = "1. What drew you to this role?\n\n2. Describe a production incident.\n";
        assert_eq!(
            parse_questions(raw),
            vec![
                "1. What drew you to this role?",
                "2. Describe a production incident."
            ]
        );
    }

    #[test]
    fn test_bracket_lines_are_discarded() {
        // Truncated array: JSON decode fails, bracket noise must not leak through.
        let raw = "[\n  \"How do you design a rate limiter?\",\n  \"What is idempotency?\"\n";
        assert_eq!(
            parse_questions(raw),
            vec!["How do you design a rate limiter?", "What is idempotency?"]
        );
    }

    #[test]
    fn test_indented_bracket_line_is_discarded() {
        let raw = "Here are your questions:\n   [\n   ]";
        assert_eq!(parse_questions(raw), vec!["Here are your questions:"]);
    }

    #[test]
    fn test_json_object_falls_back_to_lines() {
        let raw = "{\"questions\": [\"a\"]}";
        assert_eq!(parse_questions(raw), vec!["{\"questions\": [\"a\"]}"]);
    }

    #[test]
    fn test_empty_response_yields_nothing() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("\n  \n").is_empty());
        assert!(parse_questions("[]").is_empty());
    }

    #[test]
    fn test_inner_quotes_survive_cleaning() {
        let raw = "What does \"done\" mean to you?\n]";
        assert_eq!(parse_questions(raw), vec!["What does \"done\" mean to you?"]);
    }
}
