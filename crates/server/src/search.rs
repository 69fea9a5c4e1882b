use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::Note;

/// Characters of context kept on each side of a hit
pub const CONTEXT_CHARS: usize = 50;

/// Matches returned per note; `match_count` still reports all of them
pub const MAX_MATCHES: usize = 5;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchMatch {
    pub text: String,
    pub context: String,
    #[serde(rename = "lineNumber", skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    #[serde(rename = "noteId")]
    pub note_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub matches: Vec<SearchMatch>,
    #[serde(rename = "matchCount")]
    pub match_count: usize,
}

/// Normalized search term, or `None` for a blank query
pub fn normalize_query(query: &str) -> Option<String> {
    let term = query.trim().to_lowercase();
    (!term.is_empty()).then_some(term)
}

/// Search one note's title and body for an already-normalized term
pub fn search_note(note: &Note, content: &str, term: &str) -> Option<SearchResult> {
    let mut matches = Vec::new();

    if note.title.to_lowercase().contains(term) {
        matches.push(SearchMatch {
            text: note.title.clone(),
            context: note.title.clone(),
            line_number: None,
        });
    }

    for (index, line) in content.split('\n').enumerate() {
        if let Some(context) = match_context(line, term) {
            matches.push(SearchMatch {
                text: term.to_string(),
                context,
                line_number: Some(index + 1),
            });
        }
    }

    if matches.is_empty() {
        return None;
    }

    let match_count = matches.len();
    matches.truncate(MAX_MATCHES);

    Some(SearchResult {
        note_id: note.id.clone(),
        title: note.title.clone(),
        created_at: note.created_at,
        matches,
        match_count,
    })
}

/// Text around the first case-insensitive hit of `term` in `line`
pub fn match_context(line: &str, term: &str) -> Option<String> {
    let lower = line.to_lowercase();
    let byte_index = lower.find(term)?;

    let hit = lower[..byte_index].chars().count();
    let term_len = term.chars().count();
    let line_len = line.chars().count();

    let start = hit.saturating_sub(CONTEXT_CHARS).min(line_len);
    let end = (hit + term_len + CONTEXT_CHARS).min(line_len);

    let context: String = line.chars().skip(start).take(end.saturating_sub(start)).collect();
    Some(context.trim().to_string())
}

/// Order results by match count, most matches first
pub fn rank(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.match_count.cmp(&a.match_count));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str) -> Note {
        Note::new("n1".to_string(), format!("{}.md", title), "n1.md".to_string())
    }

    #[test]
    fn test_blank_query() {
        assert!(normalize_query("   ").is_none());
        assert_eq!(normalize_query("  Rust ").as_deref(), Some("rust"));
    }

    #[test]
    fn test_context_is_bounded() {
        let line = format!("{}needle{}", "a".repeat(80), "b".repeat(80));
        let context = match_context(&line, "needle").unwrap();
        assert_eq!(context, format!("{}needle{}", "a".repeat(50), "b".repeat(50)));
    }

    #[test]
    fn test_context_handles_multibyte_text() {
        let line = "가".repeat(60) + "검색어" + &"나".repeat(60);
        let context = match_context(&line, "검색어").unwrap();
        assert_eq!(context.chars().count(), 103);
        assert!(context.starts_with('가'));
        assert!(context.ends_with('나'));
    }

    #[test]
    fn test_case_insensitive_line_matches() {
        let result = search_note(&note("week1"), "intro\nRust ownership\nmore RUST", "rust").unwrap();
        assert_eq!(result.match_count, 2);
        assert_eq!(result.matches[0].line_number, Some(2));
        assert_eq!(result.matches[0].context, "Rust ownership");
        assert_eq!(result.matches[1].line_number, Some(3));
        assert_eq!(result.matches[1].text, "rust");
    }

    #[test]
    fn test_title_match_counts() {
        let result = search_note(&note("Rust 기초"), "nothing here", "rust").unwrap();
        assert_eq!(result.match_count, 1);
        assert_eq!(result.matches[0].text, "Rust 기초");
        assert!(result.matches[0].line_number.is_none());
    }

    #[test]
    fn test_matches_are_capped_but_counted() {
        let content = vec!["term"; 8].join("\n");
        let result = search_note(&note("x"), &content, "term").unwrap();
        assert_eq!(result.match_count, 8);
        assert_eq!(result.matches.len(), MAX_MATCHES);
    }

    #[test]
    fn test_no_match() {
        assert!(search_note(&note("x"), "abc", "zzz").is_none());
    }

    #[test]
    fn test_rank_orders_by_count() {
        let mut results = vec![
            search_note(&note("a"), "t", "t").unwrap(),
            search_note(&note("b"), "t\nt\nt", "t").unwrap(),
        ];
        rank(&mut results);
        assert_eq!(results[0].match_count, 3);
    }
}
