//! Redaction of backend error bodies before they reach logs or the terminal.
//!
//! The backend forwards raw exception text from its model provider, which can
//! carry API keys.

use std::borrow::Cow;

const MAX_DETAIL_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Key prefixes the backend's providers are known to echo.
const PREFIX_PATTERNS: [&str; 5] = ["AIza", "sk-", "ya29.", "hf_", "ghp_"];

const MARKER_PATTERNS: [&str; 7] = [
    "Authorization: Bearer ",
    "authorization: bearer ",
    "api_key=",
    "key=",
    "\"api_key\":\"",
    "\"access_token\":\"",
    "GEMINI_API_KEY=",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

fn token_end(input: &str, from: usize) -> usize {
    input[from..]
        .char_indices()
        .find(|&(_, c)| !is_secret_char(c))
        .map_or(input.len(), |(i, _)| from + i)
}

fn redact_after(scrubbed: &mut String, marker: &str, keep_marker: bool) {
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(marker) {
        let start = search_from + rel;
        let content_start = start + marker.len();
        let end = token_end(scrubbed, content_start);

        // Bare marker without a value.
        if end == content_start {
            search_from = content_start;
            continue;
        }

        let replace_from = if keep_marker { content_start } else { start };
        scrubbed.replace_range(replace_from..end, REDACTED);
        search_from = replace_from + REDACTED.len();
    }
}

/// Redact secret-looking tokens from backend error text.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    let needs_scrubbing = PREFIX_PATTERNS
        .iter()
        .chain(MARKER_PATTERNS.iter())
        .any(|pattern| input.contains(pattern));
    if !needs_scrubbing {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in MARKER_PATTERNS {
        redact_after(&mut scrubbed, marker, true);
    }
    for prefix in PREFIX_PATTERNS {
        redact_after(&mut scrubbed, prefix, false);
    }
    Cow::Owned(scrubbed)
}

/// Scrub secrets and truncate to a short, printable preview.
pub fn sanitize_detail(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input.trim());

    if scrubbed.chars().count() <= MAX_DETAIL_CHARS {
        return scrubbed.into_owned();
    }

    let end = scrubbed
        .char_indices()
        .nth(MAX_DETAIL_CHARS)
        .map_or(scrubbed.len(), |(i, _)| i);
    format!("{}...", &scrubbed[..end])
}

/// Human-readable detail out of a failed response body.
///
/// FastAPI-style `{"detail": ...}` bodies are unwrapped; anything else is used
/// verbatim.
pub fn error_detail(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let text = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => ["detail", "error", "message"]
            .iter()
            .find_map(|key| map.get(*key))
            .map_or_else(
                || body.to_string(),
                |value| match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
            ),
        _ => body.to_string(),
    };

    Some(sanitize_detail(&text))
}
