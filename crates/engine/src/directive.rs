use regex::Regex;
use std::sync::OnceLock;

/// `server=/<domain>/<resolver>`, anchored on both ends.
const SERVER_DIRECTIVE: &str = r"^server=/([^/]+)/.*$";

/// Classification of a single trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    /// A server directive; carries the domain part.
    Directive(&'a str),
    Malformed,
}

fn server_directive() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SERVER_DIRECTIVE).expect("server directive pattern is valid"))
}

/// Classify an already trimmed line.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with('#') {
        return LineKind::Comment;
    }

    server_directive()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or(LineKind::Malformed, |domain| LineKind::Directive(domain.as_str()))
}
