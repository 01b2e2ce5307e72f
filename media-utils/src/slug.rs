use std::sync::LazyLock;

use regex::Regex;
use unidecode::unidecode;

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-z0-9]+").expect("valid slug regex"));

// Transliterates to ASCII, then collapses anything that isn't a letter or a
// digit into single dashes.
pub fn parameterize(s: &str) -> String {
    let s = unidecode(s);
    let s = NON_WORD_RE.replace_all(&s, "-");
    s.trim_matches('-').to_lowercase()
}

pub fn track_slug(id: u64, title: &str) -> String {
    parameterize(&format!("{}-{}", id, title))
}
