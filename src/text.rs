use std::sync::OnceLock;

use regex::{Captures, Regex};

// One left-to-right scan with the URL alternative first, so a URL's #fragment
// or @segment is consumed by the link match and never re-matched as a
// hashtag or mention.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"https?://\S+|#\w+|@\w+").expect("token pattern is valid")
    })
}

pub fn annotate(text: &str) -> String {
    token_pattern()
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            if token.starts_with("http") {
                format!(r#"<a href="{token}" target="_blank" rel="noopener">{token}</a>"#)
            } else if let Some(tag) = token.strip_prefix('#') {
                format!(r#"<span class="hashtag">#{tag}</span>"#)
            } else {
                let user = token.trim_start_matches('@');
                format!(r#"<span class="mention">@{user}</span>"#)
            }
        })
        .into_owned()
}
