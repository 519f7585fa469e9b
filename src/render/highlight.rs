use std::borrow::Cow;

/// Converts a code sample into display markup.
///
/// Implementations must not fail: on anything they cannot handle they return
/// the code unchanged.
pub trait Highlighter {
    fn highlight(&self, code: &str, language: &str) -> String;
}

/// Returns code as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: &str) -> String {
        code.to_string()
    }
}

/// Canonical name for a language tag: lowercased, with `js`/`ts` expanded.
pub fn normalize_language(language: &str) -> Cow<'_, str> {
    let lower = language.to_lowercase();
    match lower.as_str() {
        "js" => return Cow::Borrowed("javascript"),
        "ts" => return Cow::Borrowed("typescript"),
        _ => {}
    }
    if lower == language {
        Cow::Borrowed(language)
    } else {
        Cow::Owned(lower)
    }
}
