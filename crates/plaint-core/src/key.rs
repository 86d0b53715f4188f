//! Localization-key derivation helpers.

/// Join key segments with `.`, skipping empty segments.
///
/// An empty prefix override drops its segment entirely rather than producing
/// a dangling separator.
pub fn join(segments: &[&str]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('.');
        }
        out.push_str(segment);
    }
    out
}

/// Truncate a record name at the first `(`, so an auto-captured call-site
/// function name like `fileError(name:path:)` identifies as `fileError`.
pub fn base_name(name: &str) -> &str {
    match name.find('(') {
        Some(idx) => &name[..idx],
        None => name,
    }
}
