use std::collections::HashSet;

/// Checks whether `filename` has an extension in `allowed_extensions`.
///
/// The extension is everything after the last dot, compared lowercase. A name
/// without a dot is never allowed.
///
/// # Arguments
/// - `filename` - Client supplied file name
/// - `allowed_extensions` - Lowercase extensions without the dot
///
/// # Returns
/// - `true` if the extension is allowed
pub fn allowed_file(filename: &str, allowed_extensions: &HashSet<String>) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| allowed_extensions.contains(&ext.to_lowercase()))
        .unwrap_or(false)
}

/// Reduces a client supplied file name to a safe single path component.
///
/// Keeps ASCII alphanumerics, `.`, `-` and `_`, turns whitespace into `_`, drops
/// everything else and strips leading dots and underscores so the result can
/// neither traverse directories nor be hidden. Falls back to `"file"` when
/// nothing survives.
pub fn secure_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' => Some(c),
            c if c.is_whitespace() => Some('_'),
            _ => None,
        })
        .collect();

    let trimmed = cleaned.trim_start_matches(['.', '_']);

    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}
