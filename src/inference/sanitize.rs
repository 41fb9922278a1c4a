//! Field-name sanitization

/// Normalize an arbitrary key or header into a safe identifier
///
/// Lowercases, maps every character outside `[a-z0-9_]` to `_`, collapses
/// runs of `_` and strips leading/trailing `_`. The result may be empty.
pub fn sanitize_field_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_underscore = true;

    for ch in name.to_lowercase().chars() {
        let ch = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            ch
        } else {
            '_'
        };
        if ch == '_' {
            if last_underscore {
                continue;
            }
            last_underscore = true;
        } else {
            last_underscore = false;
        }
        out.push(ch);
    }

    while out.ends_with('_') {
        out.pop();
    }
    out
}
