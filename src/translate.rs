//! Local-to-remote path translation through the configured root mappings.
//!
//! Mappings are tried in config order and the first one whose local prefix
//! covers the path wins, even when a later prefix is longer. A prefix only
//! covers a path at a segment boundary: `/home/user` covers `/home/user` and
//! `/home/user/x` but not `/home/user2`.

use crate::config::RootMapping;

/// Translate `path` with the first matching mapping, or return it unchanged.
pub fn translate(path: &str, mappings: &[RootMapping]) -> String {
    for mapping in mappings {
        if let Some(translated) = apply_mapping(path, mapping) {
            tracing::debug!(
                local = %path,
                remote = %translated,
                prefix = %mapping.local_prefix,
                "path translated"
            );
            return translated;
        }
    }
    path.to_string()
}

fn apply_mapping(path: &str, mapping: &RootMapping) -> Option<String> {
    if path == mapping.local_prefix {
        return Some(mapping.remote_prefix.clone());
    }
    let rest = strip_segment_prefix(path, &mapping.local_prefix)?;
    if rest.is_empty() {
        return Some(mapping.remote_prefix.clone());
    }
    // `rest` starts with '/' so the remote side must not contribute one.
    let remote = mapping.remote_prefix.trim_end_matches('/');
    Some(format!("{remote}{rest}"))
}

/// Return the remainder of `path` after `prefix`: empty, or starting with `/`.
fn strip_segment_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let prefix = prefix.trim_end_matches('/');
    let rest = path.strip_prefix(prefix)?;
    if rest.starts_with('/') {
        Some(rest)
    } else if rest.is_empty() && !prefix.is_empty() {
        // `path` equals the prefix minus its trailing slash.
        Some("")
    } else {
        None
    }
}
