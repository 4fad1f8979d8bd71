//! Route labels for request spans and metrics.

/// Collapse numeric path segments into `{id}` so `/product/7` and
/// `/product/8` share one label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if is_numeric_segment(segment) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

fn is_numeric_segment(segment: &str) -> bool {
    let digits = segment.strip_prefix('-').unwrap_or(segment);

    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
