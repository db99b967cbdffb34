use crate::types::Image;

/// Picks the first catalog image, or `placeholder` when there is none.
pub fn select_image_url(images: &[Image], placeholder: &str) -> String {
    images
        .first()
        .map(|image| image.url.clone())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Formats milliseconds as `m:ss`.
pub fn format_duration(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Formats a follower count with thousands separators, e.g. `1,234,567`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
