/// Fragment selector for a same-page link, or `None` for a bare `#` or any
/// other kind of href.
pub fn fragment_of(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Document offset that parks the target `gap` pixels below the header.
pub fn scroll_offset(rect_top: f64, scroll_y: f64, header_height: f64, gap: f64) -> f64 {
    (rect_top + scroll_y - header_height - gap).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_and_external_links_are_skipped() {
        assert_eq!(fragment_of("#"), None);
        assert_eq!(fragment_of("/pricing"), None);
        assert_eq!(fragment_of("https://covasol.com.vn/#contact"), None);
        assert_eq!(fragment_of("#contact"), Some("#contact"));
    }

    #[test]
    fn target_lands_below_header_plus_gap() {
        let (header, gap) = (72.0, 20.0);
        let scroll_y = 300.0;
        let rect_top = 1_200.0;
        let offset = scroll_offset(rect_top, scroll_y, header, gap);
        // After scrolling to `offset`, the target's top relative to the viewport.
        let landed = rect_top + scroll_y - offset;
        assert_eq!(landed, header + gap);
    }

    #[test]
    fn never_scrolls_above_page_top() {
        assert_eq!(scroll_offset(10.0, 0.0, 80.0, 20.0), 0.0);
    }
}
