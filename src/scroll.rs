//! Page-scroll arithmetic for the fixed navigation bar.

/// Height of the fixed navigation bar (`h-16`).
pub const NAV_HEIGHT: f64 = 64.0;
/// Scroll distance after which the bar switches to its raised style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Document-relative scroll position that puts a section's top edge just
/// below the navigation bar. `element_top` is viewport-relative, as returned
/// by `getBoundingClientRect`.
pub fn section_scroll_target(element_top: f64, page_offset: f64) -> f64 {
    (element_top + page_offset - NAV_HEIGHT).max(0.0)
}

/// `#skills` -> `skills`
pub fn anchor_id(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_scroll_target_clears_nav() {
        assert_eq!(section_scroll_target(300.0, 1200.0), 1436.0);
        // section above the current position
        assert_eq!(section_scroll_target(-800.0, 1200.0), 336.0);
        // never scroll above the top of the document
        assert_eq!(section_scroll_target(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_anchor_id() {
        assert_eq!(anchor_id("#contact"), "contact");
        assert_eq!(anchor_id("about"), "about");
    }
}
