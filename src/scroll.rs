use dioxus::prelude::*;

use crate::banner::{BannerState, BANNER_HEIGHT_PX};
use crate::browser::{anchor_geometry, scroll_y, smooth_scroll_to, AnchorGeometry};
use crate::hooks::use_window_listener;

pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;
pub const ANCHOR_PADDING_PX: f64 = 20.0;
pub const PARALLAX_SPEED: f64 = 0.5;

/// Vertical page offset, updated on every window scroll event.
#[derive(Clone, Copy)]
pub struct ScrollPosition {
    y: Signal<f64>,
}

impl ScrollPosition {
    pub fn y(&self) -> f64 {
        (self.y)()
    }
}

pub fn use_scroll_provider() -> ScrollPosition {
    let mut y = use_signal(scroll_y);
    use_window_listener("scroll", move |_event| {
        y.set(scroll_y());
    });
    use_context_provider(|| ScrollPosition { y })
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD_PX
}

pub fn parallax_offset(offset: f64) -> f64 {
    offset * PARALLAX_SPEED
}

/// Where the window must scroll so the anchor target clears the fixed
/// navbar, the banner (while shown) and a little padding.
pub fn anchor_scroll_target(geometry: AnchorGeometry, banner_visible: bool) -> f64 {
    let banner_height = if banner_visible { BANNER_HEIGHT_PX } else { 0.0 };
    let offset = geometry.navbar_height + banner_height + ANCHOR_PADDING_PX;
    geometry.target_top + geometry.page_offset - offset
}

/// Smooth-scrolls to the element named by an in-page `href` such as
/// `#programs`. Unknown targets are ignored.
pub fn scroll_to_anchor(href: &str, banner: BannerState) {
    let Some(geometry) = anchor_geometry(href) else {
        tracing::debug!(href, "scroll: anchor target missing");
        return;
    };
    smooth_scroll_to(anchor_scroll_target(geometry, banner.peek_visible()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn geometry() -> AnchorGeometry {
        AnchorGeometry {
            target_top: 600.0,
            page_offset: 400.0,
            navbar_height: 72.0,
        }
    }

    #[test]
    fn scrolled_state_starts_past_one_hundred() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
        assert!(is_scrolled(101.0));
    }

    #[test]
    fn anchor_offset_includes_banner_while_visible() {
        assert_eq!(anchor_scroll_target(geometry(), true), 600.0 + 400.0 - (72.0 + 50.0 + 20.0));
    }

    #[test]
    fn anchor_offset_drops_banner_once_dismissed() {
        assert_eq!(anchor_scroll_target(geometry(), false), 600.0 + 400.0 - (72.0 + 20.0));
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(240.0), 120.0);
    }
}
