use dioxus::prelude::*;

/// Height the announcement strip adds above the navbar.
pub const BANNER_HEIGHT_PX: f64 = 50.0;

/// Offsets the navbar and hero need for a given banner visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerLayout {
    pub navbar_top: &'static str,
    pub hero_margin_top: &'static str,
}

impl BannerLayout {
    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            Self {
                navbar_top: "50px",
                hero_margin_top: "122px",
            }
        } else {
            Self {
                navbar_top: "0",
                hero_margin_top: "72px",
            }
        }
    }
}

/// Banner visibility shared with the navbar, hero and smooth scroll.
///
/// Starts visible on every load; dismissal is never persisted.
#[derive(Clone, Copy)]
pub struct BannerState {
    visible: Signal<bool>,
}

impl BannerState {
    pub fn is_visible(&self) -> bool {
        (self.visible)()
    }

    /// Current visibility without subscribing the caller.
    pub fn peek_visible(&self) -> bool {
        *self.visible.peek()
    }

    pub fn layout(&self) -> BannerLayout {
        BannerLayout::for_visibility(self.is_visible())
    }

    pub fn dismiss(mut self) {
        tracing::debug!("banner: dismiss");
        self.visible.set(false);
    }
}

pub fn use_banner_provider() -> BannerState {
    let visible = use_signal(|| true);
    use_context_provider(|| BannerState { visible })
}

#[component]
pub fn AnnouncementBanner() -> Element {
    let banner = use_context::<BannerState>();
    let class = if banner.is_visible() {
        "announcement-banner"
    } else {
        "announcement-banner hidden"
    };
    rsx! {
        div { id: "announcementBanner", class: "{class}",
            div { class: "announcement-content",
                span { class: "announcement-badge", "2025" }
                span { class: "zh", "2025夏季科研项目早申请截止日期：12月15日，名额有限！" }
                span { class: "en", "2025 Summer Research Program early decision closes December 15. Spots are limited!" }
            }
            button {
                r#type: "button",
                class: "announcement-close",
                aria_label: "Close announcement",
                onclick: move |_| banner.dismiss(),
                "×"
            }
        }
    }
}
