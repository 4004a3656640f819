use dioxus::prelude::*;

use crate::banner::BannerState;
use crate::language::LanguageSwitch;
use crate::scroll::{is_scrolled, scroll_to_anchor, ScrollPosition};

const NAV_LINKS: [(&str, &str, &str); 5] = [
    ("#programs", "项目", "Programs"),
    ("#lab", "实验室", "Lab"),
    ("#success", "学员成果", "Success"),
    ("#achievements", "成就", "Achievements"),
    ("#apply", "申请", "Apply"),
];

#[component]
pub fn Navbar() -> Element {
    let banner = use_context::<BannerState>();
    let scroll = use_context::<ScrollPosition>();
    let class = if is_scrolled(scroll.y()) {
        "navbar scrolled"
    } else {
        "navbar"
    };
    let layout = banner.layout();

    rsx! {
        nav { class: "{class}", style: "top: {layout.navbar_top};",
            div { class: "nav-container",
                a {
                    href: "#top",
                    class: "nav-logo",
                    onclick: move |event| {
                        event.prevent_default();
                        scroll_to_anchor("#top", banner);
                    },
                    span { class: "zh", "精英科研项目" }
                    span { class: "en", "Elite Research Program" }
                }
                ul { class: "nav-links",
                    for (href, zh, en) in NAV_LINKS {
                        li { key: "{href}",
                            a {
                                href,
                                onclick: move |event| {
                                    event.prevent_default();
                                    scroll_to_anchor(href, banner);
                                },
                                span { class: "zh", "{zh}" }
                                span { class: "en", "{en}" }
                            }
                        }
                    }
                }
                LanguageSwitch {}
            }
        }
    }
}
