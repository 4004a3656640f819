use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::admissions::ApplySection;
use crate::banner::{use_banner_provider, AnnouncementBanner};
use crate::carousel::SuccessCarousel;
use crate::config::use_site_config;
use crate::gallery::LabGallery;
use crate::hero::{Hero, ProgramsSection};
use crate::modal::{use_modals_provider, ApplicationModal, WechatModal};
use crate::navbar::Navbar;
use crate::notification::{use_notifier_provider, NotificationHost};
use crate::outcomes::OutcomesPager;
use crate::reveal::use_scroll_reveal;
use crate::scroll::use_scroll_provider;
use crate::tabs::AchievementTabs;
use crate::testimonials::Testimonials;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_site_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "Elite Research Program 2025" }
            div { class: "page loading" }
        };
    };

    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#1a365d" }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    use_banner_provider();
    use_scroll_provider();
    use_notifier_provider();
    use_modals_provider();
    use_scroll_reveal();

    rsx! {
        document::Title { "精英科研项目 2025 | Elite Research Program 2025" }
        AnnouncementBanner {}
        Navbar {}
        Hero {}
        main { class: "page-body",
            ProgramsSection {}
            LabGallery {}
            SuccessCarousel {}
            AchievementTabs {}
            OutcomesPager {}
            Testimonials {}
            ApplySection {}
        }
        footer { class: "site-footer",
            p {
                span { class: "zh", "© 2025 精英科研项目 保留所有权利" }
                span { class: "en", "© 2025 Elite Research Program. All rights reserved." }
            }
        }
        ApplicationModal {}
        WechatModal {}
        NotificationHost {}
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found | Elite Research Program" }
        div { class: "page not-found",
            h1 { "404" }
            p { "Missing: /{path}" }
            Link { to: Route::Home {}, class: "back-home",
                span { class: "zh", "返回首页" }
                span { class: "en", "Back to home" }
            }
        }
    }
}
