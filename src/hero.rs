use dioxus::prelude::*;

use crate::analytics::track_event;
use crate::banner::BannerState;
use crate::browser::trigger_download;
use crate::config::SiteConfig;
use crate::content::PROGRAMS;
use crate::modal::Modals;
use crate::notification::Notifier;
use crate::scroll::{parallax_offset, ScrollPosition};

pub const DOWNLOAD_STARTED_MESSAGE: &str = "手册下载已开始 / Brochure download started";
pub const DOWNLOAD_FAILED_MESSAGE: &str =
    "手册下载失败，请稍后再试 / Brochure download failed, please try again later";

pub fn download_brochure(config: &SiteConfig, notifier: Notifier) {
    track_event("Download", "Brochure", "Hero CTA");
    report_download(
        trigger_download(&config.brochure_url, &config.brochure_file_name),
        notifier,
    );
}

fn report_download(outcome: Result<(), String>, notifier: Notifier) {
    match outcome {
        Ok(()) => notifier.success(DOWNLOAD_STARTED_MESSAGE),
        Err(message) => {
            tracing::warn!(%message, "brochure: download link failed");
            notifier.warning(DOWNLOAD_FAILED_MESSAGE);
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let banner = use_context::<BannerState>();
    let scroll = use_context::<ScrollPosition>();
    let modals = use_context::<Modals>();
    let notifier = use_context::<Notifier>();
    let config = use_context::<SiteConfig>();

    let layout = banner.layout();
    let shift = parallax_offset(scroll.y());

    rsx! {
        header {
            id: "top",
            class: "hero",
            style: "margin-top: {layout.hero_margin_top}; transform: translateY({shift}px);",
            div { class: "hero-content",
                h1 { class: "hero-title",
                    span { class: "zh", "精英科研项目 2025" }
                    span { class: "en", "Elite Research Program 2025" }
                }
                p { class: "hero-subtitle",
                    span { class: "zh", "与顶尖大学导师一起，完成真正的科研项目" }
                    span { class: "en", "Real research projects, mentored by faculty from top universities" }
                }
                div { class: "hero-cta-group",
                    button {
                        r#type: "button",
                        class: "cta-primary",
                        onclick: move |_| modals.show_application_form(),
                        span { class: "zh", "立即申请" }
                        span { class: "en", "Apply Now" }
                    }
                    button {
                        r#type: "button",
                        class: "cta-secondary",
                        onclick: move |_| download_brochure(&config, notifier),
                        span { class: "zh", "下载项目手册" }
                        span { class: "en", "Download Brochure" }
                    }
                    button {
                        r#type: "button",
                        class: "cta-ghost",
                        onclick: move |_| modals.schedule_consultation(),
                        span { class: "zh", "预约咨询" }
                        span { class: "en", "Book a Consultation" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProgramsSection() -> Element {
    rsx! {
        section { id: "programs", class: "programs-section",
            h2 { class: "section-title",
                span { class: "zh", "科研方向" }
                span { class: "en", "Research Tracks" }
            }
            div { class: "program-grid",
                for program in PROGRAMS {
                    div { key: "{program.en}", class: "program-card",
                        h3 {
                            span { class: "zh", "{program.zh}" }
                            span { class: "en", "{program.en}" }
                        }
                        p { class: "program-weeks",
                            span { class: "zh", "{program.weeks} 周" }
                            span { class: "en", "{program.weeks} weeks" }
                        }
                    }
                }
            }
        }
    }
}
