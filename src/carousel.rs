use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::SUCCESS_STORIES;
use crate::cycle::CyclicIndex;
use crate::hooks::use_interval;

pub fn card_class(index: CyclicIndex, position: usize) -> &'static str {
    if index.is_active(position) {
        "success-card active"
    } else {
        "success-card"
    }
}

#[component]
pub fn SuccessCarousel() -> Element {
    let config = use_context::<SiteConfig>();
    let mut index = use_signal(|| CyclicIndex::new(SUCCESS_STORIES.len()));

    let auto_advance = use_interval(config.carousel_interval_ms, move || {
        tracing::debug!("carousel: auto-advance");
        let next = index.peek().next();
        index.set(next);
    });

    // Manual navigation re-arms the auto-advance so the next automatic step
    // is a full period away.
    let mut step = move |direction: isize| {
        let next = index.peek().step(direction);
        index.set(next);
        auto_advance.restart();
    };

    if index().is_empty() {
        return rsx! {};
    }

    rsx! {
        section { id: "success", class: "success-section",
            h2 { class: "section-title",
                span { class: "zh", "学员成果" }
                span { class: "en", "Student Success" }
            }
            div { class: "carousel",
                button {
                    r#type: "button",
                    class: "carousel-prev",
                    aria_label: "Previous",
                    onclick: move |_| step(-1),
                    "‹"
                }
                div { class: "carousel-track",
                    for (position, story) in SUCCESS_STORIES.iter().enumerate() {
                        div { key: "{position}", class: card_class(index(), position),
                            h3 { "{story.student}" }
                            p { class: "success-school", "{story.school}" }
                            p { class: "success-result", "{story.admitted_to}" }
                            p {
                                span { class: "zh", "{story.project_zh}" }
                                span { class: "en", "{story.project_en}" }
                            }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "carousel-next",
                    aria_label: "Next",
                    onclick: move |_| step(1),
                    "›"
                }
            }
        }
    }
}
