use dioxus::prelude::*;

use crate::content::ACHIEVEMENT_CATEGORIES;

/// Hook point for filtering the achievement list. Only logs for now.
pub fn filter_achievements(category: &str) {
    tracing::info!(category, "filtering achievements");
}

pub fn tab_class(active: &str, category: &str) -> &'static str {
    if active == category {
        "tab-btn active"
    } else {
        "tab-btn"
    }
}

#[component]
pub fn AchievementTabs() -> Element {
    let mut active = use_signal(|| {
        ACHIEVEMENT_CATEGORIES
            .first()
            .map(|category| category.key)
            .unwrap_or_default()
    });

    rsx! {
        section { id: "achievements", class: "achievements-section",
            h2 { class: "section-title",
                span { class: "zh", "学员成就" }
                span { class: "en", "Student Achievements" }
            }
            div { class: "achievement-tabs",
                for category in ACHIEVEMENT_CATEGORIES {
                    button {
                        key: "{category.key}",
                        r#type: "button",
                        class: tab_class(active(), category.key),
                        "data-category": category.key,
                        onclick: move |_| {
                            active.set(category.key);
                            filter_achievements(category.key);
                        },
                        span { class: "zh", "{category.zh}" }
                        span { class: "en", "{category.en}" }
                    }
                }
            }
            ul { class: "achievement-list",
                li {
                    span { class: "zh", "3篇论文被IEEE国际会议收录" }
                    span { class: "en", "3 papers accepted at IEEE conferences" }
                }
                li {
                    span { class: "zh", "ISEF国际科学与工程大奖赛二等奖" }
                    span { class: "en", "ISEF Grand Award, second place" }
                }
                li {
                    span { class: "zh", "87%学员被美国前30大学录取" }
                    span { class: "en", "87% of alumni admitted to US top-30 universities" }
                }
            }
        }
    }
}
