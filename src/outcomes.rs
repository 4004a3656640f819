use dioxus::prelude::*;

use crate::content::OUTCOME_PAGES;
use crate::cycle::CyclicIndex;

pub fn page_class(index: CyclicIndex, position: usize) -> &'static str {
    if index.is_active(position) {
        "outcomes-page active"
    } else {
        "outcomes-page"
    }
}

#[component]
pub fn OutcomesPager() -> Element {
    let mut page = use_signal(|| CyclicIndex::new(OUTCOME_PAGES.len()));

    let mut change_outcomes_page = move |direction: isize| {
        let next = page.peek().step(direction);
        page.set(next);
    };

    if page().is_empty() {
        return rsx! {};
    }

    rsx! {
        section { id: "outcomes", class: "outcomes-section",
            h2 { class: "section-title",
                span { class: "zh", "录取成果" }
                span { class: "en", "Admission Outcomes" }
            }
            for (position, rows) in OUTCOME_PAGES.iter().enumerate() {
                div { key: "{position}", class: page_class(page(), position),
                    for (university, count) in rows.iter() {
                        div { key: "{university}", class: "outcome-row",
                            span { class: "outcome-university", "{university}" }
                            span { class: "outcome-count", "{count}" }
                        }
                    }
                }
            }
            div { class: "outcomes-pagination",
                button {
                    r#type: "button",
                    class: "page-prev",
                    onclick: move |_| change_outcomes_page(-1),
                    "‹"
                }
                span { class: "current-page", "{page().display_position()}" }
                span { class: "page-separator", " / " }
                span { class: "total-pages", "{page().len()}" }
                button {
                    r#type: "button",
                    class: "page-next",
                    onclick: move |_| change_outcomes_page(1),
                    "›"
                }
            }
        }
    }
}
