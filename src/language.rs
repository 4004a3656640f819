use dioxus::prelude::*;

use crate::browser::set_body_attribute;

const LANG_ATTRIBUTE: &str = "data-lang";

/// Page language. Visible text is switched by CSS keyed on the body
/// attribute; this value only tracks which button was pressed last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Zh, Lang::En];

    /// Anything other than `en` means Chinese.
    pub fn from_attr(value: &str) -> Self {
        if value == "en" {
            Self::En
        } else {
            Self::Zh
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Zh => "中文",
            Self::En => "EN",
        }
    }

    /// Value for the body attribute; `None` removes it.
    pub fn body_attribute(self) -> Option<&'static str> {
        match self {
            Self::En => Some("en"),
            Self::Zh => None,
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Zh => "切换语言",
            Self::En => "Switch language",
        }
    }
}

pub fn button_class(button: Lang, current: Lang) -> &'static str {
    if button == current {
        "lang-btn active"
    } else {
        "lang-btn"
    }
}

#[component]
pub fn LanguageSwitch() -> Element {
    let mut current = use_signal(Lang::default);

    let mut select = move |value: &str| {
        let next = Lang::from_attr(value);
        if let Err(message) = set_body_attribute(LANG_ATTRIBUTE, next.body_attribute()) {
            tracing::debug!(%message, "language: body attribute skipped");
        }
        current.set(next);
    };

    rsx! {
        div { class: "lang-switch", aria_label: "{current().switch_label()}",
            for lang in Lang::ALL {
                button {
                    key: "{lang.code()}",
                    r#type: "button",
                    class: button_class(lang, current()),
                    "data-lang": lang.code(),
                    onclick: move |_| select(lang.code()),
                    "{lang.button_label()}"
                }
            }
        }
    }
}
