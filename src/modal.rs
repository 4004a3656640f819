use dioxus::prelude::*;

use crate::analytics::track_event;
use crate::application_form::ApplicationForm;
use crate::browser::event_target_id;
use crate::hooks::use_window_listener;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalId {
    Application,
    Wechat,
}

impl ModalId {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Application => "applicationModal",
            Self::Wechat => "wechatModal",
        }
    }

    /// The modal whose backdrop was clicked, if the click landed on one.
    /// Clicks on modal content carry other targets and map to `None`.
    pub fn from_backdrop(target_id: &str) -> Option<Self> {
        [Self::Application, Self::Wechat]
            .into_iter()
            .find(|modal| modal.element_id() == target_id)
    }
}

pub fn display_style(open: bool) -> &'static str {
    if open {
        "display: block;"
    } else {
        "display: none;"
    }
}

/// Visibility of both dialogs. They open and close independently.
#[derive(Clone, Copy)]
pub struct Modals {
    application: Signal<bool>,
    wechat: Signal<bool>,
}

impl Modals {
    fn signal(self, modal: ModalId) -> Signal<bool> {
        match modal {
            ModalId::Application => self.application,
            ModalId::Wechat => self.wechat,
        }
    }

    pub fn is_open(self, modal: ModalId) -> bool {
        self.signal(modal)()
    }

    pub fn show(self, modal: ModalId) {
        self.signal(modal).set(true);
    }

    pub fn hide(self, modal: ModalId) {
        self.signal(modal).set(false);
    }

    pub fn show_application_form(self) {
        track_event("Application", "Open Form", "Hero CTA");
        self.show(ModalId::Application);
    }

    pub fn schedule_consultation(self) {
        track_event("Consultation", "Schedule", "CTA");
        self.show(ModalId::Wechat);
    }

    pub fn close_wechat_modal(self) {
        self.hide(ModalId::Wechat);
    }
}

pub fn use_modals_provider() -> Modals {
    let application = use_signal(|| false);
    let wechat = use_signal(|| false);
    let modals = use_context_provider(|| Modals {
        application,
        wechat,
    });

    use_window_listener("click", move |event| {
        let Some(target_id) = event_target_id(&event) else {
            return;
        };
        if let Some(modal) = ModalId::from_backdrop(&target_id) {
            modals.hide(modal);
        }
    });

    modals
}

#[component]
pub fn ApplicationModal() -> Element {
    let modals = use_context::<Modals>();
    let open = modals.is_open(ModalId::Application);
    rsx! {
        div {
            id: ModalId::Application.element_id(),
            class: "modal",
            style: display_style(open),
            div { class: "modal-content",
                span {
                    class: "close",
                    onclick: move |_| modals.hide(ModalId::Application),
                    "×"
                }
                h2 {
                    span { class: "zh", "申请2025夏季科研项目" }
                    span { class: "en", "Apply for the 2025 Summer Research Program" }
                }
                ApplicationForm {}
            }
        }
    }
}

#[component]
pub fn WechatModal() -> Element {
    let modals = use_context::<Modals>();
    let open = modals.is_open(ModalId::Wechat);
    rsx! {
        div {
            id: ModalId::Wechat.element_id(),
            class: "modal",
            style: display_style(open),
            div { class: "modal-content wechat-content",
                span {
                    class: "close-wechat",
                    onclick: move |_| modals.close_wechat_modal(),
                    "×"
                }
                h2 {
                    span { class: "zh", "预约咨询" }
                    span { class: "en", "Schedule a Consultation" }
                }
                img { class: "wechat-qr", src: "/images/wechat-qr.png", alt: "WeChat QR code" }
                p {
                    span { class: "zh", "扫码添加招生顾问微信，预约一对一咨询。" }
                    span { class: "en", "Scan to add our admissions advisor on WeChat and book a one-on-one call." }
                }
            }
        }
    }
}
