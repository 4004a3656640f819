use dioxus::prelude::*;
use serde::Serialize;

use crate::analytics::track_event;
use crate::browser::sleep_ms;
use crate::modal::{ModalId, Modals};
use crate::notification::Notifier;

/// Simulated round trip; nothing is sent anywhere.
pub const SUBMIT_DELAY_MS: u32 = 2000;
pub const SUBMIT_LABEL: &str = "提交申请 Submit Application";
pub const SUBMITTING_LABEL: &str = "提交中 Submitting...";
pub const SUCCESS_MESSAGE: &str =
    "申请已成功提交！我们会在24小时内联系您。/ Application submitted successfully! We will contact you within 24 hours.";

const INTERESTS: [(&str, &str); 4] = [
    ("ai", "人工智能 AI & Machine Learning"),
    ("engineering", "工程 Engineering"),
    ("biology", "生物医学 Biomedical Science"),
    ("physics", "物理 Physics & Astronomy"),
];

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ApplicationFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub school: String,
    pub grade: String,
    pub interest: String,
    pub message: String,
}

impl ApplicationFields {
    /// Key/value view of the filled-in form. Collected for parity with a
    /// real submission but not sent anywhere yet.
    pub fn payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => SUBMIT_LABEL,
            Self::Submitting => SUBMITTING_LABEL,
        }
    }

    pub fn button_disabled(self) -> bool {
        self == Self::Submitting
    }
}

/// Runs one submission: disables the button, waits out the simulated round
/// trip, then closes the dialog, clears the form and confirms. Ignored while
/// a submission is already in flight.
pub fn submit_application(
    fields: Signal<ApplicationFields>,
    mut state: Signal<SubmitState>,
    modals: Modals,
    notifier: Notifier,
) {
    if state.peek().button_disabled() {
        return;
    }
    let payload = fields.peek().payload();
    tracing::debug!(%payload, "application: collected form data");
    track_event("Application", "Submit", "Form");
    state.set(SubmitState::Submitting);
    spawn(async move {
        sleep_ms(SUBMIT_DELAY_MS).await;
        finish_submission(fields, state, modals, notifier);
    });
}

fn finish_submission(
    mut fields: Signal<ApplicationFields>,
    mut state: Signal<SubmitState>,
    modals: Modals,
    notifier: Notifier,
) {
    modals.hide(ModalId::Application);
    fields.set(ApplicationFields::default());
    state.set(SubmitState::Idle);
    notifier.success(SUCCESS_MESSAGE);
}

#[component]
pub fn ApplicationForm() -> Element {
    let modals = use_context::<Modals>();
    let notifier = use_context::<Notifier>();
    let mut fields = use_signal(ApplicationFields::default);
    let state = use_signal(SubmitState::default);

    let mut edit = move |update: fn(&mut ApplicationFields, String), value: String| {
        let mut next = fields();
        update(&mut next, value);
        fields.set(next);
    };

    rsx! {
        form {
            id: "applicationForm",
            class: "application-form",
            onsubmit: move |event| {
                event.prevent_default();
                submit_application(fields, state, modals, notifier);
            },
            div { class: "form-row",
                label { r#for: "name", "学生姓名 Student Name" }
                input {
                    id: "name",
                    name: "name",
                    r#type: "text",
                    required: true,
                    value: "{fields().name}",
                    oninput: move |event| edit(|f, v| f.name = v, event.value()),
                }
            }
            div { class: "form-row",
                label { r#for: "email", "邮箱 Email" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    value: "{fields().email}",
                    oninput: move |event| edit(|f, v| f.email = v, event.value()),
                }
            }
            div { class: "form-row",
                label { r#for: "phone", "电话/微信 Phone or WeChat" }
                input {
                    id: "phone",
                    name: "phone",
                    r#type: "tel",
                    value: "{fields().phone}",
                    oninput: move |event| edit(|f, v| f.phone = v, event.value()),
                }
            }
            div { class: "form-row",
                label { r#for: "school", "学校 School" }
                input {
                    id: "school",
                    name: "school",
                    r#type: "text",
                    value: "{fields().school}",
                    oninput: move |event| edit(|f, v| f.school = v, event.value()),
                }
            }
            div { class: "form-row",
                label { r#for: "grade", "年级 Grade" }
                select {
                    id: "grade",
                    name: "grade",
                    value: "{fields().grade}",
                    onchange: move |event| edit(|f, v| f.grade = v, event.value()),
                    option { value: "", "请选择 Select" }
                    option { value: "9", "9" }
                    option { value: "10", "10" }
                    option { value: "11", "11" }
                    option { value: "12", "12" }
                }
            }
            div { class: "form-row",
                label { r#for: "interest", "研究方向 Research Interest" }
                select {
                    id: "interest",
                    name: "interest",
                    value: "{fields().interest}",
                    onchange: move |event| edit(|f, v| f.interest = v, event.value()),
                    option { value: "", "请选择 Select" }
                    for (value, label) in INTERESTS {
                        option { key: "{value}", value, "{label}" }
                    }
                }
            }
            div { class: "form-row",
                label { r#for: "message", "补充说明 Anything else" }
                textarea {
                    id: "message",
                    name: "message",
                    rows: "4",
                    value: "{fields().message}",
                    oninput: move |event| edit(|f, v| f.message = v, event.value()),
                }
            }
            button {
                r#type: "submit",
                class: "submit-btn",
                disabled: state().button_disabled(),
                "{state().button_label()}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::modal::use_modals_provider;
    use crate::notification::use_notifier_provider;
    use crate::test_support::{mount, settle};
    use pretty_assertions::assert_eq;

    #[derive(Clone, Copy)]
    struct Flow {
        fields: Signal<ApplicationFields>,
        state: Signal<SubmitState>,
        modals: Modals,
        notifier: Notifier,
    }

    thread_local! {
        static FLOW: Cell<Option<Flow>> = const { Cell::new(None) };
        static SUBMIT_ON_MOUNT: Cell<u32> = const { Cell::new(0) };
    }

    fn filled() -> ApplicationFields {
        ApplicationFields {
            name: "Timmy L.".to_string(),
            email: "timmy@example.com".to_string(),
            grade: "11".to_string(),
            interest: "ai".to_string(),
            ..ApplicationFields::default()
        }
    }

    fn flow() -> Flow {
        FLOW.with(Cell::get).expect("harness mounted")
    }

    #[component]
    fn FormHost() -> Element {
        let notifier = use_notifier_provider();
        let modals = use_modals_provider();
        let fields = use_signal(filled);
        let state = use_signal(SubmitState::default);
        FLOW.with(|cell| {
            cell.set(Some(Flow {
                fields,
                state,
                modals,
                notifier,
            }))
        });
        use_hook(move || {
            modals.show(ModalId::Application);
            for _ in 0..SUBMIT_ON_MOUNT.with(Cell::get) {
                submit_application(fields, state, modals, notifier);
            }
        });
        rsx! {}
    }

    #[test]
    fn submit_control_labels_follow_state() {
        assert!(!SubmitState::Idle.button_disabled());
        assert_eq!(SubmitState::Idle.button_label(), SUBMIT_LABEL);
        assert!(SubmitState::Submitting.button_disabled());
        assert_eq!(SubmitState::Submitting.button_label(), "提交中 Submitting...");
    }

    #[tokio::test]
    async fn submission_closes_resets_and_confirms() {
        SUBMIT_ON_MOUNT.with(|cell| cell.set(1));
        let mut dom = mount(FormHost);
        let flow = flow();

        dom.in_runtime(|| {
            assert_eq!(*flow.state.peek(), SubmitState::Submitting);
            assert!(flow.state.peek().button_disabled());
            assert_eq!(*flow.fields.peek(), filled());
            assert!(flow.modals.is_open(ModalId::Application));
        });

        settle(&mut dom).await;

        dom.in_runtime(|| {
            assert_eq!(*flow.state.peek(), SubmitState::Idle);
            assert_eq!(*flow.fields.peek(), ApplicationFields::default());
            assert!(!flow.modals.is_open(ModalId::Application));
            assert_eq!(flow.notifier.issued(), 1);
        });
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_ignored() {
        SUBMIT_ON_MOUNT.with(|cell| cell.set(2));
        let mut dom = mount(FormHost);
        let flow = flow();

        settle(&mut dom).await;

        dom.in_runtime(|| {
            assert_eq!(*flow.state.peek(), SubmitState::Idle);
            assert_eq!(flow.notifier.issued(), 1);
        });
    }

    #[test]
    fn completed_submission_shows_one_success_toast() {
        SUBMIT_ON_MOUNT.with(|cell| cell.set(0));
        let dom = mount(FormHost);
        let flow = flow();

        let toasts = dom.in_runtime(|| {
            finish_submission(flow.fields, flow.state, flow.modals, flow.notifier);
            flow.notifier.toasts()
        });

        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, SUCCESS_MESSAGE);
        assert!(!toasts[0].leaving);
        dom.in_runtime(|| assert!(!flow.modals.is_open(ModalId::Application)));
    }

    #[test]
    fn payload_lists_every_field() {
        let fields = ApplicationFields {
            name: "Timmy L.".to_string(),
            email: "timmy@example.com".to_string(),
            interest: "ai".to_string(),
            ..ApplicationFields::default()
        };
        let payload = fields.payload();
        assert_eq!(payload["name"], "Timmy L.");
        assert_eq!(payload["interest"], "ai");
        assert_eq!(payload["school"], "");
        assert_eq!(payload.as_object().map(|map| map.len()), Some(7));
    }
}
