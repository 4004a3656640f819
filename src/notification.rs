use dioxus::prelude::*;
use dioxus::core::spawn_forever;

use crate::browser::sleep_ms;

pub const DISPLAY_MS: u32 = 5000;
pub const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#48bb78",
            Self::Warning => "#ed8936",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub leaving: bool,
}

impl Toast {
    pub fn class(&self) -> String {
        format!("notification {}", self.kind.class_name())
    }

    pub fn style(&self) -> String {
        let animation = if self.leaving {
            "slideOutRight 0.3s ease"
        } else {
            "slideInRight 0.3s ease"
        };
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 2rem; border-radius: 10px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); \
             z-index: 9999; animation: {animation};",
            self.kind.background()
        )
    }
}

/// Toasts currently on screen, shared through the context.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Notifier {
    pub fn toasts(&self) -> Vec<Toast> {
        (self.toasts)()
    }

    pub fn success(self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn warning(self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Warning);
    }

    /// Shows `message` and schedules its exit. The timeline runs detached
    /// from the caller, so a toast raised by a component that unmounts right
    /// away is still taken down.
    pub fn notify(self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.push(message.into(), kind);
        spawn_forever(async move {
            sleep_ms(DISPLAY_MS).await;
            self.begin_exit(id);
            sleep_ms(EXIT_ANIMATION_MS).await;
            self.dismiss(id);
        });
    }

    /// Toasts raised since the provider mounted.
    #[cfg(test)]
    pub fn issued(&self) -> u64 {
        *self.next_id.peek()
    }

    fn push(mut self, message: String, kind: NotificationKind) -> u64 {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            message,
            kind,
            leaving: false,
        });
        id
    }

    fn begin_exit(mut self, id: u64) {
        if let Some(toast) = self.toasts.write().iter_mut().find(|toast| toast.id == id) {
            toast.leaving = true;
        }
    }

    fn dismiss(mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

pub fn use_notifier_provider() -> Notifier {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Notifier { toasts, next_id })
}

#[component]
pub fn NotificationHost() -> Element {
    let notifier = use_context::<Notifier>();
    rsx! {
        for toast in notifier.toasts() {
            div { key: "{toast.id}", class: "{toast.class()}", style: "{toast.style()}", "{toast.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::test_support::{mount, settle};
    use pretty_assertions::assert_eq;

    const MESSAGE: &str = "手册下载已开始 / Brochure download started";

    thread_local! {
        static NOTIFIER: Cell<Option<Notifier>> = const { Cell::new(None) };
        static CALLER_LEAVES_AT_ONCE: Cell<bool> = const { Cell::new(false) };
    }

    fn provided() -> Notifier {
        NOTIFIER.with(Cell::get).expect("harness provides a notifier")
    }

    fn on_screen(notifier: Notifier) -> Vec<Toast> {
        notifier.toasts.peek().to_vec()
    }

    #[component]
    fn Host() -> Element {
        let notifier = use_notifier_provider();
        NOTIFIER.with(|cell| cell.set(Some(notifier)));
        rsx! {}
    }

    #[component]
    fn HostWithCaller() -> Element {
        let notifier = use_notifier_provider();
        NOTIFIER.with(|cell| cell.set(Some(notifier)));
        let caller_mounted = use_context_provider(|| Signal::new(true));
        rsx! {
            if caller_mounted() {
                Caller {}
            }
        }
    }

    #[component]
    fn Caller() -> Element {
        let notifier = use_context::<Notifier>();
        let mut mounted = use_context::<Signal<bool>>();
        use_hook(move || {
            notifier.success(MESSAGE);
            if CALLER_LEAVES_AT_ONCE.with(Cell::get) {
                mounted.set(false);
            }
        });
        rsx! {}
    }

    fn toast(kind: NotificationKind) -> Toast {
        Toast {
            id: 0,
            message: MESSAGE.to_string(),
            kind,
            leaving: false,
        }
    }

    #[test]
    fn background_follows_kind() {
        assert!(toast(NotificationKind::Success).style().contains("background: #48bb78;"));
        assert!(toast(NotificationKind::Warning).style().contains("background: #ed8936;"));
    }

    #[test]
    fn class_carries_kind() {
        assert_eq!(toast(NotificationKind::Success).class(), "notification success");
        assert_eq!(toast(NotificationKind::Warning).class(), "notification warning");
    }

    #[test]
    fn leaving_toast_plays_exit_animation() {
        let mut leaving = toast(NotificationKind::Success);
        leaving.leaving = true;
        assert!(leaving.style().contains("slideOutRight"));
        assert!(toast(NotificationKind::Success).style().contains("slideInRight"));
    }

    #[test]
    fn toast_slides_out_before_it_is_removed() {
        let dom = mount(Host);
        let notifier = provided();

        let id = dom.in_runtime(|| notifier.push(MESSAGE.to_string(), NotificationKind::Warning));
        assert_eq!(
            dom.in_runtime(|| on_screen(notifier)),
            vec![Toast {
                id,
                message: MESSAGE.to_string(),
                kind: NotificationKind::Warning,
                leaving: false,
            }]
        );

        dom.in_runtime(|| notifier.begin_exit(id));
        let leaving = dom.in_runtime(|| on_screen(notifier));
        assert_eq!(leaving.len(), 1);
        assert!(leaving[0].leaving);
        assert!(leaving[0].style().contains("slideOutRight"));

        dom.in_runtime(|| notifier.dismiss(id));
        assert_eq!(dom.in_runtime(|| on_screen(notifier)), Vec::new());
    }

    #[tokio::test]
    async fn success_toast_runs_its_whole_timeline() {
        CALLER_LEAVES_AT_ONCE.with(|cell| cell.set(false));
        let mut dom = mount(HostWithCaller);
        let notifier = provided();

        let shown = dom.in_runtime(|| on_screen(notifier));
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].message, MESSAGE);
        assert_eq!(shown[0].kind, NotificationKind::Success);
        assert!(!shown[0].leaving);

        settle(&mut dom).await;
        assert_eq!(dom.in_runtime(|| on_screen(notifier)), Vec::new());
    }

    #[tokio::test]
    async fn toast_is_removed_after_its_caller_unmounts() {
        CALLER_LEAVES_AT_ONCE.with(|cell| cell.set(true));
        let mut dom = mount(HostWithCaller);
        let notifier = provided();
        assert_eq!(dom.in_runtime(|| notifier.issued()), 1);
        assert_eq!(dom.in_runtime(|| on_screen(notifier)).len(), 1);

        settle(&mut dom).await;
        assert_eq!(dom.in_runtime(|| on_screen(notifier)), Vec::new());
    }
}
