use dioxus::prelude::*;

use crate::browser::ObserverHandle;

pub const REVEAL_SELECTOR: &str = "section";
pub const REVEAL_CLASS: &str = "animated";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Adds `animated` to each page section the first time it scrolls into
/// view. Must run after the sections are mounted.
pub fn use_scroll_reveal() {
    let mut observer = use_signal(|| None::<ObserverHandle>);

    use_effect(move || {
        if observer.peek().is_some() {
            return;
        }
        tracing::debug!("reveal: observing sections");
        observer.set(ObserverHandle::reveal_once(
            REVEAL_SELECTOR,
            REVEAL_CLASS,
            REVEAL_THRESHOLD,
            REVEAL_ROOT_MARGIN,
        ));
    });

    use_drop(move || {
        if let Some(handle) = observer.peek().as_ref() {
            handle.disconnect();
        }
    });
}
