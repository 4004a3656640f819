//! Drives a headless `VirtualDom` until its spawned tasks and effects settle.
//!
//! Browser timers are inert off wasm, so `sleep_ms` resolves on the first
//! poll and whole timelines finish within a few rounds of work.

use std::time::Duration;

use dioxus::dioxus_core::VirtualDom;

const ROUNDS: usize = 16;
const IDLE_AFTER: Duration = Duration::from_millis(25);

pub fn mount(app: fn() -> dioxus::prelude::Element) -> VirtualDom {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dom
}

pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..ROUNDS {
        if tokio::time::timeout(IDLE_AFTER, dom.wait_for_work())
            .await
            .is_err()
        {
            break;
        }
        let _ = dom.render_immediate_to_vec();
    }
}
