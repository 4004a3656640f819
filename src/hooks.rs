use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::browser::{IntervalHandle, WindowListener};

type SharedCallback = Rc<RefCell<dyn FnMut()>>;

/// Handle to a repeating timer owned by a component.
///
/// The timer starts on mount and is cleared when the component is dropped.
/// `restart` re-arms it from zero, `cancel` stops it for good. A `cancel`
/// issued before the mount effect runs keeps the timer from ever starting.
#[derive(Clone, Copy)]
pub struct IntervalControl {
    period_ms: u32,
    handle: Signal<Option<IntervalHandle>>,
    callback: CopyValue<SharedCallback>,
    settled: Signal<bool>,
}

impl IntervalControl {
    pub fn restart(mut self) {
        self.clear();
        self.settled.set(true);
        let callback = Rc::clone(&self.callback.peek());
        let next = IntervalHandle::start(self.period_ms, move || {
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)();
            }
        });
        self.handle.set(next);
    }

    pub fn cancel(mut self) {
        self.settled.set(true);
        self.clear();
    }

    pub fn is_armed(&self) -> bool {
        self.handle.peek().is_some()
    }

    fn clear(mut self) {
        if let Some(handle) = self.handle.write().take() {
            handle.cancel();
        }
    }
}

pub fn use_interval(period_ms: u32, callback: impl FnMut() + 'static) -> IntervalControl {
    let handle = use_signal(|| None::<IntervalHandle>);
    let callback = use_hook(move || {
        let shared: SharedCallback = Rc::new(RefCell::new(callback));
        CopyValue::new(shared)
    });
    let settled = use_signal(|| false);
    let control = IntervalControl {
        period_ms,
        handle,
        callback,
        settled,
    };

    use_effect(move || {
        if *settled.peek() || control.is_armed() {
            return;
        }
        control.restart();
    });

    use_drop(move || {
        if let Some(handle) = handle.peek().as_ref() {
            handle.cancel();
        }
    });

    control
}

/// Attaches `callback` to a window event once, detaching it on drop.
pub fn use_window_listener(event: &'static str, callback: impl FnMut(web_sys::Event) + 'static) {
    let mut listener = use_signal(|| None::<WindowListener>);
    let mut pending = use_hook(move || {
        let boxed: Box<dyn FnMut(web_sys::Event)> = Box::new(callback);
        CopyValue::new(Some(boxed))
    });

    use_effect(move || {
        if listener.peek().is_some() {
            return;
        }
        let Some(callback) = pending.write().take() else {
            return;
        };
        tracing::debug!(event, "attach window listener");
        listener.set(WindowListener::attach(event, callback));
    });

    use_drop(move || {
        if let Some(listener) = listener.peek().as_ref() {
            listener.detach();
        }
    });
}
