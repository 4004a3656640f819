//! Thin wrappers over the browser APIs the page needs.
//!
//! Every helper compiles on native targets too, where it does nothing, so the
//! components and their state logic stay testable outside the browser.

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
pub struct IntervalHandle {
    id: i32,
    _closure: Rc<Closure<dyn FnMut()>>,
}

#[cfg(not(target_arch = "wasm32"))]
pub struct IntervalHandle;

/// `setInterval` takes a signed delay; periods past `i32::MAX` are rejected
/// instead of wrapping negative.
pub fn timer_delay(period_ms: u32) -> Option<i32> {
    i32::try_from(period_ms).ok()
}

impl IntervalHandle {
    /// Starts a repeating timer. Returns `None` when no window is available
    /// or the period does not fit a browser timer. Off the browser the handle
    /// is inert but still tracks whether a timer is armed.
    pub fn start(period_ms: u32, callback: impl FnMut() + 'static) -> Option<Self> {
        let delay = timer_delay(period_ms)?;
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window()?;
            let closure = Rc::new(Closure::wrap(Box::new(callback) as Box<dyn FnMut()>));
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().as_ref().unchecked_ref(),
                    delay,
                )
                .ok()?;
            Some(Self {
                id,
                _closure: closure,
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (delay, callback);
            Some(Self)
        }
    }

    pub fn cancel(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(self.id);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub struct WindowListener {
    event: &'static str,
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

#[cfg(not(target_arch = "wasm32"))]
pub struct WindowListener;

impl WindowListener {
    pub fn attach(
        event: &'static str,
        callback: Box<dyn FnMut(web_sys::Event)>,
    ) -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window()?;
            let closure = Rc::new(Closure::wrap(callback));
            window
                .add_event_listener_with_callback(event, closure.as_ref().as_ref().unchecked_ref())
                .ok()?;
            Some(Self { event, closure })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (event, callback);
            None
        }
    }

    pub fn detach(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    self.event,
                    self.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        }
    }
}

/// Resolves after `ms` milliseconds. Resolves immediately off the browser.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}

pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Parses a date-time literal the way the browser does (local time for
/// offset-less literals) and returns epoch milliseconds.
pub fn parse_timestamp_ms(literal: &str) -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&JsValue::from_str(literal));
        let time = date.get_time();
        if time.is_nan() {
            None
        } else {
            Some(time)
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = literal;
        None
    }
}

/// Uniform value in `[0, 1)`.
pub fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

pub fn scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.page_y_offset().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Sets `name` on `<body>`, or removes it when `value` is `None`.
pub fn set_body_attribute(name: &str, value: Option<&str>) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .ok_or("document body unavailable")?;
        match value {
            Some(value) => body
                .set_attribute(name, value)
                .map_err(|_| format!("failed to set body attribute {name}")),
            None => body
                .remove_attribute(name)
                .map_err(|_| format!("failed to remove body attribute {name}")),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (name, value);
        Ok(())
    }
}

/// Viewport-relative top of the element matched by `selector` plus the
/// height of the `.navbar`, both needed to compute an anchor scroll target.
pub fn anchor_geometry(selector: &str) -> Option<AnchorGeometry> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = web_sys::window()?.document()?;
        let target = document.query_selector(selector).ok()??;
        let navbar_height = document
            .query_selector(".navbar")
            .ok()
            .flatten()
            .and_then(|navbar| navbar.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|navbar| navbar.offset_height() as f64)
            .unwrap_or(0.0);
        Some(AnchorGeometry {
            target_top: target.get_bounding_client_rect().top(),
            page_offset: scroll_y(),
            navbar_height,
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = selector;
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorGeometry {
    pub target_top: f64,
    pub page_offset: f64,
    pub navbar_height: f64,
}

pub fn smooth_scroll_to(top: f64) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = top;
}

/// Clicks a temporary `<a download>` so the browser fetches `href`.
pub fn trigger_download(href: &str, file_name: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or("document unavailable")?;
        let link = document
            .create_element("a")
            .map_err(|_| "anchor create failed")?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed")?;
        link.set_href(href);
        link.set_download(file_name);
        link.click();
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (href, file_name);
        Ok(())
    }
}

/// `id` of the element an event was dispatched to, if it has one.
pub fn event_target_id(event: &web_sys::Event) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
        let id = target.id();
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = event;
        None
    }
}

#[cfg(target_arch = "wasm32")]
pub struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _closure:
        Rc<Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

#[cfg(not(target_arch = "wasm32"))]
pub struct ObserverHandle;

impl ObserverHandle {
    /// Observes every element matching `selector`. Each element gets
    /// `class_name` the first time it intersects and is then unobserved.
    pub fn reveal_once(
        selector: &str,
        class_name: &'static str,
        threshold: f64,
        root_margin: &str,
    ) -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = web_sys::window()?.document()?;
            let closure = Rc::new(Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        let _ = target.class_list().add_1(class_name);
                        observer.unobserve(&target);
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));
            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            init.set_root_margin(root_margin);
            let observer = web_sys::IntersectionObserver::new_with_options(
                closure.as_ref().as_ref().unchecked_ref(),
                &init,
            )
            .ok()?;
            let nodes = document.query_selector_all(selector).ok()?;
            for index in 0..nodes.length() {
                if let Some(element) = nodes
                    .item(index)
                    .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                {
                    observer.observe(&element);
                }
            }
            Some(Self {
                observer,
                _closure: closure,
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (selector, class_name, threshold, root_margin);
            None
        }
    }

    pub fn disconnect(&self) {
        #[cfg(target_arch = "wasm32")]
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn timer_delay_keeps_configured_periods() {
        assert_eq!(timer_delay(8000), Some(8000));
        assert_eq!(timer_delay(i32::MAX as u32), Some(i32::MAX));
    }

    #[test]
    fn oversized_period_never_arms_a_timer() {
        assert_eq!(timer_delay(u32::MAX), None);
        assert_eq!(timer_delay(i32::MAX as u32 + 1), None);
        assert!(IntervalHandle::start(u32::MAX, || {}).is_none());
        assert!(IntervalHandle::start(60_000, || {}).is_some());
    }
}
