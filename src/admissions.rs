use dioxus::prelude::*;

use crate::browser::{now_ms, parse_timestamp_ms, random_unit};
use crate::config::SiteConfig;
use crate::hooks::{use_interval, IntervalControl};
use crate::modal::Modals;

const MS_PER_HOUR: i64 = 1000 * 60 * 60;
const MS_PER_DAY: i64 = MS_PER_HOUR * 24;

pub const COUNTDOWN_PLACEHOLDER: &str = "-- 天 -- 小时";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
}

impl Remaining {
    /// Whole days and leftover whole hours until `deadline_ms`, or `None`
    /// once the deadline has passed.
    pub fn until(deadline_ms: f64, now_ms: f64) -> Option<Self> {
        let diff = (deadline_ms - now_ms).floor() as i64;
        if diff <= 0 {
            return None;
        }
        Some(Self {
            days: diff / MS_PER_DAY,
            hours: (diff % MS_PER_DAY) / MS_PER_HOUR,
        })
    }

    pub fn label(self) -> String {
        format!("{} 天 {} 小时", self.days, self.hours)
    }
}

/// Seats shown as left: `floor(r * 8) + 8` for `r` in `[0, 1)`.
pub fn remaining_spots(unit: f64) -> u32 {
    let unit = unit.clamp(0.0, 0.999_999);
    (unit * 8.0).floor() as u32 + 8
}

/// Text shown by the countdown plus the timer refreshing it.
///
/// The text freezes at its last value once the deadline is behind us and the
/// ticker is cancelled. A deadline that is missing or already past leaves the
/// placeholder in place.
pub fn use_countdown(deadline: Option<f64>, period_ms: u32) -> (Signal<String>, IntervalControl) {
    let initial = use_hook(|| deadline.and_then(|deadline| Remaining::until(deadline, now_ms())));
    let mut display = use_signal(|| {
        initial
            .map(Remaining::label)
            .unwrap_or_else(|| COUNTDOWN_PLACEHOLDER.to_string())
    });
    let mut expired = use_signal(|| initial.is_none());

    let ticker = use_interval(period_ms, move || {
        let Some(deadline) = deadline else {
            expired.set(true);
            return;
        };
        match Remaining::until(deadline, now_ms()) {
            Some(remaining) => display.set(remaining.label()),
            None => expired.set(true),
        }
    });

    use_effect(move || {
        if expired() {
            tracing::debug!("countdown: deadline passed, stopping ticker");
            ticker.cancel();
        }
    });

    (display, ticker)
}

#[component]
pub fn Countdown() -> Element {
    let config = use_context::<SiteConfig>();
    let deadline = use_hook(|| parse_timestamp_ms(&config.application_deadline));
    let (display, _) = use_countdown(deadline, config.countdown_interval_ms);

    rsx! {
        span { class: "countdown-display", "{display}" }
    }
}

#[component]
pub fn ApplySection() -> Element {
    let modals = use_context::<Modals>();
    let spots = use_signal(|| remaining_spots(random_unit()));

    rsx! {
        section { id: "apply", class: "apply-section",
            h2 { class: "section-title",
                span { class: "zh", "早申请截止倒计时" }
                span { class: "en", "Early decision closes in" }
            }
            div { class: "countdown", Countdown {} }
            p { class: "spots-remaining",
                span { class: "zh", "剩余名额：" }
                span { class: "en", "Spots remaining: " }
                strong { "{spots}" }
            }
            button {
                r#type: "button",
                class: "cta-primary",
                onclick: move |_| modals.show_application_form(),
                span { class: "zh", "立即申请" }
                span { class: "en", "Apply Now" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::test_support::{mount, settle};
    use pretty_assertions::assert_eq;

    const PERIOD_MS: u32 = 60_000;

    thread_local! {
        static DEADLINE: Cell<Option<f64>> = const { Cell::new(None) };
        static COUNTDOWN: Cell<Option<(Signal<String>, IntervalControl)>> = const { Cell::new(None) };
    }

    #[component]
    fn CountdownHost() -> Element {
        let countdown = use_countdown(DEADLINE.with(Cell::get), PERIOD_MS);
        COUNTDOWN.with(|cell| cell.set(Some(countdown)));
        rsx! {}
    }

    async fn run_countdown(deadline: Option<f64>) -> (String, bool) {
        DEADLINE.with(|cell| cell.set(deadline));
        let mut dom = mount(CountdownHost);
        settle(&mut dom).await;
        let (display, ticker) = COUNTDOWN.with(Cell::get).expect("countdown mounted");
        dom.in_runtime(|| (String::clone(&display.peek()), ticker.is_armed()))
    }

    #[tokio::test]
    async fn passed_deadline_keeps_placeholder_and_stops_ticker() {
        let (text, armed) = run_countdown(Some(now_ms() - 1.0)).await;
        assert_eq!(text, COUNTDOWN_PLACEHOLDER);
        assert!(!armed);
    }

    #[tokio::test]
    async fn unparseable_deadline_behaves_like_a_passed_one() {
        let (text, armed) = run_countdown(None).await;
        assert_eq!(text, COUNTDOWN_PLACEHOLDER);
        assert!(!armed);
    }

    #[tokio::test]
    async fn open_deadline_shows_remaining_time_and_keeps_ticking() {
        let deadline = now_ms() + (2 * MS_PER_DAY + 3 * MS_PER_HOUR) as f64;
        let (text, armed) = run_countdown(Some(deadline)).await;
        assert_eq!(text, "2 天 3 小时");
        assert!(armed);
    }

    #[test]
    fn splits_delta_into_days_and_hours() {
        let deadline = (3 * MS_PER_DAY + 5 * MS_PER_HOUR + 59 * 60 * 1000) as f64;
        assert_eq!(
            Remaining::until(deadline, 0.0),
            Some(Remaining { days: 3, hours: 5 })
        );
    }

    #[test]
    fn renders_chinese_units() {
        assert_eq!(Remaining { days: 12, hours: 0 }.label(), "12 天 0 小时");
    }

    #[test]
    fn under_an_hour_left_renders_zeroes() {
        let remaining = Remaining::until(1_000.0, 0.0).unwrap();
        assert_eq!(remaining, Remaining { days: 0, hours: 0 });
    }

    #[test]
    fn passed_deadline_yields_nothing() {
        assert_eq!(Remaining::until(1_000.0, 1_000.0), None);
        assert_eq!(Remaining::until(1_000.0, 5_000_000.0), None);
    }

    #[test]
    fn never_negative() {
        for now in [0.0, 1.0, 3_600_000.0, 86_399_999.0] {
            if let Some(remaining) = Remaining::until(86_400_000.0, now) {
                assert!(remaining.days >= 0 && remaining.hours >= 0);
            }
        }
    }

    #[test]
    fn spots_stay_between_eight_and_fifteen() {
        assert_eq!(remaining_spots(0.0), 8);
        assert_eq!(remaining_spots(0.5), 12);
        assert_eq!(remaining_spots(0.9999), 15);
        assert_eq!(remaining_spots(1.0), 15);
    }
}
