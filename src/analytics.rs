use serde::Serialize;

/// A `(category, action, label)` triple destined for an analytics provider.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub category: &'static str,
    pub action: &'static str,
    pub label: &'static str,
}

/// Records an analytics event. There is no provider wired in; the event is
/// only logged.
pub fn track_event(category: &'static str, action: &'static str, label: &'static str) -> AnalyticsEvent {
    let event = AnalyticsEvent {
        category,
        action,
        label,
    };
    tracing::info!(
        category = event.category,
        action = event.action,
        label = event.label,
        "event tracked"
    );
    event
}
