//! In-memory capture of log events for assertions
//!
//! Every field of an event is kept as text, keyed by its schema name, so a
//! test can pick out the events of one build phase by `build_id` or one
//! operation boundary by `op` and `event`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use noop_core_types::schema::{FIELD_BUILD_ID, FIELD_EVENT, FIELD_OP};
use noop_core_types::BuildId;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// A recorded field value as text
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    /// Whether this is the `event` boundary of operation `op`
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

#[derive(Default)]
struct FieldText(HashMap<String, String>);

impl Visit for FieldText {
    // Numbers, bools and `%`/`?` values all arrive here
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }

    // Unquoted, unlike the Debug fallback
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut text = FieldText::default();
        event.record(&mut text);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields: text.0,
        };
        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle onto the events recorded by the process-wide capture layer
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Every event captured so far, across all tests in the process
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events that recorded `name` with exactly `value`
    pub fn with_field(&self, name: &str, value: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.field(name) == Some(value))
            .collect()
    }

    /// Events emitted on behalf of one controller
    pub fn for_build(&self, build_id: &BuildId) -> Vec<CapturedEvent> {
        self.with_field(FIELD_BUILD_ID, build_id.as_str())
    }

    /// # Panics
    ///
    /// Panics if no `event` boundary of `op` was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber, once per process
///
/// Tests in one binary share the same capture, so assertions should filter
/// by a value unique to the test (an op name or a build id).
///
/// # Example
///
/// ```
/// use noop_core::logging_facility::test_capture::init_test_capture;
/// use noop_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("replay");
/// capture.assert_event_exists("replay", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let events = Arc::new(Mutex::new(Vec::new()));
            let layer = CaptureLayer {
                events: events.clone(),
            };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { events }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(pairs: &[(&str, &str)]) -> CapturedEvent {
        CapturedEvent {
            level: Level::ERROR,
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_captured_event_boundary_match() {
        let e = event(&[("op", "apply"), ("event", "end_error"), ("op_index", "3")]);

        assert!(e.is("apply", "end_error"));
        assert!(!e.is("apply", "end"));
        assert_eq!(e.field("op_index"), Some("3"));
        assert_eq!(e.field("missing"), None);
    }
}
