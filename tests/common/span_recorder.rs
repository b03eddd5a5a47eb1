use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber, span};
use tracing_subscriber::{Layer, layer::Context};

/// A span or event seen by [`SpanRecorder`], with its fields rendered as `name=value`
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub name: String,
    pub level: Level,
    pub fields: Vec<String>,
}

impl Recorded {
    pub fn has_field(&self, expected: &str) -> bool {
        self.fields.iter().any(|f| f == expected)
    }
}

/// A tracing layer that keeps every span and event so tests can assert on them
#[derive(Clone, Default)]
pub struct SpanRecorder {
    spans: Arc<Mutex<Vec<Recorded>>>,
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl SpanRecorder {
    pub fn spans(&self) -> Vec<Recorded> {
        self.spans.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct FieldCollector(Vec<String>);

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.0.push(format!("{}={:?}", field.name(), value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push(format!("{}={}", field.name(), value));
    }
}

impl<S> Layer<S> for SpanRecorder
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        let mut fields = FieldCollector::default();
        attrs.record(&mut fields);
        let metadata = attrs.metadata();
        self.spans.lock().unwrap().push(Recorded {
            name: metadata.name().to_string(),
            level: *metadata.level(),
            fields: fields.0,
        });
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldCollector::default();
        event.record(&mut fields);
        let metadata = event.metadata();
        self.events.lock().unwrap().push(Recorded {
            name: metadata.name().to_string(),
            level: *metadata.level(),
            fields: fields.0,
        });
    }
}
