//! Shared test utilities used across the prim crates.

pub mod tracing {
    //! Capture layer for asserting spans and events emitted under test.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer that stores closed spans and emitted events so tests can assert
    /// instrumentation without parsing formatted output.
    ///
    /// Clones share the same storage, so a test can keep one handle and hand
    /// another to `tracing_subscriber::registry().with(..)`.
    #[derive(Clone, Default)]
    pub struct CaptureLayer {
        captured: Arc<Mutex<Captured>>,
    }

    #[derive(Default)]
    struct Captured {
        spans: Vec<CapturedSpan>,
        events: Vec<CapturedEvent>,
    }

    impl CaptureLayer {
        fn lock(&self) -> MutexGuard<'_, Captured> {
            self.captured.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Returns the closed spans in the order they closed.
        ///
        /// # Examples
        /// ```
        /// use prim_test_support::tracing::CaptureLayer;
        ///
        /// let layer = CaptureLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<CapturedSpan> {
            self.lock().spans.clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<CapturedEvent> {
            self.lock().events.clone()
        }

        /// Returns the first closed span called `name`, if any.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<CapturedSpan> {
            self.lock().spans.iter().find(|span| span.name == name).cloned()
        }

        /// Returns the events recorded at `level`.
        #[must_use]
        pub fn events_at(&self, level: Level) -> Vec<CapturedEvent> {
            self.lock()
                .events
                .iter()
                .filter(|event| event.level == level)
                .cloned()
                .collect()
        }
    }

    /// A span that has closed, with every field recorded during its life.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedSpan {
        /// Span name from the callsite metadata.
        pub name: String,
        /// Field values rendered as strings.
        pub fields: HashMap<String, String>,
    }

    /// An emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedEvent {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Field values rendered as strings; the message is under `message`.
        pub fields: HashMap<String, String>,
    }

    impl CapturedEvent {
        /// Returns the event message, if one was recorded.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    struct OpenSpan(CapturedSpan);

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = HashMap::new();
            attrs.record(&mut FieldMap(&mut fields));
            span.extensions_mut().insert(OpenSpan(CapturedSpan {
                name: attrs.metadata().name().to_owned(),
                fields,
            }));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            if let Some(OpenSpan(open)) = extensions.get_mut::<OpenSpan>() {
                values.record(&mut FieldMap(&mut open.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(OpenSpan(closed)) = span.extensions_mut().remove::<OpenSpan>() {
                self.lock().spans.push(closed);
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldMap(&mut fields));
            self.lock().events.push(CapturedEvent {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldMap<'a>(&'a mut HashMap<String, String>);

    impl FieldMap<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldMap<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value.to_owned());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.put(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.put(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.put(field, value.to_string());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value.to_string());
        }
    }

}

pub mod ci;
