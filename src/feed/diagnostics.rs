use tracing::warn;

/// Receives recoverable field anomalies that did not fail an entry
pub trait DiagnosticSink: Send + Sync {
    /// Price could not be read and was recorded as 0. `raw` is `None` when
    /// the entry had no price at all.
    fn price_fallback(&self, entry_id: &str, raw: Option<&str>);
}

/// Default sink: a warning event per anomaly
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn price_fallback(&self, entry_id: &str, raw: Option<&str>) {
        warn!(
            entry_id,
            raw_price = raw.unwrap_or("<absent>"),
            "Could not parse price, defaulting to 0"
        );
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::DiagnosticSink;
    use std::sync::Mutex;

    /// Keeps every price fallback for assertions
    #[derive(Default)]
    pub struct RecordingSink {
        pub price_fallbacks: Mutex<Vec<(String, Option<String>)>>,
    }

    impl RecordingSink {
        pub fn fallbacks(&self) -> Vec<(String, Option<String>)> {
            self.price_fallbacks.lock().unwrap().clone()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn price_fallback(&self, entry_id: &str, raw: Option<&str>) {
            self.price_fallbacks
                .lock()
                .unwrap()
                .push((entry_id.to_string(), raw.map(str::to_string)));
        }
    }
}
