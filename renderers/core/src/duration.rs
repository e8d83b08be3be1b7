use std::time::Duration;

/// Extension trait for formatting [`Duration`] in human-readable form.
pub trait PrettyDuration {
    /// Returns a human-readable string representation of the duration.
    ///
    /// - Automatically selects appropriate unit (ns, µs, ms, s)
    /// - Rounds to 2 decimal places
    /// - Strips trailing zeros
    fn pretty_print(&self) -> String;
}

impl PrettyDuration for Duration {
    fn pretty_print(&self) -> String {
        let nanos = self.as_nanos();

        // f64 holds every integer up to 2^53 exactly; render durations never get close.
        #[allow(clippy::cast_precision_loss)]
        let f_nanos = nanos as f64;
        let (value, unit) = match nanos {
            0..=999 => return format!("{nanos}ns"),
            1_000..=999_999 => (f_nanos / 1_000.0, "µs"),
            1_000_000..=999_999_999 => (f_nanos / 1_000_000.0, "ms"),
            _ => (f_nanos / 1_000_000_000.0, "s"),
        };
        let value = format!("{value:.2}");
        let value = value.trim_end_matches('0').trim_end_matches('.');
        format!("{value}{unit}")
    }
}
