/// Evaluates `$block` and logs its wall-clock duration at debug level.
#[macro_export]
macro_rules! debug_elapsed {
    ($label:expr, $block:expr) => {{
        let started_at = jiff::Timestamp::now();
        let value = $block;
        tracing::debug!(
            elapsed = ?jiff::Timestamp::now().duration_since(started_at),
            "{} finished",
            $label
        );

        value
    }};
}
