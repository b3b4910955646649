//! Structured log events for store construction and rejected lookups.
//!
//! Accessors on views never log; only the comparatively cold store paths do.

/// Single logging target for the crate.
pub(crate) const LOG_TARGET: &str = "kvspan";

/// Emits `event=<name> <message>` at `$level`, formatting only when the level is enabled.
macro_rules! kv_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!(target: $crate::logging::LOG_TARGET, $level) {
            log::log!(
                target: $crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use kv_log;
