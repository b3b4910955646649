//! Verification checks for caller-enforced preconditions.
//!
//! Checks written with `verify!` run in debug builds, in this crate's own tests,
//! and whenever the `verify` feature is on. Otherwise they compile to nothing and
//! the condition they state becomes the caller's obligation.

/// Whether verification checks are compiled into this build.
pub const ENABLED: bool = cfg!(any(debug_assertions, test, feature = "verify"));

/// Panics with the display form of `$err` when `$cond` is false, in verification builds only.
macro_rules! verify {
    ($cond:expr, $err:expr) => {{
        if $crate::verify::ENABLED && !$cond {
            panic!("{}", $err);
        }
    }};
}

pub(crate) use verify;

#[cfg(test)]
mod test {
    use crate::Error;

    #[test]
    fn enabled_under_test() {
        assert!(super::ENABLED);
    }

    #[test]
    #[should_panic(expected = "at least one element")]
    fn failed_check_panics_with_error() {
        verify!(1 + 1 == 3, Error::EmptyStore);
    }

    #[test]
    fn passing_check_is_silent() {
        verify!(1 + 1 == 2, Error::EmptyStore);
    }
}
