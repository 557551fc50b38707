//! Call-site logging and check macros
//!
//! These macros capture the invoking source location and drive a scoped
//! [`crate::LogRecord`] for one statement.

/// Log a message at the given severity.
///
/// The statement form formats and appends in one step; the bare form
/// evaluates to the [`crate::LogRecord`] so multiple values can be streamed
/// into it before it finalizes at end of scope.
///
/// # Example
///
/// ```
/// use cinder_core::cinder_log;
///
/// cinder_log!(Info, "loaded {} entries", 3);
///
/// let mut record = cinder_log!(Warning);
/// if record.is_enabled() {
///     record.append("slow request: ").append(250).append("ms");
/// }
/// ```
#[macro_export]
macro_rules! cinder_log {
    ($severity:ident) => {
        $crate::LogRecord::new(file!(), line!(), $crate::Severity::$severity)
    };
    ($severity:ident, $($arg:tt)*) => {{
        let mut record = $crate::LogRecord::new(file!(), line!(), $crate::Severity::$severity);
        if record.is_enabled() {
            record.append(format_args!($($arg)*));
        }
    }};
}

/// Check a condition, logging a FATAL record (and so terminating the
/// process) when it does not hold.
///
/// # Example
///
/// ```
/// use cinder_core::cinder_check;
///
/// let connections = 1;
/// cinder_check!(connections > 0);
/// cinder_check!(connections > 0, "pool drained after {} retries", 3);
/// ```
#[macro_export]
macro_rules! cinder_check {
    ($cond:expr) => {
        if !$cond {
            $crate::cinder_log!(Fatal, "Check failed: {}", stringify!($cond));
        }
    };
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::cinder_log!(
                Fatal,
                "Check failed: {} ({})",
                stringify!($cond),
                format_args!($($arg)*)
            );
        }
    };
}

/// Check that a `Result` is `Ok`, logging a FATAL record with the error's
/// display otherwise.
#[macro_export]
macro_rules! cinder_check_ok {
    ($expr:expr) => {
        if let Err(err) = &$expr {
            $crate::cinder_log!(
                Fatal,
                "Check failed: {} returned an error: {}",
                stringify!($expr),
                err
            );
        }
    };
    ($expr:expr, $($arg:tt)*) => {
        if let Err(err) = &$expr {
            $crate::cinder_log!(
                Fatal,
                "Check failed: {} returned an error: {} ({})",
                stringify!($expr),
                err,
                format_args!($($arg)*)
            );
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __cinder_check_op {
    ($left:expr, $right:expr, $op:tt) => {{
        let (left, right) = (&$left, &$right);
        if !(left $op right) {
            $crate::cinder_log!(
                Fatal,
                "Check failed: {} {} {} (left: {:?}, right: {:?})",
                stringify!($left),
                stringify!($op),
                stringify!($right),
                left,
                right
            );
        }
    }};
}

/// Comparison checks: FATAL when the comparison does not hold, with both
/// operand values in the diagnostic.
#[macro_export]
macro_rules! cinder_check_eq {
    ($left:expr, $right:expr) => {
        $crate::__cinder_check_op!($left, $right, ==)
    };
}

#[macro_export]
macro_rules! cinder_check_ne {
    ($left:expr, $right:expr) => {
        $crate::__cinder_check_op!($left, $right, !=)
    };
}

#[macro_export]
macro_rules! cinder_check_lt {
    ($left:expr, $right:expr) => {
        $crate::__cinder_check_op!($left, $right, <)
    };
}

#[macro_export]
macro_rules! cinder_check_le {
    ($left:expr, $right:expr) => {
        $crate::__cinder_check_op!($left, $right, <=)
    };
}

#[macro_export]
macro_rules! cinder_check_gt {
    ($left:expr, $right:expr) => {
        $crate::__cinder_check_op!($left, $right, >)
    };
}

#[macro_export]
macro_rules! cinder_check_ge {
    ($left:expr, $right:expr) => {
        $crate::__cinder_check_op!($left, $right, >=)
    };
}

/// Debug-build-only check; release builds evaluate nothing.
#[macro_export]
macro_rules! cinder_dcheck {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::cinder_check!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! cinder_dcheck_eq {
    ($left:expr, $right:expr) => {
        if cfg!(debug_assertions) {
            $crate::cinder_check_eq!($left, $right);
        }
    };
}

#[macro_export]
macro_rules! cinder_dcheck_ne {
    ($left:expr, $right:expr) => {
        if cfg!(debug_assertions) {
            $crate::cinder_check_ne!($left, $right);
        }
    };
}

#[macro_export]
macro_rules! cinder_dcheck_lt {
    ($left:expr, $right:expr) => {
        if cfg!(debug_assertions) {
            $crate::cinder_check_lt!($left, $right);
        }
    };
}

#[macro_export]
macro_rules! cinder_dcheck_le {
    ($left:expr, $right:expr) => {
        if cfg!(debug_assertions) {
            $crate::cinder_check_le!($left, $right);
        }
    };
}

#[macro_export]
macro_rules! cinder_dcheck_gt {
    ($left:expr, $right:expr) => {
        if cfg!(debug_assertions) {
            $crate::cinder_check_gt!($left, $right);
        }
    };
}

#[macro_export]
macro_rules! cinder_dcheck_ge {
    ($left:expr, $right:expr) => {
        if cfg!(debug_assertions) {
            $crate::cinder_check_ge!($left, $right);
        }
    };
}
