//! Boundary logging macros for menu actions
//!
//! Every event carries `component`, `op` and `event`. Extra fields follow
//! tracing's `name = value` syntax; `record_id` is the one most actions pass.
//! Callers need `tracing` in scope as a dependency.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::$event,
            $($($field)*)?
        )
    };
}

/// Log the start of a menu action
///
/// # Example
///
/// ```
/// # use vetcheck_core::log_op_start;
/// log_op_start!("new_checkup");
/// log_op_start!("check_status", record_id = 7);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of a menu action with its duration
///
/// # Example
///
/// ```
/// # use vetcheck_core::log_op_end;
/// log_op_end!("new_checkup", duration_ms = 3, record_id = 1);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log a failed menu action
///
/// The error is converted into `ExError`. The event carries its kind, stable
/// code and rendered text, plus `record_id` when the error names a record.
///
/// # Example
///
/// ```
/// # use vetcheck_core::{log_op_error, errors::VetError};
/// let err = VetError::InvalidRecord { missing: vec!["name"] };
/// log_op_error!("new_checkup", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        let duration_ms = $duration;
        match ex_err.record_id() {
            Some(record_id) => $crate::__log_op_event!(
                error,
                $op,
                EVENT_END_ERROR,
                duration_ms = duration_ms,
                record_id = record_id,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                error = %ex_err
                $(, $($field)*)?
            ),
            None => $crate::__log_op_event!(
                error,
                $op,
                EVENT_END_ERROR,
                duration_ms = duration_ms,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                error = %ex_err
                $(, $($field)*)?
            ),
        }
    }};
}
