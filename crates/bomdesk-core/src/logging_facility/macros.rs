//! Operation boundary macros
//!
//! Each menu operation gets one `log_op_start!`, then exactly one of
//! `log_op_end!` or `log_op_error!`, all fed the same `OpContext`. Op name,
//! table, request id and elapsed time come from the context; callers only
//! add outcome fields such as `affected`.
//!
//! Validation failures are logged at warn level, everything else at error.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use bomdesk_core::log_op_start;
/// # use bomdesk_core::logging_facility::OpContext;
/// # use bomdesk_core::{Selection, Table};
/// # use bomdesk_core_types::SessionId;
/// let ctx = OpContext::open(SessionId::new().first_request(), Selection::Read(Table::Product));
/// log_op_start!(ctx);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($ctx:expr $(, $($field:tt)*)?) => {{
        let ctx: &$crate::logging_facility::OpContext = &$ctx;
        tracing::info!(
            component = module_path!(),
            op = ctx.op(),
            event = $crate::bomdesk_core_types::schema::EVENT_START,
            request_id = %ctx.request_id(),
            table = ctx.table().key(),
            $($($field)*)?
        );
    }};
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use bomdesk_core::log_op_end;
/// # use bomdesk_core::logging_facility::OpContext;
/// # use bomdesk_core::{Selection, Table};
/// # use bomdesk_core_types::SessionId;
/// let ctx = OpContext::open(SessionId::new().first_request(), Selection::Delete(Table::Material));
/// log_op_end!(ctx, affected = 1usize);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($ctx:expr $(, $($field:tt)*)?) => {{
        let ctx: &$crate::logging_facility::OpContext = &$ctx;
        tracing::info!(
            component = module_path!(),
            op = ctx.op(),
            event = $crate::bomdesk_core_types::schema::EVENT_END,
            request_id = %ctx.request_id(),
            table = ctx.table().key(),
            duration_ms = ctx.elapsed_ms(),
            $($($field)*)?
        );
    }};
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`. A row id attached to the
/// error is emitted as `entity_id`.
///
/// # Example
///
/// ```
/// # use bomdesk_core::log_op_error;
/// # use bomdesk_core::errors::BomError;
/// # use bomdesk_core::logging_facility::OpContext;
/// # use bomdesk_core::{Generator, Selection};
/// # use bomdesk_core_types::SessionId;
/// let ctx = OpContext::open(
///     SessionId::new().first_request(),
///     Selection::Generate(Generator::Products),
/// );
/// let err = BomError::InvalidCount { value: "zero".to_string() };
/// log_op_error!(ctx, err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($ctx:expr, $err:expr $(, $($field:tt)*)?) => {{
        let ctx: &$crate::logging_facility::OpContext = &$ctx;
        let ex_err: $crate::errors::ExError = $err.into();
        if ex_err.kind().is_validation() {
            $crate::__log_op_error_at!(warn, ctx, ex_err $(, $($field)*)?);
        } else {
            $crate::__log_op_error_at!(error, ctx, ex_err $(, $($field)*)?);
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_error_at {
    ($level:ident, $ctx:ident, $ex_err:ident $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $ctx.op(),
            event = $crate::bomdesk_core_types::schema::EVENT_END_ERROR,
            request_id = %$ctx.request_id(),
            table = $ctx.table().key(),
            duration_ms = $ctx.elapsed_ms(),
            err_kind = ?$ex_err.kind(),
            err_code = $ex_err.code(),
            err_message = %$ex_err,
            entity_id = $ex_err.entity_id(),
            $($($field)*)?
        )
    };
}
