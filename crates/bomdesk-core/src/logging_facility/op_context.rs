//! Per-operation logging context
//!
//! Opened once the operator has picked a selection and entered its
//! arguments. The `log_op_*` macros read everything they emit besides the
//! outcome from here, so start, end and error events of one operation
//! always agree on op, table and request id.

use crate::model::Table;
use crate::registry::Selection;
use bomdesk_core_types::RequestId;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct OpContext {
    request_id: RequestId,
    op: String,
    table: Table,
    started: Instant,
}

impl OpContext {
    /// Start timing `selection` under `request_id`
    pub fn open(request_id: RequestId, selection: Selection) -> Self {
        Self {
            request_id,
            op: selection.op_name(),
            table: selection.table(),
            started: Instant::now(),
        }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn op(&self) -> &str {
        &self.op
    }

    pub fn table(&self) -> Table {
        self.table
    }

    /// Whole milliseconds since `open`
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
