use crate::model::Table;
use crate::presentation::PromptError;
use thiserror::Error;

/// Result type alias using BomError
pub type Result<T> = std::result::Result<T, BomError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in log events and tests.
/// The first group are validation kinds: they are raised before any
/// statement reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    UnknownField,
    EmptyIdSet,

    // Store
    Persistence,

    // Integration/IO
    Io,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownField => "ERR_UNKNOWN_FIELD",
            ExErrorKind::EmptyIdSet => "ERR_EMPTY_ID_SET",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// True for kinds detected before any store call
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput | ExErrorKind::UnknownField | ExErrorKind::EmptyIdSet
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context (operation, table,
/// row id, field) for log events and the operator notice.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    table: Option<Table>,
    entity_id: Option<i64>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            entity_id: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    /// Add row id context
    pub fn with_entity_id(mut self, id: i64) -> Self {
        self.entity_id = Some(id);
        self
    }

    /// Add field name context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the table context, if any
    pub fn table(&self) -> Option<Table> {
        self.table
    }

    /// Get the row id context, if any
    pub fn entity_id(&self) -> Option<i64> {
        self.entity_id
    }

    /// Get the field context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(id) = self.entity_id {
            write!(f, " (id: {})", id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain validation errors raised while coercing operator input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BomError {
    /// Field is not in the update allow-list of the table
    #[error("Unknown field '{field}' for table {table}")]
    UnknownField { table: Table, field: String },

    /// Numeric input could not be parsed
    #[error("Field '{field}' expects {expected}, got '{value}'")]
    InvalidNumber {
        field: String,
        expected: &'static str,
        value: String,
    },

    /// Generation count is not a positive integer
    #[error("Count must be a positive integer, got '{value}'")]
    InvalidCount { value: String },

    /// Consumption generation needs at least one row in the referenced table
    #[error("Cannot generate consumptions: no rows in {table}")]
    EmptyIdSet { table: Table },

    /// Typed value does not fit the field's kind
    #[error("Field '{field}' expects {expected} value")]
    FieldTypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// Lower bound above upper bound
    #[error("Invalid range for {field}: min {min} exceeds max {max}")]
    InvalidRange { field: String, min: f64, max: f64 },

    /// Prompt produced the wrong number of raw arguments
    #[error("Expected {expected} arguments, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },
}

impl From<BomError> for ExError {
    fn from(err: BomError) -> Self {
        let message = err.to_string();
        match err {
            BomError::UnknownField { table, field } => ExError::new(ExErrorKind::UnknownField)
                .with_table(table)
                .with_field(field)
                .with_message(message),

            BomError::InvalidNumber { field, .. } | BomError::FieldTypeMismatch { field, .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_field(field)
                    .with_message(message)
            }

            BomError::InvalidRange { field, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field(field)
                .with_message(message),

            BomError::InvalidCount { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            // The registry builds the arguments; a short list is a wiring bug
            BomError::ArgumentCount { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }

            BomError::EmptyIdSet { table } => ExError::new(ExErrorKind::EmptyIdSet)
                .with_table(table)
                .with_message(message),
        }
    }
}

impl From<PromptError> for ExError {
    fn from(err: PromptError) -> Self {
        let kind = match err {
            PromptError::Closed | PromptError::Io(_) => ExErrorKind::Io,
            PromptError::NoOptions => ExErrorKind::Internal,
        };
        ExError::new(kind).with_message(err.to_string())
    }
}
