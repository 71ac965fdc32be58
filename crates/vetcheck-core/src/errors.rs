use thiserror::Error;

/// Result type alias using VetError
pub type Result<T> = std::result::Result<T, VetError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,

    // Integration/IO
    Io,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, record id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    record_id: Option<i64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            record_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add record ID context
    pub fn with_record_id(mut self, id: i64) -> Self {
        self.record_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn record_id(&self) -> Option<i64> {
        self.record_id
    }

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
        if let Some(record_id) = self.record_id {
            write!(f, " (record_id: {})", record_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the record model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VetError {
    /// One or more required fields are empty or zero
    #[error("Record is missing required fields: {}", .missing.join(", "))]
    InvalidRecord { missing: Vec<&'static str> },

    /// A species label outside the supported set
    #[error("Unknown species: {label}")]
    UnknownSpecies { label: String },
}

impl From<VetError> for ExError {
    fn from(err: VetError) -> Self {
        match err {
            VetError::InvalidRecord { missing } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate")
                .with_message(format!("missing required fields: {}", missing.join(", "))),

            VetError::UnknownSpecies { label } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_species")
                .with_message(format!("unknown species '{}'", label)),
        }
    }
}
