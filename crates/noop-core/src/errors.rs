use noop_core_types::BuildId;
use thiserror::Error;

use crate::model::ElementKey;

/// Result type alias using GraphError
pub type Result<T> = std::result::Result<T, GraphError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// raised by the graph kernel. Each kind maps to a stable error code that can
/// be used for programmatic error handling, testing, and external reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural
    DanglingReference,
    DuplicateRegistration,
    UnknownElement,
    MultipleParents,
    CycleDetected,

    // Encoding
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::DanglingReference => "ERR_DANGLING_REFERENCE",
            ExErrorKind::DuplicateRegistration => "ERR_DUPLICATE_REGISTRATION",
            ExErrorKind::UnknownElement => "ERR_UNKNOWN_ELEMENT",
            ExErrorKind::MultipleParents => "ERR_MULTIPLE_PARENTS",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification of a failure plus the context a caller needs
/// to decide what to do with a partially applied build: which operation
/// failed, which element it named, and which build phase it belonged to.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    element_key: Option<String>,
    op_index: Option<usize>,
    build_id: Option<BuildId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            element_key: None,
            op_index: None,
            build_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add element key context
    pub fn with_element(mut self, key: impl ToString) -> Self {
        self.element_key = Some(key.to_string());
        self
    }

    /// Add the position of the failing operation in its list
    pub fn with_op_index(mut self, index: usize) -> Self {
        self.op_index = Some(index);
        self
    }

    /// Add the id of the controller whose build failed
    pub fn with_build_id(mut self, build_id: BuildId) -> Self {
        self.build_id = Some(build_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
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

    pub fn element_key(&self) -> Option<&str> {
        self.element_key.as_deref()
    }

    pub fn op_index(&self) -> Option<usize> {
        self.op_index
    }

    pub fn build_id(&self) -> Option<&BuildId> {
        self.build_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if let Some(index) = self.op_index {
            write!(f, " at index {}", index)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.element_key {
            write!(f, " (element: {})", key)?;
        }
        if let Some(build_id) = &self.build_id {
            write!(f, " [build {}]", build_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Which slot of an operation held the unresolved reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceRole {
    Parent,
    EdgeSource,
    EdgeTarget,
}

impl std::fmt::Display for ReferenceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReferenceRole::Parent => "parent",
            ReferenceRole::EdgeSource => "edge source",
            ReferenceRole::EdgeTarget => "edge target",
        };
        write!(f, "{}", s)
    }
}

/// Error taxonomy for graph construction and lookup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge or parent reference names an element not yet registered
    #[error("Dangling {role} reference: element {key} is not registered")]
    DanglingReference { role: ReferenceRole, key: ElementKey },

    /// The same element was registered twice
    #[error("Element {key} ({name}) is already registered")]
    DuplicateRegistration { key: ElementKey, name: String },

    /// Identity lookup on an element that was never registered
    #[error("Unknown element: {key}")]
    UnknownElement { key: ElementKey },

    /// A containment edge would give an element a second parent
    #[error("Element {key} already has a containing parent")]
    MultipleParents { key: ElementKey },

    /// A containment edge would close a cycle
    #[error("Cycle detected: containing {key} would create a cycle")]
    CycleDetected { key: ElementKey },

    /// An operation in an applied list failed; earlier operations stay applied
    #[error("Operation {index} failed: {source}")]
    OperationFailed {
        index: usize,
        source: Box<GraphError>,
    },

    /// Encoding of a log or digest input failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl GraphError {
    /// Index of the failing operation, if this error came from a controller
    pub fn operation_index(&self) -> Option<usize> {
        match self {
            GraphError::OperationFailed { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The violated invariant, with any operation wrapper removed
    pub fn root_cause(&self) -> &GraphError {
        match self {
            GraphError::OperationFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Conversion from GraphError to ExError
impl From<GraphError> for ExError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::DanglingReference { role, key } => {
                ExError::new(ExErrorKind::DanglingReference)
                    .with_element(key)
                    .with_message(format!("Unregistered {} reference", role))
            }

            GraphError::DuplicateRegistration { key, name } => {
                ExError::new(ExErrorKind::DuplicateRegistration)
                    .with_element(key)
                    .with_op("register")
                    .with_message(format!("Element '{}' is already registered", name))
            }

            GraphError::UnknownElement { key } => ExError::new(ExErrorKind::UnknownElement)
                .with_element(key)
                .with_op("id_for")
                .with_message("Element was never registered"),

            GraphError::MultipleParents { key } => ExError::new(ExErrorKind::MultipleParents)
                .with_element(key)
                .with_op("link")
                .with_message("Element already has a containing parent"),

            GraphError::CycleDetected { key } => ExError::new(ExErrorKind::CycleDetected)
                .with_element(key)
                .with_op("link")
                .with_message("Containment would create a cycle"),

            GraphError::OperationFailed { index, source } => {
                let inner: ExError = (*source).into();
                let mut outer = ExError::new(inner.kind())
                    .with_op("apply")
                    .with_op_index(index)
                    .with_message(inner.message().to_string());
                if let Some(key) = inner.element_key() {
                    outer = outer.with_element(key);
                }
                outer.with_source(inner)
            }

            GraphError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to GraphError
impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Serialization {
            message: err.to_string(),
        }
    }
}
