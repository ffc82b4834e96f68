//! Canonical schema constants for structured logging and events
//!
//! Event names used by the logging macros, and the field keys that tests
//! read back from captured events.

// Field keys emitted by the operation boundary events
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Controller events
pub const FIELD_BUILD_ID: &str = "build_id";
pub const FIELD_OP_INDEX: &str = "op_index";
pub const FIELD_OP_COUNT: &str = "op_count";
pub const FIELD_APPLIED: &str = "applied";

// Error events
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
