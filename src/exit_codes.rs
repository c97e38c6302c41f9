//! Exit code constants for the charter CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or invalid configuration)
//! - 2: Validation failure (a composed document failed its placeholder check)
//! - 3: I/O failure (writing the composed document)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid configuration file.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a resolve-now placeholder survived composition.
pub const VALIDATION_FAILURE: i32 = 2;

/// I/O failure: the document could not be written.
pub const IO_FAILURE: i32 = 3;
