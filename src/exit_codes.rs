//! Exit code constants for the oneshot CLI.
//!
//! - 0: Success
//! - 1: User error (empty summary, malformed payload, bad config)
//! - 2: I/O failure on the terminal streams
//!
//! Usage errors detected by clap (missing summary, unknown flags) exit with
//! clap's own code, which is also 2.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: empty summary, malformed answers payload, or invalid config.
pub const USER_ERROR: i32 = 1;

/// I/O failure: stdin could not be read or stdout could not be written.
pub const IO_FAILURE: i32 = 2;
