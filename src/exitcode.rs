//! Standard exit codes (BSD sysexits.h compatible)

/// Generic failure reported by a command handler
pub const FAILURE: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Configuration error
pub const CONFIG: i32 = 78;
