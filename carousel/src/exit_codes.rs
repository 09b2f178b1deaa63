//! Stable exit codes for carousel CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, invalid import file, missing state, or other errors.
pub const INVALID: i32 = 1;
/// `carousel draw` exhausted its attempt budget without a valid assignment.
pub const UNSATISFIABLE: i32 = 2;
