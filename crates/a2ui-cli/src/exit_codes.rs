//! Exit codes of `a2ui-eval`. Part of the public contract for CI callers.

pub const OK: i32 = 0;
pub const TEST_FAILED: i32 = 1; // Validation errors or failing cases
pub const CONFIG_ERROR: i32 = 2; // Unreadable input, bad suite, bad flags
