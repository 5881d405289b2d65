//! Exit codes. `NOTFOUND` is specific to nodetree; the rest follow BSD sysexits.h.

/// Successful termination
pub const OK: i32 = 0;

/// Requested path or key does not exist in the tree (not a sysexits code)
pub const NOTFOUND: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
