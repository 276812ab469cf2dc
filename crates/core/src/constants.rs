//! Constants shared by encoders and verifiers.

/// Schema tag written at the start of every canonical scan log
/// encoding.
///
/// Changing the schema must change this tag so that leaf hashes
/// produced by different schema versions never collide.
pub const LEAF_SCHEMA: &str = "aroni.scan-log.v1";

/// Length in bytes of a leaf or node hash.
pub const HASH_LEN: usize = 32;

/// Length of the hexadecimal form of a hash.
pub const HASH_HEX_LEN: usize = HASH_LEN * 2;

/// Format description for canonical timestamps.
///
/// Timestamps are always converted to UTC before formatting.
pub const CANONICAL_TIME_FORMAT: &str =
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]Z";
