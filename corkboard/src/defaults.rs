//! Engine-wide limits and defaults

/// Maximum number of boards a single organization may own
pub const MAX_BOARDS_PER_ORG: usize = 5;

/// Buffered events per board broadcast channel before slow receivers lag
pub const BROADCAST_CHANNEL_CAPACITY: usize = 256;
