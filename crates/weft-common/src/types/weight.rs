//! Edge weights and distances.

/// Weight of an edge, and by extension the distance of a path.
///
/// Weights are unsigned, so negative edge weights are unrepresentable. The
/// shortest-path engine relies on this: its lazy-deletion strategy assumes a
/// settled distance can never improve afterwards.
pub type Weight = u64;

/// Sentinel distance for vertices not (yet) reached.
///
/// Distance arithmetic in the engines saturates, so `INFINITY` never wraps
/// when an edge weight is added to it.
pub const INFINITY: Weight = Weight::MAX;
