//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::CambioError;
use crate::rate::Substitution;
use crate::snapshot::Snapshot;

/// Outcome of a successful run.
///
/// Carries the snapshot together with the fallbacks that were applied and any
/// non-fatal issues (degraded optional sources) met along the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleReport {
    /// The assembled snapshot.
    pub snapshot: Snapshot,
    /// Fallback substitutions applied to local rates.
    pub substitutions: Vec<Substitution>,
    /// Non-fatal issues encountered while building the snapshot.
    pub warnings: Vec<CambioError>,
}
