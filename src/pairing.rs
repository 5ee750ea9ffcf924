//! Alignment bookkeeping: turns the oracle's correspondence list into the
//! symmetric pairing structure with stable ids and deterministic display
//! colors. No deduplication or merging happens here — if the oracle reports
//! the same unit in two correspondences, both pairings stand.

use tracing::warn;

use crate::error::AlignError;
use crate::model::Pairing;
use crate::oracle::Correspondence;

/// Default pastel palette, cycled by pairing index.
pub const DEFAULT_PALETTE: [&str; 20] = [
    "#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF", "#FFD4E5", "#FFF5BA", "#C9BAFF",
    "#FFBAF3", "#BAF3FF", "#FFE5BA", "#E5BAFF", "#BAFFE5", "#FFB3E6", "#B3E6FF", "#FFE6B3",
    "#E6B3FF", "#B3FFE6", "#FFB3D9", "#B3D9FF",
];

pub struct Bookkeeper {
    palette: Vec<String>,
}

impl Bookkeeper {
    pub fn new(palette: Vec<String>) -> Self {
        let palette = if palette.is_empty() {
            warn!("empty color palette supplied, falling back to built-in");
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
        } else {
            palette
        };
        Self { palette }
    }

    /// Build pairings in input order. `pairing_id` is the input index and is
    /// the sole correlation key across highlight spans, legend entries, and
    /// detail cards downstream.
    pub fn build(&self, correspondences: &[Correspondence]) -> Result<Vec<Pairing>, AlignError> {
        correspondences
            .iter()
            .enumerate()
            .map(|(index, corr)| self.build_one(index, corr))
            .collect()
    }

    fn build_one(&self, index: usize, corr: &Correspondence) -> Result<Pairing, AlignError> {
        let label = match corr.label.as_deref() {
            Some(l) if !l.trim().is_empty() => l.trim().to_string(),
            _ => {
                return Err(AlignError::InvalidCorrespondence {
                    index,
                    reason: "missing label".to_string(),
                });
            }
        };
        let confidence = corr.confidence.ok_or_else(|| AlignError::InvalidCorrespondence {
            index,
            reason: "missing confidence".to_string(),
        })?;
        if corr.left_units.is_empty() && corr.right_units.is_empty() {
            return Err(AlignError::InvalidCorrespondence {
                index,
                reason: "both unit lists empty".to_string(),
            });
        }

        Ok(Pairing {
            pairing_id: index,
            label,
            color: self.palette[index % self.palette.len()].clone(),
            confidence,
            left_units: corr.left_units.clone(),
            right_units: corr.right_units.clone(),
        })
    }
}

impl Default for Bookkeeper {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
