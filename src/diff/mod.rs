//! The field-level diff engine.
//!
//! Three facet comparators share one algorithm: for every key in the union of
//! the two mappings, emit `Added` when only the new side has it, `Removed`
//! when only the old side has it, and `Modified` when both sides disagree on
//! the value. All comparisons are exact; a delta of any size is a change.

use crate::error::DiffError;
use crate::recipe::{Materials, OutputStats, ProfessionReqs, Recipe, StatValue};
use ahash::AHashMap;
use itertools::Itertools;

mod record;

pub use record::{ChangeRecord, ChangeReport, Delta};

/// Diffs one facet mapping pair into an ordered set of deltas.
///
/// Pure: neither input is mutated, no I/O. Keys are visited in lexicographic
/// order so the resulting record is deterministic regardless of map iteration
/// order.
fn compare_facet<V: PartialEq + Clone>(
    old: &AHashMap<String, V>,
    new: &AHashMap<String, V>,
) -> ChangeRecord<V> {
    let mut deltas = Vec::new();

    for key in old.keys().chain(new.keys()).sorted().dedup() {
        match (old.get(key), new.get(key)) {
            (None, Some(value)) => deltas.push(Delta::Added {
                key: key.clone(),
                new: value.clone(),
            }),
            (Some(value), None) => deltas.push(Delta::Removed {
                key: key.clone(),
                old: value.clone(),
            }),
            (Some(old_value), Some(new_value)) if old_value != new_value => {
                deltas.push(Delta::Modified {
                    key: key.clone(),
                    old: old_value.clone(),
                    new: new_value.clone(),
                })
            }
            _ => {}
        }
    }

    ChangeRecord { deltas }
}

/// Compares the material requirements of two recipe snapshots.
pub fn compare_materials(old: &Materials, new: &Materials) -> ChangeRecord<u32> {
    compare_facet(old, new)
}

/// Compares the crafted-output stats of two recipe snapshots.
pub fn compare_output_stats(old: &OutputStats, new: &OutputStats) -> ChangeRecord<StatValue> {
    compare_facet(old, new)
}

/// Compares the profession level requirements of two recipe snapshots.
pub fn compare_profession_reqs(old: &ProfessionReqs, new: &ProfessionReqs) -> ChangeRecord<u32> {
    compare_facet(old, new)
}

/// Diffs two snapshots of the same logical recipe into a [`ChangeReport`].
///
/// Both snapshots must carry the same name; diffing two different recipes is
/// a caller error and fails fast with [`DiffError::IdentityMismatch`] rather
/// than producing a nonsensical report.
pub fn diff_recipes(old: &Recipe, new: &Recipe) -> Result<ChangeReport, DiffError> {
    if old.name != new.name {
        return Err(DiffError::IdentityMismatch {
            left: old.name.clone(),
            right: new.name.clone(),
        });
    }

    Ok(ChangeReport {
        name: new.name.clone(),
        old_version: old.version.clone(),
        new_version: new.version.clone(),
        materials: compare_materials(&old.materials, &new.materials),
        output_stats: compare_output_stats(&old.output_stats, &new.output_stats),
        profession_requirements: compare_profession_reqs(
            &old.profession_requirements,
            &new.profession_requirements,
        ),
    })
}
