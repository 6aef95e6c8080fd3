//! Two-pass component filtering: predicate evaluation, survival decision,
//! consecutive relabeling and optional recoloring.

mod predicate;

#[cfg(test)]
mod tests;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FilterConfig;
use crate::grid::VoxelGrid;
use crate::labeling::{ComponentRecord, LabelVolume, Voxel3, UNSET};

pub use predicate::RemovalPredicate;

/// Background value written into removed components' image voxels.
pub const BACKGROUND: u16 = 0;

/// Recolored components get display values in `[BAND_START, BAND_START + BAND_WIDTH)`.
const BAND_START: u16 = 100;
const BAND_WIDTH: u16 = 100;

/// Per-slice color shift for slice-wise policies, wrapped within the band.
const SLICE_COLOR_STEP: u16 = 7;

/// Fixed RNG seed keeping recoloring reproducible across runs.
const RECOLOR_SEED: u64 = 0x9E37_79B9;

/// Filter labeled components in place.
///
/// Pass 1 scans every labeled voxel once and records, per component, whether
/// any voxel satisfied the predicate. A component survives only if it meets
/// the volume threshold, the border criterion and the predicate criterion.
/// Pass 2 renumbers survivors to consecutive labels starting at `UNSET + 1`
/// (preserving relative order), resets removed voxels to [`UNSET`] in the
/// label volume and to [`BACKGROUND`] in the image, and optionally recolors
/// survivors. `slice_recolor` adds the per-slice color offset used by the 2D
/// policies.
///
/// Returns the dense, renumbered list of surviving records.
pub fn filter_components<G: VoxelGrid>(
    grid: &mut G,
    labels: &mut LabelVolume,
    records: Vec<ComponentRecord>,
    config: &FilterConfig,
    slice_recolor: bool,
) -> Vec<ComponentRecord> {
    let dims = labels.dims();
    debug_assert_eq!(dims, grid.dims(), "label volume must match the grid");

    // Pass 1: per-component predicate satisfaction.
    let mut satisfied = vec![false; records.len()];
    if !config.predicate.is_none() {
        for z in 0..dims.depth {
            for y in 0..dims.height {
                for x in 0..dims.width {
                    let label = labels.get(x, y, z);
                    if label == UNSET {
                        continue;
                    }
                    let idx = LabelVolume::record_index(label);
                    if !satisfied[idx] {
                        satisfied[idx] =
                            config.predicate.evaluate(Voxel3::new(x, y, z), &records[idx]);
                    }
                }
            }
        }
    }

    // Survival decision: all three criteria must hold.
    let mut removed_volume = 0usize;
    let mut removed_border = 0usize;
    let mut removed_predicate = 0usize;
    let survives: Vec<bool> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            if config.min_volume_voxels > 0 && record.point_count < config.min_volume_voxels {
                removed_volume += 1;
                return false;
            }
            if config.remove_border_components && record.border_touch_count > 0 {
                removed_border += 1;
                return false;
            }
            if !config.predicate.is_none() && satisfied[idx] != config.keep_if_satisfied {
                removed_predicate += 1;
                return false;
            }
            true
        })
        .collect();

    // Consecutive new labels in original label order.
    let mut new_labels: Vec<Option<i16>> = vec![None; records.len()];
    let mut colors: Vec<u16> = vec![0; records.len()];
    let mut rng = StdRng::seed_from_u64(RECOLOR_SEED);
    let mut next = 0usize;
    for idx in 0..records.len() {
        if survives[idx] {
            new_labels[idx] = Some(LabelVolume::label_for_index(next));
            next += 1;
            if config.recolor {
                colors[idx] = rng.random_range(0..BAND_WIDTH);
            }
        }
    }

    // Pass 2: relabel, zero removed voxels, recolor survivors.
    for z in 0..dims.depth {
        for y in 0..dims.height {
            for x in 0..dims.width {
                let label = labels.get(x, y, z);
                if label == UNSET {
                    continue;
                }
                let idx = LabelVolume::record_index(label);
                match new_labels[idx] {
                    Some(new_label) => {
                        labels.set(x, y, z, new_label);
                        if config.recolor {
                            let offset = if slice_recolor {
                                let shift = (z % BAND_WIDTH as usize) as u16 * SLICE_COLOR_STEP;
                                (colors[idx] + shift) % BAND_WIDTH
                            } else {
                                colors[idx]
                            };
                            grid.set(x, y, z, BAND_START + offset);
                        }
                    }
                    None => {
                        labels.set(x, y, z, UNSET);
                        grid.set(x, y, z, BACKGROUND);
                    }
                }
            }
        }
    }

    // Tombstone removed records, then return the dense surviving list.
    let mut survivors = Vec::with_capacity(next);
    for (idx, mut record) in records.into_iter().enumerate() {
        match new_labels[idx] {
            Some(new_label) => {
                record.label = new_label;
                survivors.push(record);
            }
            None => record.point_count = 0,
        }
    }

    tracing::debug!(
        surviving = survivors.len(),
        removed_volume,
        removed_border,
        removed_predicate,
        "filtering complete"
    );
    survivors
}
