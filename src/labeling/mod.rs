//! Flood-fill connected-component labeling for binary volumes.
//!
//! One breadth-first implementation serves every connectivity policy: the
//! per-slice 2D policies constrain expansion to the current depth slice, and
//! the X/Y variants are handled upstream by an axis-permutation view over the
//! grid. The BFS uses an explicit FIFO queue, never recursion, so stack usage
//! stays O(1) for components spanning millions of voxels.

mod record;


use std::collections::VecDeque;

use crate::common::Buffer3;
use crate::error::{LabelError, Result};
use crate::grid::swap::SwapAxis;
use crate::grid::{BitDepth, Dimensions, VoxelGrid};

pub use record::{Aabb3, ComponentRecord, Voxel3};

/// Sentinel for voxels without a label.
pub const UNSET: i16 = i16::MIN;

/// Largest assignable label value.
pub const MAX_LABEL: i16 = i16::MAX;

/// Neighborhood the flood fill expands over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// 8-neighborhood within the current depth slice. Components never span
    /// slices.
    SliceWise,
    /// Full 26-neighborhood cube: face, edge and corner neighbors.
    Volume,
}

/// Dense per-voxel label storage.
///
/// Values are either [`UNSET`] or a label in the contiguous range
/// `(UNSET, max_used_label]`. Labels are assigned in increasing order starting
/// at `UNSET + 1`; slots of inline-discarded components are reused.
#[derive(Debug, Clone)]
pub struct LabelVolume {
    labels: Buffer3<i16>,
}

impl LabelVolume {
    fn new_unset(dims: Dimensions) -> Self {
        Self {
            labels: Buffer3::new_filled(dims.width, dims.height, dims.depth, UNSET),
        }
    }

    pub fn dims(&self) -> Dimensions {
        Dimensions::new(self.labels.width(), self.labels.height(), self.labels.depth())
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> i16 {
        *self.labels.get(x, y, z)
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, z: usize, label: i16) {
        *self.labels.get_mut(x, y, z) = label;
    }

    /// Raw labels, depth-major.
    pub fn labels(&self) -> &[i16] {
        self.labels.voxels()
    }

    /// Index into the component record list for a live label.
    #[inline]
    pub fn record_index(label: i16) -> usize {
        debug_assert_ne!(label, UNSET);
        (label as i32 - UNSET as i32 - 1) as usize
    }

    /// Label value stored at a record index.
    #[inline]
    pub fn label_for_index(index: usize) -> i16 {
        (index as i32 + UNSET as i32 + 1) as i16
    }

    /// Undo an axis swap, returning the labels in source orientation.
    ///
    /// `source_dims` are the dimensions of the unswapped grid. Fails with
    /// [`LabelError::IncompatibleGeometry`] when this volume was not produced
    /// from the matching swapped view.
    pub(crate) fn unswapped(self, axis: SwapAxis, source_dims: Dimensions) -> Result<Self> {
        let expected = axis.swap_dims(source_dims);
        if self.dims() != expected {
            return Err(LabelError::IncompatibleGeometry {
                expected,
                actual: self.dims(),
            });
        }

        let mut out = Buffer3::new_filled(
            source_dims.width,
            source_dims.height,
            source_dims.depth,
            UNSET,
        );
        for z in 0..source_dims.depth {
            for y in 0..source_dims.height {
                for x in 0..source_dims.width {
                    let (vx, vy, vz) = axis.map(x, y, z);
                    *out.get_mut(x, y, z) = *self.labels.get(vx, vy, vz);
                }
            }
        }
        Ok(Self { labels: out })
    }
}

/// Label all connected foreground components of `grid`.
///
/// Scans the volume in depth-major order and grows one component at a time by
/// breadth-first expansion. Components smaller than `min_component_size` are
/// erased inline and their label slot reused (0 disables suppression).
///
/// Fails with [`LabelError::UnsupportedBitDepth`] for non-8-bit grids before
/// any scan, and with [`LabelError::LabelSpaceExhausted`] if the label counter
/// would pass [`MAX_LABEL`], which is unreachable while `min_component_size`
/// honors the derived guard.
pub fn label_components<G: VoxelGrid>(
    grid: &G,
    foreground: u16,
    connectivity: Connectivity,
    min_component_size: u64,
) -> Result<(LabelVolume, Vec<ComponentRecord>)> {
    if grid.bit_depth() != BitDepth::Eight {
        return Err(LabelError::UnsupportedBitDepth(grid.bit_depth()));
    }

    let dims = grid.dims();
    let mut labels = LabelVolume::new_unset(dims);
    let mut records: Vec<ComponentRecord> = Vec::new();
    let mut next_label = UNSET as i32 + 1;

    let mut queue: VecDeque<Voxel3> = VecDeque::new();
    // Members of the component being grown, kept so a too-small component can
    // be erased without a second traversal.
    let mut members: Vec<Voxel3> = Vec::new();

    for z in 0..dims.depth {
        for y in 0..dims.height {
            for x in 0..dims.width {
                if grid.get(x, y, z) != foreground || labels.get(x, y, z) != UNSET {
                    continue;
                }

                if next_label > MAX_LABEL as i32 {
                    return Err(LabelError::LabelSpaceExhausted {
                        components: records.len(),
                    });
                }
                let label = next_label as i16;

                let seed = Voxel3::new(x, y, z);
                let mut record = ComponentRecord::new(label, seed);
                labels.set(x, y, z, label);

                members.clear();
                members.push(seed);
                queue.clear();
                queue.push_back(seed);

                while let Some(v) = queue.pop_front() {
                    record.border_touch_count += clipped_directions(v, dims, connectivity);
                    expand(
                        grid,
                        &mut labels,
                        &mut record,
                        &mut members,
                        &mut queue,
                        v,
                        foreground,
                        label,
                        connectivity,
                    );
                }

                if min_component_size > 0 && record.point_count < min_component_size {
                    tracing::trace!(
                        label,
                        point_count = record.point_count,
                        min_component_size,
                        "suppressing small component, reusing label slot"
                    );
                    for m in &members {
                        labels.set(m.x, m.y, m.z, UNSET);
                    }
                    continue;
                }

                records.push(record);
                next_label += 1;
            }
        }
    }

    tracing::debug!(
        components = records.len(),
        dims = %dims,
        ?connectivity,
        "labeling complete"
    );
    Ok((labels, records))
}

/// Count the face directions whose unit step from `v` leaves the volume.
///
/// Each clipped direction counts once per processed voxel: up to 6 for volume
/// connectivity, up to 4 slice-wise (the depth directions are never
/// attempted).
#[inline]
fn clipped_directions(v: Voxel3, dims: Dimensions, connectivity: Connectivity) -> u32 {
    let mut clipped = 0;
    if v.x == 0 {
        clipped += 1;
    }
    if v.x + 1 == dims.width {
        clipped += 1;
    }
    if v.y == 0 {
        clipped += 1;
    }
    if v.y + 1 == dims.height {
        clipped += 1;
    }
    if connectivity == Connectivity::Volume {
        if v.z == 0 {
            clipped += 1;
        }
        if v.z + 1 == dims.depth {
            clipped += 1;
        }
    }
    clipped
}

#[allow(clippy::too_many_arguments)]
#[inline]
fn expand<G: VoxelGrid>(
    grid: &G,
    labels: &mut LabelVolume,
    record: &mut ComponentRecord,
    members: &mut Vec<Voxel3>,
    queue: &mut VecDeque<Voxel3>,
    v: Voxel3,
    foreground: u16,
    label: i16,
    connectivity: Connectivity,
) {
    let dims = grid.dims();
    let (z_lo, z_hi) = match connectivity {
        Connectivity::SliceWise => (v.z, v.z),
        Connectivity::Volume => (v.z.saturating_sub(1), (v.z + 1).min(dims.depth - 1)),
    };
    let y_lo = v.y.saturating_sub(1);
    let y_hi = (v.y + 1).min(dims.height - 1);
    let x_lo = v.x.saturating_sub(1);
    let x_hi = (v.x + 1).min(dims.width - 1);

    for nz in z_lo..=z_hi {
        for ny in y_lo..=y_hi {
            for nx in x_lo..=x_hi {
                if nx == v.x && ny == v.y && nz == v.z {
                    continue;
                }
                if grid.get(nx, ny, nz) != foreground || labels.get(nx, ny, nz) != UNSET {
                    continue;
                }
                let n = Voxel3::new(nx, ny, nz);
                labels.set(nx, ny, nz, label);
                record.add_voxel(n);
                members.push(n);
                queue.push_back(n);
            }
        }
    }
}
