//! Top-level labeling-and-filtering pipeline.
//!
//! One call runs the whole sequence (label, then filter) over freshly created
//! state. The per-slice X and Y
//! policies wrap the grid in an axis-permutation view, run the identical
//! slice-wise pipeline, then permute the label volume and record coordinates
//! back to source orientation.

use crate::config::{FilterConfig, LabelingPolicy};
use crate::error::Result;
use crate::filtering::filter_components;
use crate::grid::swap::{SwapAxis, SwappedGrid};
use crate::grid::{BitDepth, Dimensions, Volume, VoxelGrid};
use crate::labeling::{label_components, ComponentRecord, LabelVolume, UNSET};

/// Result of one labeling-and-filtering call.
#[derive(Debug)]
pub struct LabelingOutcome {
    /// Surviving components, dense and renumbered to consecutive labels.
    pub components: Vec<ComponentRecord>,
    /// Per-voxel labels in source orientation.
    pub labels: LabelVolume,
}

impl LabelingOutcome {
    /// Materialize the labels as an image volume.
    ///
    /// Voxel values are the dense component numbers (0 background, then
    /// `1..=n` in label order); the bit depth is 8 when the component count
    /// fits in a byte, 16 otherwise. Consumes the outcome so the label volume
    /// is released immediately; it is typically the largest allocation of
    /// the pipeline.
    pub fn into_label_image(self) -> Volume {
        let dims = self.labels.dims();
        let voxels: Vec<u16> = self
            .labels
            .labels()
            .iter()
            .map(|&label| {
                if label == UNSET {
                    0
                } else {
                    (label as i32 - UNSET as i32) as u16
                }
            })
            .collect();
        let bit_depth = if self.components.len() <= u8::MAX as usize {
            BitDepth::Eight
        } else {
            BitDepth::Sixteen
        };
        Volume::from_flat(dims, bit_depth, voxels)
    }
}

/// Label the foreground components of `grid` and filter them in place.
///
/// The grid must be 8-bit. `foreground` selects the voxel value treated as
/// foreground; everything else is background. Removed components' voxels are
/// zeroed in the source image, and survivors are optionally recolored, per
/// `config`. Returns the surviving components together with the label volume.
///
/// ```
/// use voxellum::{
///     label_and_filter, BitDepth, Dimensions, FilterConfig, LabelingPolicy, Volume, VoxelGrid,
/// };
///
/// let mut grid = Volume::new(Dimensions::new(8, 8, 8), BitDepth::Eight);
/// grid.set(3, 3, 3, 255);
/// let outcome =
///     label_and_filter(&mut grid, LabelingPolicy::Full3d, 255, &FilterConfig::default())?;
/// assert_eq!(outcome.components.len(), 1);
/// # Ok::<(), voxellum::LabelError>(())
/// ```
pub fn label_and_filter<G: VoxelGrid>(
    grid: &mut G,
    policy: LabelingPolicy,
    foreground: u16,
    config: &FilterConfig,
) -> Result<LabelingOutcome> {
    match policy {
        LabelingPolicy::X2d => run_swapped(grid, SwapAxis::X, policy, foreground, config),
        LabelingPolicy::Y2d => run_swapped(grid, SwapAxis::Y, policy, foreground, config),
        LabelingPolicy::Z2d | LabelingPolicy::Full3d | LabelingPolicy::Full3dNoSizeGuard => {
            run(grid, policy, foreground, config)
        }
    }
}

/// Convert a physical volume threshold to a voxel count using the grid's
/// calibration.
pub fn voxels_for_physical_volume<G: VoxelGrid>(grid: &G, physical_volume: f64) -> u64 {
    let per_voxel = grid.voxel_volume();
    if per_voxel <= 0.0 || physical_volume <= 0.0 {
        return 0;
    }
    (physical_volume / per_voxel).floor() as u64
}

fn run<G: VoxelGrid>(
    grid: &mut G,
    policy: LabelingPolicy,
    foreground: u16,
    config: &FilterConfig,
) -> Result<LabelingOutcome> {
    let min_size = policy.derived_min_component_size(grid.dims());
    let (mut labels, records) = label_components(grid, foreground, policy.connectivity(), min_size)?;
    let components = filter_components(grid, &mut labels, records, config, policy.is_slice_wise());
    Ok(LabelingOutcome { components, labels })
}

fn run_swapped<G: VoxelGrid>(
    grid: &mut G,
    axis: SwapAxis,
    policy: LabelingPolicy,
    foreground: u16,
    config: &FilterConfig,
) -> Result<LabelingOutcome> {
    let source_dims: Dimensions = grid.dims();

    let mut view = SwappedGrid::new(grid, axis);
    let outcome = run(&mut view, policy, foreground, config)?;

    // Image mutation went through the view; only the label volume and the
    // record coordinates need permuting back.
    let labels = outcome.labels.unswapped(axis, source_dims)?;
    let mut components = outcome.components;
    for record in &mut components {
        record.permute_coordinates(axis);
    }

    Ok(LabelingOutcome { components, labels })
}
