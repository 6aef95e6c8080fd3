//! Configuration types for labeling and filtering.

use crate::filtering::RemovalPredicate;
use crate::grid::Dimensions;
use crate::labeling::{Connectivity, MAX_LABEL};

/// How foreground voxels are grouped into connected components.
///
/// The per-slice policies use 8-connectivity within each slice orthogonal to
/// the named axis and never connect across slices. The full-volume policies
/// use the 26-neighborhood cube (face, edge and corner neighbors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelingPolicy {
    /// Per-slice 2D connectivity in planes orthogonal to the X axis.
    X2d,
    /// Per-slice 2D connectivity in planes orthogonal to the Y axis.
    Y2d,
    /// Per-slice 2D connectivity in planes orthogonal to the Z axis.
    Z2d,
    /// Full-volume 26-connectivity with a derived minimum component size
    /// guaranteeing the label space cannot be exhausted.
    #[default]
    Full3d,
    /// Full-volume 26-connectivity without the protective minimum size.
    /// The caller accepts the label-overflow risk.
    Full3dNoSizeGuard,
}

impl LabelingPolicy {
    /// Connectivity the flood-fill labeler runs with under this policy.
    pub fn connectivity(self) -> Connectivity {
        match self {
            LabelingPolicy::X2d | LabelingPolicy::Y2d | LabelingPolicy::Z2d => {
                Connectivity::SliceWise
            }
            LabelingPolicy::Full3d | LabelingPolicy::Full3dNoSizeGuard => Connectivity::Volume,
        }
    }

    /// True for the per-slice 2D policies.
    pub fn is_slice_wise(self) -> bool {
        matches!(
            self,
            LabelingPolicy::X2d | LabelingPolicy::Y2d | LabelingPolicy::Z2d
        )
    }

    /// Minimum component size keeping the surviving label count inside the
    /// 16-bit range.
    ///
    /// `dims` are the dimensions of the (possibly axis-swapped) view the
    /// labeler actually scans. Per-slice policies derive from slice area,
    /// full-volume from total voxel count; a result of 0 disables inline
    /// suppression.
    pub fn derived_min_component_size(self, dims: Dimensions) -> u64 {
        const USABLE: u64 = 2 * MAX_LABEL as u64 - 2;
        match self {
            LabelingPolicy::X2d | LabelingPolicy::Y2d | LabelingPolicy::Z2d => {
                dims.slice_voxels() / USABLE
            }
            LabelingPolicy::Full3d => dims.voxel_count() / USABLE,
            LabelingPolicy::Full3dNoSizeGuard => 0,
        }
    }
}

/// Parameters for the component filtering post-pass.
#[derive(Debug)]
pub struct FilterConfig {
    /// Remove components whose BFS expansion was ever clipped by the volume
    /// boundary (`border_touch_count > 0`).
    pub remove_border_components: bool,
    /// Remove components with fewer voxels than this. 0 disables the
    /// criterion. Convert a physical threshold with
    /// [`voxels_for_physical_volume`](crate::voxels_for_physical_volume).
    pub min_volume_voxels: u64,
    /// Geometric removal predicate evaluated per voxel.
    pub predicate: RemovalPredicate,
    /// When true, components where at least one voxel satisfied the predicate
    /// survive; when false, such components are removed.
    /// Ignored for [`RemovalPredicate::None`].
    pub keep_if_satisfied: bool,
    /// Assign each surviving component a pseudo-random display value instead
    /// of leaving the original foreground value. Cosmetic only.
    pub recolor: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            remove_border_components: false,
            min_volume_voxels: 0,
            predicate: RemovalPredicate::None,
            keep_if_satisfied: false,
            recolor: false,
        }
    }
}
