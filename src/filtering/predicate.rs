//! Per-voxel removal predicates.

use std::fmt;

use crate::labeling::{ComponentRecord, Voxel3};

/// Test applied to every voxel of a component during filter pass 1.
///
/// A component's criterion is "did any voxel satisfy the predicate"; whether
/// satisfaction keeps or removes the component is decided by the filter's
/// `keep_if_satisfied` flag. [`RemovalPredicate::Custom`] is the
/// caller-supplied extension point.
pub enum RemovalPredicate {
    /// Always keep: the predicate criterion is skipped entirely.
    None,
    /// Satisfied when the component touched the volume boundary.
    TouchesBorder,
    /// Satisfied when the component holds fewer voxels than the threshold.
    VolumeBelow(u64),
    /// Satisfied when the voxel lies inside the thick plane
    /// `a·x + b·y + c <= z < a·x + b·y + c + thickness`.
    InsideThickPlane { a: f64, b: f64, c: f64, thickness: f64 },
    /// Satisfied when the voxel lies outside that thick plane.
    OutsideThickPlane { a: f64, b: f64, c: f64, thickness: f64 },
    /// Arbitrary caller-supplied test of a voxel and its component's record.
    #[allow(clippy::type_complexity)]
    Custom(Box<dyn Fn(Voxel3, &ComponentRecord) -> bool + Send + Sync>),
}

impl RemovalPredicate {
    /// True for [`RemovalPredicate::None`], which short-circuits pass 1.
    pub fn is_none(&self) -> bool {
        matches!(self, RemovalPredicate::None)
    }

    /// Evaluate the predicate for one voxel of a component.
    pub fn evaluate(&self, v: Voxel3, record: &ComponentRecord) -> bool {
        match self {
            RemovalPredicate::None => false,
            RemovalPredicate::TouchesBorder => record.border_touch_count > 0,
            RemovalPredicate::VolumeBelow(threshold) => record.point_count < *threshold,
            RemovalPredicate::InsideThickPlane { a, b, c, thickness } => {
                in_thick_plane(v, *a, *b, *c, *thickness)
            }
            RemovalPredicate::OutsideThickPlane { a, b, c, thickness } => {
                !in_thick_plane(v, *a, *b, *c, *thickness)
            }
            RemovalPredicate::Custom(test) => test(v, record),
        }
    }
}

/// Half-open slab test: `z` in `[a·x + b·y + c, a·x + b·y + c + thickness)`.
#[inline]
fn in_thick_plane(v: Voxel3, a: f64, b: f64, c: f64, thickness: f64) -> bool {
    let lower = a * v.x as f64 + b * v.y as f64 + c;
    let z = v.z as f64;
    z >= lower && z < lower + thickness
}

impl fmt::Debug for RemovalPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalPredicate::None => write!(f, "None"),
            RemovalPredicate::TouchesBorder => write!(f, "TouchesBorder"),
            RemovalPredicate::VolumeBelow(t) => write!(f, "VolumeBelow({t})"),
            RemovalPredicate::InsideThickPlane { a, b, c, thickness } => {
                write!(f, "InsideThickPlane({a}, {b}, {c}, {thickness})")
            }
            RemovalPredicate::OutsideThickPlane { a, b, c, thickness } => {
                write!(f, "OutsideThickPlane({a}, {b}, {c}, {thickness})")
            }
            RemovalPredicate::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
