//! Per-component statistics accumulated during labeling.

use crate::grid::swap::SwapAxis;

/// Integer voxel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voxel3 {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Voxel3 {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    fn permuted(self, axis: SwapAxis) -> Self {
        let (x, y, z) = axis.map(self.x, self.y, self.z);
        Self { x, y, z }
    }
}

/// Axis-aligned bounding box with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb3 {
    pub min: Voxel3,
    pub max: Voxel3,
}

impl Aabb3 {
    /// Degenerate box covering a single voxel.
    pub fn point(v: Voxel3) -> Self {
        Self { min: v, max: v }
    }

    /// Widen the box to include `v`. Monotonic: the box never shrinks.
    pub fn extend(&mut self, v: Voxel3) {
        self.min.x = self.min.x.min(v.x);
        self.min.y = self.min.y.min(v.y);
        self.min.z = self.min.z.min(v.z);
        self.max.x = self.max.x.max(v.x);
        self.max.y = self.max.y.max(v.y);
        self.max.z = self.max.z.max(v.z);
    }

    pub fn contains(&self, v: Voxel3) -> bool {
        v.x >= self.min.x
            && v.x <= self.max.x
            && v.y >= self.min.y
            && v.y <= self.max.y
            && v.z >= self.min.z
            && v.z <= self.max.z
    }

    fn permuted(self, axis: SwapAxis) -> Self {
        // Axis permutation maps per-axis minima to minima, so the corners
        // stay valid after swapping their coordinates.
        Self {
            min: self.min.permuted(axis),
            max: self.max.permuted(axis),
        }
    }
}

/// Mutable statistics of one connected component.
///
/// `point_count == 0` is the sole removal marker; a record with
/// `point_count > 0` always has a representative voxel belonging to the
/// component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Component label, unique while the component is alive.
    pub label: i16,
    /// Voxels currently assigned to this label.
    pub point_count: u64,
    /// Member voxel with the smallest depth coordinate seen so far.
    pub representative: Voxel3,
    /// BFS expansion attempts clipped by the volume boundary.
    pub border_touch_count: u32,
    /// Per-axis min/max, widened monotonically as voxels join.
    pub bounds: Aabb3,
}

impl ComponentRecord {
    /// Fresh record for a component seeded at `seed`.
    pub fn new(label: i16, seed: Voxel3) -> Self {
        Self {
            label,
            point_count: 1,
            representative: seed,
            border_touch_count: 0,
            bounds: Aabb3::point(seed),
        }
    }

    /// Account for a newly labeled member voxel.
    pub fn add_voxel(&mut self, v: Voxel3) {
        self.point_count += 1;
        self.bounds.extend(v);
        if v.z < self.representative.z {
            self.representative = v;
        }
    }

    /// True once the component has been removed by filtering.
    pub fn is_removed(&self) -> bool {
        self.point_count == 0
    }

    /// Swap the recorded coordinates back after axis-projected labeling.
    /// Coordinate permutation only; counts and label are untouched.
    pub(crate) fn permute_coordinates(&mut self, axis: SwapAxis) {
        self.representative = self.representative.permuted(axis);
        self.bounds = self.bounds.permuted(axis);
    }
}
