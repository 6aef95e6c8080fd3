//! Axis-permutation view over a voxel grid.
//!
//! The per-slice X and Y labeling policies reuse the one flood-fill
//! implementation by exchanging the requested axis with the depth axis: the
//! view's depth slices correspond to the source's X (or Y) planes. Writes go
//! through the permutation, so source-image mutation needs no undo step.

use super::{BitDepth, Dimensions, VoxelGrid};

/// Which source axis trades places with the depth axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapAxis {
    X,
    Y,
}

impl SwapAxis {
    /// Permute a coordinate triple. The permutation is an involution: applying
    /// it twice returns the original coordinates.
    #[inline]
    pub fn map(self, x: usize, y: usize, z: usize) -> (usize, usize, usize) {
        match self {
            SwapAxis::X => (z, y, x),
            SwapAxis::Y => (x, z, y),
        }
    }

    /// Dimensions of the permuted view.
    pub fn swap_dims(self, dims: Dimensions) -> Dimensions {
        match self {
            SwapAxis::X => Dimensions::new(dims.depth, dims.height, dims.width),
            SwapAxis::Y => Dimensions::new(dims.width, dims.depth, dims.height),
        }
    }
}

/// Mutable view presenting a grid with one axis exchanged with depth.
#[derive(Debug)]
pub struct SwappedGrid<'a, G: VoxelGrid> {
    grid: &'a mut G,
    axis: SwapAxis,
}

impl<'a, G: VoxelGrid> SwappedGrid<'a, G> {
    pub fn new(grid: &'a mut G, axis: SwapAxis) -> Self {
        Self { grid, axis }
    }
}

impl<G: VoxelGrid> VoxelGrid for SwappedGrid<'_, G> {
    fn dims(&self) -> Dimensions {
        self.axis.swap_dims(self.grid.dims())
    }

    fn bit_depth(&self) -> BitDepth {
        self.grid.bit_depth()
    }

    #[inline]
    fn get(&self, x: usize, y: usize, z: usize) -> u16 {
        let (sx, sy, sz) = self.axis.map(x, y, z);
        self.grid.get(sx, sy, sz)
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, z: usize, value: u16) {
        let (sx, sy, sz) = self.axis.map(x, y, z);
        self.grid.set(sx, sy, sz, value);
    }

    fn voxel_volume(&self) -> f64 {
        self.grid.voxel_volume()
    }
}
