//! Shared test helpers.

use crate::grid::{Dimensions, Volume, VoxelGrid};

/// 8-bit volume from per-slice row-major byte arrays.
pub(crate) fn volume_from_slices(width: usize, height: usize, slices: &[&[u8]]) -> Volume {
    let mut bytes = Vec::with_capacity(width * height * slices.len());
    for slice in slices {
        assert_eq!(slice.len(), width * height, "slice size mismatch");
        bytes.extend_from_slice(slice);
    }
    Volume::from_bytes(Dimensions::new(width, height, slices.len()), bytes)
}

/// Count voxels holding `value`.
pub(crate) fn count_value(grid: &Volume, value: u16) -> u64 {
    let dims = grid.dims();
    let mut count = 0;
    for z in 0..dims.depth {
        for y in 0..dims.height {
            for x in 0..dims.width {
                if grid.get(x, y, z) == value {
                    count += 1;
                }
            }
        }
    }
    count
}
