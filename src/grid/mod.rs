//! Voxel-grid collaborator interface and the owned `Volume` implementation.

pub(crate) mod swap;


use std::fmt;

use crate::common::Buffer3;

/// Storage width of a grid voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    Eight,
    Sixteen,
}

impl BitDepth {
    /// Bits per voxel.
    pub fn bits(self) -> u8 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Width, height and depth of a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Total voxel count.
    #[inline]
    pub fn voxel_count(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.depth as u64
    }

    /// Voxel count of one depth slice.
    #[inline]
    pub fn slice_voxels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

/// Capabilities the engine requires from a voxel grid.
///
/// The engine never assumes anything about storage beyond these accessors,
/// so axis-permuted views and caller-owned grid types plug in transparently.
pub trait VoxelGrid {
    fn dims(&self) -> Dimensions;

    fn bit_depth(&self) -> BitDepth;

    /// Voxel value at (x, y, z). Coordinates must be in range.
    fn get(&self, x: usize, y: usize, z: usize) -> u16;

    /// Overwrite the voxel at (x, y, z). Coordinates must be in range.
    fn set(&mut self, x: usize, y: usize, z: usize, value: u16);

    /// Physical volume of one voxel, from the grid's spatial calibration.
    fn voxel_volume(&self) -> f64;

    #[inline]
    fn width(&self) -> usize {
        self.dims().width
    }

    #[inline]
    fn height(&self) -> usize {
        self.dims().height
    }

    #[inline]
    fn depth(&self) -> usize {
        self.dims().depth
    }
}

#[derive(Debug, Clone)]
enum Storage {
    U8(Buffer3<u8>),
    U16(Buffer3<u16>),
}

/// Owned voxel volume with 8-bit or 16-bit storage and spatial calibration.
#[derive(Debug, Clone)]
pub struct Volume {
    storage: Storage,
    voxel_size: [f64; 3],
}

impl Volume {
    /// Zero-filled volume.
    pub fn new(dims: Dimensions, bit_depth: BitDepth) -> Self {
        let storage = match bit_depth {
            BitDepth::Eight => {
                Storage::U8(Buffer3::new_filled(dims.width, dims.height, dims.depth, 0))
            }
            BitDepth::Sixteen => {
                Storage::U16(Buffer3::new_filled(dims.width, dims.height, dims.depth, 0))
            }
        };
        Self {
            storage,
            voxel_size: [1.0; 3],
        }
    }

    /// Build a volume from a flat depth-major voxel array.
    ///
    /// `voxels` holds all slices back to back, each slice row-major. For
    /// 8-bit depth every value must fit in a byte.
    pub fn from_flat(dims: Dimensions, bit_depth: BitDepth, voxels: Vec<u16>) -> Self {
        assert_eq!(
            voxels.len() as u64,
            dims.voxel_count(),
            "voxels length must equal width * height * depth"
        );
        let storage = match bit_depth {
            BitDepth::Eight => {
                let bytes: Vec<u8> = voxels
                    .into_iter()
                    .map(|v| {
                        debug_assert!(v <= u8::MAX as u16, "value {v} does not fit in 8 bits");
                        v as u8
                    })
                    .collect();
                Storage::U8(Buffer3::new(dims.width, dims.height, dims.depth, bytes))
            }
            BitDepth::Sixteen => {
                Storage::U16(Buffer3::new(dims.width, dims.height, dims.depth, voxels))
            }
        };
        Self {
            storage,
            voxel_size: [1.0; 3],
        }
    }

    /// 8-bit volume from raw bytes, depth-major.
    pub fn from_bytes(dims: Dimensions, bytes: Vec<u8>) -> Self {
        Self {
            storage: Storage::U8(Buffer3::new(dims.width, dims.height, dims.depth, bytes)),
            voxel_size: [1.0; 3],
        }
    }

    /// Set the physical edge lengths of one voxel.
    pub fn with_voxel_size(mut self, sx: f64, sy: f64, sz: f64) -> Self {
        self.voxel_size = [sx, sy, sz];
        self
    }

    /// Raw bytes of an 8-bit volume, depth-major. None for 16-bit storage.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.storage {
            Storage::U8(buffer) => Some(buffer.voxels()),
            Storage::U16(_) => None,
        }
    }
}

impl VoxelGrid for Volume {
    fn dims(&self) -> Dimensions {
        match &self.storage {
            Storage::U8(b) => Dimensions::new(b.width(), b.height(), b.depth()),
            Storage::U16(b) => Dimensions::new(b.width(), b.height(), b.depth()),
        }
    }

    fn bit_depth(&self) -> BitDepth {
        match &self.storage {
            Storage::U8(_) => BitDepth::Eight,
            Storage::U16(_) => BitDepth::Sixteen,
        }
    }

    #[inline]
    fn get(&self, x: usize, y: usize, z: usize) -> u16 {
        match &self.storage {
            Storage::U8(b) => *b.get(x, y, z) as u16,
            Storage::U16(b) => *b.get(x, y, z),
        }
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, z: usize, value: u16) {
        match &mut self.storage {
            Storage::U8(b) => {
                debug_assert!(value <= u8::MAX as u16, "value {value} does not fit in 8 bits");
                *b.get_mut(x, y, z) = value as u8;
            }
            Storage::U16(b) => *b.get_mut(x, y, z) = value,
        }
    }

    fn voxel_volume(&self) -> f64 {
        self.voxel_size[0] * self.voxel_size[1] * self.voxel_size[2]
    }
}
