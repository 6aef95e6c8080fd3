//! Voxellum - connected-component labeling and filtering for binary volumes.
//!
//! The engine assigns component labels to maximal connected groups of
//! foreground voxels, accumulates per-component statistics (volume, bounding
//! box, border contact, representative voxel) during labeling, and filters
//! the result by border-touching, volume threshold, or an injectable
//! geometric predicate, with optional relabeling and recoloring.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use voxellum::{label_and_filter, FilterConfig, LabelingPolicy, RemovalPredicate};
//!
//! let config = FilterConfig {
//!     remove_border_components: true,
//!     ..FilterConfig::default()
//! };
//! let outcome = label_and_filter(&mut grid, LabelingPolicy::Full3d, 255, &config)?;
//!
//! println!("kept {} components", outcome.components.len());
//! ```

pub(crate) mod common;
mod config;
mod error;
mod filtering;
mod grid;
mod labeling;
mod pipeline;

#[cfg(test)]
pub(crate) mod test_utils;

// ============================================================================
// Grid collaborator
// ============================================================================

pub use grid::{BitDepth, Dimensions, Volume, VoxelGrid};

// ============================================================================
// Labeling
// ============================================================================

pub use labeling::{
    label_components, Aabb3, ComponentRecord, Connectivity, LabelVolume, Voxel3, MAX_LABEL, UNSET,
};

// ============================================================================
// Filtering
// ============================================================================

pub use filtering::{filter_components, RemovalPredicate, BACKGROUND};

// ============================================================================
// Pipeline
// ============================================================================

pub use config::{FilterConfig, LabelingPolicy};
pub use error::{LabelError, Result};
pub use pipeline::{label_and_filter, voxels_for_physical_volume, LabelingOutcome};
