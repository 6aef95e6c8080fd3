//! Tests for component filtering.

use super::*;
use crate::config::FilterConfig;
use crate::grid::{Dimensions, Volume, VoxelGrid};
use crate::labeling::{label_components, Connectivity, Voxel3 as V};
use crate::test_utils::{count_value, volume_from_slices};

const FG: u16 = 255;

/// 5x5x1 fixture from the two-blob scenario:
/// ##...
/// ##...
/// .....
/// ..#..
/// .....
fn two_blob_volume() -> Volume {
    let slice = [
        255, 255, 0, 0, 0, //
        255, 255, 0, 0, 0, //
        0, 0, 0, 0, 0, //
        0, 0, 255, 0, 0, //
        0, 0, 0, 0, 0,
    ];
    volume_from_slices(5, 5, &[&slice])
}

fn label(grid: &Volume, connectivity: Connectivity) -> (LabelVolume, Vec<ComponentRecord>) {
    label_components(grid, FG, connectivity, 0).unwrap()
}

#[test]
fn no_criteria_keeps_everything_unchanged() {
    let mut grid = two_blob_volume();
    let (mut labels, records) = label(&grid, Connectivity::SliceWise);
    let before = records.clone();
    let label_bytes_before = labels.labels().to_vec();

    let survivors = filter_components(
        &mut grid,
        &mut labels,
        records,
        &FilterConfig::default(),
        true,
    );

    assert_eq!(survivors, before);
    assert_eq!(labels.labels(), label_bytes_before.as_slice());
    assert_eq!(count_value(&grid, FG), 5);
}

#[test]
fn border_removal_keeps_center_voxel() {
    let mut grid = two_blob_volume();
    let (mut labels, records) = label(&grid, Connectivity::SliceWise);
    assert_eq!(records.len(), 2);

    let config = FilterConfig {
        remove_border_components: true,
        ..FilterConfig::default()
    };
    let survivors = filter_components(&mut grid, &mut labels, records, &config, true);

    assert_eq!(survivors.len(), 1);
    let survivor = &survivors[0];
    assert_eq!(survivor.point_count, 1);
    assert_eq!(survivor.border_touch_count, 0);
    assert_eq!(survivor.label, UNSET + 1);
    assert_eq!(survivor.representative, V::new(2, 3, 0));

    // Removed blob is background in both the labels and the image.
    assert_eq!(labels.get(0, 0, 0), UNSET);
    assert_eq!(grid.get(0, 0, 0), BACKGROUND);
    assert_eq!(count_value(&grid, FG), 1);
}

#[test]
fn volume_threshold_removes_small_components() {
    let mut grid = two_blob_volume();
    let (mut labels, records) = label(&grid, Connectivity::SliceWise);

    let config = FilterConfig {
        min_volume_voxels: 2,
        ..FilterConfig::default()
    };
    let survivors = filter_components(&mut grid, &mut labels, records, &config, true);

    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].point_count, 4);
}

#[test]
fn volume_below_predicate_equals_direct_threshold() {
    let threshold = 2;

    let mut grid_a = two_blob_volume();
    let (mut labels_a, records_a) = label(&grid_a, Connectivity::SliceWise);
    let config_a = FilterConfig {
        min_volume_voxels: threshold,
        ..FilterConfig::default()
    };
    let survivors_a = filter_components(&mut grid_a, &mut labels_a, records_a, &config_a, true);

    let mut grid_b = two_blob_volume();
    let (mut labels_b, records_b) = label(&grid_b, Connectivity::SliceWise);
    let config_b = FilterConfig {
        predicate: RemovalPredicate::VolumeBelow(threshold),
        keep_if_satisfied: false,
        ..FilterConfig::default()
    };
    let survivors_b = filter_components(&mut grid_b, &mut labels_b, records_b, &config_b, true);

    assert_eq!(survivors_a, survivors_b);
    assert_eq!(labels_a.labels(), labels_b.labels());
    assert_eq!(grid_a.bytes(), grid_b.bytes());
}

#[test]
fn touches_border_predicate_equals_border_flag() {
    let mut grid_a = two_blob_volume();
    let (mut labels_a, records_a) = label(&grid_a, Connectivity::SliceWise);
    let config_a = FilterConfig {
        remove_border_components: true,
        ..FilterConfig::default()
    };
    let survivors_a = filter_components(&mut grid_a, &mut labels_a, records_a, &config_a, true);

    let mut grid_b = two_blob_volume();
    let (mut labels_b, records_b) = label(&grid_b, Connectivity::SliceWise);
    let config_b = FilterConfig {
        predicate: RemovalPredicate::TouchesBorder,
        keep_if_satisfied: false,
        ..FilterConfig::default()
    };
    let survivors_b = filter_components(&mut grid_b, &mut labels_b, records_b, &config_b, true);

    assert_eq!(survivors_a, survivors_b);
    assert_eq!(grid_a.bytes(), grid_b.bytes());
}

#[test]
fn thick_plane_predicate_selects_by_slab() {
    // Two single-voxel components at z = 0 and z = 2.
    let mut grid = Volume::new(Dimensions::new(3, 3, 3), crate::grid::BitDepth::Eight);
    grid.set(1, 1, 0, FG);
    grid.set(1, 1, 2, FG);
    let (mut labels, records) = label(&grid, Connectivity::Volume);
    assert_eq!(records.len(), 2);

    // Slab z in [0, 1): keeps only the z = 0 component.
    let config = FilterConfig {
        predicate: RemovalPredicate::InsideThickPlane {
            a: 0.0,
            b: 0.0,
            c: 0.0,
            thickness: 1.0,
        },
        keep_if_satisfied: true,
        ..FilterConfig::default()
    };
    let survivors = filter_components(&mut grid, &mut labels, records, &config, false);

    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].representative.z, 0);
}

#[test]
fn outside_thick_plane_is_the_complement() {
    let inside = RemovalPredicate::InsideThickPlane {
        a: 0.5,
        b: 1.0,
        c: -1.0,
        thickness: 2.0,
    };
    let outside = RemovalPredicate::OutsideThickPlane {
        a: 0.5,
        b: 1.0,
        c: -1.0,
        thickness: 2.0,
    };
    let record = ComponentRecord::new(UNSET + 1, V::new(0, 0, 0));

    for v in [V::new(0, 0, 0), V::new(2, 1, 1), V::new(4, 2, 3)] {
        assert_ne!(inside.evaluate(v, &record), outside.evaluate(v, &record));
    }
}

#[test]
fn custom_predicate_sees_voxel_and_record() {
    let mut grid = two_blob_volume();
    let (mut labels, records) = label(&grid, Connectivity::SliceWise);

    let config = FilterConfig {
        predicate: RemovalPredicate::Custom(Box::new(|_, record| record.point_count == 4)),
        keep_if_satisfied: true,
        ..FilterConfig::default()
    };
    let survivors = filter_components(&mut grid, &mut labels, records, &config, true);

    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].point_count, 4);
}

#[test]
fn recolor_assigns_band_values_per_component() {
    let mut grid = two_blob_volume();
    let (mut labels, records) = label(&grid, Connectivity::SliceWise);

    let config = FilterConfig {
        recolor: true,
        ..FilterConfig::default()
    };
    let survivors = filter_components(&mut grid, &mut labels, records, &config, true);

    assert_eq!(survivors.len(), 2);
    for survivor in &survivors {
        let rep = survivor.representative;
        let color = grid.get(rep.x, rep.y, rep.z);
        assert!((100..200).contains(&color), "color {color} outside band");

        // Every voxel of the component carries the same color (one slice).
        let dims = grid.dims();
        for y in 0..dims.height {
            for x in 0..dims.width {
                if labels.get(x, y, 0) == survivor.label {
                    assert_eq!(grid.get(x, y, 0), color);
                }
            }
        }
    }
}

#[test]
fn recolor_stays_in_band_across_slices() {
    let mut grid = Volume::new(Dimensions::new(2, 2, 40), crate::grid::BitDepth::Eight);
    for z in 0..40 {
        grid.set(0, 0, z, FG);
    }
    let (mut labels, records) = label(&grid, Connectivity::SliceWise);
    assert_eq!(records.len(), 40);

    let config = FilterConfig {
        recolor: true,
        ..FilterConfig::default()
    };
    let survivors = filter_components(&mut grid, &mut labels, records, &config, true);

    assert_eq!(survivors.len(), 40);
    for z in 0..40 {
        let color = grid.get(0, 0, z);
        assert!((100..200).contains(&color), "slice {z} color {color}");
    }
}

#[test]
fn survivors_keep_foreground_value_without_recolor() {
    let mut grid = two_blob_volume();
    let (mut labels, records) = label(&grid, Connectivity::SliceWise);

    let config = FilterConfig {
        min_volume_voxels: 2,
        ..FilterConfig::default()
    };
    filter_components(&mut grid, &mut labels, records, &config, true);

    assert_eq!(grid.get(0, 0, 0), FG);
    assert_eq!(grid.get(2, 3, 0), BACKGROUND);
}
