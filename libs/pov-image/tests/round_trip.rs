use pov_image::encoder::{serialize_volume, unpack_row};
use pov_image::primitives::{draw_cuboid_polar, draw_surface, fadenbild, Plane};
use pov_image::{Colour, PolarCoordinate, VoxelGrid};

fn parse_rows(literal: &str) -> Vec<[u8; 6]> {
    literal
        .lines()
        .filter(|l| l.starts_with("\t\t{"))
        .map(|l| {
            let bytes: Vec<u8> = l
                .trim()
                .trim_start_matches('{')
                .trim_end_matches(|c| c == '}' || c == ',')
                .split(", ")
                .map(|lit| u8::from_str_radix(lit.trim_start_matches("0b"), 2).unwrap())
                .collect();
            bytes.try_into().unwrap()
        })
        .collect()
}

fn sample_scene() -> VoxelGrid {
    let mut grid = VoxelGrid::new();
    fadenbild(&mut grid, 15, 5, 30, Colour::BLUE, 0.5).unwrap();
    draw_cuboid_polar(
        &mut grid,
        PolarCoordinate::new(12, 8, 4).unwrap(),
        PolarCoordinate::new(62, 1, 4).unwrap(),
        Colour::RED,
        0.5,
    );
    draw_surface(&mut grid, Plane::new(0.0, 1.0, 0.0, 0.0), Colour::GREEN, 2.0);
    grid
}

#[test]
fn test_serialized_volume_decodes_to_the_grid() {
    let grid = sample_scene();
    assert!(grid.lit_count() > 0);

    let rows = parse_rows(&serialize_volume(&grid).unwrap());
    assert_eq!(rows.len(), 1000);

    for (i, bytes) in rows.into_iter().enumerate() {
        let (angle, height) = (i / 10, i % 10);
        assert_eq!(
            unpack_row(bytes).as_slice(),
            grid.row(angle, height),
            "row {angle}/{height}"
        );
    }
}

#[test]
fn test_serialization_is_deterministic() {
    let a = serialize_volume(&sample_scene()).unwrap();
    let b = serialize_volume(&sample_scene()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_grid_serializes_to_zero_bytes() {
    let literal = serialize_volume(&VoxelGrid::new()).unwrap();
    assert!(parse_rows(&literal).iter().all(|row| *row == [0; 6]));
}
