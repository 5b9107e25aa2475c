use warren_maze::{Face, MazeError, MazeGrid};

#[test]
fn face_offsets_keep_inverted_vertical_axis() {
    // Up steps toward -y, Down toward +y; the table is load-bearing for
    // wall placement and must not drift toward the common convention.
    assert_eq!(Face::Up.offset(), (0, -1, 0));
    assert_eq!(Face::Down.offset(), (0, 1, 0));
    assert_eq!(Face::Left.offset(), (-1, 0, 0));
    assert_eq!(Face::Right.offset(), (1, 0, 0));
    assert_eq!(Face::Back.offset(), (0, 0, -1));
    assert_eq!(Face::Front.offset(), (0, 0, 1));
}

#[test]
fn face_opposites_pair_up() {
    for face in Face::ALL {
        assert_eq!(face.opposite().opposite(), face);
        let (dx, dy, dz) = face.offset();
        let (ox, oy, oz) = face.opposite().offset();
        assert_eq!((dx + ox, dy + oy, dz + oz), (0, 0, 0));
    }
}

#[test]
fn zero_dimension_is_rejected() {
    for (w, h, d) in [(0, 3, 3), (3, 0, 3), (3, 3, 0), (0, 0, 0)] {
        match MazeGrid::with_seed(w, h, d, 7) {
            Err(MazeError::InvalidDimensions {
                width,
                height,
                depth,
            }) => {
                assert_eq!((width, height, depth), (w, h, d));
            }
            Ok(_) => panic!("expected InvalidDimensions for {}x{}x{}", w, h, d),
        }
    }
}

#[test]
fn single_cell_grid_keeps_all_six_walls() {
    let grid = MazeGrid::with_seed(1, 1, 1, 42).unwrap();
    assert!(grid.fully_carved());
    assert_eq!(grid.open_edge_count(), 0);
    assert_eq!(grid.cell(0, 0, 0).wall_count(), 6);
}

#[test]
fn two_cell_grid_opens_exactly_the_shared_face() {
    let grid = MazeGrid::with_seed(2, 1, 1, 42).unwrap();
    assert!(grid.fully_carved());
    assert_eq!(grid.open_edge_count(), 1);

    // The only possible passage is along x.
    assert!(!grid.is_wall(0, 0, 0, Face::Right));
    assert!(!grid.is_wall(1, 0, 0, Face::Left));

    // Every other face on both cells is still standing.
    assert_eq!(grid.cell(0, 0, 0).wall_count(), 5);
    assert_eq!(grid.cell(1, 0, 0).wall_count(), 5);
}

#[test]
fn carve_is_deterministic_for_a_fixed_seed() {
    let a = MazeGrid::with_seed(4, 3, 2, 0xC0FFEE).unwrap();
    let b = MazeGrid::with_seed(4, 3, 2, 0xC0FFEE).unwrap();
    for y in 0..3 {
        for z in 0..2 {
            for x in 0..4 {
                for face in Face::ALL {
                    assert_eq!(a.is_wall(x, y, z, face), b.is_wall(x, y, z, face));
                }
            }
        }
    }
}
