use std::sync::Arc;

use warren_chunk::{ChunkCoord, ChunkStreamer, StreamerParams, build_chunk_walls};
use warren_geom::Vec3;
use warren_maze::MazeGrid;

fn small_grid(seed: u64) -> Arc<MazeGrid> {
    Arc::new(MazeGrid::with_seed(4, 2, 4, seed).unwrap())
}

#[test]
fn chunk_coord_from_world_floors_negative_positions() {
    // One chunk spans 20 world units (2 cells of 10).
    assert_eq!(
        ChunkCoord::from_world(Vec3::new(0.0, 0.0, 0.0), 20.0),
        ChunkCoord::new(0, 0, 0)
    );
    assert_eq!(
        ChunkCoord::from_world(Vec3::new(19.9, 0.0, -0.1), 20.0),
        ChunkCoord::new(0, 0, -1)
    );
    assert_eq!(
        ChunkCoord::from_world(Vec3::new(-20.0, -39.5, 40.0), 20.0),
        ChunkCoord::new(-1, -2, 2)
    );
}

#[test]
fn fully_out_of_grid_chunks_build_empty() {
    let grid = small_grid(11);
    for coord in [
        ChunkCoord::new(-1, 0, 0),
        ChunkCoord::new(0, -1, 0),
        ChunkCoord::new(0, 0, -1),
        ChunkCoord::new(2, 0, 0),
        ChunkCoord::new(0, 1, 0),
        ChunkCoord::new(5, 5, 5),
    ] {
        let walls = build_chunk_walls(&grid, coord, 2, 10.0);
        assert!(walls.is_empty(), "{:?} should carry no geometry", coord);
    }
}

#[test]
fn single_cell_grid_builds_six_panels() {
    let grid = Arc::new(MazeGrid::with_seed(1, 1, 1, 3).unwrap());
    let walls = build_chunk_walls(&grid, ChunkCoord::new(0, 0, 0), 2, 10.0);
    assert_eq!(walls.len(), 6);
    // All anchors are half a cell from the origin cell center.
    for wall in &walls.walls {
        assert!((wall.center.distance(Vec3::ZERO) - 5.0).abs() < 1e-6);
    }
}

#[test]
fn zero_view_distance_activates_exactly_the_observer_chunk() {
    let grid = small_grid(7);
    let mut streamer = ChunkStreamer::new(
        grid,
        StreamerParams {
            cell_size: 10.0,
            chunk_size: 2,
            view_distance: 0,
        },
    );
    let update = streamer.update_active_set(Vec3::ZERO);
    assert_eq!(update.activated, vec![ChunkCoord::new(0, 0, 0)]);
    assert!(update.deactivated.is_empty());
    assert_eq!(streamer.active_len(), 1);
    assert!(streamer.is_active(ChunkCoord::new(0, 0, 0)));
}

#[test]
fn standing_still_produces_an_empty_diff() {
    let grid = small_grid(7);
    let mut streamer = ChunkStreamer::new(
        grid,
        StreamerParams {
            cell_size: 10.0,
            chunk_size: 2,
            view_distance: 1,
        },
    );
    let first = streamer.update_active_set(Vec3::new(5.0, 5.0, 5.0));
    assert_eq!(first.activated.len(), 27);
    let second = streamer.update_active_set(Vec3::new(6.0, 5.0, 4.0));
    assert!(second.is_empty(), "same chunk, nothing should change");
}

#[test]
fn crossing_a_chunk_border_swaps_one_slab_of_chunks() {
    let grid = small_grid(7);
    let mut streamer = ChunkStreamer::new(
        grid,
        StreamerParams {
            cell_size: 10.0,
            chunk_size: 2,
            view_distance: 1,
        },
    );
    streamer.update_active_set(Vec3::new(5.0, 5.0, 5.0));
    let update = streamer.update_active_set(Vec3::new(25.0, 5.0, 5.0));
    // Moving +1 chunk on x swaps the trailing 3x3 slab for a leading one.
    assert_eq!(update.activated.len(), 9);
    assert_eq!(update.deactivated.len(), 9);
    for c in &update.activated {
        assert_eq!(c.cx, 2);
    }
    for c in &update.deactivated {
        assert_eq!(c.cx, -1);
    }
    assert_eq!(streamer.active_len(), 27);
}

#[test]
fn deactivated_chunks_stay_cached() {
    let grid = small_grid(9);
    let mut streamer = ChunkStreamer::new(
        grid,
        StreamerParams {
            cell_size: 10.0,
            chunk_size: 2,
            view_distance: 0,
        },
    );
    streamer.update_active_set(Vec3::ZERO);
    let update = streamer.update_active_set(Vec3::new(100.0, 0.0, 0.0));
    assert_eq!(update.deactivated, vec![ChunkCoord::new(0, 0, 0)]);
    assert!(!streamer.is_active(ChunkCoord::new(0, 0, 0)));
    // Hidden, not evicted.
    assert!(streamer.chunk(ChunkCoord::new(0, 0, 0)).is_some());
    assert_eq!(streamer.cached_len(), 2);
}
