use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use warren_maze::MazeGrid;

mod app;
mod camera;
mod config;
mod event;
mod gamestate;
mod player;

use app::App;
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "warren", about = "Walk a chunk-streamed 3D maze")]
struct Args {
    /// TOML config path; a missing file falls back to built-in defaults
    #[arg(long, default_value = "warren.toml")]
    config: String,
    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,
    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,
    /// Grid depth in cells
    #[arg(long)]
    depth: Option<usize>,
    /// Carve seed; identical seeds reproduce the maze exactly
    #[arg(long)]
    seed: Option<u64>,
    /// Active-cube radius around the walker, in chunks
    #[arg(long)]
    view_distance: Option<i32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = if Path::new(&args.config).exists() {
        config::load_config_from_path(Path::new(&args.config))?
    } else {
        AppConfig::default()
    };
    if let Some(w) = args.width {
        cfg.grid.width = w;
    }
    if let Some(h) = args.height {
        cfg.grid.height = h;
    }
    if let Some(d) = args.depth {
        cfg.grid.depth = d;
    }
    if let Some(seed) = args.seed {
        cfg.grid.seed = seed;
    }
    if let Some(vd) = args.view_distance {
        cfg.stream.view_distance = vd;
    }

    let grid = Arc::new(MazeGrid::with_seed(
        cfg.grid.width,
        cfg.grid.height,
        cfg.grid.depth,
        cfg.grid.seed,
    )?);
    log::info!(
        "carved {}x{}x{} maze (seed {}): {} open passages",
        grid.width(),
        grid.height(),
        grid.depth(),
        cfg.grid.seed,
        grid.open_edge_count()
    );

    let (mut rl, thread) = raylib::init().size(1280, 720).title("Warren").build();
    rl.set_target_fps(60);
    rl.disable_cursor();
    log::info!("window up, streaming with view distance {}", cfg.stream.view_distance);

    let mut app = App::new(grid, &cfg);
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        app.step(&mut rl, dt);
        let mut d = rl.begin_drawing(&thread);
        app.render(&mut d);
    }
    Ok(())
}
