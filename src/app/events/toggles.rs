use super::App;

impl App {
    pub(super) fn handle_grid_toggle(&mut self) {
        self.gs.show_grid = !self.gs.show_grid;
    }

    pub(super) fn handle_chunk_bounds_toggle(&mut self) {
        self.gs.show_chunk_bounds = !self.gs.show_chunk_bounds;
    }

    pub(super) fn handle_debug_overlay_toggle(&mut self) {
        self.gs.show_debug_overlay = !self.gs.show_debug_overlay;
    }
}
