use super::App;
use crate::event::Event;

impl App {
    pub(super) fn log_event(tick: u64, ev: &Event) {
        use crate::event::Event as E;
        match ev {
            E::Tick => {
                log::trace!(target: "events", "[tick {}] Tick", tick);
            }
            E::MovementRequested { dt_ms, yaw } => {
                log::trace!(
                    target: "events",
                    "[tick {}] MovementRequested dt_ms={} yaw={:.1}",
                    tick,
                    dt_ms,
                    yaw
                );
            }
            E::ViewCenterChanged { ccx, ccy, ccz } => {
                log::debug!(
                    target: "events",
                    "[tick {}] ViewCenterChanged c=({},{},{})",
                    tick,
                    ccx,
                    ccy,
                    ccz
                );
            }
            E::ChunkActivated { cx, cy, cz } => {
                log::debug!(
                    target: "events",
                    "[tick {}] ChunkActivated c=({},{},{})",
                    tick,
                    cx,
                    cy,
                    cz
                );
            }
            E::ChunkDeactivated { cx, cy, cz } => {
                log::debug!(
                    target: "events",
                    "[tick {}] ChunkDeactivated c=({},{},{})",
                    tick,
                    cx,
                    cy,
                    cz
                );
            }
            E::GridToggled => {
                log::info!(target: "events", "[tick {}] GridToggled", tick);
            }
            E::ChunkBoundsToggled => {
                log::info!(target: "events", "[tick {}] ChunkBoundsToggled", tick);
            }
            E::DebugOverlayToggled => {
                log::info!(target: "events", "[tick {}] DebugOverlayToggled", tick);
            }
        }
    }
}
