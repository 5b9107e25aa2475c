use std::collections::{BTreeMap, VecDeque};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    // Time housekeeping
    Tick,

    // Input-derived intents
    MovementRequested { dt_ms: u32, yaw: f32 },

    // Walker/view
    ViewCenterChanged { ccx: i32, ccy: i32, ccz: i32 },

    // Streaming: active-set membership changes, consumed by presentation
    ChunkActivated { cx: i32, cy: i32, cz: i32 },
    ChunkDeactivated { cx: i32, cy: i32, cz: i32 },

    // UI toggles
    GridToggled,
    ChunkBoundsToggled,
    DebugOverlayToggled,
}

impl Event {
    pub fn label(&self) -> &'static str {
        match self {
            Event::Tick => "Tick",
            Event::MovementRequested { .. } => "MovementRequested",
            Event::ViewCenterChanged { .. } => "ViewCenterChanged",
            Event::ChunkActivated { .. } => "ChunkActivated",
            Event::ChunkDeactivated { .. } => "ChunkDeactivated",
            Event::GridToggled => "GridToggled",
            Event::ChunkBoundsToggled => "ChunkBoundsToggled",
            Event::DebugOverlayToggled => "DebugOverlayToggled",
        }
    }
}

pub struct EventEnvelope {
    #[allow(dead_code)]
    pub id: u64,
    #[allow(dead_code)]
    pub tick: u64,
    pub kind: Event,
}

/// Tick-bucketed FIFO: events emitted during a tick are handled within that
/// same tick, in emission order.
pub struct EventQueue {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope {
            id,
            tick: self.now,
            kind,
        };
        self.by_tick.entry(self.now).or_default().push_back(env);
        id
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        if let Some(q) = self.by_tick.get_mut(&self.now) {
            if let Some(env) = q.pop_front() {
                return Some(env);
            }
        }
        None
    }

    pub fn advance_tick(&mut self) {
        // Drop the current bucket if it drained fully
        if let Some(q) = self.by_tick.get(&self.now) {
            if q.is_empty() {
                self.by_tick.remove(&self.now);
            }
        }
        self.now = self.now.wrapping_add(1);
    }

    /// Pending event totals by label, for the debug overlay.
    pub fn queued_counts(&self) -> (usize, Vec<(&'static str, usize)>) {
        let mut total = 0usize;
        let mut by: Vec<(&'static str, usize)> = Vec::new();
        for q in self.by_tick.values() {
            for env in q {
                total += 1;
                let label = env.kind.label();
                match by.iter_mut().find(|(l, _)| *l == label) {
                    Some((_, n)) => *n += 1,
                    None => by.push((label, 1)),
                }
            }
        }
        (total, by)
    }

    /// Events stranded in past tick buckets; they will never be processed.
    pub fn count_stale_events(&self) -> usize {
        self.by_tick
            .range(..self.now)
            .map(|(_, q)| q.len())
            .sum()
    }

    pub fn stale_summary(&self) -> Vec<(u64, usize)> {
        self.by_tick
            .range(..self.now)
            .filter(|(_, q)| !q.is_empty())
            .map(|(t, q)| (*t, q.len()))
            .collect()
    }
}
