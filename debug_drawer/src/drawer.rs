use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::vertex::DebugVertex;

/// Accumulated vertex data for a single frame.
pub(crate) struct FrameData {
    pub vertices: Vec<DebugVertex>,
}

impl FrameData {
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    fn clear(&mut self) {
        self.vertices.clear();
    }
}

/// Thread-safe debug drawing accumulator.
///
/// Uses double-buffered [`FrameData`]:
/// - `frames[current_tick % 2]` is being written to by [`DebugDrawerContext`]s
/// - `frames[(current_tick + 1) % 2]` holds previous tick data, ready for rendering
///
/// Call [`advance_tick`](Self::advance_tick) once per frame before creating any contexts.
/// The renderer reads the previous tick's data via [`take_render_data`](Self::take_render_data).
pub struct DebugDrawer {
    current_tick: AtomicU64,
    frames: Mutex<[FrameData; 2]>,
}

impl DebugDrawer {
    /// Create a new debug drawer starting at tick 0.
    pub fn new() -> Self {
        Self {
            current_tick: AtomicU64::new(0),
            frames: Mutex::new([FrameData::new(), FrameData::new()]),
        }
    }

    /// Get the current tick.
    pub fn current_tick(&self) -> u64 {
        self.current_tick.load(Ordering::Acquire)
    }

    /// Advance to the next tick.
    ///
    /// Increments the tick counter and clears the new write buffer.
    /// Call this once per frame at the start, before creating any contexts.
    pub fn advance_tick(&self) {
        let new_tick = self.current_tick.load(Ordering::Acquire) + 1;
        let write_index = (new_tick % 2) as usize;
        {
            let mut frames = self.frames.lock();
            frames[write_index].clear();
        }
        self.current_tick.store(new_tick, Ordering::Release);
    }

    /// Create a drawing context for the current tick.
    ///
    /// The context collects vertices locally and flushes them to the
    /// drawer on [`Drop`], so the mutex is only held briefly during the
    /// flush.
    pub fn context(&self) -> DebugDrawerContext<'_> {
        let tick = self.current_tick.load(Ordering::Acquire);
        DebugDrawerContext {
            drawer: self,
            tick,
            vertices: Vec::new(),
        }
    }

    /// Take the previous tick's render data.
    ///
    /// Returns the accumulated vertices from tick N-1 (while tick N is being
    /// collected). The internal storage is left empty but retains its allocation.
    pub fn take_render_data(&self) -> Vec<DebugVertex> {
        let tick = self.current_tick.load(Ordering::Acquire);
        let render_index = ((tick + 1) % 2) as usize;
        let mut frames = self.frames.lock();
        std::mem::take(&mut frames[render_index].vertices)
    }

    /// Append vertices from a finished context.
    fn flush(&self, tick: u64, vertices: Vec<DebugVertex>) {
        if vertices.is_empty() {
            return;
        }
        let current = self.current_tick.load(Ordering::Acquire);
        if tick != current {
            log::warn!(
                "DebugDrawerContext flushed for tick {} but current is {}; discarding",
                tick,
                current
            );
            return;
        }
        let write_index = (tick % 2) as usize;
        let mut frames = self.frames.lock();
        frames[write_index].vertices.extend_from_slice(&vertices);
    }
}

impl Default for DebugDrawer {
    fn default() -> Self {
        Self::new()
    }
}

/// A short-lived drawing context.
///
/// Collects debug draw vertices locally. On [`Drop`], flushes them
/// to the parent [`DebugDrawer`] under a brief lock.
pub struct DebugDrawerContext<'a> {
    drawer: &'a DebugDrawer,
    tick: u64,
    vertices: Vec<DebugVertex>,
}

impl DebugDrawerContext<'_> {
    pub(crate) fn push_line(&mut self, start: [f32; 2], end: [f32; 2], color: [f32; 4]) {
        self.vertices.push(DebugVertex {
            position: start,
            color,
        });
        self.vertices.push(DebugVertex {
            position: end,
            color,
        });
    }

    /// Number of vertices collected so far in this context.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl Drop for DebugDrawerContext<'_> {
    fn drop(&mut self) {
        self.drawer
            .flush(self.tick, std::mem::take(&mut self.vertices));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn render_data_lags_one_tick() {
        let drawer = DebugDrawer::new();
        {
            let mut ctx = drawer.context();
            ctx.draw_line([0.0, 0.0], [10.0, 0.0], WHITE);
        }
        drawer.advance_tick();
        let data = drawer.take_render_data();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].position, [0.0, 0.0]);
        assert_eq!(data[1].position, [10.0, 0.0]);
    }

    #[test]
    fn stale_context_is_discarded() {
        let drawer = DebugDrawer::new();
        let mut ctx = drawer.context();
        ctx.draw_line([0.0, 0.0], [1.0, 1.0], WHITE);
        drawer.advance_tick();
        drop(ctx);
        drawer.advance_tick();
        assert!(drawer.take_render_data().is_empty());
    }

    #[test]
    fn take_leaves_buffer_empty() {
        let drawer = DebugDrawer::new();
        {
            let mut ctx = drawer.context();
            ctx.draw_line([0.0, 0.0], [1.0, 1.0], WHITE);
        }
        drawer.advance_tick();
        assert_eq!(drawer.take_render_data().len(), 2);
        assert!(drawer.take_render_data().is_empty());
    }
}
