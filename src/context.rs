use std::fmt::Write;

use crate::math::Ray;

/// Per-render-thread scratch state for surfaces.
///
/// Each surface owns one dense integer cell, indexed by its scene-assigned
/// object id; recursive surfaces count their nesting depth there. The
/// context also buffers the optional incidence trace for its thread, which
/// the camera drains after the join.
pub struct RenderContext {
    cells: Vec<isize>,
    trace: Option<String>,
}

impl RenderContext {
    pub fn new(object_count: usize, trace_enabled: bool) -> Self {
        Self {
            cells: vec![0; object_count],
            trace: trace_enabled.then(String::new),
        }
    }

    /// The scratch cell for the object with id `object_id`. Indexing out
    /// of bounds is a scene-construction bug and panics.
    pub fn cell(&mut self, object_id: usize) -> &mut isize {
        &mut self.cells[object_id]
    }

    /// Zero the scratch cell; the default per-object initialization hook.
    pub fn reset(&mut self, object_id: usize) {
        self.cells[object_id] = 0;
    }

    /// Append a trace line for a surface that matched a ray. A no-op when
    /// tracing is disabled; never consulted by rendering logic.
    pub fn trace(&mut self, description: &str, ray: &Ray) {
        if let Some(buf) = &mut self.trace {
            let _ = writeln!(buf, "  {description} matched {ray:?}");
        }
    }

    /// Take the buffered trace text, if tracing was enabled.
    pub fn take_trace(&mut self) -> Option<String> {
        self.trace.take()
    }
}
