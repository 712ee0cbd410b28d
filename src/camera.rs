use std::ops::Range;

use image::RgbImage;
use log::{info, trace};
use rayon::prelude::*;

use crate::{
    color::Color,
    context::RenderContext,
    error::Result,
    math::{Ray, Vector3},
    scene::Scene,
};

/// Thread counts must lie in `[1, MAX_THREADS)`.
pub const MAX_THREADS: usize = 1024;

/// Maps the pixel grid to sample rays and manages render concurrency.
///
/// Pixels are offset from the image center; each maps to a sample point
/// `focal_length` ahead of the focus position, scaled by the resolution
/// and by a radial lens correction so edge samples subtend about the same
/// angle as central ones.
#[derive(Clone, Debug)]
pub struct Camera {
    focal_length: f64,
    width_px: u32,
    height_px: u32,
    /// One unit of world length corresponds to this many pixels.
    resolution: u32,
    focus: Vector3,
}

impl Camera {
    pub fn new(
        focal_length: f64,
        width_px: u32,
        height_px: u32,
        resolution: u32,
        focus: Vector3,
    ) -> Self {
        Self {
            focal_length,
            width_px,
            height_px,
            resolution,
            focus,
        }
    }

    /// Render the scene into a framebuffer using `thread_count` workers.
    ///
    /// The pixel columns are split into contiguous vertical strips, one
    /// per worker; the last strip absorbs the remainder. Every worker owns
    /// a private buffer and a private render context, so rendering shares
    /// nothing mutable; the strips are merged sequentially after the join.
    pub fn snap(&self, scene: &Scene, thread_count: usize, trace_rays: bool) -> Result<RgbImage> {
        debug_assert!((1..MAX_THREADS).contains(&thread_count));

        let width = self.width_px as usize;
        let height = self.height_px as usize;
        info!(
            "rendering {width}x{height} across {thread_count} strip(s), {} object(s)",
            scene.object_count()
        );

        let strips = strip_bounds(width, thread_count);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()?;

        let rendered: Vec<(Vec<Color>, Option<String>)> = pool.install(|| {
            strips
                .par_iter()
                .map(|columns| self.render_strip(scene, columns.clone(), trace_rays))
                .collect()
        });

        // sequential merge into the shared framebuffer
        let mut framebuffer = RgbImage::from_pixel(self.width_px, self.height_px, Color::blue().into());
        for (columns, (pixels, trace_text)) in strips.iter().zip(rendered) {
            for x in columns.clone() {
                for y in 0..height {
                    let color = pixels[(x - columns.start) * height + y];
                    // image rows grow downward; flip to keep z pointing up
                    framebuffer.put_pixel(x as u32, (height - 1 - y) as u32, color.into());
                }
            }
            if let Some(text) = trace_text {
                for line in text.lines() {
                    trace!("{line}");
                }
            }
        }

        Ok(framebuffer)
    }

    /// Render one vertical strip of pixel columns into a private buffer,
    /// column-major, together with the strip's trace text.
    fn render_strip(
        &self,
        scene: &Scene,
        columns: Range<usize>,
        trace_rays: bool,
    ) -> (Vec<Color>, Option<String>) {
        let mut ctx = RenderContext::new(scene.object_count(), trace_rays);
        scene.init_context(&mut ctx);

        let height = self.height_px as usize;
        let half_width = (self.width_px / 2) as i64;
        let half_height = (self.height_px / 2) as i64;
        let max_diag_sqr = ((half_width * half_width + half_height * half_height) as f64).max(1.0);
        let resolution = self.resolution as f64;

        let mut pixels = Vec::with_capacity(columns.len() * height);
        for x in columns {
            let xi = x as i64 - half_width;
            for y in 0..height {
                let yi = y as i64 - half_height;

                // barrel-style lens correction: stretch edge samples so
                // they cover about the same angle as central ones
                let scale = 1.0 + (xi * xi + yi * yi) as f64 / max_diag_sqr;
                let sample = Vector3::new(
                    self.focal_length,
                    xi as f64 * scale / resolution,
                    yi as f64 * scale / resolution,
                );

                let ray = Ray::between(self.focus, self.focus + sample);
                pixels.push(scene.render_pixel(&ray, &mut ctx));
            }
        }

        (pixels, ctx.take_trace())
    }
}

/// Partition `width` pixel columns into `count` contiguous strips; the
/// last strip absorbs any remainder.
fn strip_bounds(width: usize, count: usize) -> Vec<Range<usize>> {
    let strip_width = width / count;
    (0..count)
        .map(|i| {
            let begin = i * strip_width;
            let end = if i + 1 == count { width } else { begin + strip_width };
            begin..end
        })
        .collect()
}
