use super::primitives::{ContourSpec, Marker, Polyline, Primitive, Scene, Segment};
use crate::core::models::bounds::BoundingBox;
use crate::core::models::point::Point2D;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Size of the output image.
///
/// The scene bounds are scaled uniformly to fit inside the canvas minus `margin` on every side
/// and centred along the axis with slack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgCanvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Blank border kept around the scene, in pixels. The title is drawn inside it.
    pub margin: f64,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            margin: 24.0,
        }
    }
}

/// Maps problem coordinates into the canvas, preserving aspect ratio and pointing y up.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    scale: f64,
    origin: Point2D,
    offset_x: f64,
    offset_y: f64,
    height: f64,
}

impl Viewport {
    fn fit(bounds: &BoundingBox, canvas: &SvgCanvas) -> Self {
        let avail_w = (canvas.width as f64 - 2.0 * canvas.margin).max(1.0);
        let avail_h = (canvas.height as f64 - 2.0 * canvas.margin).max(1.0);
        let (w, h) = (bounds.width(), bounds.height());

        let sx = if w > 0.0 { avail_w / w } else { f64::INFINITY };
        let sy = if h > 0.0 { avail_h / h } else { f64::INFINITY };
        let mut scale = sx.min(sy);
        if !scale.is_finite() {
            scale = 1.0;
        }

        Self {
            scale,
            origin: bounds.min(),
            offset_x: canvas.margin + (avail_w - w * scale) / 2.0,
            offset_y: canvas.margin + (avail_h - h * scale) / 2.0,
            height: canvas.height as f64,
        }
    }

    fn map(&self, p: &Point2D) -> (f64, f64) {
        let x = self.offset_x + (p.x - self.origin.x) * self.scale;
        let y = self.height - (self.offset_y + (p.y - self.origin.y) * self.scale);
        (x, y)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Draws a [`Scene`] as a standalone SVG document.
pub struct SvgWriter;

impl SvgWriter {
    /// Writes `scene` to `writer`, drawing primitives in scene order.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn write_scene(
        scene: &Scene,
        canvas: &SvgCanvas,
        writer: &mut impl Write,
    ) -> io::Result<()> {
        let vp = Viewport::fit(&scene.bounds, canvas);
        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = canvas.width,
            h = canvas.height
        )?;
        writeln!(writer, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

        for primitive in &scene.primitives {
            match primitive {
                Primitive::Polyline(p) => Self::write_polyline(p, &vp, writer)?,
                Primitive::Segment(s) => Self::write_segment(s, &vp, writer)?,
                Primitive::Marker(m) => Self::write_marker(m, &vp, writer)?,
                Primitive::Contour(c) => Self::write_contour(c, &vp, writer)?,
            }
        }

        if let Some(title) = &scene.title {
            writeln!(
                writer,
                r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="14" text-anchor="middle">{}</text>"#,
                canvas.width as f64 / 2.0,
                (canvas.margin * 0.7).max(14.0),
                escape(title)
            )?;
        }
        writeln!(writer, "</svg>")
    }

    pub fn write_scene_to_path<P: AsRef<Path>>(
        scene: &Scene,
        canvas: &SvgCanvas,
        path: P,
    ) -> io::Result<()> {
        debug!("Writing SVG to {:?}", path.as_ref());
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_scene(scene, canvas, &mut writer)?;
        writer.flush()
    }

    fn write_polyline(p: &Polyline, vp: &Viewport, w: &mut impl Write) -> io::Result<()> {
        let points: Vec<String> = p
            .points
            .iter()
            .map(|pt| {
                let (x, y) = vp.map(pt);
                format!("{:.3},{:.3}", x, y)
            })
            .collect();
        writeln!(
            w,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            points.join(" "),
            p.style.color,
            p.style.width
        )
    }

    fn write_segment(s: &Segment, vp: &Viewport, w: &mut impl Write) -> io::Result<()> {
        let (x1, y1) = vp.map(&s.start);
        let (x2, y2) = vp.map(&s.end);
        writeln!(
            w,
            r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, s.style.color, s.style.width
        )
    }

    fn write_marker(m: &Marker, vp: &Viewport, w: &mut impl Write) -> io::Result<()> {
        let (cx, cy) = vp.map(&m.at);
        writeln!(
            w,
            r#"<circle cx="{:.3}" cy="{:.3}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            cx, cy, m.radius, m.style.color, m.style.color, m.style.width
        )
    }

    fn write_contour(c: &ContourSpec, vp: &Viewport, w: &mut impl Write) -> io::Result<()> {
        for level in &c.levels {
            if level.segments.is_empty() {
                continue;
            }
            let mut d = String::new();
            for [a, b] in &level.segments {
                let (x1, y1) = vp.map(a);
                let (x2, y2) = vp.map(b);
                d.push_str(&format!("M{:.3},{:.3}L{:.3},{:.3}", x1, y1, x2, y2));
            }
            writeln!(
                w,
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                d, level.color, c.width
            )?;
            if let Some(anchor) = &level.label_anchor {
                let (x, y) = vp.map(anchor);
                writeln!(
                    w,
                    r#"<text x="{:.3}" y="{:.3}" font-family="sans-serif" font-size="{}" fill="{}" text-anchor="middle">{}</text>"#,
                    x,
                    y,
                    c.label_size,
                    level.color,
                    escape(&level.label)
                )?;
            }
        }
        Ok(())
    }
}
