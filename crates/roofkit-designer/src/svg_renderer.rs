//! SVG renderer
//!
//! Keeps one SVG fragment per facet so the adapter's incremental calls map
//! onto element replacement. [`SvgRenderer::to_svg`] assembles the document.

use crate::facet::{Facet, FacetId};
use crate::renderer::{RenderOptions, Renderer};
use roofkit_core::Point;
use std::fmt::Write;

const HIGHLIGHT_COLOR: &str = "#facc15";
const IN_PROGRESS_COLOR: &str = "#f8fafc";
const VERTEX_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    width: f64,
    height: f64,
    facets: Vec<(FacetId, String)>,
    in_progress: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Complete SVG document for the current frame.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        for (_, fragment) in &self.facets {
            svg.push_str(fragment);
        }
        svg.push_str(&self.in_progress);
        svg.push_str("</svg>\n");
        svg
    }
}

impl Renderer for SvgRenderer {
    fn begin_frame(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn draw_facet(&mut self, index: usize, facet: &Facet, options: &RenderOptions) {
        let fragment = facet_fragment(facet, options);
        if let Some(pos) = self.facets.iter().position(|(id, _)| *id == facet.id) {
            self.facets.remove(pos);
        }
        let index = index.min(self.facets.len());
        self.facets.insert(index, (facet.id, fragment));
    }

    fn remove_facet(&mut self, id: FacetId) {
        self.facets.retain(|(existing, _)| *existing != id);
    }

    fn draw_in_progress(&mut self, points: &[Point], options: &RenderOptions) {
        self.in_progress.clear();
        if points.is_empty() {
            return;
        }
        let _ = writeln!(
            self.in_progress,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2" stroke-dasharray="6 4"/>"#,
            points_attr(points),
            IN_PROGRESS_COLOR
        );
        if options.show_vertices {
            push_vertices(&mut self.in_progress, points, IN_PROGRESS_COLOR);
        }
    }

    fn end_frame(&mut self) {}
}

fn facet_fragment(facet: &Facet, options: &RenderOptions) -> String {
    let highlighted = options.highlighted == Some(facet.id);
    let stroke = if highlighted {
        HIGHLIGHT_COLOR
    } else {
        facet.color.as_str()
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<polygon id="facet-{}" points="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}"/>"#,
        facet.id,
        points_attr(&facet.points),
        escape_xml(&facet.color),
        options.fill_opacity,
        escape_xml(stroke),
        if highlighted { 3 } else { 2 }
    );
    if options.show_vertices {
        push_vertices(&mut out, &facet.points, stroke);
    }
    if options.show_labels {
        if let Some(c) = facet.centroid() {
            let _ = writeln!(
                out,
                r##"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12" fill="#ffffff">{}</text>"##,
                c.x,
                c.y,
                escape_xml(&facet.label)
            );
        }
    }
    out
}

fn push_vertices(out: &mut String, points: &[Point], color: &str) {
    for p in points {
        let _ = writeln!(
            out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            p.x,
            p.y,
            VERTEX_RADIUS,
            escape_xml(color)
        );
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
