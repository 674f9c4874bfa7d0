use std::fmt::{self, Write};

use crate::api::{LabelScene, RowScene, SceneModel, TextAnchor};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

const FONT_SIZE_PX: f64 = 15.0;
const OUTLINE_COLOR: &str = "grey";
const MARKER_COLOR: &str = "black";
const BOTTOM_MARGIN_PX: f64 = 30.0;

/// Writes each scene as a standalone SVG document.
///
/// Each bar gets its own `linearGradient` (`grad_<row>`), mirroring how the
/// dashboards paint achieved-vs-target fills.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &SceneModel) -> ChartResult<()> {
        scene.validate()?;
        let mut document = String::new();
        write_scene(&mut document, scene)
            .map_err(|e| ChartError::Serialization(format!("failed to write svg: {e}")))?;
        self.document = document;
        Ok(())
    }
}

fn scene_height(scene: &SceneModel) -> f64 {
    scene
        .rows
        .iter()
        .map(|row| row.geometry.y + row.geometry.height)
        .fold(0.0, f64::max)
        + BOTTOM_MARGIN_PX
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn write_scene(out: &mut String, scene: &SceneModel) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" preserveAspectRatio="none">"#,
        scene.width,
        scene_height(scene)
    )?;

    writeln!(out, "<defs>")?;
    for (index, row) in scene.rows.iter().enumerate() {
        writeln!(out, r#"<linearGradient id="grad_{index}">"#)?;
        for stop in &row.gradient.stops {
            writeln!(
                out,
                r#"<stop offset="{}%" stop-color="{}"/>"#,
                stop.offset_percent,
                escape(&stop.color)
            )?;
        }
        writeln!(out, "</linearGradient>")?;
    }
    writeln!(out, "</defs>")?;

    for heading in scene.headings.values() {
        writeln!(
            out,
            r#"<text class="heading" x="{}" y="{}" font-size="{FONT_SIZE_PX}" font-weight="600">{}</text>"#,
            heading.x,
            heading.y,
            escape(&heading.text)
        )?;
    }

    for (index, row) in scene.rows.iter().enumerate() {
        write_row(out, index, row)?;
    }
    writeln!(out, "</svg>")
}

fn write_row(out: &mut String, index: usize, row: &RowScene) -> fmt::Result {
    let bar = row.geometry;
    let stroke = if row.outlined {
        format!(r#" stroke="{OUTLINE_COLOR}""#)
    } else {
        String::new()
    };
    writeln!(
        out,
        r#"<rect class="bar" x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" fill="url(#grad_{index})"{stroke}/>"#,
        bar.x, bar.y, bar.width, bar.height, bar.corner_radius_x, bar.corner_radius_y
    )?;

    if let Some(line) = row.marker_line {
        writeln!(
            out,
            r#"<line class="pointer-line" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{MARKER_COLOR}"/>"#,
            line.x1, line.y1, line.x2, line.y2
        )?;
    }

    write_label(out, "category", &row.category_label)?;
    write_label(out, "achieved", &row.achieved_label)?;
    if let Some(target) = &row.target_label {
        write_label(out, "target", target)?;
    }
    Ok(())
}

fn write_label(out: &mut String, class: &str, label: &LabelScene) -> fmt::Result {
    let anchor = match label.anchor {
        TextAnchor::Start => "start",
        TextAnchor::End => "end",
    };
    writeln!(
        out,
        r#"<text class="{class}" x="{}" y="{}" text-anchor="{anchor}" fill="{}" font-size="{FONT_SIZE_PX}" font-weight="600">{}</text>"#,
        label.x,
        label.y,
        escape(&label.color),
        escape(&label.text)
    )
}
