//! Static export of the wheel: SVG, an HTML page around it, or JSON geometry

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use crate::chart::{ArrowPath, Emphasis, PieLayout, Point, Scene, Wedge, CANVAS_SIZE};
use crate::error::Result;
use crate::markup::MarkupRenderer;
use crate::phases::{self, Phase};
use crate::ui::PAGE_TITLE;

const ARROW_STROKE_WIDTH: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Html,
    Svg,
    Json,
}

/// Render the wheel in `format`, optionally with phase `selected` active
pub fn export(
    format: ExportFormat,
    selected: Option<u32>,
    markup: &dyn MarkupRenderer,
) -> Result<String> {
    let phases = phases::all();
    let active = selected.map(phases::index_of).transpose()?;
    let layout = PieLayout::standard(phases.len())?;
    let scene = Scene::build(phases, &layout, |i| {
        if active == Some(i) {
            Emphasis::Selected
        } else {
            Emphasis::None
        }
    });

    let out = match format {
        ExportFormat::Svg => render_svg(&scene),
        ExportFormat::Html => {
            let phase = active.map(|i| &phases[i]);
            render_html(&scene, phase, markup)
        }
        ExportFormat::Json => render_json(&scene, phases)?,
    };
    info!(?format, ?selected, bytes = out.len(), "export rendered");
    Ok(out)
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn fmt_point(p: Point) -> String {
    format!("{:.3},{:.3}", p.x, p.y)
}

/// Ring sector path for one wedge
fn wedge_path(wedge: &Wedge, inner: f64, outer: f64) -> String {
    let a0 = wedge.slice.drawn_start();
    let a1 = wedge.slice.drawn_end();
    let large = u8::from(a1 - a0 > std::f64::consts::PI);
    format!(
        "M{} A{outer},{outer} 0 {large} 1 {} L{} A{inner},{inner} 0 {large} 0 {} Z",
        fmt_point(Point::polar(a0, outer)),
        fmt_point(Point::polar(a1, outer)),
        fmt_point(Point::polar(a1, inner)),
        fmt_point(Point::polar(a0, inner)),
    )
}

/// Zero-width arc traced out to the end and back, closed on the start point,
/// so `marker-end` lands where the arc began
fn arrow_path(arrow: &ArrowPath) -> String {
    let large = u8::from(arrow.is_large());
    let sweep = arrow.is_clockwise();
    format!(
        "M{start} A{r},{r} 0 {large} {} {} A{r},{r} 0 {large} {} {start} Z",
        u8::from(sweep),
        fmt_point(arrow.end()),
        u8::from(!sweep),
        start = fmt_point(arrow.start()),
        r = arrow.radius,
    )
}

pub fn render_svg(scene: &Scene) -> String {
    let size = CANVAS_SIZE;
    let half = size / 2.0;
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    svg.push_str(
        r#"<defs><marker id="arrowhead" markerWidth="15" markerHeight="15" refX="0" refY="3" orient="270"><path d="M0,0 L0,6 L9,3 z" fill="grey"/></marker></defs>"#,
    );
    svg.push('\n');

    let _ = writeln!(svg, r#"<g transform="translate({half}, {half})">"#);
    for wedge in &scene.wedges {
        let stroke = match wedge.emphasis {
            Emphasis::None => r#"stroke="none""#.to_string(),
            e => format!(r#"stroke="black" stroke-width="{}""#, e.stroke_width()),
        };
        let _ = writeln!(
            svg,
            r#"<path class="donut-segment" data-phase="{}" d="{}" fill="{}" {}/>"#,
            wedge.phase_id,
            wedge_path(wedge, scene.inner_radius, scene.outer_radius),
            wedge.color.to_hex(),
            stroke,
        );
    }
    for label in &scene.labels {
        let _ = write!(
            svg,
            r#"<text transform="translate({})" style="text-anchor: middle; fill: white; font-family: 'Inter', sans-serif">"#,
            fmt_point(label.anchor)
        );
        for line in &label.lines {
            let _ = write!(
                svg,
                r#"<tspan x="0" y="{}">{}</tspan>"#,
                line.dy,
                escape_html(&line.text)
            );
        }
        svg.push_str("</text>\n");
    }
    svg.push_str("</g>\n");

    let _ = writeln!(
        svg,
        r#"<path d="{}" transform="translate({half}, {half})" fill="none" stroke="black" stroke-width="{ARROW_STROKE_WIDTH}" marker-end="url(#arrowhead)"/>"#,
        arrow_path(&scene.arrow)
    );
    svg.push_str("</svg>\n");
    svg
}

fn render_detail_html(phase: &Phase, markup: &dyn MarkupRenderer) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"detail-panel\">\n");
    let _ = writeln!(html, "<h2>{}</h2>", escape_html(phase.title));
    for (name, value) in [
        ("Description", phase.description),
        ("Storage", phase.storage),
        ("Policy", phase.policy),
    ] {
        let _ = writeln!(html, "<p><strong>{name}:</strong> {}</p>", escape_html(value));
    }
    let _ = writeln!(
        html,
        "<div class=\"full-text\">\n{}</div>",
        markup.render_html(phase.full_text)
    );
    html.push_str("</section>\n");
    html
}

pub fn render_html(scene: &Scene, active: Option<&Phase>, markup: &dyn MarkupRenderer) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{PAGE_TITLE}</title>");
    html.push_str("</head>\n<body style=\"font-family: 'Inter', sans-serif\">\n");
    let _ = writeln!(html, "<h1>{PAGE_TITLE}</h1>");
    html.push_str(&render_svg(scene));
    if let Some(phase) = active {
        html.push_str(&render_detail_html(phase, markup));
    }
    html.push_str("</body>\n</html>\n");
    html
}

#[derive(Serialize)]
struct JsonExport<'a> {
    phases: &'a [Phase],
    scene: &'a Scene,
}

pub fn render_json(scene: &Scene, phases: &[Phase]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonExport { phases, scene })?)
}
