//! SVG markup of a chart scene.
//!
//! Tiles carry `data-name`, `data-category` and `data-value` so the output
//! can be checked by tooling without reading pixels.

use std::fmt::Write;

use crate::config::ChartConfig;

use super::ChartScene;

/// Escape text for use in XML content and attribute values.
pub fn escape(text: &str) -> String {
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

/// Render `scene` as an `svg#chart` element.
pub fn scene_to_svg(scene: &ChartScene, config: &ChartConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_svg(&mut out, scene, config);
    out
}

fn write_svg(out: &mut String, scene: &ChartScene, config: &ChartConfig) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg id="chart" xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        config.width, config.height
    )?;
    writeln!(
        out,
        r#"<g transform="translate({}, {})">"#,
        config.margins.left, config.margins.top
    )?;

    for tile in &scene.tiles {
        let (tx, ty) = tile.translate();
        writeln!(out, r#"<g transform="translate({}, {})">"#, tx, ty)?;
        writeln!(
            out,
            r#"<rect class="tile" width="{}" height="{}" data-name="{}" data-category="{}" data-value="{}" fill="{}"/>"#,
            tile.width(),
            tile.height(),
            escape(&tile.name),
            escape(&tile.category),
            escape(tile.value_text()),
            tile.fill.to_hex()
        )?;
        out.push_str("<text>");
        for line in &tile.label {
            write!(
                out,
                r#"<tspan x="{}" y="{}" fill="white" font-size="8px">{}</tspan>"#,
                line.x,
                line.y,
                escape(&line.text)
            )?;
        }
        out.push_str("</text>\n</g>\n");
    }

    let legend = &config.legend;
    writeln!(
        out,
        r#"<g id="legend" transform="translate({}, {})">"#,
        legend.origin.0, legend.origin.1
    )?;
    for entry in &scene.legend {
        writeln!(out, r#"<g transform="translate({}, {})">"#, entry.x, entry.y)?;
        writeln!(
            out,
            r#"<rect width="{size}" height="{size}" class="legend-item" fill="{}"/>"#,
            entry.color.to_hex(),
            size = legend.box_size
        )?;
        writeln!(
            out,
            r#"<text class="legend-text" x="{}" y="{}">{}</text>"#,
            legend.box_size + legend.padding,
            legend.text_height,
            escape(&entry.category)
        )?;
        out.push_str("</g>\n");
    }
    out.push_str("</g>\n</g>\n</svg>\n");
    Ok(())
}
