//! SVG rendering of the map view.
//!
//! Geometry comes straight from the view's [`MapLayout`]; this module only
//! writes markup. Zones link to the page filtered by their column.
//!
//! [`MapLayout`]: stockmap_inventory::MapLayout

use std::fmt::{self, Write};

use stockmap_inventory::{InventoryView, ZoneRect};

const BACKGROUND: &str = "#f8fafc";
const SELECTED_STROKE: &str = "#0f172a";

pub fn render_map(view: &InventoryView) -> Result<String, fmt::Error> {
    let layout = &view.layout;
    let mut svg = String::new();

    write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Inter, system-ui, sans-serif">
  <rect width="100%" height="100%" fill="{bg}" />
"##,
        w = layout.svg_width,
        h = layout.svg_height,
        bg = BACKGROUND,
    )?;

    for zone in &layout.zones {
        write_zone(&mut svg, zone, view.selected_col == Some(zone.col))?;
    }

    for marker in &layout.items {
        write!(
            svg,
            "  <circle class=\"item\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"#ffffff\" stroke-width=\"2\"><title>{} ({})</title></circle>\n",
            marker.cx,
            marker.cy,
            marker.r,
            marker.fill,
            escape_xml(&marker.label),
            marker.qty,
        )?;
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

fn write_zone(svg: &mut String, zone: &ZoneRect, selected: bool) -> fmt::Result {
    let stroke = if selected {
        format!(" stroke=\"{SELECTED_STROKE}\" stroke-width=\"3\"")
    } else {
        String::new()
    };
    let text = if zone.emoji.is_empty() {
        escape_xml(&zone.label_display)
    } else {
        format!("{} {}", escape_xml(&zone.emoji), escape_xml(&zone.label_display))
    };

    write!(
        svg,
        "  <a href=\"?col={col}\">\n    <g class=\"zone\" data-col=\"{col}\">\n      <rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" rx=\"10\" ry=\"10\" fill=\"{fill}\"{stroke} />\n      <text x=\"{tx}\" y=\"{ty}\" font-size=\"{fs}\" font-weight=\"600\" fill=\"#1e293b\">{text}</text>\n      <title>{title}</title>\n    </g>\n  </a>\n",
        col = zone.col,
        x = zone.x,
        y = zone.y,
        w = zone.w,
        h = zone.h,
        fill = escape_xml(&zone.fill),
        tx = zone.x.saturating_add(12),
        ty = zone.y.saturating_add(zone.fs + 8),
        fs = zone.fs,
        title = escape_xml(&zone.label),
    )
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockmap_inventory::{build_view, InventoryDocument, ViewParams};

    fn document() -> InventoryDocument {
        serde_json::from_str(
            r##"{
                "map": {"width": 4, "height": 3},
                "zones": [
                    {"x": 0, "y": 0, "w": 1, "h": 3, "label": "Nuts & Bolts", "fill": "#fde68a", "emoji": "🔩"},
                    {"x": 2, "y": 0, "w": 2, "h": 3, "label": "Tools"}
                ],
                "items": [
                    {"sku": "A", "name": "Wing <nut>", "x": 0, "y": 1, "qty": 4},
                    {"sku": "B", "name": "Saw", "x": 3, "y": 2, "qty": 50}
                ]
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape_xml(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn renders_canvas_zones_and_markers() {
        let view = build_view(&document(), &ViewParams::default());
        let svg = render_map(&view).unwrap();

        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(&format!("width=\"{}\"", view.layout.svg_width)));
        assert_eq!(svg.matches("class=\"zone\"").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("data-col=\"2\""));
        assert!(svg.contains("fill=\"#22c55e\""));
        assert!(svg.contains("Wing &lt;nut&gt; (4)"));
        assert!(svg.contains("<title>Nuts &amp; Bolts</title>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn selected_column_is_outlined() {
        let params = ViewParams::from_raw(None, None, Some("2"), None, None);
        let view = build_view(&document(), &params);
        let svg = render_map(&view).unwrap();

        assert_eq!(svg.matches(SELECTED_STROKE).count(), 1);
        // No item sits in column 2.
        assert_eq!(svg.matches("<circle").count(), 0);
    }
}
