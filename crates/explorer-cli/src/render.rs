// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Terminal drawing of frames, the catalog, and the tour script.

use std::io::{self, Write};

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use explorer_core::{Catalog, Emphasis, Frame, Layer, Overlay};

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn table() -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    t
}

/// Human-readable frame.
pub fn write_frame(
    out: &mut impl Write,
    frame: &Frame<'_>,
    camera_target: Option<&str>,
) -> io::Result<()> {
    let layers = Layer::ALL
        .iter()
        .map(|&l| format!("{l}={}", on_off(frame.layers.get(l))))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "mode: {}  layers: {layers}", frame.view_mode)?;

    if frame.visible.is_empty() {
        writeln!(out, "(nothing visible)")?;
    } else {
        let mut t = table();
        t.set_header(vec!["", "id", "name", "kind", "position"]);
        for v in &frame.visible {
            let marker = match (v.emphasis, v.hovered) {
                (Emphasis::Selected, _) => "*",
                (Emphasis::Normal, true) => "~",
                (Emphasis::Normal, false) => "",
            };
            t.add_row(vec![
                Cell::new(marker),
                Cell::new(&v.node.id),
                Cell::new(&v.node.name),
                Cell::new(v.node.kind),
                Cell::new(format!(
                    "({:.2}, {:.2}, {:.2})",
                    v.position.x, v.position.y, v.position.z
                )),
            ]);
        }
        writeln!(out, "{t}")?;
    }

    if let Some(d) = &frame.detail {
        writeln!(out, "[{}] {}", d.badge, d.name)?;
        writeln!(out, "  {}", d.description)?;
        if let Some(tech) = d.technical_details {
            writeln!(out, "  Technical Specifications: {tech}")?;
        }
        if let Some(m) = d.metrics {
            let fields = [
                ("ticker", &m.token_ticker),
                ("market cap", &m.market_cap),
                ("tps", &m.tps),
                ("block time", &m.block_time),
            ];
            for (label, value) in fields {
                if let Some(value) = value {
                    writeln!(out, "  {label}: {value}")?;
                }
            }
        }
        if !d.bridges_to.is_empty() {
            writeln!(out, "  Connected bridges: {}", d.bridges_to.join(", "))?;
        }
    }

    if let Some(tour) = &frame.tour {
        writeln!(out, "STEP {} / {}: {}", tour.step_number, tour.total, tour.title)?;
        writeln!(out, "  {}", tour.content)?;
        let back = if tour.can_retreat { "[prev] " } else { "" };
        writeln!(out, "  {back}[{}] [end]", tour.advance_label().to_lowercase())?;
    }

    if let Some(target) = camera_target {
        writeln!(out, "camera: {target}")?;
    }

    if frame.overlay == Overlay::About {
        writeln!(
            out,
            "About: Polkadot Ecosystem Explorer. Interactive visualization of the \
             heterogeneous multi-chain framework. (`about close` to dismiss)"
        )?;
    }
    Ok(())
}

/// Frame as pretty JSON.
pub fn write_frame_json(out: &mut impl Write, frame: &Frame<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, frame)?;
    writeln!(out)
}

/// Catalog listing.
pub fn write_catalog(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    let mut t = table();
    t.set_header(vec!["id", "name", "kind", "category", "parent", "bridges"]);
    for node in catalog.nodes() {
        t.add_row(vec![
            Cell::new(&node.id),
            Cell::new(&node.name),
            Cell::new(node.kind),
            Cell::new(node.category.as_deref().unwrap_or("")),
            Cell::new(node.parent_id.as_deref().unwrap_or("")),
            Cell::new(node.bridges_to.join(", ")),
        ]);
    }
    writeln!(out, "{t}")
}

/// Tour script listing.
pub fn write_tour(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    let mut t = table();
    t.set_header(vec!["step", "title", "target", "focus"]);
    for (i, step) in catalog.tour_steps().iter().enumerate() {
        t.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&step.title),
            Cell::new(&step.target_id),
            Cell::new(step.layer_focus),
        ]);
    }
    writeln!(out, "{t}")
}
