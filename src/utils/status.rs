use crate::render::MapArtifact;
use crate::utils::style::terminal_bar;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

pub fn summary_table(artifact: &MapArtifact) -> Table {
    let view = &artifact.view;
    let overlay = &artifact.overlay;
    let popup = &artifact.popup;

    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("Setting")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    let rows = [
        (
            "Center",
            format!("{:.4}, {:.4}", view.center.lat, view.center.lng),
        ),
        ("Zoom", view.zoom.to_string()),
        ("Basemap", view.base.name.clone()),
        ("Overlay", format!("{} ({})", overlay.name, overlay.layer)),
        ("Overlay time", overlay.time.clone()),
        (
            "Region",
            format!(
                "{:.4}, {:.4} ± {}°",
                popup.reference.lat, popup.reference.lng, popup.tolerance
            ),
        ),
        ("NDVI", terminal_bar(10)),
    ];

    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }

    table
}

pub fn print_map_summary(artifact: &MapArtifact) {
    println!("\nMap summary:\n{}", summary_table(artifact));
    println!("  WMS template: {}", artifact.overlay.url_template());
    println!();
}
