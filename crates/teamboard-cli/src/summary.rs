//! Terminal output for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use teamboard_model::{AppData, Designer, LearningModule, Lesson, Project, Record, Skill, Test};
use teamboard_state::format_trail;

use crate::commands::RouteOutcome;

pub fn print_summary(data: Option<&AppData>) {
    let Some(data) = data else {
        println!("No data stored yet. Run `teamboard init` or `teamboard import`.");
        return;
    };
    println!("Version: {}", data.version);
    println!("Last updated: {}", data.last_updated.to_rfc3339());
    println!("{}", summary_table(data));
}

/// One row per collection plus a total.
pub fn summary_table(data: &AppData) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Collection"), header_cell("Records")]);
    apply_table_style(&mut table);

    let rows = [
        (collection::<Designer>(), data.designers.len()),
        (collection::<Skill>(), data.skills.len()),
        (collection::<LearningModule>(), data.learning_modules.len()),
        (collection::<Project>(), data.projects.len()),
        (collection::<Test>(), data.tests.len()),
        (collection::<Lesson>(), data.lessons.len()),
    ];
    for (name, count) in rows {
        table.add_row(vec![Cell::new(name), count_cell(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(data.record_count()).add_attribute(Attribute::Bold),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn print_route(outcome: &RouteOutcome) {
    println!("{}", route_text(outcome));
}

/// Screen name followed by the breadcrumb trail.
pub fn route_text(outcome: &RouteOutcome) -> String {
    format!(
        "View: {}\nTrail: {}",
        outcome.view.name(),
        format_trail(&outcome.trail)
    )
}

fn collection<R: Record>() -> &'static str {
    R::COLLECTION
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count)
    }
}
