//! Helpers for the saved-diagram list: search, type labels, dates, previews,
//! and editor links.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use url::form_urlencoded;

use crate::model::Diagram;

/// First-line keywords and their labels, checked in order.
pub const DIAGRAM_TYPES: [(&str, &str); 8] = [
    ("graph", "Flowchart"),
    ("sequencediagram", "Sequence"),
    ("classdiagram", "Class"),
    ("statediagram", "State"),
    ("erdiagram", "ER"),
    ("journey", "Journey"),
    ("gantt", "Gantt"),
    ("pie", "Pie"),
];

/// Label when no keyword matches.
pub const UNKNOWN_DIAGRAM_TYPE: &str = "Diagram";

/// Lines shown in a card preview.
pub const PREVIEW_LINES: usize = 3;

/// Path of the editor view.
pub const EDITOR_PATH: &str = "/";

/// Path of the management view.
pub const MANAGE_PATH: &str = "/manage-diagrams";

/// Query parameter naming the diagram to open.
pub const DIAGRAM_QUERY_PARAM: &str = "diagram";

/// Display label guessed from the first non-blank line. Display only.
#[must_use]
pub fn diagram_type_label(content: &str) -> &'static str {
    let first_line = content.trim().lines().next().unwrap_or_default().to_lowercase();
    DIAGRAM_TYPES
        .iter()
        .find(|(keyword, _)| first_line.contains(keyword))
        .map_or(UNKNOWN_DIAGRAM_TYPE, |(_, label)| label)
}

fn day_suffix(day: u8) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Everything after the day: `Jan '25, 09:05`.
const DATE_TAIL: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] '[year repr:last_two], [hour]:[minute]");

/// Card timestamp such as `1st Jan '25, 09:05`, in the value's own offset.
/// Callers convert to the viewer's local offset first.
#[must_use]
pub fn format_date(at: OffsetDateTime) -> String {
    let day = at.day();
    match at.format(DATE_TAIL) {
        Ok(tail) => format!("{day}{} {tail}", day_suffix(day)),
        Err(err) => {
            log::warn!("catalog: date format failed: {err}");
            at.date().to_string()
        }
    }
}

/// Card preview: the first [`PREVIEW_LINES`] lines, and whether more follow.
#[must_use]
pub fn preview_lines(content: &str) -> (String, bool) {
    let lines: Vec<&str> = content.split('\n').collect();
    let truncated = lines.len() > PREVIEW_LINES;
    (lines.iter().take(PREVIEW_LINES).copied().collect::<Vec<_>>().join("\n"), truncated)
}

/// Diagrams whose name contains `term`, ignoring case. Order is preserved.
#[must_use]
pub fn filter_by_name<'a>(diagrams: &'a [Diagram], term: &str) -> Vec<&'a Diagram> {
    let needle = term.to_lowercase();
    diagrams.iter().filter(|d| d.name.to_lowercase().contains(&needle)).collect()
}

/// Editor link that opens `name`, e.g. `/?diagram=My+Flow`.
#[must_use]
pub fn editor_href(name: &str) -> String {
    let value: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("{EDITOR_PATH}?{DIAGRAM_QUERY_PARAM}={value}")
}
