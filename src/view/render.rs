use crate::view::row::CourseRow;

pub const TITLE: &str = "Course Catalog";
pub const SWITCH_LABEL: &str = "Show Only Selected Courses";

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Plain-text screen: title, one line per row, then the switch state.
pub fn render(rows: &[CourseRow], show_only_selected: bool) -> String {
    let width = rows
        .iter()
        .map(|row| row.course_number.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');

    for row in rows {
        let marker = if row.is_selected { CHECKED } else { UNCHECKED };
        let line = format!(
            "{marker} {:<width$}  {}",
            row.course_number.as_str(),
            row.course_description,
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let state = if show_only_selected { "on" } else { "off" };
    out.push_str(&format!("{SWITCH_LABEL}: {state}\n"));
    out
}
