//! Report rendering for PC catalogs
//!
//! [`render`] produces the fixed-width text report:
//!
//! ```text
//! ---------------------------------------------------------------------------------------------------
//!                                            PCPROG REPORT
//! ---------------------------------------------------------------------------------------------------
//!   1             Dell XPS   2020            Dell [8GB RAM, SSD]
//! ---------------------------------------------------------------------------------------------------
//! ```
//!
//! Every column except the last is right-justified to a fixed width; the
//! components column is left-justified and unbounded. Adjacent cells are
//! separated by exactly one space. Rendering never fails and never looks at
//! anything but its input, so the same slice always renders the same text.

use tabled::{builder::Builder, settings::Style};

use crate::core::set::UniqueCollection;
use crate::entities::pc::{Pc, MANUFACTURER_MAX_LEN, MODEL_MAX_LEN};

/// Width of the horizontal rules
pub const SEPARATOR_WIDTH: usize = 99;

/// Banner text centered between the top two rules
pub const TITLE: &str = "PCPROG REPORT";

const INDEX_WIDTH: usize = 3;
const MODEL_WIDTH: usize = MODEL_MAX_LEN;
const YEAR_WIDTH: usize = 6;
const MANUFACTURER_WIDTH: usize = MANUFACTURER_MAX_LEN;

/// Render the fixed-width report for `records`, numbering rows from 1
///
/// An empty slice still yields the banner and closing rule; callers that want
/// to suppress empty reports must check before calling.
pub fn render(records: &[Pc]) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut report = String::new();

    report.push_str(&separator);
    report.push('\n');
    report.push_str(format!("{:^width$}", TITLE, width = SEPARATOR_WIDTH).trim_end());
    report.push('\n');
    report.push_str(&separator);
    report.push('\n');

    for (i, pc) in records.iter().enumerate() {
        report.push_str(&render_row(i + 1, pc));
        report.push('\n');
    }

    report.push_str(&separator);
    report.push('\n');
    report
}

/// Render one data row (without the trailing newline)
pub fn render_row(index: usize, pc: &Pc) -> String {
    format!(
        "{:>iw$} {:>mw$} {:>yw$} {:>fw$} {}",
        index,
        pc.model(),
        pc.year(),
        pc.manufacturer(),
        format_components(pc.components()),
        iw = INDEX_WIDTH,
        mw = MODEL_WIDTH,
        yw = YEAR_WIDTH,
        fw = MANUFACTURER_WIDTH,
    )
}

/// Bracketed, comma-joined listing in snapshot order, e.g. `[A, B]`
pub fn format_components(components: &UniqueCollection<String>) -> String {
    format!("[{}]", components.snapshot().join(", "))
}

/// Render the same rows as a markdown table
pub fn render_markdown(records: &[Pc]) -> String {
    let mut table = Builder::default();
    table.push_record(["#", "Model", "Year", "Manufacturer", "Components"]);
    for (i, pc) in records.iter().enumerate() {
        table.push_record([
            (i + 1).to_string(),
            pc.model().to_string(),
            pc.year().to_string(),
            pc.manufacturer().to_string(),
            format_components(pc.components()),
        ]);
    }

    let mut output = format!("# {}\n\n", TITLE);
    output.push_str(&table.build().with(Style::markdown()).to_string());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::factory::PcFactory;

    fn pc(model: &str, year: i32, manufacturer: &str, comps: &[&str]) -> Pc {
        let comps: UniqueCollection<String> = comps.iter().map(|s| s.to_string()).collect();
        PcFactory::new()
            .create_record(model, year, manufacturer, comps)
            .unwrap()
    }

    #[test]
    fn test_single_row_layout() {
        let report = render(&[pc("M1", 1999, "ManuCorp", &["A", "B"])]);
        let lines: Vec<&str> = report.lines().collect();
        let rule = "-".repeat(99);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], rule);
        assert_eq!(lines[1].trim(), "PCPROG REPORT");
        assert_eq!(lines[2], rule);
        assert_eq!(
            lines[3],
            format!("  1 {:>20}   1999 {:>15} [A, B]", "M1", "ManuCorp")
        );
        assert_eq!(lines[4], rule);
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn test_title_is_centered() {
        let report = render(&[]);
        let title = report.lines().nth(1).unwrap();
        let left = title.len() - title.trim_start().len();
        assert_eq!(left, (SEPARATOR_WIDTH - TITLE.len()) / 2);
    }

    #[test]
    fn test_cell_boundaries() {
        let row = render_row(12, &pc("Model", 2001, "Acme", &[]));
        // index(3) sp model(20) sp year(6) sp manufacturer(15) sp
        assert_eq!(&row[0..3], " 12");
        assert_eq!(&row[3..4], " ");
        assert_eq!(&row[4..24], format!("{:>20}", "Model"));
        assert_eq!(&row[24..25], " ");
        assert_eq!(&row[25..31], "  2001");
        assert_eq!(&row[31..32], " ");
        assert_eq!(&row[32..47], format!("{:>15}", "Acme"));
        assert_eq!(&row[47..], " []");
    }

    #[test]
    fn test_full_width_values() {
        let row = render_row(1, &pc(&"m".repeat(20), 2024, &"f".repeat(15), &["X"]));
        assert_eq!(
            row,
            format!("  1 {} {:>6} {} [X]", "m".repeat(20), 2024, "f".repeat(15))
        );
    }

    #[test]
    fn test_rows_are_numbered_in_order() {
        let records = vec![
            pc("A", 2000, "Acme", &[]),
            pc("B", 2001, "Acme", &[]),
            pc("C", 2002, "Acme", &[]),
        ];
        let report = render(&records);
        let indexes: Vec<&str> = report.lines().skip(3).take(3).map(|l| &l[..3]).collect();
        assert_eq!(indexes, vec!["  1", "  2", "  3"]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let records = vec![
            pc("Dell XPS", 2020, "Dell", &["8GB RAM", "SSD"]),
            pc("ThinkPad", 2018, "Lenovo", &["TrackPoint"]),
        ];
        assert_eq!(render(&records), render(&records));
    }

    #[test]
    fn test_empty_input_renders_frame_only() {
        let report = render(&[]);
        assert_eq!(report.lines().count(), 4);
    }

    #[test]
    fn test_markdown_table() {
        let md = render_markdown(&[pc("M1", 1999, "ManuCorp", &["A", "B"])]);
        assert!(md.starts_with("# PCPROG REPORT"));
        assert!(md.contains("| Manufacturer |"));
        assert!(md.contains("ManuCorp"));
        assert!(md.contains("[A, B]"));
    }
}
