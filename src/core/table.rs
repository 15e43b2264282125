use crate::domain::model::TrainRecord;
use std::fmt::Write;

pub const EMPTY_MESSAGE: &str = "Train list is empty.";

const WIDTHS: [usize; 5] = [4, 30, 13, 18, 14];
const HEADERS: [&str; 5] = [
    "No",
    "Departure point",
    "Train number",
    "Departure time",
    "Destination",
];

/// Renders trains as a bordered table, numbering rows from 1. An empty
/// slice yields [`EMPTY_MESSAGE`] instead. Every line ends with `\n`.
pub fn render_table(trains: &[TrainRecord]) -> String {
    let mut out = String::new();

    if trains.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    let border = border_line();
    let [w_idx, w_from, w_num, w_time, w_to] = WIDTHS;

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", border);
    let _ = writeln!(
        out,
        "| {:^w_idx$} | {:^w_from$} | {:^w_num$} | {:^w_time$} | {:^w_to$} |",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4],
    );
    let _ = writeln!(out, "{}", border);

    for (idx, train) in trains.iter().enumerate() {
        let _ = writeln!(
            out,
            "| {:>w_idx$} | {:<w_from$} | {:<w_num$} | {:>w_time$} | {:^w_to$} |",
            idx + 1,
            train.departure_point,
            train.number_train,
            train.time_departure,
            train.destination,
        );
    }
    let _ = writeln!(out, "{}", border);

    out
}

fn border_line() -> String {
    let cells: Vec<String> = WIDTHS.iter().map(|w| "-".repeat(*w)).collect();
    format!("+-{}-+", cells.join("-+-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_message() {
        assert_eq!(render_table(&[]), "Train list is empty.\n");
    }

    #[test]
    fn test_border_matches_column_widths() {
        let border = border_line();
        assert_eq!(border.len(), 4 + 30 + 13 + 18 + 14 + 3 * 4 + 4);
        assert!(border.starts_with("+------+"));
    }

    #[test]
    fn test_row_alignment() {
        let table = render_table(&[TrainRecord::new("Moscow", "101", "08:00", "Kazan")]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[4]);
        let expected = format!(
            "| {:>4} | {:<30} | {:<13} | {:>18} | {:^14} |",
            1, "Moscow", "101", "08:00", "Kazan"
        );
        assert_eq!(lines[3], expected);
        assert!(lines[3].contains("|    1 | Moscow "));
        assert!(lines[3].contains("|              08:00 |"));
        assert!(lines[3].ends_with("|     Kazan      |"));
    }

    #[test]
    fn test_rows_keep_given_order() {
        let table = render_table(&[
            TrainRecord::new("Omsk", "202", "07:00", "Tomsk"),
            TrainRecord::new("Moscow", "101", "08:00", "Kazan"),
        ]);
        let omsk = table.find("Omsk").unwrap();
        let moscow = table.find("Moscow").unwrap();
        assert!(omsk < moscow);
    }

    #[test]
    fn test_cyrillic_cells_pad_by_characters() {
        let table = render_table(&[TrainRecord::new("Москва", "101", "08:00", "Казань")]);
        let row = table.lines().nth(3).unwrap();
        let border = table.lines().next().unwrap();
        assert_eq!(row.chars().count(), border.chars().count());
    }
}
