//! Fixed-width table rendering for person lists.
//!
//! Column widths are constants. Values longer than their column are cut
//! at the column width (by characters), shorter ones are padded, so every
//! line of a rendered table has the same width.

use crate::types::Person;

/// Printed instead of a table when there is nothing to show.
pub const EMPTY_LIST_MESSAGE: &str = "List is empty";

/// Widths of the index, surname, name, zodiac and birthday columns.
pub const COLUMN_WIDTHS: [usize; 5] = [4, 30, 30, 20, 20];

const HEADERS: [&str; 5] = ["No", "Surname", "Name", "Zodiac", "Birthday"];

/// Renders people as a bordered table, one line per person.
///
/// Rows are numbered from 1 in the order given; the numbers are assigned
/// here and have nothing to do with stored identities. An empty slice
/// renders [`EMPTY_LIST_MESSAGE`]. The result always ends with a newline.
///
/// # Examples
///
/// ```
/// use people_core::{Person, render_people};
///
/// let table = render_people(&[Person::new("Petrov", "Petr", "Leo", "1999-08-01")]);
/// let lines: Vec<&str> = table.lines().collect();
/// assert_eq!(lines.len(), 5);
/// assert!(lines[3].starts_with("|    1 | Petrov"));
/// ```
pub fn render_people(people: &[Person]) -> String {
    if people.is_empty() {
        return format!("{EMPTY_LIST_MESSAGE}\n");
    }

    let [idx_w, surname_w, name_w, zodiac_w, birthday_w] = COLUMN_WIDTHS;
    let line = border_line();
    let mut out = String::new();

    out.push_str(&line);
    out.push_str(&format!(
        "| {:^idx_w$} | {:^surname_w$} | {:^name_w$} | {:^zodiac_w$} | {:^birthday_w$} |\n",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4],
    ));
    out.push_str(&line);

    for (idx, person) in people.iter().enumerate() {
        out.push_str(&format!(
            "| {:>idx_w$} | {:<surname_w$.surname_w$} | {:<name_w$.name_w$} | {:<zodiac_w$.zodiac_w$} | {:>birthday_w$.birthday_w$} |\n",
            idx + 1,
            person.surname,
            person.name,
            person.zodiac,
            person.birthday,
        ));
    }

    out.push_str(&line);
    out
}

fn border_line() -> String {
    let segments: Vec<String> = COLUMN_WIDTHS.iter().map(|w| "-".repeat(*w)).collect();
    format!("+-{}-+\n", segments.join("-+-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Person> {
        vec![
            Person::new("Ivanov", "Ivan", "Aries", "2000-01-01"),
            Person::new("Ivanov", "Olga", "Pisces", "2001-03-05"),
        ]
    }

    #[test]
    fn test_empty_list_message() {
        assert_eq!(render_people(&[]), "List is empty\n");
    }

    #[test]
    fn test_border_line_layout() {
        let line = border_line();
        assert!(line.starts_with("+------+"));
        assert_eq!(line.trim_end().chars().count(), 120);
    }

    #[test]
    fn test_header_and_row_count() {
        let table = render_people(&sample());
        let lines: Vec<&str> = table.lines().collect();
        // border, header, border, 2 rows, border
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("Surname"));
        assert!(lines[1].contains("Birthday"));
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[5]);
    }

    #[test]
    fn test_indices_are_one_based_and_sequential() {
        let table = render_people(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[3].starts_with("|    1 | Ivanov "));
        assert!(lines[4].starts_with("|    2 | Ivanov "));
    }

    #[test]
    fn test_birthday_is_right_aligned() {
        let table = render_people(&sample());
        let row = table.lines().nth(3).unwrap();
        assert!(row.ends_with("           2000-01-01 |"));
    }

    #[test]
    fn test_long_values_are_truncated() {
        let long = "X".repeat(45);
        let people = vec![Person::new(long.as_str(), "Ivan", "Aries", "2000-01-01")];
        let table = render_people(&people);
        let row = table.lines().nth(3).unwrap();
        assert!(row.contains(&"X".repeat(30)));
        assert!(!row.contains(&"X".repeat(31)));
    }

    #[test]
    fn test_all_lines_have_equal_width() {
        let mut people = sample();
        people.push(Person::new("Кузнецов", "Ёжик", "Скорпион", "1990-11-11"));
        people.push(Person::new("A".repeat(50), "B".repeat(50), "C".repeat(50), "D".repeat(50)));
        let table = render_people(&people);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == 120), "widths: {widths:?}");
    }
}
