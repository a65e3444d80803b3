//! The fixed-width parts of an employee identifier.
//!
//! Each function here derives one segment of `CCFFLLYYYYSSSS` from raw
//! input: the employer code, a name code, or the join year.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Character used to right-pad name codes shorter than two characters.
pub const NAME_CODE_PAD: char = 'X';

/// Width of the employer and name codes.
pub const CODE_WIDTH: usize = 2;

/// Derives the two-letter employer code.
///
/// Non-ASCII-alphabetic characters are stripped from `employer_name`; if at
/// least two letters remain, the first two are uppercased and returned.
/// Otherwise `default_code` is returned uppercased, even when a name was
/// given.
///
/// # Examples
///
/// ```
/// use hrms_engine::identifier::employer_code;
///
/// assert_eq!(employer_code(Some("acme corp"), "OI"), "AC");
/// assert_eq!(employer_code(Some("3M"), "OI"), "OI");
/// assert_eq!(employer_code(None, "oi"), "OI");
/// ```
pub fn employer_code(employer_name: Option<&str>, default_code: &str) -> String {
    if let Some(name) = employer_name {
        let letters: String = name
            .chars()
            .filter(char::is_ascii_alphabetic)
            .take(CODE_WIDTH)
            .collect();

        if letters.len() == CODE_WIDTH {
            return letters.to_ascii_uppercase();
        }
    }

    default_code.to_ascii_uppercase()
}

/// Derives a two-character name code.
///
/// Takes the first two characters of the trimmed name by position and
/// uppercases them; shorter names are right-padded with `'X'`.
///
/// # Examples
///
/// ```
/// use hrms_engine::identifier::name_code;
///
/// assert_eq!(name_code("  john "), "JO");
/// assert_eq!(name_code("A"), "AX");
/// assert_eq!(name_code(""), "XX");
/// ```
pub fn name_code(name: &str) -> String {
    let mut code: String = name
        .trim()
        .chars()
        .take(CODE_WIDTH)
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .collect();

    while code.chars().count() < CODE_WIDTH {
        code.push(NAME_CODE_PAD);
    }
    code
}

/// Parses a free-form join date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `DD-MM-YYYY`, RFC 3339 timestamps and
/// `YYYY-MM-DD HH:MM:SS` (with a space or `T`). Dates whose year does not fit
/// in four digits are rejected.
pub fn parse_join_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let date = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })?;

    (1000..=9999).contains(&date.year()).then_some(date)
}

/// Returns the four-digit join year, falling back to the year of `today`
/// when the date is absent or unparseable.
pub fn join_year(join_date: Option<&str>, today: NaiveDate) -> i32 {
    join_date
        .and_then(parse_join_date)
        .map(|date| date.year())
        .unwrap_or_else(|| today.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_employer_code_from_company_name() {
        assert_eq!(employer_code(Some("Odoo India"), "XY"), "OD");
    }

    #[test]
    fn test_employer_code_strips_non_letters_first() {
        assert_eq!(employer_code(Some("  1-2 b.c. Ltd"), "OI"), "BC");
    }

    #[test]
    fn test_employer_code_single_letter_falls_back() {
        assert_eq!(employer_code(Some("X 123"), "OI"), "OI");
    }

    #[test]
    fn test_employer_code_empty_name_falls_back() {
        assert_eq!(employer_code(Some(""), "OI"), "OI");
        assert_eq!(employer_code(Some("   "), "OI"), "OI");
    }

    #[test]
    fn test_employer_code_ignores_non_ascii_letters() {
        assert_eq!(employer_code(Some("Ünïcode"), "OI"), "NC");
    }

    #[test]
    fn test_name_code_uses_raw_position() {
        assert_eq!(name_code("o'Brien"), "O'");
        assert_eq!(name_code("de la Cruz"), "DE");
    }

    #[test]
    fn test_name_code_pads_short_names() {
        assert_eq!(name_code("A"), "AX");
        assert_eq!(name_code("  b  "), "BX");
    }

    #[test]
    fn test_name_code_uppercases_non_ascii() {
        assert_eq!(name_code("émile"), "ÉM");
    }

    #[test]
    fn test_join_year_from_iso_date() {
        assert_eq!(join_year(Some("2024-01-15"), today()), 2024);
    }

    #[test]
    fn test_join_year_from_other_formats() {
        assert_eq!(join_year(Some("2021/07/04"), today()), 2021);
        assert_eq!(join_year(Some("04-07-2019"), today()), 2019);
        assert_eq!(join_year(Some("2022-03-01T09:30:00Z"), today()), 2022);
        assert_eq!(join_year(Some("2023-05-06 08:00:00"), today()), 2023);
    }

    #[test]
    fn test_join_year_falls_back_on_garbage() {
        assert_eq!(join_year(Some("not a date"), today()), 2026);
        assert_eq!(join_year(Some("2024-13-45"), today()), 2026);
        assert_eq!(join_year(Some(""), today()), 2026);
    }

    #[test]
    fn test_join_year_falls_back_when_absent() {
        assert_eq!(join_year(None, today()), 2026);
    }
}
