mod add;
mod delete;
mod show;
mod transfer;
mod update;

use chrono::NaiveDate;
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{char, i32, multispace0, u32};
use nom::combinator::{all_consuming, map};
use nom::error::ErrorKind;
use nom::sequence::delimited;
use nom::IResult;

#[derive(Debug, PartialEq)]
pub(crate) enum Statement {
    /// ADD PAYMENT date 'name' amount
    AddPayment(DateArg, String, f64),
    /// ADD NOTE date 'text'
    AddNote(DateArg, String),
    /// UPDATE PAYMENT id 'name' amount
    UpdatePayment(u32, String, f64),
    /// DELETE PAYMENT id
    DeletePayment(u32),
    /// DELETE NOTE id
    DeleteNote(u32),
    /// SHOW, SHOW MONTH yyyy-mm, SHOW DAY date
    Show,
    ShowMonth(i32, u32),
    ShowDay(DateArg),
    /// Month navigation
    Next,
    Prev,
    Today,
    /// EXPORT TO file_path
    Export(String),
    /// IMPORT FROM file_path
    Import(String),
    /// Drop all payments and notes
    Clear,
}

/// A date argument: an explicit `YYYY-MM-DD` or the literal `today`,
/// resolved against the clock when the statement runs.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum DateArg {
    Today,
    Day(NaiveDate),
}

pub(crate) fn parse(input: &str) -> IResult<&str, Statement> {
    all_consuming(delimited(multispace0, statement, multispace0))(input)
}

fn statement(input: &str) -> IResult<&str, Statement> {
    alt((
        add::add,
        update::update,
        delete::delete,
        show::show,
        transfer::export,
        transfer::import,
        next,
        prev,
        today,
        clear,
    ))(input)
}

/// 'NEXT'
fn next(input: &str) -> IResult<&str, Statement> {
    map(tag_no_case("NEXT"), |_| Statement::Next)(input)
}

/// 'PREV'
fn prev(input: &str) -> IResult<&str, Statement> {
    map(tag_no_case("PREV"), |_| Statement::Prev)(input)
}

/// 'TODAY'
fn today(input: &str) -> IResult<&str, Statement> {
    map(tag_no_case("TODAY"), |_| Statement::Today)(input)
}

/// 'CLEAR'
fn clear(input: &str) -> IResult<&str, Statement> {
    map(tag_no_case("CLEAR"), |_| Statement::Clear)(input)
}

/// 2024-05-01
pub(crate) fn yyyy_mm_dd_date(input: &str) -> IResult<&str, NaiveDate> {
    let (input, (year, month)) = yyyy_mm(input)?;
    let (input, _) = tag("-")(input)?;
    let (input, day) = u32(input)?;

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => Ok((input, date)),
        None => Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Fail))),
    }
}

/// 2024-05. Years are bounded to four digits, matching the canonical
/// zero-padded date key and keeping month arithmetic well inside chrono's
/// supported date range.
pub(crate) fn yyyy_mm(input: &str) -> IResult<&str, (i32, u32)> {
    let (input, year) = i32(input)?;
    let (input, _) = tag("-")(input)?;
    let (input, month) = u32(input)?;

    if (1..=9999).contains(&year) && (1..=12).contains(&month) {
        Ok((input, (year, month)))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Fail)))
    }
}

/// An explicit date or the literal 'today'
pub(crate) fn date_arg(input: &str) -> IResult<&str, DateArg> {
    alt((
        map(tag_no_case("today"), |_| DateArg::Today),
        map(yyyy_mm_dd_date, DateArg::Day),
    ))(input)
}

/// Single-quoted free text, e.g. 'Rent, July'. A doubled quote inside the
/// text is a literal single quote: 'Mom''s rent'.
pub(crate) fn quoted_string(input: &str) -> IResult<&str, String> {
    let (input, _) = char('\'')(input)?;

    let mut value = String::new();
    let mut rest = input;
    loop {
        match rest.find('\'') {
            Some(i) => {
                value.push_str(&rest[..i]);
                rest = &rest[i + 1..];
                if let Some(after_escape) = rest.strip_prefix('\'') {
                    value.push('\'');
                    rest = after_escape;
                } else {
                    return Ok((rest, value));
                }
            }
            // Unterminated quote
            None => return Err(nom::Err::Error(nom::error::Error::new(rest, ErrorKind::Fail))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::parser::{parse, DateArg, Statement};

    fn day(year: i32, month: u32, day: u32) -> DateArg {
        DateArg::Day(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn test_add() {
        let result = parse("ADD PAYMENT 2024-05-01 'Rent, May' 1200.50");
        assert_eq!(result, Ok(("", Statement::AddPayment(day(2024, 5, 1), "Rent, May".to_string(), 1200.5))));

        let result = parse("add payment today 'Coffee' 4");
        assert_eq!(result, Ok(("", Statement::AddPayment(DateArg::Today, "Coffee".to_string(), 4.0))));

        let result = parse("ADD NOTE 2024-05-02 'call landlord'");
        assert_eq!(result, Ok(("", Statement::AddNote(day(2024, 5, 2), "call landlord".to_string()))));
    }

    #[test]
    fn test_update_and_delete() {
        let result = parse("UPDATE PAYMENT 3 'Rent' 1300");
        assert_eq!(result, Ok(("", Statement::UpdatePayment(3, "Rent".to_string(), 1300.0))));

        let result = parse("DELETE PAYMENT 7");
        assert_eq!(result, Ok(("", Statement::DeletePayment(7))));

        let result = parse("delete note 2");
        assert_eq!(result, Ok(("", Statement::DeleteNote(2))));
    }

    #[test]
    fn test_show() {
        assert_eq!(parse("SHOW"), Ok(("", Statement::Show)));
        assert_eq!(parse("SHOW MONTH 2023-02"), Ok(("", Statement::ShowMonth(2023, 2))));
        assert_eq!(parse("show day 2023-02-14"), Ok(("", Statement::ShowDay(day(2023, 2, 14)))));
    }

    #[test]
    fn test_navigation_and_clear() {
        assert_eq!(parse("NEXT"), Ok(("", Statement::Next)));
        assert_eq!(parse("prev"), Ok(("", Statement::Prev)));
        assert_eq!(parse("TODAY"), Ok(("", Statement::Today)));
        assert_eq!(parse("clear"), Ok(("", Statement::Clear)));
    }

    #[test]
    fn test_export_import() {
        let result = parse("EXPORT TO './finance/payment-planner.csv'");
        assert_eq!(result, Ok(("", Statement::Export("./finance/payment-planner.csv".to_string()))));

        let result = parse("IMPORT FROM backup.csv");
        assert_eq!(result, Ok(("", Statement::Import("backup.csv".to_string()))));
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert!(parse("ADD PAYMENT 2024-13-01 'x' 1").is_err());
        assert!(parse("SHOW MONTH 2024-00").is_err());
    }

    #[test]
    fn test_out_of_range_year_rejected() {
        // Years beyond four digits would walk off the supported date range
        assert!(parse("SHOW MONTH 999999-12").is_err());
        assert!(parse("SHOW MONTH 0-01").is_err());
        assert!(parse("SHOW MONTH -44-01").is_err());
        assert!(parse("ADD PAYMENT 999999-12-01 'x' 1").is_err());
        assert_eq!(parse("SHOW MONTH 9999-12"), Ok(("", Statement::ShowMonth(9999, 12))));
    }

    #[test]
    fn test_doubled_quote_escapes_literal_quote() {
        let result = parse("ADD PAYMENT 2024-05-01 'Mom''s rent' 10");
        assert_eq!(result, Ok(("", Statement::AddPayment(day(2024, 5, 1), "Mom's rent".to_string(), 10.0))));

        let result = parse("ADD NOTE 2024-05-02 '''quoted'' start'");
        assert_eq!(result, Ok(("", Statement::AddNote(day(2024, 5, 2), "'quoted' start".to_string()))));

        assert!(parse("ADD NOTE 2024-05-02 'unterminated").is_err());
    }
}
