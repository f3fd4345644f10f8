use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::combinator::opt;
use nom::sequence::preceded;
use nom::IResult;

use crate::parser::{date_arg, yyyy_mm, Statement};

/// Parse `SHOW`, `SHOW MONTH yyyy-mm` and `SHOW DAY date`
pub(crate) fn show(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("SHOW")(input)?;
    let (input, clause) = opt(preceded(multispace1, alt((show_month, show_day))))(input)?;
    Ok((input, clause.unwrap_or(Statement::Show)))
}

fn show_month(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("MONTH")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, (year, month)) = yyyy_mm(input)?;
    Ok((input, Statement::ShowMonth(year, month)))
}

fn show_day(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("DAY")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, date) = date_arg(input)?;
    Ok((input, Statement::ShowDay(date)))
}
