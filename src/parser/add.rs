use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::number::complete::double;
use nom::IResult;

use crate::parser::{date_arg, quoted_string, Statement};

/// Parse `ADD PAYMENT date 'name' amount` and `ADD NOTE date 'text'`
pub(crate) fn add(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("ADD")(input)?;
    let (input, _) = multispace1(input)?;
    alt((add_payment, add_note))(input)
}

fn add_payment(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("PAYMENT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, date) = date_arg(input)?;
    let (input, _) = multispace1(input)?;
    let (input, name) = quoted_string(input)?;
    let (input, _) = multispace1(input)?;
    let (input, amount) = double(input)?;
    Ok((input, Statement::AddPayment(date, name.trim().to_string(), amount)))
}

fn add_note(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("NOTE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, date) = date_arg(input)?;
    let (input, _) = multispace1(input)?;
    let (input, text) = quoted_string(input)?;
    Ok((input, Statement::AddNote(date, text.trim().to_string())))
}
