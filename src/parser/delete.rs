use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{multispace1, u32};
use nom::IResult;

use crate::parser::Statement;

/// Parse `DELETE PAYMENT id` and `DELETE NOTE id`
pub(crate) fn delete(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("DELETE")(input)?;
    let (input, _) = multispace1(input)?;
    alt((delete_payment, delete_note))(input)
}

fn delete_payment(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("PAYMENT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, id) = u32(input)?;
    Ok((input, Statement::DeletePayment(id)))
}

fn delete_note(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("NOTE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, id) = u32(input)?;
    Ok((input, Statement::DeleteNote(id)))
}
