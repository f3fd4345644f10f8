use nom::bytes::complete::tag_no_case;
use nom::character::complete::{multispace1, u32};
use nom::number::complete::double;
use nom::IResult;

use crate::parser::{quoted_string, Statement};

/// Parse `UPDATE PAYMENT id 'name' amount`. Notes have no update, only delete.
pub(crate) fn update(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("UPDATE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("PAYMENT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, id) = u32(input)?;
    let (input, _) = multispace1(input)?;
    let (input, name) = quoted_string(input)?;
    let (input, _) = multispace1(input)?;
    let (input, amount) = double(input)?;
    Ok((input, Statement::UpdatePayment(id, name.trim().to_string(), amount)))
}
