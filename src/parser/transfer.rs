use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::IResult;

use crate::parser::Statement;

/// Parse `EXPORT TO file_path` pattern.
pub(crate) fn export(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("EXPORT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("TO")(input)?;
    let (file_path, _) = multispace1(input)?;
    Ok(("", Statement::Export(unquote_path(file_path))))
}

/// Parse `IMPORT FROM file_path` pattern.
pub(crate) fn import(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("IMPORT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("FROM")(input)?;
    let (file_path, _) = multispace1(input)?;
    Ok(("", Statement::Import(unquote_path(file_path))))
}

fn unquote_path(raw: &str) -> String {
    let quotation_marks: &[_] = &['\'', '"'];
    raw.trim().trim_matches(quotation_marks).to_string()
}
