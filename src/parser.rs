//! Parser for the arithmetic text emitted by the equation generator.

use crate::error::{EquationError, Result};
use crate::expr::{Expr, Rational};
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit1, multispace0, satisfy};
use nom::combinator::{all_consuming, map, map_res};
use nom::error::{VerboseError, convert_error};
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded};
use num_bigint::BigInt;
use num_traits::Num;

pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(EquationError::Parse(
            format!("`{input}`:\n{}", convert_error(input, e)),
        )),
        Err(nom::Err::Incomplete(_)) => {
            Err(EquationError::Parse(format!("`{input}`: unexpected end of input")))
        }
    }
}

/// Split `lhs = rhs` and parse both sides.
pub fn parse_equation(input: &str) -> Result<(Expr, Expr)> {
    let mut sides = input.split('=');
    let (Some(lhs), Some(rhs), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(EquationError::Parse(format!(
            "`{input}`: equation must contain exactly one '='"
        )));
    };
    Ok((parse_expr(lhs.trim())?, parse_expr(rhs.trim())?))
}

fn parse_add_sub(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            _ => Expr::Sub(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_mul_div(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), parse_unary),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(acc.boxed(), rhs.boxed()),
            _ => Expr::Div(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_unary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_unary)(input) {
        Ok((rest, Expr::Neg(expr.boxed())))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    alt((parse_parens, parse_number, parse_unknown))(input)
}

fn parse_parens(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_number(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    map(parse_int, |n| Expr::Constant(Rational::from_integer(n)))(input)
}

// Only single lowercase letters are unknowns; `xy` leaves trailing input.
fn parse_unknown(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    map(ws(satisfy(|c| c.is_ascii_lowercase())), |c| {
        Expr::Variable(c.to_string())
    })(input)
}

fn parse_int(input: &str) -> IResult<&str, BigInt, VerboseError<&str>> {
    map_res(ws(digit1), |s: &str| BigInt::from_str_radix(s, 10))(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
