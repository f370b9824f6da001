use std::str::FromStr;

use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::error::ErrorKind;
use nom::sequence::pair;
use nom::{Finish, IResult, Parser};
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Line {
    Blank,
    Number(i64),
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum LineError {
    #[error("not a blank line or a base 10 integer: {line:?} ({kind:?} at {at:?})")]
    InvalidLine {
        line: String,
        // Where the parse gave up, and the combinator that failed there.
        at: String,
        kind: ErrorKind,
    },
}

// `FromStr` for the std integers already takes a leading `+` or `-`, the parser
// only has to find where the number ends.
pub fn signed_base10<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(recognize(pair(opt(one_of("+-")), digit1)), N::from_str).parse(input)
}

fn integer_line(input: &str) -> IResult<&str, i64> {
    all_consuming(signed_base10).parse(input)
}

pub fn classify(line: &str) -> Result<Line, LineError> {
    if line.is_empty() {
        return Ok(Line::Blank);
    }

    match integer_line(line).finish() {
        Ok((_, n)) => Ok(Line::Number(n)),
        Err(nom::error::Error { input, code }) => Err(LineError::InvalidLine {
            line: line.to_owned(),
            at: input.to_owned(),
            kind: code,
        }),
    }
}

/// Splits on any of `\n`, `\r` or `\r\n`. A terminator at the very end doesn't
/// produce a trailing empty line, same as `str::lines`.
pub fn universal_lines(input: &str) -> UniversalLines<'_> {
    UniversalLines { rest: input }
}

pub struct UniversalLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for UniversalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(i) => {
                let line = &self.rest[..i];
                let skip = if self.rest[i..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[i + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), Ok(Line::Blank));
        assert_eq!(classify("1000"), Ok(Line::Number(1000)));
        assert_eq!(classify("-5"), Ok(Line::Number(-5)));
        assert_eq!(classify("+5"), Ok(Line::Number(5)));

        for bad in ["abc", "12abc", " 12", "12 ", "-", "1.5", "99999999999999999999"] {
            assert!(
                matches!(classify(bad), Err(LineError::InvalidLine { ref line, .. }) if line == bad),
                "{:?} should be invalid",
                bad
            );
        }
    }

    #[test]
    fn test_invalid_line_reports_failure_point() {
        let invalid = |line: &str| match classify(line) {
            Err(LineError::InvalidLine { at, kind, .. }) => (at, kind),
            other => panic!("{:?} should be invalid, got {:?}", line, other),
        };

        assert_eq!(invalid("abc"), ("abc".to_owned(), ErrorKind::Digit));
        assert_eq!(invalid("12abc"), ("abc".to_owned(), ErrorKind::Eof));
        assert_eq!(
            invalid("99999999999999999999"),
            ("99999999999999999999".to_owned(), ErrorKind::MapRes)
        );
    }

    #[test]
    fn test_universal_lines() {
        let split = |s| universal_lines(s).collect::<Vec<_>>();

        assert_eq!(split(""), Vec::<&str>::new());
        assert_eq!(split("3\n4"), vec!["3", "4"]);
        assert_eq!(split("3\n4\n"), vec!["3", "4"]);
        assert_eq!(split("1\r\n2\r3\n\n4"), vec!["1", "2", "3", "", "4"]);
        assert_eq!(split("1\r\n\r\n2"), vec!["1", "", "2"]);
        assert_eq!(split("\n\n\n"), vec!["", "", ""]);
    }
}
