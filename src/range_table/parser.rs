//! The text format of range databases.
//!
//! ```text
//! # comment
//! 978
//!  0-5,600-649,7-7
//!  0 agency="English language"
//!   00-19,200-699
//! ```
//!
//! Every line holds comma separated ranges (`N` or `N-M`, both bounds with the same number of
//! digits, which is also the prefix length) optionally followed by `key="value"` properties.
//! The lines indented under a line decompose what follows the prefixes of that line: they form
//! the table keyed by the parent key and the line's range text joined with `-`. Consecutive
//! lines at the same indentation continue the same table.

use crate::range_table::{RangeDb, RangeDbBuilder, RangeSpec, TableError, ROOT_KEY};
use nom::bytes::complete::{tag, take_until, take_while1};
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{consumed, eof, opt};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, preceded, separated_pair, terminated};
use nom::IResult;

type ParseResult<'a, T> = IResult<&'a str, T>;

#[derive(Debug, PartialEq, Eq)]
struct Line<'a> {
    indent: usize,
    ranges_text: &'a str,
    ranges: Vec<(&'a str, &'a str)>,
    properties: Vec<(&'a str, &'a str)>,
}

pub fn parse_range_db(text: &str) -> Result<RangeDb, TableError> {
    let mut lines = vec![];
    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim_start_matches(' ');
        if trimmed.trim().is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (_, (ranges_text, ranges, properties)) =
            line(trimmed).map_err(|_| TableError::Syntax { line: idx + 1 })?;
        lines.push(Line {
            indent: raw.len() - trimmed.len(),
            ranges_text,
            ranges,
            properties,
        });
    }

    // Resolve the parent of every line with a stack of the enclosing lines.
    let mut parents: Vec<Option<usize>> = Vec::with_capacity(lines.len());
    let mut has_children = vec![false; lines.len()];
    let mut stack: Vec<usize> = vec![];
    for (idx, current) in lines.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if lines[top].indent >= current.indent {
                stack.pop();
            } else {
                break;
            }
        }
        let parent = stack.last().copied();
        if let Some(parent) = parent {
            has_children[parent] = true;
        }
        parents.push(parent);
        stack.push(idx);
    }

    let mut keys: Vec<String> = Vec::with_capacity(lines.len());
    let mut builder = RangeDbBuilder::new();
    for (idx, current) in lines.iter().enumerate() {
        let table = match parents[idx] {
            Some(parent) => keys[parent].clone(),
            None => ROOT_KEY.to_string(),
        };
        let key = if table == ROOT_KEY {
            current.ranges_text.to_string()
        } else {
            format!("{table}-{}", current.ranges_text)
        };

        for (lower, upper) in &current.ranges {
            let mut spec = RangeSpec::new(*lower, *upper, lower.len());
            if has_children[idx] {
                spec = spec.child(key.as_str());
            }
            for (name, value) in &current.properties {
                spec = spec.property(*name, *value);
            }
            builder.add_range(&table, spec);
        }
        keys.push(key);
    }
    builder.build()
}

fn line(input: &str) -> ParseResult<(&str, Vec<(&str, &str)>, Vec<(&str, &str)>)> {
    let (input, (ranges_text, ranges)) = consumed(separated_list1(tag(","), range))(input)?;
    let (input, properties) = many0(preceded(space1, property))(input)?;
    let (input, _) = terminated(space0, eof)(input)?;
    Ok((input, (ranges_text, ranges, properties)))
}

fn range(input: &str) -> ParseResult<(&str, &str)> {
    let (input, lower) = digit1(input)?;
    let (input, upper) = opt(preceded(tag("-"), digit1))(input)?;
    Ok((input, (lower, upper.unwrap_or(lower))))
}

fn property(input: &str) -> ParseResult<(&str, &str)> {
    separated_pair(
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        tag("="),
        delimited(tag("\""), take_until("\""), tag("\"")),
    )(input)
}
