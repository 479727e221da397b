/// parse a task document with structure like
/// " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4"
/// (sections with a title and key: list-of-values pairs) into a [`TaskDocument`].
/*
 Task files configure the demo runs, e.g.

 boundary
   x_bounds: 0.0, 1.0
   step: 0.05
   integrator: adams4

 Comment lines start with //, #, % or ;. Values are integers, floats,
 booleans or bare words; a key may carry a comma-separated list of them.
*/
use crate::numerical::ODE_errors::OdeError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, map_res, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

pub type SectionMap = HashMap<String, Vec<Value>>;
/// section title with its key-value pairs in document order
pub(crate) type ParsedSection = (String, Vec<(String, Vec<Value>)>);

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    /// Integers are accepted wherever a float is expected.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

/// Parses a title (word characters without spaces)
pub(crate) fn parse_title(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    let (input, result) = parser.parse(input)?;
    // trailing whitespace and line breaks belong to nobody
    Ok((input.trim(), result))
}

/// Parses a key (word characters without spaces)
pub(crate) fn parse_key(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    parser.parse(input)
}

pub(crate) fn parse_value(input: &str) -> IResult<&str, Value> {
    // a single value runs up to a comma, whitespace or semicolon
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';'));
    let mut value_parser = map_res(value_parser, |s: &str| -> Result<Value, String> {
        let s = s.trim();
        if let Ok(val) = s.parse::<i64>() {
            Ok(Value::Integer(val))
        } else if let Ok(val) = s.parse::<f64>() {
            Ok(Value::Float(val))
        } else if let Ok(val) = s.parse::<bool>() {
            Ok(Value::Boolean(val))
        } else {
            Ok(Value::String(s.to_string()))
        }
    });
    value_parser.parse(input)
}

pub(crate) fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let separator_coma = delimited(space0, tag(","), space0);
    let mut value_parser = separated_list0(separator_coma, parse_value);
    value_parser.parse(input)
}

/// Parses a key-value pair where value is a list
pub(crate) fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_key, colon_separator, parse_value_list);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim(), result))
}

/// Parses a section with a title and one or more key-value pairs
pub(crate) fn parse_section(input: &str) -> IResult<&str, ParsedSection> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let mut parser = many1(terminated(parse_key_value_pair, space0));
    let (input, pairs) = parser.parse(input)?;
    Ok((input, (title, pairs)))
}

/// Filters out comment lines (starting with //, #, %, or ;) and blank lines
pub(crate) fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the (comment free) document into sections
pub(crate) fn parse_document(input: &str) -> IResult<&str, Vec<ParsedSection>> {
    let mut parser = many1(delimited(space0, parse_section, multispace0));
    parser.parse(input)
}

/// Sections in document order into maps; a repeated title or a repeated key
/// within one section is an error.
fn collect_sections(parsed: Vec<ParsedSection>) -> Result<HashMap<String, SectionMap>, OdeError> {
    let mut sections = HashMap::new();
    for (title, pairs) in parsed {
        if sections.contains_key(&title) {
            return Err(OdeError::InvalidConfig(format!(
                "section '{}' appears more than once",
                title
            )));
        }
        let mut section = SectionMap::new();
        for (key, values) in pairs {
            if section.insert(key.clone(), values).is_some() {
                return Err(OdeError::InvalidConfig(format!(
                    "key '{}' appears more than once in section '{}'",
                    key, title
                )));
            }
        }
        sections.insert(title, section);
    }
    Ok(sections)
}

/// Parsed task document with typed access to its values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDocument {
    sections: HashMap<String, SectionMap>,
}

impl FromStr for TaskDocument {
    type Err = OdeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let filtered = filter_comments(input);
        if filtered.trim().is_empty() {
            return Ok(TaskDocument::default());
        }
        match parse_document(&filtered) {
            Ok((remaining, sections)) => {
                if !remaining.trim().is_empty() {
                    return Err(OdeError::InvalidConfig(format!(
                        "failed to parse entire document, remaining: '{}'",
                        remaining
                    )));
                }
                Ok(TaskDocument {
                    sections: collect_sections(sections)?,
                })
            }
            Err(e) => Err(OdeError::InvalidConfig(format!("parsing error: {:?}", e))),
        }
    }
}

impl TaskDocument {
    pub fn from_file(path: &Path) -> Result<Self, OdeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            OdeError::InvalidConfig(format!("cannot read task file {}: {}", path.display(), e))
        })?;
        content.parse()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn raw(&self, section: &str, key: &str) -> Option<&Vec<Value>> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    /// Fails on sections or keys outside `known`, which catches typos in
    /// task files.
    pub fn check_known(&self, known: &[(&str, &[&str])]) -> Result<(), OdeError> {
        for (title, section) in &self.sections {
            let keys = known
                .iter()
                .find(|(name, _)| name == title)
                .map(|(_, keys)| *keys)
                .ok_or_else(|| OdeError::InvalidConfig(format!("unknown section '{}'", title)))?;
            for key in section.keys() {
                if !keys.contains(&key.as_str()) {
                    return Err(OdeError::InvalidConfig(format!(
                        "unknown key '{}' in section '{}'",
                        key, title
                    )));
                }
            }
        }
        Ok(())
    }

    fn bad_value(section: &str, key: &str, expected: &str, values: &[Value]) -> OdeError {
        let shown: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        OdeError::InvalidConfig(format!(
            "{}.{}: expected {}, got '{}'",
            section,
            key,
            expected,
            shown.join(", ")
        ))
    }

    /// `n` numbers, `None` when the key is absent
    pub fn floats(&self, section: &str, key: &str, n: usize) -> Result<Option<Vec<f64>>, OdeError> {
        let Some(values) = self.raw(section, key) else {
            return Ok(None);
        };
        let numbers: Option<Vec<f64>> = values.iter().map(Value::as_float).collect();
        match numbers {
            Some(numbers) if numbers.len() == n => Ok(Some(numbers)),
            _ => Err(Self::bad_value(section, key, &format!("{} number(s)", n), values)),
        }
    }

    pub fn float(&self, section: &str, key: &str) -> Result<Option<f64>, OdeError> {
        Ok(self.floats(section, key, 1)?.map(|v| v[0]))
    }

    pub fn usize(&self, section: &str, key: &str) -> Result<Option<usize>, OdeError> {
        let Some(values) = self.raw(section, key) else {
            return Ok(None);
        };
        match values.as_slice() {
            [v] => v
                .as_integer()
                .and_then(|i| usize::try_from(i).ok())
                .map(Some)
                .ok_or_else(|| Self::bad_value(section, key, "a non-negative integer", values)),
            _ => Err(Self::bad_value(section, key, "a non-negative integer", values)),
        }
    }

    pub fn boolean(&self, section: &str, key: &str) -> Result<Option<bool>, OdeError> {
        let Some(values) = self.raw(section, key) else {
            return Ok(None);
        };
        match values.as_slice() {
            [v] => v
                .as_boolean()
                .map(Some)
                .ok_or_else(|| Self::bad_value(section, key, "true or false", values)),
            _ => Err(Self::bad_value(section, key, "true or false", values)),
        }
    }

    /// single bare word
    pub fn word(&self, section: &str, key: &str) -> Result<Option<String>, OdeError> {
        let Some(values) = self.raw(section, key) else {
            return Ok(None);
        };
        match values.as_slice() {
            [Value::String(s)] => Ok(Some(s.clone())),
            _ => Err(Self::bad_value(section, key, "a single word", values)),
        }
    }

    /// single word parsed with `FromStr`, e.g. a strum enum
    pub fn parsed<T: FromStr>(&self, section: &str, key: &str) -> Result<Option<T>, OdeError> {
        match self.word(section, key)? {
            None => Ok(None),
            Some(word) => word.parse::<T>().map(Some).map_err(|_| {
                OdeError::InvalidConfig(format!("{}.{}: unknown value '{}'", section, key, word))
            }),
        }
    }
}
