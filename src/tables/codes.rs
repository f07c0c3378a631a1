use core::ops::RangeInclusive;

use regex::Regex;

use crate::error::UcdError;

lazy_static! {
    /// диапазон кодпоинтов вида XXXX..YYYY
    static ref RANGE: Regex = Regex::new(r"(?i)^([0-9a-f]+)\.\.([0-9a-f]+)$").unwrap();
}

/// диапазон кодпоинтов, включая оба конца
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange
{
    pub start: u32,
    pub end: u32,
}

impl CodeRange
{
    pub fn new(start: u32, end: u32) -> Self
    {
        Self { start, end }
    }

    pub fn single(code: u32) -> Self
    {
        Self {
            start: code,
            end: code,
        }
    }

    pub fn codes(&self) -> RangeInclusive<u32>
    {
        self.start ..= self.end
    }

    pub fn len(&self) -> usize
    {
        match self.end >= self.start {
            true => (self.end - self.start) as usize + 1,
            false => 0,
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}

/// один кодпоинт в шестнадцатеричной записи
pub fn parse_code(value: &str) -> Result<u32, UcdError>
{
    u32::from_str_radix(value.trim(), 16)
        .map_err(|_| UcdError::malformed(format!("не кодпоинт: {:?}", value)))
}

/// последовательность кодпоинтов, разделённых пробелами: "0061 0300".
/// пустая строка - None
pub fn parse_codes(value: &str) -> Result<Option<Vec<u32>>, UcdError>
{
    let codes = value
        .split_whitespace()
        .map(parse_code)
        .collect::<Result<Vec<u32>, UcdError>>()?;

    match codes.is_empty() {
        true => Ok(None),
        false => Ok(Some(codes)),
    }
}

/// первое поле строки таблицы: XXXX или XXXX..YYYY.
/// None, если поле не является кодпоинтом или диапазоном
pub fn parse_range(field: &str) -> Option<CodeRange>
{
    if let Some(captures) = RANGE.captures(field) {
        let start = u32::from_str_radix(&captures[1], 16).ok()?;
        let end = u32::from_str_radix(&captures[2], 16).ok()?;

        return Some(CodeRange::new(start, end));
    }

    u32::from_str_radix(field, 16).ok().map(CodeRange::single)
}
