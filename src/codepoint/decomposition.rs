use crate::error::UcdError;
use crate::tables::{parse_code, parse_codes};

/// декомпозиция из 5 колонки UnicodeData.txt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition
{
    /// кодпоинты декомпозиции, тег отброшен
    pub codes: Vec<u32>,
    /// тег декомпозиции совместимости, None - каноническая декомпозиция
    pub tag: Option<DecompositionTag>,
}

impl Decomposition
{
    pub fn is_compat(&self) -> bool
    {
        self.tag.is_some()
    }
}

impl TryFrom<&str> for Decomposition
{
    type Error = UcdError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let value = value.trim();

        // тег - первый токен, не являющийся кодпоинтом: "<compat> 0020 0308"
        let (tag, codes) = match value.starts_with('<') {
            true => match value.split_once(char::is_whitespace) {
                Some((tag, codes)) => (Some(DecompositionTag::try_from(tag)?), codes),
                None => (Some(DecompositionTag::try_from(value)?), ""),
            },
            false => (None, value),
        };

        let codes = parse_codes(codes)?.unwrap_or_default();

        if tag.is_some() && codes.is_empty() {
            return Err(UcdError::malformed(format!(
                "декомпозиция без кодпоинтов: {:?}",
                value
            )));
        }

        Ok(Self { codes, tag })
    }
}

/// тег декомпозиции совместимости
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font = 0,
    /// неразрывная версия пробела или дефиса
    NoBreak = 1,
    /// начальная форма представления (арабский)
    Initial = 2,
    /// средняя форма представления (арабский)
    Medial = 3,
    /// конечная форма представления (арабский)
    Final = 4,
    /// изолированная форма представления (арабский)
    Isolated = 5,
    /// окруженная форма
    Circle = 6,
    /// надстрочная форма
    Super = 7,
    /// подстрочная форма
    Sub = 8,
    /// вертикальная форма представления
    Vertical = 9,
    /// совместимый символ широкого формата (или зэнкаку)
    Wide = 10,
    /// совместимый символ узкого формата (или ханкаку)
    Narrow = 11,
    /// малая вариантная форма (совместимость CNS)
    Small = 12,
    /// вариант шрифта в квадрате CJK
    Square = 13,
    /// форма обыкновенной дроби
    Fraction = 14,
    /// неопределенный символ для обеспечения совместимости
    Compat = 15,
}

impl TryFrom<&str> for DecompositionTag
{
    type Error = UcdError;

    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "<font>" => Self::Font,
            "<noBreak>" => Self::NoBreak,
            "<initial>" => Self::Initial,
            "<medial>" => Self::Medial,
            "<final>" => Self::Final,
            "<isolated>" => Self::Isolated,
            "<circle>" => Self::Circle,
            "<super>" => Self::Super,
            "<sub>" => Self::Sub,
            "<vertical>" => Self::Vertical,
            "<wide>" => Self::Wide,
            "<narrow>" => Self::Narrow,
            "<small>" => Self::Small,
            "<square>" => Self::Square,
            "<fraction>" => Self::Fraction,
            "<compat>" => Self::Compat,
            _ => {
                return Err(UcdError::malformed(format!(
                    "неизвестный тег декомпозиции: {}",
                    abbr
                )))
            }
        })
    }
}

impl From<DecompositionTag> for u8
{
    #[inline]
    fn from(value: DecompositionTag) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for DecompositionTag
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let value = match self {
            DecompositionTag::Font => "<font>",
            DecompositionTag::NoBreak => "<noBreak>",
            DecompositionTag::Initial => "<initial>",
            DecompositionTag::Medial => "<medial>",
            DecompositionTag::Final => "<final>",
            DecompositionTag::Isolated => "<isolated>",
            DecompositionTag::Circle => "<circle>",
            DecompositionTag::Super => "<super>",
            DecompositionTag::Sub => "<sub>",
            DecompositionTag::Vertical => "<vertical>",
            DecompositionTag::Wide => "<wide>",
            DecompositionTag::Narrow => "<narrow>",
            DecompositionTag::Small => "<small>",
            DecompositionTag::Square => "<square>",
            DecompositionTag::Fraction => "<fraction>",
            DecompositionTag::Compat => "<compat>",
        };

        write!(f, "{}", value)
    }
}

/// простое отображение регистра: один кодпоинт или ничего
pub fn simple_case_mapping(value: &str) -> Result<Option<Vec<u32>>, UcdError>
{
    match value.trim().is_empty() {
        true => Ok(None),
        false => Ok(Some(vec![parse_code(value)?])),
    }
}
