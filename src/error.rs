use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// ошибка построения реестра
#[derive(Debug)]
pub struct UcdError
{
    /// причина ошибки
    pub kind: UcdErrorKind,
    /// файл таблицы, при чтении которого произошла ошибка
    pub path: Option<PathBuf>,
    /// номер строки в файле (с единицы)
    pub line: Option<usize>,
}

#[derive(Debug)]
pub enum UcdErrorKind
{
    /// таблица не найдена или не читается
    Io(io::Error),
    /// строка таблицы не соответствует формату UCD
    MalformedTable(String),
    /// за строкой "<..., First>" не последовала строка "<..., Last>"
    NoRangeEnd { start: u32 },
    /// десятичное или цифровое значение не совпадает с числовым
    NumericMismatch { code: u32 },
}

impl UcdError
{
    pub fn new(kind: UcdErrorKind) -> Self
    {
        Self {
            kind,
            path: None,
            line: None,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self
    {
        Self::new(UcdErrorKind::MalformedTable(message.into()))
    }

    /// дописать файл, если он ещё не указан
    pub fn in_file(mut self, path: &Path) -> Self
    {
        if self.path.is_none() {
            self.path = Some(path.to_path_buf());
        }

        self
    }

    /// дописать номер строки, если он ещё не указан
    pub fn at_line(mut self, line: usize) -> Self
    {
        if self.line.is_none() {
            self.line = Some(line);
        }

        self
    }
}

impl fmt::Display for UcdError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match &self.kind {
            UcdErrorKind::Io(err) => write!(f, "ошибка чтения таблицы: {}", err)?,
            UcdErrorKind::MalformedTable(message) => {
                write!(f, "некорректная строка таблицы: {}", message)?
            }
            UcdErrorKind::NoRangeEnd { start } => write!(
                f,
                "не найден конец диапазона, начатого с U+{:04X}",
                start
            )?,
            UcdErrorKind::NumericMismatch { code } => write!(
                f,
                "U+{:04X}: десятичное или цифровое значение не совпадает с числовым",
                code
            )?,
        }

        match (&self.path, self.line) {
            (Some(path), Some(line)) => write!(f, " ({}:{})", path.display(), line),
            (Some(path), None) => write!(f, " ({})", path.display()),
            (None, Some(line)) => write!(f, " (строка {})", line),
            (None, None) => Ok(()),
        }
    }
}

impl std::error::Error for UcdError
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        match &self.kind {
            UcdErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for UcdError
{
    fn from(err: io::Error) -> Self
    {
        Self::new(UcdErrorKind::Io(err))
    }
}

impl From<UcdErrorKind> for UcdError
{
    fn from(kind: UcdErrorKind) -> Self
    {
        Self::new(kind)
    }
}
