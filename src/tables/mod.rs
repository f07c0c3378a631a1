use std::fs;
use std::path::Path;

use crate::error::UcdError;

pub mod codes;

pub use codes::{parse_code, parse_codes, parse_range, CodeRange};

/// строка таблицы UCD: поля, разделённые ';', без комментария и окружающих пробелов
#[derive(Debug, Clone)]
pub struct Row<'a>
{
    /// диапазон из первого поля, если его разбор был запрошен и удался
    pub range: Option<CodeRange>,
    /// все поля строки, включая первое в исходном виде
    pub fields: Vec<&'a str>,
}

impl<'a> Row<'a>
{
    /// поле по индексу, пустая строка - если поля нет
    pub fn field(&self, index: usize) -> &'a str
    {
        self.fields.get(index).copied().unwrap_or("")
    }

    /// непустое поле
    pub fn required(&self, index: usize) -> Result<&'a str, UcdError>
    {
        match self.field(index) {
            "" => Err(UcdError::malformed(format!(
                "отсутствует поле {}: {:?}",
                index, self.fields
            ))),
            value => Ok(value),
        }
    }

    /// диапазон кодпоинтов строки
    pub fn range(&self) -> Result<CodeRange, UcdError>
    {
        self.range.ok_or_else(|| {
            UcdError::malformed(format!("не диапазон кодпоинтов: {:?}", self.field(0)))
        })
    }
}

/// обработчик строк таблицы
pub trait RowHandler
{
    fn handle(&mut self, row: &Row) -> Result<(), UcdError>;
}

impl<F> RowHandler for F
where
    F: FnMut(&Row) -> Result<(), UcdError>,
{
    fn handle(&mut self, row: &Row) -> Result<(), UcdError>
    {
        self(row)
    }
}

/// прочитать таблицу UCD и передать обработчику каждую строку с данными в порядке следования.
/// пустые строки и комментарии пропускаются, ranged - разбирать ли первое поле как диапазон.
/// возвращает количество обработанных строк
pub fn read_table<H>(path: &Path, ranged: bool, handler: &mut H) -> Result<usize, UcdError>
where
    H: RowHandler + ?Sized,
{
    let data = fs::read_to_string(path).map_err(|e| UcdError::from(e).in_file(path))?;
    let mut count = 0;

    for (index, line) in data.lines().enumerate() {
        let line = match line.split_once('#') {
            Some((data, _)) => data,
            None => line,
        };

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').map(str::trim).collect();

        let range = match ranged {
            true => parse_range(fields[0]),
            false => None,
        };

        handler
            .handle(&Row { range, fields })
            .map_err(|e| e.in_file(path).at_line(index + 1))?;

        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests
{
    use std::io::Write;

    use super::*;
    use crate::error::UcdErrorKind;

    fn table(content: &str) -> tempfile::NamedTempFile
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        file
    }

    #[test]
    fn test_read_table()
    {
        let file = table(
            "# Blocks-15.1.0.txt\n\
             \n\
             0000..007F; Basic Latin\n   \
             # отступ перед комментарием\n\
             0080..00FF ;  Latin-1 Supplement   # комментарий\n\
             00E0;x\r\n",
        );

        let mut rows = vec![];
        let count = read_table(file.path(), true, &mut |row: &Row| -> Result<(), UcdError> {
            rows.push((row.range, row.fields.iter().map(|f| f.to_string()).collect::<Vec<_>>()));
            Ok(())
        })
        .unwrap();

        assert_eq!(count, 3);
        assert_eq!(rows[0].0, Some(CodeRange::new(0, 0x7F)));
        assert_eq!(rows[0].1, vec!["0000..007F", "Basic Latin"]);
        assert_eq!(rows[1].0, Some(CodeRange::new(0x80, 0xFF)));
        assert_eq!(rows[1].1, vec!["0080..00FF", "Latin-1 Supplement"]);
        assert_eq!(rows[2].0, Some(CodeRange::single(0xE0)));
        assert_eq!(rows[2].1, vec!["00E0", "x"]);
    }

    #[test]
    fn test_read_table_unranged()
    {
        let file = table("ccc; 230; A ; Above\n");

        let mut seen = None;
        read_table(file.path(), false, &mut |row: &Row| -> Result<(), UcdError> {
            assert!(row.range.is_none());
            seen = Some((row.field(0).to_string(), row.field(3).to_string()));
            assert_eq!(row.field(10), "");
            Ok(())
        })
        .unwrap();

        assert_eq!(seen, Some(("ccc".to_string(), "Above".to_string())));
    }

    #[test]
    fn test_missing_table()
    {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Blocks.txt");

        let err = read_table(&path, true, &mut |_: &Row| -> Result<(), UcdError> { Ok(()) }).unwrap_err();

        assert!(matches!(err.kind, UcdErrorKind::Io(_)));
        assert_eq!(err.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_handler_error_location()
    {
        let file = table("# заголовок\n0041; A\n0042; B\n");

        let err = read_table(file.path(), true, &mut |row: &Row| -> Result<(), UcdError> {
            match row.field(1) {
                "B" => Err(UcdError::malformed("B")),
                _ => Ok(()),
            }
        })
        .unwrap_err();

        assert_eq!(err.line, Some(3));
        assert_eq!(err.path.as_deref(), Some(file.path()));
    }
}
