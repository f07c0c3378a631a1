use std::path::Path;

use log::debug;
use regex::Regex;

use crate::codepoint::CodePoint;
use crate::error::{UcdError, UcdErrorKind};
use crate::registry::Registry;
use crate::tables::{read_table, Row};

lazy_static! {
    /// начало диапазона: "<CJK Ideograph, First>"
    static ref RANGE_FIRST: Regex = Regex::new(r"<.+, First>").unwrap();
    /// конец диапазона: "<CJK Ideograph, Last>"
    static ref RANGE_LAST: Regex = Regex::new(r"<.+, Last>").unwrap();
}

/// разбор UnicodeData.txt и составление реестра.
///
/// диапазоны (CJK, хангыль, тангутский, Private Use, суррогаты) заданы парами строк
/// "<..., First>" / "<..., Last>" - запись строки Last копируется для каждого кодпоинта диапазона
pub fn read(path: &Path) -> Result<Registry, UcdError>
{
    let mut registry = Registry::new();

    // пригодится, когда встретим диапазоны
    let mut range_start: Option<u32> = None;

    let rows = read_table(path, false, &mut |row: &Row| -> Result<(), UcdError> {
        let codepoint = CodePoint::from_fields(&row.fields)?;

        if let Some(start) = range_start.take() {
            if !RANGE_LAST.is_match(&codepoint.name) {
                return Err(UcdErrorKind::NoRangeEnd { start }.into());
            }

            debug!(
                "U+{:04X} ..= U+{:04X}: {}",
                start, codepoint.code, codepoint.name
            );

            for code in start ..= codepoint.code {
                registry.insert(codepoint.copy_as(code));
            }

            return Ok(());
        }

        if RANGE_FIRST.is_match(&codepoint.name) {
            range_start = Some(codepoint.code);

            return Ok(());
        }

        registry.insert(codepoint);

        Ok(())
    })?;

    // файл закончился на строке First
    if let Some(start) = range_start {
        return Err(UcdError::from(UcdErrorKind::NoRangeEnd { start }).in_file(path));
    }

    debug!("{}: {} строк, {} кодпоинтов", path.display(), rows, registry.len());

    Ok(registry)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use super::*;

    fn unicode_data(content: &str) -> Result<Registry, UcdError>
    {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("UnicodeData.txt");
        fs::write(&path, content).unwrap();

        read(&path)
    }

    #[test]
    fn test_single_rows()
    {
        let registry = unicode_data(
            "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
             00E0;LATIN SMALL LETTER A WITH GRAVE;Ll;0;L;0061 0300;;;;N;LATIN SMALL LETTER A GRAVE;;00C0;;00C0\n",
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry[0x41].lowercase, Some(vec![0x61]));
        assert_eq!(registry[0xE0].decomposition, vec![0x61, 0x300]);
        assert!(!registry.contains(0x42));
    }

    #[test]
    fn test_range_expansion()
    {
        let registry = unicode_data(
            "3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;\n\
             340F;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;\n\
             3410;TEST AFTER RANGE;So;0;ON;;;;;N;;;;;\n",
        )
        .unwrap();

        // 0x340F - 0x3400 + 1 записей диапазона и одна после
        assert_eq!(registry.len(), 0x10 + 1);

        for code in 0x3400 ..= 0x340F {
            let codepoint = &registry[code];

            assert_eq!(codepoint.code, code);
            assert_eq!(codepoint.name, "<CJK Ideograph Extension A, Last>");
            assert_eq!(codepoint.category, "Lo");
        }

        assert_eq!(registry[0x3410].name, "TEST AFTER RANGE");
    }

    #[test]
    fn test_no_range_end()
    {
        let err = unicode_data(
            "4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;\n\
             4E01;NOT A RANGE END;Lo;0;L;;;;;N;;;;;\n",
        )
        .unwrap_err();

        assert!(matches!(err.kind, UcdErrorKind::NoRangeEnd { start: 0x4E00 }));
        assert_eq!(err.line, Some(2));

        // First в конце файла
        let err = unicode_data("4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;\n").unwrap_err();

        assert!(matches!(err.kind, UcdErrorKind::NoRangeEnd { start: 0x4E00 }));
    }

    #[test]
    fn test_numeric_mismatch_aborts()
    {
        let err = unicode_data(
            "0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;\n\
             0031;DIGIT ONE;Nd;0;EN;;1;1;2;N;;;;;\n",
        )
        .unwrap_err();

        assert!(matches!(err.kind, UcdErrorKind::NumericMismatch { code: 0x31 }));
        assert_eq!(err.line, Some(2));
    }
}
