use super::{for_range, Annotation};
use crate::codepoint::CodePoint;
use crate::config::UcdTable;
use crate::error::UcdError;
use crate::registry::Registry;
use crate::tables::Row;

/// свойство, значение которого (2 колонка) просто присваивается всем кодпоинтам диапазона
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeProperty
{
    /// Blocks.txt
    Block,
    /// Scripts.txt
    Script,
    /// EastAsianWidth.txt
    EastAsianWidth,
    /// IndicPositionalCategory.txt
    IndicPositionalCategory,
    /// IndicSyllabicCategory.txt
    IndicSyllabicCategory,
}

impl RangeProperty
{
    fn field<'a>(&self, codepoint: &'a mut CodePoint) -> &'a mut Option<String>
    {
        match self {
            RangeProperty::Block => &mut codepoint.block,
            RangeProperty::Script => &mut codepoint.script,
            RangeProperty::EastAsianWidth => &mut codepoint.east_asian_width,
            RangeProperty::IndicPositionalCategory => &mut codepoint.indic_positional_category,
            RangeProperty::IndicSyllabicCategory => &mut codepoint.indic_syllabic_category,
        }
    }
}

impl Annotation for RangeProperty
{
    fn table(&self) -> UcdTable
    {
        match self {
            RangeProperty::Block => UcdTable::Blocks,
            RangeProperty::Script => UcdTable::Scripts,
            RangeProperty::EastAsianWidth => UcdTable::EastAsianWidth,
            RangeProperty::IndicPositionalCategory => UcdTable::IndicPositionalCategory,
            RangeProperty::IndicSyllabicCategory => UcdTable::IndicSyllabicCategory,
        }
    }

    fn annotate(&mut self, registry: &mut Registry, row: &Row) -> Result<(), UcdError>
    {
        let range = row.range()?;
        let value = row.required(1)?;
        let property = *self;

        for_range(registry, range, |codepoint| {
            *property.field(codepoint) = Some(value.to_owned());
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::ingest::annotations::tests::{annotate_lines, registry};

    fn latin() -> Registry
    {
        registry(&[
            "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;",
            "00E0;LATIN SMALL LETTER A WITH GRAVE;Ll;0;L;0061 0300;;;;N;LATIN SMALL LETTER A GRAVE;;00C0;;00C0",
            "0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING GRAVE;;;;",
            "0901;DEVANAGARI SIGN CANDRABINDU;Mn;0;NSM;;;;;N;;;;;",
        ])
    }

    #[test]
    fn test_blocks_scripts_width()
    {
        let mut registry = latin();

        annotate_lines(
            &mut registry,
            &mut RangeProperty::Block,
            &["0000..007F; Basic Latin", "0080..00FF; Latin-1 Supplement"],
        )
        .unwrap();

        annotate_lines(
            &mut registry,
            &mut RangeProperty::Script,
            &["0041..005A    ; Latin", "00E0..00F6    ; Latin", "0300..036F    ; Inherited"],
        )
        .unwrap();

        annotate_lines(
            &mut registry,
            &mut RangeProperty::EastAsianWidth,
            &["0041..005A;Na", "00E0;A", "0300..036F;A"],
        )
        .unwrap();

        assert_eq!(registry[0x41].block.as_deref(), Some("Basic Latin"));
        assert_eq!(registry[0xE0].block.as_deref(), Some("Latin-1 Supplement"));
        assert_eq!(registry[0x300].block, None);

        assert_eq!(registry[0x41].script.as_deref(), Some("Latin"));
        assert_eq!(registry[0x300].script.as_deref(), Some("Inherited"));

        assert_eq!(registry[0x41].east_asian_width.as_deref(), Some("Na"));
        assert_eq!(registry[0xE0].east_asian_width.as_deref(), Some("A"));

        // диапазоны не создают записей для неназначенных кодпоинтов
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_indic()
    {
        let mut registry = latin();

        annotate_lines(
            &mut registry,
            &mut RangeProperty::IndicPositionalCategory,
            &["0900..0902    ; Top"],
        )
        .unwrap();

        annotate_lines(
            &mut registry,
            &mut RangeProperty::IndicSyllabicCategory,
            &["0900..0902    ; Bindu"],
        )
        .unwrap();

        assert_eq!(registry[0x901].indic_positional_category.as_deref(), Some("Top"));
        assert_eq!(registry[0x901].indic_syllabic_category.as_deref(), Some("Bindu"));
        assert_eq!(registry[0x41].indic_syllabic_category, None);
    }

    #[test]
    fn test_not_a_range()
    {
        let mut registry = latin();

        let result = annotate_lines(&mut registry, &mut RangeProperty::Block, &["XYZ; Basic Latin"]);

        assert!(result.is_err());
    }
}
