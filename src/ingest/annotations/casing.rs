use super::{for_code, Annotation};
use crate::config::UcdTable;
use crate::error::UcdError;
use crate::registry::Registry;
use crate::tables::{parse_codes, Row};

/// SpecialCasing.txt: code; lower; title; upper; (conditions;)
///
/// безусловные правила заменяют простые отображения регистра, условные - только
/// запоминают условия, простые отображения остаются прежними
pub struct SpecialCasing;

impl Annotation for SpecialCasing
{
    fn table(&self) -> UcdTable
    {
        UcdTable::SpecialCasing
    }

    fn annotate(&mut self, registry: &mut Registry, row: &Row) -> Result<(), UcdError>
    {
        let code = row.range()?.start;

        let conditions: Vec<String> = row
            .field(4)
            .split_whitespace()
            .map(str::to_owned)
            .collect();

        if !conditions.is_empty() {
            for_code(registry, code, |codepoint| {
                codepoint.case_conditions = Some(conditions)
            });

            return Ok(());
        }

        let lowercase = parse_codes(row.field(1))?;
        let titlecase = parse_codes(row.field(2))?;
        let uppercase = parse_codes(row.field(3))?;

        for_code(registry, code, |codepoint| {
            codepoint.lowercase = lowercase;
            codepoint.titlecase = titlecase;
            codepoint.uppercase = uppercase;
        });

        Ok(())
    }
}

/// CaseFolding.txt: code; status; mapping.
///
/// учитываются только статусы C (common) и F (full); свёртка сохраняется, только если
/// отличается от строчной буквы
pub struct CaseFolding;

impl Annotation for CaseFolding
{
    fn table(&self) -> UcdTable
    {
        UcdTable::CaseFolding
    }

    fn annotate(&mut self, registry: &mut Registry, row: &Row) -> Result<(), UcdError>
    {
        if !matches!(row.field(1), "C" | "F") {
            return Ok(());
        }

        let code = row.range()?.start;
        let folded = parse_codes(row.field(2))?;

        for_code(registry, code, |codepoint| {
            if codepoint.lowercase != folded {
                codepoint.folded = folded;
            }
        });

        Ok(())
    }
}
