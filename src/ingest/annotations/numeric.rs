use super::{for_range, Annotation};
use crate::config::UcdTable;
use crate::error::UcdError;
use crate::registry::Registry;
use crate::tables::Row;

/// extracted/DerivedNumericValues.txt: числовое значение (4 колонка) для кодпоинтов,
/// у которых его нет в UnicodeData.txt
pub struct DerivedNumericValues;

impl Annotation for DerivedNumericValues
{
    fn table(&self) -> UcdTable
    {
        UcdTable::DerivedNumericValues
    }

    fn annotate(&mut self, registry: &mut Registry, row: &Row) -> Result<(), UcdError>
    {
        let range = row.range()?;
        let value = row.required(3)?;

        for_range(registry, range, |codepoint| {
            if codepoint.numeric.is_none() {
                codepoint.numeric = Some(value.to_owned());
            }
        });

        Ok(())
    }
}
