use super::{for_range, Annotation, PropertyValueAliases};
use crate::config::UcdTable;
use crate::error::UcdError;
use crate::registry::Registry;
use crate::tables::Row;

/// ArabicShaping.txt: code; name; joining type; joining group.
/// краткий тип соединения раскрывается по таблице PropertyValueAliases.txt
pub struct ArabicShaping<'a>
{
    pub aliases: &'a PropertyValueAliases,
}

impl<'a> ArabicShaping<'a>
{
    pub fn new(aliases: &'a PropertyValueAliases) -> Self
    {
        Self { aliases }
    }
}

impl Annotation for ArabicShaping<'_>
{
    fn table(&self) -> UcdTable
    {
        UcdTable::ArabicShaping
    }

    fn annotate(&mut self, registry: &mut Registry, row: &Row) -> Result<(), UcdError>
    {
        let range = row.range()?;
        let joining_type = self.aliases.joining_type(row.field(2));
        let joining_group = row.required(3)?;

        for_range(registry, range, |codepoint| {
            codepoint.joining_type = joining_type.map(str::to_owned);
            codepoint.joining_group = Some(joining_group.to_owned());
        });

        Ok(())
    }
}
