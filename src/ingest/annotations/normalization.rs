use super::{for_range, Annotation};
use crate::codepoint::{NormalizationForm, QuickCheck};
use crate::config::UcdTable;
use crate::error::UcdError;
use crate::registry::Registry;
use crate::tables::Row;

/// CompositionExclusions.txt.
/// исключения композиции не могут быть вычислены, этот список составляется консорциумом Unicode в ручном режиме
pub struct CompositionExclusions;

impl Annotation for CompositionExclusions
{
    fn table(&self) -> UcdTable
    {
        UcdTable::CompositionExclusions
    }

    fn annotate(&mut self, registry: &mut Registry, row: &Row) -> Result<(), UcdError>
    {
        for_range(registry, row.range()?, |codepoint| codepoint.is_excluded = true);

        Ok(())
    }
}

/// DerivedNormalizationProps.txt: из всех свойств берутся только быстрые проверки
/// NFD_QC, NFKD_QC, NFC_QC, NFKC_QC
pub struct DerivedNormalizationProps;

impl Annotation for DerivedNormalizationProps
{
    fn table(&self) -> UcdTable
    {
        UcdTable::DerivedNormalizationProps
    }

    fn annotate(&mut self, registry: &mut Registry, row: &Row) -> Result<(), UcdError>
    {
        let form = match NormalizationForm::from_quick_check_property(row.field(1)) {
            Some(form) => form,
            None => return Ok(()),
        };

        let value = QuickCheck::from(row.field(2));

        for_range(registry, row.range()?, |codepoint| {
            *codepoint.quick_check_mut(form) = value
        });

        Ok(())
    }
}
