use log::{debug, trace};

use crate::codepoint::CodePoint;
use crate::config::{UcdConfig, UcdTable};
use crate::error::UcdError;
use crate::registry::Registry;
use crate::tables::{read_table, CodeRange, Row};

mod aliases;
mod casing;
mod normalization;
mod numeric;
mod properties;
mod shaping;

pub use aliases::PropertyValueAliases;
pub use casing::{CaseFolding, SpecialCasing};
pub use normalization::{CompositionExclusions, DerivedNormalizationProps};
pub use numeric::DerivedNumericValues;
pub use properties::RangeProperty;
pub use shaping::ArabicShaping;

/// проход аннотации: свойства из одной вспомогательной таблицы UCD дописываются
/// в уже существующие записи реестра
pub trait Annotation
{
    /// таблица, из которой читаются свойства
    fn table(&self) -> UcdTable;

    /// разбирать ли первое поле как диапазон кодпоинтов
    fn ranged(&self) -> bool
    {
        true
    }

    /// обработать строку таблицы
    fn annotate(&mut self, registry: &mut Registry, row: &Row) -> Result<(), UcdError>;
}

/// прочитать таблицу прохода и применить её к реестру
pub fn apply(
    registry: &mut Registry,
    config: &UcdConfig,
    annotation: &mut dyn Annotation,
) -> Result<(), UcdError>
{
    let table = annotation.table();
    let path = config.path(table);

    let rows = read_table(&path, annotation.ranged(), &mut |row: &Row| -> Result<(), UcdError> {
        annotation.annotate(registry, row)
    })?;

    debug!("{}: {} строк", table.relative_path(), rows);

    Ok(())
}

/// применить f к каждой назначенной записи диапазона, неназначенные кодпоинты пропускаются.
/// возвращает количество изменённых записей
pub(crate) fn for_range<F>(registry: &mut Registry, range: CodeRange, mut f: F) -> usize
where
    F: FnMut(&mut CodePoint),
{
    let mut count = 0;

    for codepoint in registry.range_mut(range) {
        f(codepoint);
        count += 1;
    }

    if count == 0 {
        trace!(
            "U+{:04X} ..= U+{:04X}: нет назначенных кодпоинтов",
            range.start,
            range.end
        );
    }

    count
}

/// применить f к записи кодпоинта, если он назначен
pub(crate) fn for_code<F>(registry: &mut Registry, code: u32, f: F) -> bool
where
    F: FnOnce(&mut CodePoint),
{
    match registry.get_mut(code) {
        Some(codepoint) => {
            f(codepoint);
            true
        }
        None => {
            trace!("U+{:04X}: кодпоинт не назначен", code);
            false
        }
    }
}
