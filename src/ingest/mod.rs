use log::info;

use crate::config::{UcdConfig, UcdTable};
use crate::error::UcdError;
use crate::registry::Registry;

pub mod annotations;
pub mod compositions;
pub mod unicode_data;

use annotations::*;
use compositions::build_compositions;

/// построить реестр кодпоинтов из таблиц UCD.
///
/// таблицы читаются строго по порядку: UnicodeData.txt создаёт записи, остальные таблицы
/// дописывают свойства в существующие записи, последней строится таблица композиций.
/// любая ошибка прерывает построение целиком
pub fn build(config: &UcdConfig) -> Result<Registry, UcdError>
{
    let mut registry = unicode_data::read(&config.path(UcdTable::UnicodeData))?;

    apply(&mut registry, config, &mut DerivedNumericValues)?;

    // названия классов комбинирования и типов соединения нужны до ArabicShaping.txt
    let mut aliases = PropertyValueAliases::default();
    apply(&mut registry, config, &mut aliases)?;
    aliases.stamp_combining_class_names(&mut registry);

    apply(&mut registry, config, &mut RangeProperty::Block)?;
    apply(&mut registry, config, &mut RangeProperty::Script)?;
    apply(&mut registry, config, &mut RangeProperty::EastAsianWidth)?;
    apply(&mut registry, config, &mut SpecialCasing)?;
    apply(&mut registry, config, &mut CaseFolding)?;
    apply(&mut registry, config, &mut CompositionExclusions)?;
    apply(&mut registry, config, &mut DerivedNormalizationProps)?;
    apply(&mut registry, config, &mut ArabicShaping::new(&aliases))?;
    apply(&mut registry, config, &mut RangeProperty::IndicPositionalCategory)?;
    apply(&mut registry, config, &mut RangeProperty::IndicSyllabicCategory)?;

    let pairs = build_compositions(&mut registry);

    info!(
        "{}: {} кодпоинтов, {} композиций",
        config.dir().display(),
        registry.len(),
        pairs
    );

    Ok(registry)
}
