use std::collections::HashMap;

use crate::registry::Registry;

/// статистика по построенному реестру
#[derive(Debug, Clone, Default)]
pub struct RegistryStats
{
    /// количество кодпоинтов
    pub total: usize,
    /// кодпоинты по блокам
    pub blocks: StatsGroup,
    /// кодпоинты по категориям
    pub categories: StatsGroup,
    /// канонические декомпозиции
    pub canonical_decompositions: usize,
    /// декомпозиции совместимости
    pub compat_decompositions: usize,
    /// исключения композиции
    pub exclusions: usize,
    /// пары композиции
    pub compositions: usize,
}

/// счётчики по значению свойства, порядок - по первому появлению
#[derive(Debug, Clone, Default)]
pub struct StatsGroup
{
    pub entries: HashMap<String, StatsEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsEntry
{
    pub count: usize,
    pub order: usize,
}

impl RegistryStats
{
    pub fn collect(registry: &Registry) -> Self
    {
        let mut stats = Self::default();

        for codepoint in registry.iter() {
            stats.total += 1;

            stats
                .blocks
                .touch(codepoint.block.as_deref().unwrap_or("No_Block"))
                .count += 1;
            stats.categories.touch(&codepoint.category).count += 1;

            if !codepoint.decomposition.is_empty() {
                match codepoint.is_compat {
                    true => stats.compat_decompositions += 1,
                    false => stats.canonical_decompositions += 1,
                }
            }

            if codepoint.is_excluded {
                stats.exclusions += 1;
            }

            stats.compositions += codepoint.compositions.len();
        }

        stats
    }
}

impl StatsGroup
{
    /// добавляем ключ
    pub fn touch(&mut self, key: impl AsRef<str>) -> &mut StatsEntry
    {
        let order = self.entries.len() + 1;

        self.entries
            .entry(key.as_ref().to_string())
            .or_insert(StatsEntry { count: 0, order })
    }

    /// значения в порядке первого появления
    pub fn ordered(&self) -> Vec<(&str, &StatsEntry)>
    {
        let mut entries: Vec<(&str, &StatsEntry)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
            .collect();

        entries.sort_by_key(|(_, entry)| entry.order);

        entries
    }
}
