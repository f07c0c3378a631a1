use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Index;

use crate::codepoint::CodePoint;
use crate::tables::CodeRange;

/// реестр кодпоинтов: код -> свойства. неназначенных кодпоинтов в реестре нет.
///
/// после построения доступен только для чтения
#[derive(Debug, Clone, Default)]
pub struct Registry
{
    codepoints: BTreeMap<u32, CodePoint>,
}

impl Registry
{
    pub(crate) fn new() -> Self
    {
        Self::default()
    }

    pub fn get(&self, code: u32) -> Option<&CodePoint>
    {
        self.codepoints.get(&code)
    }

    pub fn contains(&self, code: u32) -> bool
    {
        self.codepoints.contains_key(&code)
    }

    pub fn len(&self) -> usize
    {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.codepoints.is_empty()
    }

    /// последний назначенный кодпоинт
    pub fn max_code(&self) -> Option<u32>
    {
        self.codepoints.keys().next_back().copied()
    }

    /// кодпоинты в порядке возрастания кода
    pub fn iter(&self) -> btree_map::Values<'_, u32, CodePoint>
    {
        self.codepoints.values()
    }

    pub(crate) fn get_mut(&mut self, code: u32) -> Option<&mut CodePoint>
    {
        self.codepoints.get_mut(&code)
    }

    pub(crate) fn insert(&mut self, codepoint: CodePoint)
    {
        self.codepoints.insert(codepoint.code, codepoint);
    }

    /// назначенные кодпоинты диапазона, неназначенные пропускаются
    pub(crate) fn range_mut(
        &mut self,
        range: CodeRange,
    ) -> impl Iterator<Item = &mut CodePoint> + '_
    {
        // BTreeMap::range_mut паникует на перевёрнутом диапазоне
        let (start, end, take) = match range.is_empty() {
            true => (0, 0, 0),
            false => (range.start, range.end, usize::MAX),
        };

        self.codepoints
            .range_mut(start ..= end)
            .map(|(_, codepoint)| codepoint)
            .take(take)
    }

    pub(crate) fn iter_mut(&mut self) -> btree_map::ValuesMut<'_, u32, CodePoint>
    {
        self.codepoints.values_mut()
    }
}

impl Index<u32> for Registry
{
    type Output = CodePoint;

    /// паникует, если кодпоинт не назначен
    fn index(&self, code: u32) -> &Self::Output
    {
        match self.codepoints.get(&code) {
            Some(codepoint) => codepoint,
            None => panic!("кодпоинт U+{:04X} отсутствует в реестре", code),
        }
    }
}

impl<'a> IntoIterator for &'a Registry
{
    type Item = &'a CodePoint;
    type IntoIter = btree_map::Values<'a, u32, CodePoint>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}
