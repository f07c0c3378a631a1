use log::warn;

use crate::registry::Registry;

/// таблица композиций: для каждой канонической декомпозиции-пары (A, B) -> C, не являющейся
/// исключением, в запись B добавляется A -> C.
///
/// должна выполняться после всех проходов, меняющих декомпозиции и исключения.
/// возвращает количество записанных пар
pub fn build_compositions(registry: &mut Registry) -> usize
{
    // сначала собираем пары, затем пишем - запись идёт в другие кодпоинты реестра
    let pairs: Vec<(u32, u32, u32)> = registry
        .iter()
        .filter(|codepoint| codepoint.is_canonical_pair())
        .map(|codepoint| {
            (
                codepoint.decomposition[1],
                codepoint.decomposition[0],
                codepoint.code,
            )
        })
        .collect();

    let mut count = 0;

    for (second, first, composed) in pairs {
        match registry.get_mut(second) {
            Some(codepoint) => {
                codepoint.compositions.insert(first, composed);
                count += 1;
            }
            None => warn!(
                "U+{:04X}: второй кодпоинт декомпозиции U+{:04X} не назначен",
                composed, second
            ),
        }
    }

    count
}
