use std::collections::HashMap;

use super::Annotation;
use crate::config::UcdTable;
use crate::error::UcdError;
use crate::registry::Registry;
use crate::tables::Row;

/// PropertyValueAliases.txt: названия классов комбинирования и типов соединения.
/// таблицы используются следующими проходами, реестр при чтении не меняется
#[derive(Debug, Clone, Default)]
pub struct PropertyValueAliases
{
    /// ccc -> полное название: 230 -> "Above"
    pub combining_classes: HashMap<u8, String>,
    /// краткое название типа соединения -> полное: "D" -> "Dual_Joining"
    pub joining_types: HashMap<String, String>,
}

impl PropertyValueAliases
{
    /// проставить название класса комбинирования каждому кодпоинту реестра
    pub fn stamp_combining_class_names(&self, registry: &mut Registry)
    {
        for codepoint in registry.iter_mut() {
            codepoint.combining_class_name = self
                .combining_classes
                .get(&codepoint.combining_class)
                .cloned();
        }
    }

    pub fn joining_type(&self, short: &str) -> Option<&str>
    {
        self.joining_types.get(short).map(String::as_str)
    }
}

impl Annotation for PropertyValueAliases
{
    fn table(&self) -> UcdTable
    {
        UcdTable::PropertyValueAliases
    }

    fn ranged(&self) -> bool
    {
        false
    }

    fn annotate(&mut self, _: &mut Registry, row: &Row) -> Result<(), UcdError>
    {
        match row.field(0) {
            // ccc; 230; A; Above
            "ccc" => {
                let ccc = row.required(1)?;
                let ccc = ccc.parse::<u8>().map_err(|_| {
                    UcdError::malformed(format!("класс комбинирования: {:?}", ccc))
                })?;

                self.combining_classes
                    .insert(ccc, row.required(3)?.to_owned());
            }
            // jt; D; Dual_Joining
            "jt" => {
                self.joining_types
                    .insert(row.required(1)?.to_owned(), row.required(2)?.to_owned());
            }
            _ => (),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::ingest::annotations::tests::{annotate_lines, registry};

    #[test]
    fn test_aliases()
    {
        let mut registry = registry(&[
            "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;",
            "0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING GRAVE;;;;",
            "0E48;THAI CHARACTER MAI EK;Mn;107;NSM;;;;;N;THAI MAI EK;;;;",
        ]);

        let mut aliases = PropertyValueAliases::default();

        annotate_lines(
            &mut registry,
            &mut aliases,
            &[
                "bc ; AL                               ; Arabic_Letter",
                "ccc;   0; NR                         ; Not_Reordered",
                "ccc; 230; A                          ; Above",
                "jt ; D                                ; Dual_Joining",
                "jt ; U                                ; Non_Joining",
            ],
        )
        .unwrap();

        assert_eq!(aliases.combining_classes.len(), 2);
        assert_eq!(aliases.joining_type("D"), Some("Dual_Joining"));
        assert_eq!(aliases.joining_type("X"), None);

        // до простановки названий реестр не меняется
        assert_eq!(registry[0x300].combining_class_name, None);

        aliases.stamp_combining_class_names(&mut registry);

        assert_eq!(registry[0x41].combining_class_name.as_deref(), Some("Not_Reordered"));
        assert_eq!(registry[0x300].combining_class_name.as_deref(), Some("Above"));
        // класса нет в таблице
        assert_eq!(registry[0xE48].combining_class_name, None);
    }

    #[test]
    fn test_malformed_ccc()
    {
        let mut registry = Registry::new();
        let mut aliases = PropertyValueAliases::default();

        let result = annotate_lines(&mut registry, &mut aliases, &["ccc; XX; NR; Not_Reordered"]);

        assert!(result.is_err());
    }
}
