use std::collections::BTreeMap;

use crate::error::{UcdError, UcdErrorKind};
use crate::tables::parse_code;

mod decomposition;
mod quick_check;

pub use decomposition::{simple_case_mapping, Decomposition, DecompositionTag};
pub use quick_check::{NormalizationForm, QuickCheck};

/// количество полей в строке UnicodeData.txt
pub const UNICODE_DATA_FIELDS: usize = 15;

/// кодпоинт Unicode со всеми свойствами, собранными из таблиц UCD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePoint
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// категория символа (general category)
    pub category: String,
    /// класс канонического комбинирования (canonical combining class)
    pub combining_class: u8,
    /// название класса комбинирования из PropertyValueAliases.txt
    pub combining_class_name: Option<String>,
    /// класс направления (bidi class)
    pub bidi_class: String,
    /// декомпозиция без тега
    pub decomposition: Vec<u32>,
    /// тег декомпозиции совместимости
    pub decomposition_tag: Option<DecompositionTag>,
    /// декомпозиция совместимости, а не каноническая
    pub is_compat: bool,
    /// исключение композиции
    pub is_excluded: bool,
    /// числовое значение, "1/2" и т.п.
    pub numeric: Option<String>,
    /// "зеркальный" символ двунаправленого текста (bidi mirrored)
    pub bidi_mirrored: bool,
    pub unicode1_name: Option<String>,
    pub iso_comment: Option<String>,
    /// прописная буква
    pub uppercase: Option<Vec<u32>>,
    /// строчная буква
    pub lowercase: Option<Vec<u32>>,
    /// заглавная буква
    pub titlecase: Option<Vec<u32>>,
    /// свёртка регистра, если отличается от строчной
    pub folded: Option<Vec<u32>>,
    /// условия контекстного изменения регистра (SpecialCasing.txt)
    pub case_conditions: Option<Vec<String>>,
    /// второй кодпоинт пары -> результат композиции
    pub compositions: BTreeMap<u32, u32>,
    pub block: Option<String>,
    pub script: Option<String>,
    pub east_asian_width: Option<String>,
    pub joining_type: Option<String>,
    pub joining_group: Option<String>,
    pub indic_syllabic_category: Option<String>,
    pub indic_positional_category: Option<String>,
    /// быстрые проверки
    pub nfd_qc: QuickCheck,
    pub nfkd_qc: QuickCheck,
    pub nfc_qc: QuickCheck,
    pub nfkc_qc: QuickCheck,
}

impl CodePoint
{
    /// кодпоинт из полей строки UnicodeData.txt:
    ///
    /// code; name; category; ccc; bidi class; decomposition; decimal; digit; numeric;
    /// bidi mirrored; unicode 1 name; ISO comment; uppercase; lowercase; titlecase
    pub fn from_fields(fields: &[&str]) -> Result<Self, UcdError>
    {
        if fields.len() < UNICODE_DATA_FIELDS {
            return Err(UcdError::malformed(format!(
                "ожидается {} полей, получено {}",
                UNICODE_DATA_FIELDS,
                fields.len()
            )));
        }

        let code = parse_code(fields[0])?;
        let decomposition = Decomposition::try_from(fields[5])?;

        // десятичное и цифровое значения не хранятся - они обязаны совпадать с числовым
        let numeric = optional(fields[8]);

        for value in [fields[6], fields[7]] {
            if !value.is_empty() && Some(value) != numeric.as_deref() {
                return Err(UcdErrorKind::NumericMismatch { code }.into());
            }
        }

        Ok(Self {
            code,
            name: fields[1].to_owned(),
            category: fields[2].to_owned(),
            combining_class: fields[3].parse().unwrap_or(0),
            combining_class_name: None,
            bidi_class: fields[4].to_owned(),
            is_compat: decomposition.is_compat(),
            decomposition: decomposition.codes,
            decomposition_tag: decomposition.tag,
            is_excluded: false,
            numeric,
            bidi_mirrored: fields[9] == "Y",
            unicode1_name: optional(fields[10]),
            iso_comment: optional(fields[11]),
            uppercase: simple_case_mapping(fields[12])?,
            lowercase: simple_case_mapping(fields[13])?,
            titlecase: simple_case_mapping(fields[14])?,
            folded: None,
            case_conditions: None,
            compositions: BTreeMap::new(),
            block: None,
            script: None,
            east_asian_width: None,
            joining_type: None,
            joining_group: None,
            indic_syllabic_category: None,
            indic_positional_category: None,
            nfd_qc: QuickCheck::Yes,
            nfkd_qc: QuickCheck::Yes,
            nfc_qc: QuickCheck::Yes,
            nfkc_qc: QuickCheck::Yes,
        })
    }

    /// копия со всеми текущими свойствами и другим кодом (для диапазонов First / Last)
    pub fn copy_as(&self, code: u32) -> Self
    {
        let mut codepoint = self.clone();
        codepoint.code = code;

        codepoint
    }

    /// стартер - класс комбинирования 0
    pub fn is_starter(&self) -> bool
    {
        self.combining_class == 0
    }

    /// каноническая декомпозиция, из которой может быть получена композиция
    pub fn is_canonical_pair(&self) -> bool
    {
        !self.is_compat && !self.is_excluded && self.decomposition.len() > 1
    }

    pub fn quick_check(&self, form: NormalizationForm) -> QuickCheck
    {
        match form {
            NormalizationForm::NFD => self.nfd_qc,
            NormalizationForm::NFKD => self.nfkd_qc,
            NormalizationForm::NFC => self.nfc_qc,
            NormalizationForm::NFKC => self.nfkc_qc,
        }
    }

    pub(crate) fn quick_check_mut(&mut self, form: NormalizationForm) -> &mut QuickCheck
    {
        match form {
            NormalizationForm::NFD => &mut self.nfd_qc,
            NormalizationForm::NFKD => &mut self.nfkd_qc,
            NormalizationForm::NFC => &mut self.nfc_qc,
            NormalizationForm::NFKC => &mut self.nfkc_qc,
        }
    }
}

/// пустое поле - None
fn optional(value: &str) -> Option<String>
{
    match value.is_empty() {
        true => None,
        false => Some(value.to_owned()),
    }
}
