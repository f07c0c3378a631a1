use std::path::{Path, PathBuf};

/// таблицы UCD, из которых собирается реестр
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UcdTable
{
    UnicodeData,
    DerivedNumericValues,
    PropertyValueAliases,
    Blocks,
    Scripts,
    EastAsianWidth,
    SpecialCasing,
    CaseFolding,
    CompositionExclusions,
    DerivedNormalizationProps,
    ArabicShaping,
    IndicPositionalCategory,
    IndicSyllabicCategory,
}

impl UcdTable
{
    /// все таблицы в порядке их чтения
    pub const ALL: [UcdTable; 13] = [
        UcdTable::UnicodeData,
        UcdTable::DerivedNumericValues,
        UcdTable::PropertyValueAliases,
        UcdTable::Blocks,
        UcdTable::Scripts,
        UcdTable::EastAsianWidth,
        UcdTable::SpecialCasing,
        UcdTable::CaseFolding,
        UcdTable::CompositionExclusions,
        UcdTable::DerivedNormalizationProps,
        UcdTable::ArabicShaping,
        UcdTable::IndicPositionalCategory,
        UcdTable::IndicSyllabicCategory,
    ];

    /// путь к файлу относительно каталога UCD
    pub fn relative_path(&self) -> &'static str
    {
        match self {
            UcdTable::UnicodeData => "UnicodeData.txt",
            UcdTable::DerivedNumericValues => "extracted/DerivedNumericValues.txt",
            UcdTable::PropertyValueAliases => "PropertyValueAliases.txt",
            UcdTable::Blocks => "Blocks.txt",
            UcdTable::Scripts => "Scripts.txt",
            UcdTable::EastAsianWidth => "EastAsianWidth.txt",
            UcdTable::SpecialCasing => "SpecialCasing.txt",
            UcdTable::CaseFolding => "CaseFolding.txt",
            UcdTable::CompositionExclusions => "CompositionExclusions.txt",
            UcdTable::DerivedNormalizationProps => "DerivedNormalizationProps.txt",
            UcdTable::ArabicShaping => "ArabicShaping.txt",
            UcdTable::IndicPositionalCategory => "IndicPositionalCategory.txt",
            UcdTable::IndicSyllabicCategory => "IndicSyllabicCategory.txt",
        }
    }
}

/// откуда читать таблицы UCD. каталога по умолчанию нет - его всегда указывает вызывающий
#[derive(Debug, Clone)]
pub struct UcdConfig
{
    pub dir: PathBuf,
}

impl UcdConfig
{
    pub fn new(dir: impl Into<PathBuf>) -> Self
    {
        Self { dir: dir.into() }
    }

    /// полный путь к таблице
    pub fn path(&self, table: UcdTable) -> PathBuf
    {
        self.dir.join(table.relative_path())
    }

    pub fn dir(&self) -> &Path
    {
        &self.dir
    }
}
