/// форма нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizationForm
{
    NFD,
    NFKD,
    NFC,
    NFKC,
}

impl NormalizationForm
{
    pub const ALL: [NormalizationForm; 4] = [
        NormalizationForm::NFD,
        NormalizationForm::NFKD,
        NormalizationForm::NFC,
        NormalizationForm::NFKC,
    ];

    /// свойство быстрой проверки в DerivedNormalizationProps.txt
    pub fn quick_check_property(&self) -> &'static str
    {
        match self {
            NormalizationForm::NFD => "NFD_QC",
            NormalizationForm::NFKD => "NFKD_QC",
            NormalizationForm::NFC => "NFC_QC",
            NormalizationForm::NFKC => "NFKC_QC",
        }
    }

    /// форма по названию свойства быстрой проверки, остальные свойства - None
    pub fn from_quick_check_property(property: &str) -> Option<Self>
    {
        Self::ALL
            .into_iter()
            .find(|form| form.quick_check_property() == property)
    }
}

/// результат быстрой проверки: 0 - Yes, 1 - No, 2 - Maybe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum QuickCheck
{
    #[default]
    Yes = 0,
    No = 1,
    Maybe = 2,
}

impl From<&str> for QuickCheck
{
    /// Y - Yes, N - No, всё остальное - Maybe
    fn from(value: &str) -> Self
    {
        match value {
            "Y" => QuickCheck::Yes,
            "N" => QuickCheck::No,
            _ => QuickCheck::Maybe,
        }
    }
}

impl From<QuickCheck> for u8
{
    #[inline]
    fn from(value: QuickCheck) -> Self
    {
        value as u8
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_quick_check()
    {
        assert_eq!(u8::from(QuickCheck::from("Y")), 0);
        assert_eq!(u8::from(QuickCheck::from("N")), 1);
        assert_eq!(u8::from(QuickCheck::from("M")), 2);
        assert_eq!(QuickCheck::default(), QuickCheck::Yes);
    }

    #[test]
    fn test_form_property()
    {
        assert_eq!(
            NormalizationForm::from_quick_check_property("NFKC_QC"),
            Some(NormalizationForm::NFKC)
        );
        assert_eq!(
            NormalizationForm::from_quick_check_property("Full_Composition_Exclusion"),
            None
        );
    }
}
