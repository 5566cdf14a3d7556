use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The identification numbers the crate knows how to handle. The string tokens are the ones
/// accepted by [`Registry::get`](crate::Registry::get).
#[derive(
    Serialize, Deserialize, Display, EnumString, EnumIter, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[serde(tag = "type")]
#[strum(ascii_case_insensitive)]
pub enum IdentifierKind {
    #[strum(to_string = "ean")]
    Ean,
    #[strum(to_string = "isbn")]
    Isbn,
    #[strum(to_string = "issn")]
    Issn,
    #[strum(to_string = "ismn")]
    Ismn,
    #[strum(to_string = "iban")]
    Iban,
    #[strum(to_string = "nl.bsn")]
    NlBsn,
    #[strum(to_string = "nl.btw")]
    NlBtw,
    #[strum(to_string = "de.vat")]
    DeVat,
    #[strum(to_string = "fr.siren")]
    FrSiren,
    #[strum(to_string = "fr.tva")]
    FrTva,
    #[strum(to_string = "cn.ric")]
    CnRic,
    #[strum(to_string = "es.dni")]
    EsDni,
}

impl IdentifierKind {
    /// The VAT number of a country, by lowercase ISO 3166 code.
    pub fn vat_of(country: &str) -> Option<Self> {
        match country {
            "de" => Some(IdentifierKind::DeVat),
            "fr" => Some(IdentifierKind::FrTva),
            "nl" => Some(IdentifierKind::NlBtw),
            _ => None,
        }
    }
}

/// Which validators a [`Registry`](crate::Registry) offers. Missing fields take the default
/// (everything), a `null` list is empty.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kinds: Vec<IdentifierKind>,

    /// Lowercase country codes reachable through VAT lookups.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vat_countries: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            kinds: IdentifierKind::iter().collect(),
            vat_countries: vec!["de".to_string(), "fr".to_string(), "nl".to_string()],
        }
    }
}

impl RegistryConfig {
    pub fn empty() -> Self {
        Self {
            kinds: vec![],
            vat_countries: vec![],
        }
    }

    pub fn kinds(&self, kinds: Vec<IdentifierKind>) -> Self {
        self.mutate_clone(|x| x.kinds = kinds)
    }

    pub fn vat_countries(&self, vat_countries: Vec<String>) -> Self {
        self.mutate_clone(|x| x.vat_countries = vat_countries)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FormatConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub separator: String,
    /// Convert ISBN-10 to ISBN-13 before formatting.
    pub convert: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            convert: false,
        }
    }
}

impl FormatConfig {
    pub fn separator(&self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        self.mutate_clone(|x| x.separator = separator)
    }

    pub fn convert(&self, convert: bool) -> Self {
        self.mutate_clone(|x| x.convert = convert)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
