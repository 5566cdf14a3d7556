use crate::config::{FormatConfig, IdentifierKind};
use crate::error::ValidationError;
use crate::numbers::{cn, de, ean, es, fr, iban, isbn, ismn, issn, nl};

/// The compact/validate/format functions of one kind of number.
#[derive(Debug, Clone, Copy)]
pub struct ValidatorDescriptor {
    pub kind: IdentifierKind,
    pub compact: fn(&str) -> String,
    pub validate: fn(&str) -> Result<String, ValidationError>,
    pub format: fn(&str) -> Result<String, ValidationError>,
}

impl ValidatorDescriptor {
    pub fn of(kind: IdentifierKind) -> Self {
        match kind {
            IdentifierKind::Ean => Self {
                kind,
                compact: ean::compact,
                validate: ean::validate,
                format: |number| Ok(ean::format(number)),
            },
            IdentifierKind::Isbn => Self {
                kind,
                compact: |number| isbn::compact(number, false),
                validate: isbn::validate,
                format: |number| isbn::format(number, &FormatConfig::default()),
            },
            IdentifierKind::Issn => Self {
                kind,
                compact: issn::compact,
                validate: issn::validate,
                format: |number| Ok(issn::format(number)),
            },
            IdentifierKind::Ismn => Self {
                kind,
                compact: ismn::compact,
                validate: ismn::validate,
                format: |number| ismn::format(number, "-"),
            },
            IdentifierKind::Iban => Self {
                kind,
                compact: iban::compact,
                validate: iban::validate,
                format: |number| Ok(iban::format(number)),
            },
            IdentifierKind::NlBsn => Self {
                kind,
                compact: nl::bsn::compact,
                validate: nl::bsn::validate,
                format: |number| Ok(nl::bsn::format(number)),
            },
            IdentifierKind::NlBtw => Self {
                kind,
                compact: nl::btw::compact,
                validate: nl::btw::validate,
                format: |number| Ok(nl::btw::format(number)),
            },
            IdentifierKind::DeVat => Self {
                kind,
                compact: de::vat::compact,
                validate: de::vat::validate,
                format: |number| Ok(de::vat::format(number)),
            },
            IdentifierKind::FrSiren => Self {
                kind,
                compact: fr::siren::compact,
                validate: fr::siren::validate,
                format: |number| Ok(fr::siren::format(number)),
            },
            IdentifierKind::FrTva => Self {
                kind,
                compact: fr::tva::compact,
                validate: fr::tva::validate,
                format: |number| Ok(fr::tva::format(number)),
            },
            IdentifierKind::CnRic => Self {
                kind,
                compact: cn::ric::compact,
                validate: cn::ric::validate,
                format: |number| Ok(cn::ric::format(number)),
            },
            IdentifierKind::EsDni => Self {
                kind,
                compact: es::dni::compact,
                validate: es::dni::validate,
                format: |number| Ok(es::dni::format(number)),
            },
        }
    }

    pub fn compact(&self, number: &str) -> String {
        (self.compact)(number)
    }

    pub fn validate(&self, number: &str) -> Result<String, ValidationError> {
        (self.validate)(number)
    }

    pub fn is_valid(&self, number: &str) -> bool {
        self.validate(number).is_ok()
    }

    pub fn format(&self, number: &str) -> Result<String, ValidationError> {
        (self.format)(number)
    }
}
