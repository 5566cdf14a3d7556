//! Lookup of validators by token (`isbn`, `nl.bsn`...) or by VAT country code.
//!
//! The table is built once from a [`RegistryConfig`]. Asking for a number the registry was not
//! built with fails with [`RegistryError::MissingValidation`].

mod descriptor;
mod metrics;

pub use descriptor::ValidatorDescriptor;

use crate::config::{IdentifierKind, RegistryConfig};
use crate::error::ValidationError;
use crate::util::clean;
use ahash::AHashMap;
use self::metrics::RegistryMetrics;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("No validation is registered for {0:?}")]
    MissingValidation(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

pub struct Registry {
    descriptors: AHashMap<String, ValidatorDescriptor>,
    vat: AHashMap<String, ValidatorDescriptor>,
    metrics: RegistryMetrics,
}

impl Registry {
    /// Fails when a VAT country has no known VAT number.
    pub fn new(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let descriptors = config
            .kinds
            .iter()
            .map(|kind| (kind.to_string(), ValidatorDescriptor::of(*kind)))
            .collect();

        let mut vat = AHashMap::with_capacity(config.vat_countries.len());
        for country in &config.vat_countries {
            let country = country.to_ascii_lowercase();
            let kind = IdentifierKind::vat_of(&country)
                .ok_or_else(|| RegistryError::MissingValidation(country.clone()))?;
            vat.insert(country, ValidatorDescriptor::of(kind));
        }

        Ok(Self {
            descriptors,
            vat,
            metrics: RegistryMetrics::new(),
        })
    }

    /// Registered tokens, in no particular order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    pub fn get(&self, token: &str) -> Result<&ValidatorDescriptor, RegistryError> {
        self.metrics.lookups.increment(1);
        self.descriptors
            .get(&token.to_ascii_lowercase())
            .ok_or_else(|| self.missing(token))
    }

    /// The VAT number validator of a country, by ISO 3166 code (any case).
    pub fn get_vat(&self, country: &str) -> Result<&ValidatorDescriptor, RegistryError> {
        self.metrics.lookups.increment(1);
        self.vat
            .get(&country.to_ascii_lowercase())
            .ok_or_else(|| self.missing(country))
    }

    fn missing(&self, token: &str) -> RegistryError {
        self.metrics.missing_validation.increment(1);
        RegistryError::MissingValidation(token.to_string())
    }

    pub fn compact(&self, token: &str, number: &str) -> Result<String, RegistryError> {
        Ok(self.get(token)?.compact(number))
    }

    pub fn validate(&self, token: &str, number: &str) -> Result<String, RegistryError> {
        let result = self.get(token)?.validate(number);
        self.metrics.record_check(&result);
        Ok(result?)
    }

    /// Only a missing validator is an error, invalid numbers are `Ok(false)`.
    pub fn is_valid(&self, token: &str, number: &str) -> Result<bool, RegistryError> {
        match self.validate(token, number) {
            Ok(_) => Ok(true),
            Err(RegistryError::Invalid(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub fn format(&self, token: &str, number: &str) -> Result<String, RegistryError> {
        Ok(self.get(token)?.format(number)?)
    }

    /// Validates a VAT number prefixed with its country code and returns it compacted with an
    /// uppercase country prefix. Any prefix without a VAT validator, including one that is not
    /// a country code at all, fails with [`RegistryError::MissingValidation`].
    pub fn validate_vatin(&self, number: &str) -> Result<String, RegistryError> {
        let number = clean(number, "");
        let number = number.trim();
        if number.is_empty() {
            return Err(ValidationError::InvalidFormat.into());
        }
        let country = country_prefix(number);
        let descriptor = self.get_vat(country)?;

        // the country modules know their own prefix, some numbers only validate without it
        let result = descriptor
            .validate(number)
            .or_else(|_| descriptor.validate(&number[country.len()..]));
        self.metrics.record_check(&result);
        Ok(format!("{}{}", country.to_ascii_uppercase(), result?))
    }

    /// `Ok(false)` for invalid (or empty) numbers, an error only when the prefix has no VAT
    /// validator.
    pub fn check_vatin(&self, number: &str) -> Result<bool, RegistryError> {
        match self.validate_vatin(number) {
            Ok(_) => Ok(true),
            Err(RegistryError::Invalid(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

/// The first two characters, where a VAT number carries its country code.
fn country_prefix(number: &str) -> &str {
    let end = number
        .char_indices()
        .nth(2)
        .map_or(number.len(), |(idx, _)| idx);
    &number[..end]
}

#[cfg(test)]
mod test {
    use super::*;
    use ::metrics::{Key, Label};
    use metrics_util::debugging::DebugValue;
    use metrics_util::debugging::DebuggingRecorder;
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    fn default_registry() -> Registry {
        Registry::new(&RegistryConfig::default()).unwrap()
    }

    #[test]
    fn lookup_by_token() {
        let registry = default_registry();
        assert_eq!(registry.tokens().count(), 12);
        assert_eq!(registry.get("isbn").unwrap().kind, IdentifierKind::Isbn);
        assert_eq!(registry.get("NL.BSN").unwrap().kind, IdentifierKind::NlBsn);
        assert_eq!(
            registry.get("us.ssn").unwrap_err(),
            RegistryError::MissingValidation("us.ssn".to_string())
        );
        assert_eq!(registry.get_vat("FR").unwrap().kind, IdentifierKind::FrTva);
        assert_eq!(
            registry.get_vat("xx").unwrap_err(),
            RegistryError::MissingValidation("xx".to_string())
        );
    }

    #[test]
    fn operations_by_token() {
        let registry = default_registry();
        assert_eq!(
            registry.validate("isbn", "978-0-471-11709-4").as_deref(),
            Ok("9780471117094")
        );
        assert_eq!(
            registry.validate("isbn", "978-0-471-11709-5"),
            Err(RegistryError::Invalid(ValidationError::InvalidChecksum))
        );
        assert_eq!(registry.is_valid("es.dni", "54362315K"), Ok(true));
        assert_eq!(registry.is_valid("es.dni", "54362315Z"), Ok(false));
        assert_eq!(
            registry.is_valid("es.nie", "X2482300W"),
            Err(RegistryError::MissingValidation("es.nie".to_string()))
        );
        assert_eq!(registry.compact("issn", "0024 9319").as_deref(), Ok("00249319"));
        assert_eq!(
            registry.format("nl.bsn", "111222333").as_deref(),
            Ok("1112.22.333")
        );
    }

    #[test]
    fn restricted_registry() {
        let config = RegistryConfig::empty()
            .kinds(vec![IdentifierKind::Isbn])
            .vat_countries(vec!["NL".to_string()]);
        let registry = Registry::new(&config).unwrap();
        assert!(registry.get("isbn").is_ok());
        assert!(registry.get("issn").is_err());
        assert_eq!(registry.check_vatin("NL004495445B01"), Ok(true));
        assert_eq!(
            registry.check_vatin("DE136695976"),
            Err(RegistryError::MissingValidation("DE".to_string()))
        );

        let unknown_country = RegistryConfig::empty().vat_countries(vec!["us".to_string()]);
        assert_eq!(
            Registry::new(&unknown_country).err(),
            Some(RegistryError::MissingValidation("us".to_string()))
        );
    }

    #[test]
    fn vatin() {
        let registry = default_registry();
        let valid_numbers = vec![
            "FR 40 303 265 045",
            "DE136,695 976",
            "de 136695976",
            "NL4495445B01",
            "NL000099998B57",
            "fr K7399859412",
        ];
        for number in valid_numbers {
            println!("testing for input {number}");
            assert_eq!(registry.check_vatin(number), Ok(true));
        }

        let invalid_numbers = vec!["FR 40 303", "", "  ", "DE136695978", "NL"];
        for number in invalid_numbers {
            println!("testing for input {number}");
            assert_eq!(registry.check_vatin(number), Ok(false));
        }

        let unknown_prefixes = vec![
            ("XX123456", "XX"),
            ("US123456789", "US"),
            ("12345678", "12"),
            ("N", "N"),
            ("é1234", "é1"),
        ];
        for (number, prefix) in unknown_prefixes {
            println!("testing for input {number}");
            assert_eq!(
                registry.check_vatin(number),
                Err(RegistryError::MissingValidation(prefix.to_string()))
            );
        }

        assert_eq!(
            registry.validate_vatin("fr 40 303 265 045").as_deref(),
            Ok("FR40303265045")
        );
        assert_eq!(
            registry.validate_vatin("nl4495445b01").as_deref(),
            Ok("NL004495445B01")
        );
    }

    #[test]
    fn should_submit_registry_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            let registry = default_registry();
            registry.is_valid("isbn", "9780471117094").unwrap();
            registry.is_valid("isbn", "9780471117095").unwrap();
            registry.is_valid("issn", "0024-9319").unwrap();
            registry.is_valid("xx.yy", "1").unwrap_err();
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let lookups = snapshot
            .get(&CompositeKey::new(Counter, Key::from_name("registry.lookups")))
            .expect("metric not found");
        assert_eq!(lookups.2, DebugValue::Counter(4));

        let missing = snapshot
            .get(&CompositeKey::new(
                Counter,
                Key::from_name("registry.missing_validation"),
            ))
            .expect("metric not found");
        assert_eq!(missing.2, DebugValue::Counter(1));

        let valid = snapshot
            .get(&CompositeKey::new(
                Counter,
                Key::from_parts(
                    "validation.checks",
                    vec![Label::new("result", "valid")],
                ),
            ))
            .expect("metric not found");
        assert_eq!(valid.2, DebugValue::Counter(2));

        let invalid = snapshot
            .get(&CompositeKey::new(
                Counter,
                Key::from_parts(
                    "validation.checks",
                    vec![Label::new("result", "invalid")],
                ),
            ))
            .expect("metric not found");
        assert_eq!(invalid.2, DebugValue::Counter(1));
    }
}
