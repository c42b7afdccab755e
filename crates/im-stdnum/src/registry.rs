//! Registry of identifier kinds.
//!
//! The registry is built once from the static set of kinds and is read-only
//! afterwards. Kinds are found by dotted name (`es.dni`, `ean`) or by
//! country code and tag (`ES`, `dni`).

use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::checksum::iso7064::{Mod37_2, Mod37_36, Mod97_10};
use crate::checksum::luhn::Luhn;
use crate::config::StdnumConfig;
use crate::error::{ConfigError, RegistryError};
use crate::identifier::Identifier;
use crate::{be, bic, br, ca, ch, cl, co, cy, ean, ec, ee, es, fr, gn, iban, imei, isbn, lt, nl};
use crate::{no, pl, si, sm, tr, ua, us, za};

lazy_static! {
    static ref DEFAULT_REGISTRY: Registry = Registry::new();
}

/// The process-wide registry with default configuration
pub fn registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Registry of all available identifier kinds.
pub struct Registry {
    kinds: Vec<Box<dyn Identifier>>,
    by_name: HashMap<&'static str, usize>,
    by_country: BTreeMap<&'static str, Vec<usize>>,
}

impl Registry {
    /// Create a registry with every built-in kind and default configuration.
    pub fn new() -> Self {
        Self::build(&StdnumConfig::default())
    }

    /// Create a registry whose kinds honour `config`.
    pub fn with_config(config: &StdnumConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &StdnumConfig) -> Self {
        let mut registry = Self {
            kinds: Vec::new(),
            by_name: HashMap::new(),
            by_country: BTreeMap::new(),
        };

        registry.register_builtins(config);

        debug!(
            kinds = registry.kinds.len(),
            countries = registry.by_country.len(),
            "Built identifier registry"
        );

        registry
    }

    fn register_builtins(&mut self, config: &StdnumConfig) {
        // Generic check digit engines
        self.register(Box::new(Luhn::DECIMAL));
        self.register(Box::new(Mod37_2::DEFAULT));
        self.register(Box::new(Mod37_2::MOD_11_2));
        self.register(Box::new(Mod37_36::DEFAULT));
        self.register(Box::new(Mod37_36::MOD_11_10));
        self.register(Box::new(Mod97_10));

        // International
        self.register(Box::new(bic::Bic));
        self.register(Box::new(ean::Ean));
        self.register(Box::new(iban::Iban));
        self.register(Box::new(imei::Imei));
        self.register(Box::new(isbn::Isbn));

        // National
        self.register(Box::new(be::vat::Vat));
        self.register(Box::new(br::cpf::Cpf));
        self.register(Box::new(ca::bn::Bn));
        self.register(Box::new(ca::sin::Sin));
        self.register(Box::new(ch::ssn::Ssn));
        self.register(Box::new(ch::uid::Uid));
        self.register(Box::new(cl::rut::Rut));
        self.register(Box::new(co::nit::Nit));
        self.register(Box::new(cy::vat::Vat));
        self.register(Box::new(ec::ci::Ci));
        self.register(Box::new(ee::ik::Ik));
        self.register(Box::new(es::dni::Dni));
        self.register(Box::new(es::nie::Nie));
        self.register(Box::new(fr::siren::Siren));
        self.register(Box::new(gn::nifp::Nifp));
        self.register(Box::new(lt::asmens::Asmens::new(
            config.lithuania.validate_birth_date,
        )));
        self.register(Box::new(nl::bsn::Bsn));
        self.register(Box::new(nl::postcode::Postcode));
        self.register(Box::new(no::orgnr::Orgnr));
        self.register(Box::new(pl::nip::Nip));
        self.register(Box::new(si::ddv::Ddv));
        self.register(Box::new(match &config.san_marino.coe_whitelist {
            Some(whitelist) => {
                debug!(entries = whitelist.len(), "Using configured COE whitelist");
                sm::coe::Coe::with_whitelist(whitelist.clone())
            }
            None => sm::coe::Coe::DEFAULT,
        }));
        self.register(Box::new(tr::vkn::Vkn));
        self.register(Box::new(ua::rntrc::Rntrc));
        self.register(Box::new(us::rtn::Rtn));
        self.register(Box::new(za::tin::Tin));
    }

    fn register(&mut self, kind: Box<dyn Identifier>) {
        let index = self.kinds.len();
        let info = *kind.info();
        trace!(name = info.name, "Registering identifier kind");

        self.by_name.insert(info.name, index);
        if let Some(country) = info.country {
            self.by_country.entry(country).or_default().push(index);
        }

        self.kinds.push(kind);
    }

    /// Find a kind by country code and tag (both case-insensitive).
    pub fn lookup(&self, country: &str, tag: &str) -> Result<&dyn Identifier, RegistryError> {
        let country_upper = country.to_ascii_uppercase();
        let indices = self
            .by_country
            .get(country_upper.as_str())
            .ok_or_else(|| RegistryError::UnknownCountry(country.to_string()))?;

        let tag_lower = tag.to_ascii_lowercase();
        indices
            .iter()
            .map(|&i| self.kinds[i].as_ref())
            .find(|kind| kind.info().tag == tag_lower)
            .ok_or_else(|| RegistryError::UnknownKind {
                country: country_upper,
                tag: tag.to_string(),
            })
    }

    /// Find a kind by its dotted name (case-insensitive).
    pub fn get(&self, name: &str) -> Result<&dyn Identifier, RegistryError> {
        self.by_name
            .get(name.to_ascii_lowercase().as_str())
            .map(|&index| self.kinds[index].as_ref())
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
    }

    /// Tags of the kinds registered for a country, in registration order.
    pub fn list_kinds(&self, country: &str) -> Result<Vec<&'static str>, RegistryError> {
        self.by_country
            .get(country.to_ascii_uppercase().as_str())
            .map(|indices| indices.iter().map(|&i| self.kinds[i].info().tag).collect())
            .ok_or_else(|| RegistryError::UnknownCountry(country.to_string()))
    }

    /// Country codes with at least one kind, sorted.
    pub fn countries(&self) -> Vec<&'static str> {
        self.by_country.keys().copied().collect()
    }

    /// All kinds in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Identifier> + '_ {
        self.kinds.iter().map(|kind| kind.as_ref())
    }

    /// Names of every kind that accepts `raw`, in registration order.
    pub fn identify(&self, raw: &str) -> Vec<&'static str> {
        self.iter()
            .filter(|kind| kind.is_valid(raw))
            .map(|kind| kind.info().name)
            .collect()
    }

    /// Get the total number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.iter().map(|k| k.info().name).collect::<Vec<_>>())
            .finish()
    }
}
