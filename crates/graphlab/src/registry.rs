//! The id-keyed family catalogue and the process-wide built-in registry.

use std::{collections::BTreeMap, sync::OnceLock};

use crate::{
    domain::Domain,
    error::{Error, Result},
    families,
    family::CurveFamily,
    params::Params,
    samples::Samples,
};

/// Id-indexed catalogue of curve families.
///
/// Built once, then only read. Iteration is always by ascending id.
#[derive(Debug, Default)]
pub struct Registry {
    /// Families keyed by id.
    families: BTreeMap<u32, CurveFamily>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a family, rejecting an id that is already taken.
    pub fn register(&mut self, family: CurveFamily) -> Result<()> {
        if self.families.contains_key(&family.id) {
            return Err(Error::DuplicateId(family.id));
        }
        self.families.insert(family.id, family);
        Ok(())
    }

    /// The family registered under `id`.
    pub fn lookup(&self, id: u32) -> Result<&CurveFamily> {
        self.families.get(&id).ok_or(Error::NotFound(id))
    }

    /// Resolve a family by numeric id or case-insensitive name.
    pub fn find(&self, query: &str) -> Result<&CurveFamily> {
        let query = query.trim();
        if let Ok(id) = query.parse::<u32>() {
            return self.lookup(id);
        }
        self.list_all()
            .find(|f| {
                f.name.eq_ignore_ascii_case(query) || short_name(f.name).eq_ignore_ascii_case(query)
            })
            .ok_or_else(|| Error::UnknownName(query.to_string()))
    }

    /// All families by ascending id.
    pub fn list_all(&self) -> impl ExactSizeIterator<Item = &CurveFamily> {
        self.families.values()
    }

    /// Number of registered families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// `count` presets for family `id`.
    pub fn templates_for(&self, id: u32, count: usize) -> Result<Vec<Params>> {
        let family = self.lookup(id)?;
        if count == 0 {
            return Err(Error::InvalidTemplateCount);
        }
        Ok(family.templates(count))
    }

    /// Evaluate family `id`.
    ///
    /// Without a domain the family's default is used; without parameters
    /// its first preset is.
    pub fn evaluate(
        &self,
        id: u32,
        domain: Option<Domain>,
        params: Option<&Params>,
    ) -> Result<Samples> {
        let family = self.lookup(id)?;
        let domain = domain.unwrap_or(family.default_domain);
        match params {
            Some(p) => family.evaluate(&domain, p),
            None => family.evaluate(&domain, &family.default_params()),
        }
    }
}

/// Name without its parenthesised qualifier, e.g. `Cubic` for `Cubic (odd)`.
fn short_name(name: &str) -> &str {
    name.split_once(" (").map_or(name, |(head, _)| head)
}

/// Build a registry holding every built-in family.
pub fn build_registry() -> Result<Registry> {
    let mut registry = Registry::new();
    families::register_builtin(&mut registry)?;
    Ok(registry)
}

/// The process-wide built-in registry.
///
/// Built on first use.
///
/// # Panics
///
/// Panics if two built-in families share an id.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| build_registry().expect("built-in family ids are unique"))
}
