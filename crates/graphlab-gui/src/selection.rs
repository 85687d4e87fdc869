//! Side panel form state and the samples cached for it.

use graphlab::{CurveFamily, Domain, PRESET_COUNT, Params, Samples, registry};
use tracing::{debug, warn};

/// Inputs that determine one evaluation.
#[derive(Clone, Debug, PartialEq)]
struct CacheKey {
    /// Family id.
    family: u32,
    /// Bound parameter values.
    params: Params,
    /// Sampling domain.
    domain: Domain,
}

/// Form state behind the side panel, plus the samples it last produced.
#[derive(Debug)]
pub struct FormState {
    /// The selected family.
    family: &'static CurveFamily,
    /// Parameter values shown in the drag fields.
    pub params: Params,
    /// Sampling domain shown in the domain fields.
    pub domain: Domain,
    /// Index of the preset the parameters came from; cleared on manual edits.
    preset: Option<usize>,
    /// Presets for the selected family.
    presets: Vec<Params>,
    /// Last evaluation and the inputs it was computed from.
    cache: Option<(CacheKey, Result<Samples, String>)>,
    /// Number of evaluations performed so far.
    evaluations: u64,
}

impl FormState {
    /// Form showing family `id` with its first preset and default domain.
    pub fn new(id: u32) -> graphlab::Result<Self> {
        let family = registry().lookup(id)?;
        let presets = registry().templates_for(id, PRESET_COUNT)?;
        Ok(Self {
            family,
            params: family.default_params(),
            domain: family.default_domain,
            preset: Some(0),
            presets,
            cache: None,
            evaluations: 0,
        })
    }

    /// The selected family.
    pub fn family(&self) -> &'static CurveFamily {
        self.family
    }

    /// Presets available for the selected family.
    pub fn presets(&self) -> &[Params] {
        &self.presets
    }

    /// Index of the active preset, if the parameters still match one.
    pub fn preset(&self) -> Option<usize> {
        self.preset
    }

    /// How many times the samples have been recomputed.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Switch to family `id`, resetting parameters and domain.
    ///
    /// Selecting the current family again is a no-op.
    pub fn select_family(&mut self, id: u32) -> graphlab::Result<()> {
        if id == self.family.id {
            return Ok(());
        }
        *self = Self::new(id)?;
        debug!(family = id, name = self.family.name, "family selected");
        Ok(())
    }

    /// Overwrite the parameters with preset `index`; out of range is ignored.
    pub fn select_preset(&mut self, index: usize) {
        if let Some(preset) = self.presets.get(index) {
            self.params = preset.clone();
            self.preset = Some(index);
        }
    }

    /// Set one parameter from a manual edit.
    pub fn set_param(&mut self, name: &'static str, value: f64) {
        if self.params.get(name) != Some(value) {
            self.params.insert(name, value);
            self.preset = None;
        }
    }

    /// Restore the family's default domain.
    pub fn reset_domain(&mut self) {
        self.domain = self.family.default_domain;
    }

    /// Samples for the current form, recomputed only when an input changed.
    ///
    /// On failure the error message replaces any previous samples.
    pub fn samples(&mut self) -> Result<&Samples, &str> {
        let key = CacheKey {
            family: self.family.id,
            params: self.params.clone(),
            domain: self.domain,
        };
        if self.cache.as_ref().is_some_and(|(cached, _)| *cached != key) {
            self.cache = None;
        }

        let family = self.family;
        let evaluations = &mut self.evaluations;
        let (_, result) = self.cache.get_or_insert_with(|| {
            *evaluations += 1;
            let result = family.evaluate(&key.domain, &key.params).map_err(|e| {
                warn!(family = family.id, error = %e, "evaluation failed");
                e.to_string()
            });
            (key, result)
        });
        result.as_ref().map_err(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use graphlab::families::ids;

    use super::*;

    #[test]
    fn new_form_uses_first_preset_and_default_domain() {
        let form = FormState::new(ids::ROSE).expect("rose");
        assert_eq!(form.family().id, ids::ROSE);
        assert_eq!(form.params, form.presets()[0]);
        assert_eq!(form.domain, form.family().default_domain);
        assert_eq!(form.preset(), Some(0));
        assert_eq!(form.presets().len(), PRESET_COUNT);
    }

    #[test]
    fn linear_form_matches_cli_defaults() {
        let form = FormState::new(ids::LINEAR).expect("linear");
        let family = registry().lookup(ids::LINEAR).expect("family");
        assert_eq!(form.params, family.default_params());
        assert_eq!(form.params.get("a"), Some(-1.0));
    }

    #[test]
    fn unknown_family_is_an_error() {
        assert!(FormState::new(9999).is_err());
    }

    #[test]
    fn selecting_a_family_resets_the_form() {
        let mut form = FormState::new(ids::SINE).expect("sine");
        form.set_param("a", 42.0);
        form.domain.samples = 7;
        form.select_family(ids::CIRCLE).expect("circle");
        assert_eq!(form.family().id, ids::CIRCLE);
        assert_eq!(form.params.names().collect::<Vec<_>>(), ["a"]);
        assert_eq!(form.domain, form.family().default_domain);
        assert!(form.select_family(9999).is_err());
        assert_eq!(form.family().id, ids::CIRCLE);
    }

    #[test]
    fn presets_overwrite_and_edits_clear_the_marker() {
        let mut form = FormState::new(ids::CIRCLE).expect("circle");
        form.select_preset(3);
        assert_eq!(form.preset(), Some(3));
        assert_eq!(form.params, form.presets()[3]);

        form.set_param("a", 9.0);
        assert_eq!(form.preset(), None);
        assert_eq!(form.params.get("a"), Some(9.0));

        form.select_preset(PRESET_COUNT);
        assert_eq!(form.preset(), None);
    }

    #[test]
    fn samples_are_cached_until_the_form_changes() {
        let mut form = FormState::new(ids::SINE).expect("sine");
        let len = form.samples().map(Samples::len).expect("samples");
        assert_eq!(len, form.domain.samples);
        form.samples().expect("cached");
        assert_eq!(form.evaluations(), 1);

        form.set_param("a", 1.0);
        form.set_param("a", 3.0);
        form.samples().expect("recomputed");
        assert_eq!(form.evaluations(), 2);

        form.domain.samples = 50;
        assert_eq!(form.samples().map(Samples::len), Ok(50));
        assert_eq!(form.evaluations(), 3);
    }

    #[test]
    fn failures_replace_the_plot() {
        let mut form = FormState::new(ids::SINE).expect("sine");
        form.samples().expect("samples");
        form.domain.stop = form.domain.start;
        let err = form.samples().expect_err("degenerate domain");
        assert!(err.starts_with("evaluation failed"), "{err}");

        form.reset_domain();
        assert!(form.samples().is_ok());
    }
}
