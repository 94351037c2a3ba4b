use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use listgen_core::{FieldId, FieldMode, FieldSet};

use crate::digest::digest;
use crate::errors::GenerationError;
use crate::generators::{
    MOBILE_PREFIXES, PHONE_PREFIXES, draw_phone, random_consent, random_id_code, random_name,
};
use crate::model::{Batch, GenerateOptions, GeneratedRow, GenerationReport};

/// Entry point for generating batches from a field configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate `rows` records.
    ///
    /// The configuration is re-validated first; if any fixed or prefixed
    /// field is invalid the call is refused with the full report and no rows.
    pub fn generate(&self, fields: &FieldSet, rows: usize) -> Result<Batch, GenerationError> {
        let start = Instant::now();
        let fields = fields.validated();
        let validation = fields.report();
        if !validation.is_ok() {
            warn!(
                errors = validation.errors.len(),
                details = %validation,
                "generation refused"
            );
            return Err(GenerationError::Rejected(validation));
        }

        let seed = self.options.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = GenerationReport::new(run_id.clone(), seed, rows as u64, &fields);

        info!(run_id = %run_id, rows = rows as u64, seed, "generation started");

        let plan = RowPlan::new(&fields);
        let mut generated = Vec::with_capacity(rows);
        for index in 0..rows {
            let row = self.generate_row(&plan, index as u64 + 1, &mut rng, &mut report)?;
            generated.push(row);
        }

        report.rows_generated = generated.len() as u64;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            rows_generated = report.rows_generated,
            phone_redraws = report.phone_redraws,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(Batch {
            rows: generated,
            report,
        })
    }

    fn generate_row(
        &self,
        plan: &RowPlan<'_>,
        id: u64,
        rng: &mut dyn rand::RngCore,
        report: &mut GenerationReport,
    ) -> Result<GeneratedRow, GenerationError> {
        let consent = match plan.consent {
            Source::Random => random_consent(rng),
            Source::Literal(value) | Source::Prefixed(value) => value.to_string(),
        };

        let id_card = match plan.id_card {
            Source::Random => random_id_code(rng),
            Source::Literal(value) | Source::Prefixed(value) => value.to_string(),
        };

        let name = match plan.name {
            Source::Random => random_name(rng),
            Source::Literal(value) => value.to_string(),
            Source::Prefixed(prefix) => format!("{prefix}-{}", random_name(rng)),
        };

        let mobile = match plan.mobile {
            Source::Random => self.phone(rng, MOBILE_PREFIXES, &[], report)?,
            Source::Literal(value) | Source::Prefixed(value) => value.to_string(),
        };

        let hash_id = digest(&id_card);

        let mut used = Vec::with_capacity(FieldId::PHONES.len() + 1);
        used.push(mobile.clone());
        for source in plan.phones {
            let value = match source {
                Source::Random => self.phone(rng, PHONE_PREFIXES, &used, report)?,
                Source::Literal(value) | Source::Prefixed(value) => value.to_string(),
            };
            used.push(value);
        }
        let mut phones = used.into_iter().skip(1);
        let mut next_phone = || phones.next().unwrap_or_default();

        Ok(GeneratedRow {
            id,
            consent,
            mobile,
            id_card,
            name,
            hash_id,
            phone1: next_phone(),
            phone2: next_phone(),
            phone3: next_phone(),
            phone4: next_phone(),
        })
    }

    fn phone(
        &self,
        rng: &mut dyn rand::RngCore,
        prefixes: &[&str],
        exclude: &[String],
        report: &mut GenerationReport,
    ) -> Result<String, GenerationError> {
        let draw = draw_phone(rng, prefixes, exclude, self.options.max_phone_attempts)?;
        report.record_phone_redraws(draw.attempts.saturating_sub(1));
        Ok(draw.value)
    }
}

/// Where a field's value comes from in every row of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source<'a> {
    Random,
    Literal(&'a str),
    Prefixed(&'a str),
}

impl<'a> Source<'a> {
    fn resolve(id: FieldId, mode: &'a FieldMode) -> Self {
        match mode {
            FieldMode::Random => Source::Random,
            FieldMode::Fixed(value) => Source::Literal(value),
            FieldMode::StartsWith(value) if id.supports_prefix() => Source::Prefixed(value),
            FieldMode::StartsWith(value) => Source::Literal(value),
        }
    }
}

/// Resolved sources for the configured fields. `hashId` has none: it is
/// always the digest of the row's `idCard`.
#[derive(Debug)]
struct RowPlan<'a> {
    consent: Source<'a>,
    mobile: Source<'a>,
    id_card: Source<'a>,
    name: Source<'a>,
    phones: [Source<'a>; 4],
}

impl<'a> RowPlan<'a> {
    fn new(fields: &'a FieldSet) -> Self {
        let source = |id: FieldId| Source::resolve(id, fields.mode(id));
        Self {
            consent: source(FieldId::Consent),
            mobile: source(FieldId::Mobile),
            id_card: source(FieldId::IdCard),
            name: source(FieldId::Name),
            phones: FieldId::PHONES.map(source),
        }
    }
}
