use std::collections::BTreeMap;

use listgen_core::{FieldId, FieldSet};
use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Seed for the batch; a fresh one is drawn per call when absent.
    pub seed: Option<u64>,
    /// Cap on redraws for a single phone value. `None` retries until unique.
    pub max_phone_attempts: Option<u32>,
}

/// One generated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRow {
    /// 1-based position within the batch.
    pub id: u64,
    pub consent: String,
    pub mobile: String,
    pub id_card: String,
    pub name: String,
    pub hash_id: String,
    pub phone1: String,
    pub phone2: String,
    pub phone3: String,
    pub phone4: String,
}

impl GeneratedRow {
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Consent => &self.consent,
            FieldId::Mobile => &self.mobile,
            FieldId::IdCard => &self.id_card,
            FieldId::Name => &self.name,
            FieldId::HashId => &self.hash_id,
            FieldId::Phone1 => &self.phone1,
            FieldId::Phone2 => &self.phone2,
            FieldId::Phone3 => &self.phone3,
            FieldId::Phone4 => &self.phone4,
        }
    }

    /// Values in export column order.
    pub fn values(&self) -> [&str; 9] {
        FieldId::ALL.map(|field| self.value(field))
    }

    pub fn phones(&self) -> [&str; 4] {
        FieldId::PHONES.map(|field| self.value(field))
    }
}

/// Summary of a generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub rows_requested: u64,
    pub rows_generated: u64,
    /// Phone draws discarded because they collided with an earlier number in the row.
    pub phone_redraws: u64,
    pub duration_ms: u64,
    pub field_modes: BTreeMap<FieldId, String>,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, rows_requested: u64, fields: &FieldSet) -> Self {
        let field_modes = fields
            .iter()
            .map(|field| (field.id(), field.mode.kind().as_str().to_string()))
            .collect();
        Self {
            run_id,
            seed,
            rows_requested,
            rows_generated: 0,
            phone_redraws: 0,
            duration_ms: 0,
            field_modes,
        }
    }

    pub fn record_phone_redraws(&mut self, redraws: u32) {
        self.phone_redraws += u64::from(redraws);
    }
}

/// Rows from one generation call, in ascending `id` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub rows: Vec<GeneratedRow>,
    pub report: GenerationReport,
}
