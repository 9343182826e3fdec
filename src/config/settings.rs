use crate::payout::{CLASSIC_TABLE, PayoutTable};

#[derive(Debug, Clone, Copy)]
pub struct PayoutSettings {
    /// Active tier table. Two tables existed over the product's life;
    /// the classic 一二蚊 table is the canonical default and the half-rate
    /// table stays available as `payout::HALF_RATE_TABLE`.
    pub table: PayoutTable,
}

impl Default for PayoutSettings {
    fn default() -> Self {
        Self {
            table: CLASSIC_TABLE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// Directory holding the local JSON slots (session, audit log, user).
    pub data_dir: &'static str,
    /// Default sqlite file for the match-history archive. Overridable with
    /// the DATABASE_PATH environment variable.
    pub database_file: &'static str,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: "data",
            database_file: "match_history.db",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub payout: PayoutSettings,
    pub storage: StorageSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

// Config is passed explicitly (dependency injection) to the stores that
// need it rather than living in a global.
