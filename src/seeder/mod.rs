//! The seeding pipeline
//!
//! A [`Seeder`] owns one run: the validated schema, the instance pool, the
//! value source, the persistence sink, and the structural RNG. Phases run
//! strictly in sequence with a sink flush between them:
//!
//! ```text
//! order -> create -> resolve references -> link collections -> link many-to-many
//! ```
//!
//! Per-instance and per-field problems are counted in the report and never
//! abort the run; only the sink's flush failure propagates.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SeedConfig;
use crate::error::SeedResult;
use crate::pool::InstancePool;
use crate::report::SeedReport;
use crate::schema::{Schema, SchemaCatalog};
use crate::sink::PersistenceSink;
use crate::value::ValueSource;

pub mod collections;
pub mod creator;
pub mod order;
pub mod resolver;

pub use order::creation_order;

/// Drives one seeding run over a schema catalog.
pub struct Seeder<S: PersistenceSink> {
    schema: Schema,
    config: SeedConfig,
    source: Box<dyn ValueSource>,
    sink: S,
    pool: InstancePool,
    rng: StdRng,
    report: SeedReport,
    target_override: Option<usize>,
    custom_source: bool,
}

impl<S: PersistenceSink> Seeder<S> {
    /// Build a seeder from a catalog, configuration and persistence sink.
    /// The value source is constructed from the configured variant.
    pub fn new(catalog: &dyn SchemaCatalog, config: SeedConfig, sink: S) -> SeedResult<Self> {
        let schema = Schema::from_catalog(catalog)?;
        let source = config.value_source.build(None);
        Ok(Self {
            schema,
            config,
            source,
            sink,
            pool: InstancePool::new(),
            rng: StdRng::from_entropy(),
            report: SeedReport::new(),
            target_override: None,
            custom_source: false,
        })
    }

    /// Fix the seed for the structural RNG and, unless a custom value
    /// source was installed via [`with_value_source`](Self::with_value_source),
    /// the configured value source too — making the whole run
    /// reproducible. A custom source is kept as-is and owns its own
    /// determinism.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        if !self.custom_source {
            self.source = self.config.value_source.build(Some(seed.wrapping_add(1)));
        }
        self
    }

    /// Replace the value source with a custom implementation. Later
    /// [`with_seed`](Self::with_seed) calls leave it in place.
    pub fn with_value_source(mut self, source: Box<dyn ValueSource>) -> Self {
        self.source = source;
        self.custom_source = true;
        self
    }

    /// Cap the per-type target count below the configured tier. This is
    /// the external bound on run size for callers that cannot afford the
    /// tier's full count.
    pub fn with_target_count(mut self, count: usize) -> Self {
        self.target_override = Some(count);
        self
    }

    /// Per-type target count for this run.
    pub fn target_count(&self) -> usize {
        self.target_override
            .unwrap_or_else(|| self.config.tier.target_count())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn pool(&self) -> &InstancePool {
        &self.pool
    }

    pub fn report(&self) -> &SeedReport {
        &self.report
    }

    /// Release the run's pool to the caller.
    pub fn into_pool(self) -> InstancePool {
        self.pool
    }

    pub(crate) fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Run the full pipeline and return the final report.
    ///
    /// A disabled configuration short-circuits to an empty report. The run
    /// always completes and reports counts, including zero counts for
    /// types that failed entirely.
    pub fn seed_all(&mut self) -> SeedResult<SeedReport> {
        if !self.config.enabled {
            tracing::info!("seeding disabled; skipping");
            return Ok(self.report.clone());
        }

        tracing::info!(
            tier = self.config.tier.as_str(),
            count = self.target_count(),
            entity_types = self.schema.len(),
            "seeding start"
        );

        self.create_all()?;
        self.fix_missing_references()?;
        self.populate_collections()?;
        self.populate_many_to_many_relations()?;

        self.report.log_summary();
        Ok(self.report.clone())
    }
}
