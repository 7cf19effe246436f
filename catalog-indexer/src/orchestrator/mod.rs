//! Orchestrator module for the catalog indexer.
//!
//! Coordinates the assembler, the local dump and the publisher for one run.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use catalog_indexer_shared::WellnessRecord;

use crate::assembler::CatalogAssembler;
use crate::dump::write_catalog;
use crate::errors::CatalogError;
use crate::publisher::{IndexPublisher, PublishSummary};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Records generated.
    pub generated: usize,
    /// Where the dump was written, if enabled.
    pub dump_path: Option<PathBuf>,
    pub publish: PublishSummary,
}

/// Orchestrator that runs generate, dump and upload in sequence.
///
/// Each step must succeed before the next starts. A failed dump means nothing
/// is uploaded.
pub struct Orchestrator {
    assembler: CatalogAssembler,
    publisher: IndexPublisher,
    dump_path: Option<PathBuf>,
}

impl Orchestrator {
    /// Create a new orchestrator with the given components.
    pub fn new(
        assembler: CatalogAssembler,
        publisher: IndexPublisher,
        dump_path: Option<PathBuf>,
    ) -> Self {
        Self {
            assembler,
            publisher,
            dump_path,
        }
    }

    pub fn dump_path(&self) -> Option<&Path> {
        self.dump_path.as_deref()
    }

    /// Generate a fresh catalog from thread-local randomness and publish it.
    pub async fn run(&self) -> Result<RunSummary, CatalogError> {
        // The thread rng is not Send; drop it before the first await.
        let records = self.assembler.assemble(&mut rand::thread_rng());
        self.run_catalog(records).await
    }

    /// Dump and publish an already generated catalog.
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub async fn run_catalog(
        &self,
        records: Vec<WellnessRecord>,
    ) -> Result<RunSummary, CatalogError> {
        info!("Generated {} wellness items", records.len());

        if let Some(path) = &self.dump_path {
            write_catalog(path, &records)?;
        }

        info!("Uploading {} records to the search index", records.len());
        let publish = self.publisher.publish(&records).await?;

        info!(
            records = publish.records,
            batches = publish.batches,
            "Catalog published"
        );

        Ok(RunSummary {
            generated: records.len(),
            dump_path: self.dump_path.clone(),
            publish,
        })
    }
}
