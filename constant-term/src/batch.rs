//! Parallel evaluation of root documents.
use num_bigint::BigInt;

use crate::{common::logger::get_logger, config::Config, document::Document, errors::Error};

/// An evaluator of multiple independent root documents.
pub struct Batch {
    workers: usize,
    logger: slog::Logger,
}

impl Batch {
    /// Creates a new batch evaluator.
    pub fn new(config: &Config) -> Self {
        Self {
            workers: config.workers.max(1),
            logger: get_logger("batch"),
        }
    }

    /// Computes the constant terms of the given documents.
    ///
    /// Documents are split between worker threads, the results are returned
    /// in the order of the documents.
    pub fn constant_terms(&self, documents: &[Document]) -> Vec<Result<BigInt, Error>> {
        if documents.is_empty() {
            return Vec::new();
        }

        let chunk_size = (documents.len() + self.workers - 1) / self.workers;
        debug!(self.logger, "evaluating documents";
            "documents" => documents.len(),
            "workers" => self.workers,
            "chunk_size" => chunk_size
        );

        if self.workers == 1 || documents.len() == 1 {
            return documents.iter().map(Document::constant_term).collect();
        }

        crossbeam::scope(|scope| {
            let handles: Vec<_> = documents
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move |_| {
                        chunk
                            .iter()
                            .map(Document::constant_term)
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| handle.join().expect("worker should not panic"))
                .collect()
        })
        .expect("workers should not panic")
    }
}
