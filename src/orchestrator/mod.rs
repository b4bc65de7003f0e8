//! Two-phase acquisition orchestration.
//!
//! A submission runs through two phases:
//!
//! 1. **Generation**: one call to the generative service. Failure aborts the
//!    whole batch and surfaces as a single typed error. Success immediately
//!    publishes the full batch with every entry pending.
//! 2. **Checking**: one availability lookup per entry, all spawned without
//!    waiting on one another. Results flow back over an mpsc channel to a
//!    single applier task, which replaces the affected entry by index in a
//!    fresh copy of the snapshot and republishes it. Completion order among
//!    siblings is unspecified; each update touches exactly one entry.
//!
//! A new submission supersedes the previous batch before generation starts.
//! The applier drops results whose batch id is no longer active, so late
//! lookups for a superseded batch can never mutate a newer batch's entries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio::sync::{mpsc, watch};

use crate::availability::{Availability, AvailabilityLookup, AvailabilityResult};
use crate::error_handling::{OutcomeType, ProcessingStats, SuggestError};
use crate::suggest::{AvailabilityState, Suggestion, SuggestionGenerator, ValidatedOptions};

/// Handle to one submitted batch.
#[derive(Debug)]
pub struct BatchHandle {
    /// Identity of this batch; later submissions get strictly larger ids.
    pub batch_id: u64,
    /// Receives a fresh snapshot after every applied availability result.
    /// The channel closes once every entry is terminal (or the batch is
    /// superseded); the last observed value remains readable.
    pub updates: watch::Receiver<Vec<Suggestion>>,
}

/// Coordinates the generative client and the availability checker.
///
/// Both collaborators are injected at construction; the orchestrator holds no
/// global state beyond the active batch id used for supersession.
pub struct Orchestrator<G, L> {
    generator: Arc<G>,
    lookup: Arc<L>,
    stats: Arc<ProcessingStats>,
    batch_seq: AtomicU64,
    active_batch: Arc<AtomicU64>,
}

impl<G, L> Orchestrator<G, L>
where
    G: SuggestionGenerator + 'static,
    L: AvailabilityLookup + 'static,
{
    /// Creates an orchestrator over the injected service clients.
    pub fn new(generator: Arc<G>, lookup: Arc<L>, stats: Arc<ProcessingStats>) -> Self {
        Orchestrator {
            generator,
            lookup,
            stats,
            batch_seq: AtomicU64::new(0),
            active_batch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Submits one brainstorming request.
    ///
    /// On generation failure the error is returned and no suggestions are
    /// emitted. On success the returned handle already holds the full batch
    /// with every entry pending, and per-entry updates follow as lookups
    /// settle.
    pub async fn submit(&self, options: ValidatedOptions) -> Result<BatchHandle, SuggestError> {
        let batch_id = self.batch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        // Supersede the previous batch before generation starts: from here on
        // its in-flight results are dropped, not merged.
        self.active_batch.store(batch_id, Ordering::SeqCst);
        log::info!("batch {batch_id}: generating suggestions");

        let suggestions = match self.generator.generate(&options).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                self.stats.increment_error(err.kind());
                log::error!("batch {batch_id}: generation failed: {err}");
                return Err(err);
            }
        };
        log::info!(
            "batch {batch_id}: checking availability of {} suggestions",
            suggestions.len()
        );

        let (snapshot_tx, snapshot_rx) = watch::channel(suggestions.clone());
        let (result_tx, result_rx) = mpsc::unbounded_channel();

        let mut tasks = FuturesUnordered::new();
        for (index, suggestion) in suggestions.iter().enumerate() {
            let lookup = Arc::clone(&self.lookup);
            let tx = result_tx.clone();
            let full_name = suggestion.full_name();
            tasks.push(tokio::spawn(async move {
                let result = lookup.check(&full_name).await;
                // A closed receiver just means the batch was superseded.
                let _ = tx.send((index, result));
            }));
        }
        drop(result_tx);

        tokio::spawn(async move {
            while let Some(task_result) = tasks.next().await {
                if let Err(join_error) = task_result {
                    log::warn!("availability task panicked: {join_error:?}");
                }
            }
        });

        tokio::spawn(apply_results(
            batch_id,
            Arc::clone(&self.active_batch),
            Arc::clone(&self.stats),
            result_rx,
            snapshot_tx,
        ));

        Ok(BatchHandle {
            batch_id,
            updates: snapshot_rx,
        })
    }
}

fn state_for(result: AvailabilityResult) -> AvailabilityState {
    match result.availability {
        Availability::Available => AvailabilityState::Available,
        Availability::Taken => AvailabilityState::Unavailable,
        Availability::Indeterminate => AvailabilityState::Unknown {
            reason: result
                .failure_reason
                .unwrap_or_else(|| "availability unknown".to_string()),
        },
    }
}

fn outcome_for(state: &AvailabilityState) -> Option<OutcomeType> {
    match state {
        AvailabilityState::Pending => None,
        AvailabilityState::Available => Some(OutcomeType::Available),
        AvailabilityState::Unavailable => Some(OutcomeType::Taken),
        AvailabilityState::Unknown { .. } => Some(OutcomeType::Indeterminate),
    }
}

/// Applies lookup results to the batch, one entry at a time.
///
/// Dropping the snapshot sender closes the update channel; that happens when
/// every entry is terminal, when the batch is superseded, or when all checker
/// tasks are gone.
async fn apply_results(
    batch_id: u64,
    active_batch: Arc<AtomicU64>,
    stats: Arc<ProcessingStats>,
    mut results: mpsc::UnboundedReceiver<(usize, AvailabilityResult)>,
    snapshots: watch::Sender<Vec<Suggestion>>,
) {
    while let Some((index, result)) = results.recv().await {
        if active_batch.load(Ordering::SeqCst) != batch_id {
            log::debug!("batch {batch_id}: superseded, dropping result for entry {index}");
            return;
        }

        // Immutable replace-by-index: clone the current snapshot, settle the
        // one entry, republish. Readers never observe a half-applied update.
        let mut next = snapshots.borrow().clone();
        let Some(entry) = next.get_mut(index) else {
            log::error!("batch {batch_id}: result for out-of-range entry {index}");
            continue;
        };
        if entry.availability.is_terminal() {
            log::warn!(
                "batch {batch_id}: entry {index} already settled, ignoring duplicate result"
            );
            continue;
        }

        entry.availability = state_for(result);
        if let Some(outcome) = outcome_for(&entry.availability) {
            stats.increment_outcome(outcome);
        }
        log::debug!(
            "batch {batch_id}: entry {index} ({}) settled as {:?}",
            entry.full_name(),
            outcome_for(&entry.availability)
        );

        let done = next.iter().all(|s| s.availability.is_terminal());
        let _ = snapshots.send(next);
        if done {
            log::info!("batch {batch_id}: all availability checks settled");
            return;
        }
    }
}
