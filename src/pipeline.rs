// src/pipeline.rs
// =============================================================================
// Phase one of a run: fetch and extract every catalog entry.
//
// How it works:
// 1. Each catalog entry becomes one future: fetch the text, then extract its
//    last doc comment right away (no shared state, so this is safe to run
//    side by side)
// 2. Up to `concurrency` futures run at once; they finish in whatever order
//    the network decides
// 3. Results are put back into catalog order before anyone sees them
//
// Phase two (rendering) then walks the results strictly in order.
// =============================================================================

use crate::catalog::Identifier;
use crate::error::DocError;
use crate::extract::{extract, CommentBlock};
use crate::fetch::Fetcher;
use futures::stream::{self, StreamExt};
use tracing::{debug, info_span, warn, Instrument};

/// What happened to one catalog entry
#[derive(Debug)]
pub struct UnitOutcome {
    pub identifier: Identifier,
    pub result: Result<CommentBlock, DocError>,
}

/// Fetches and extracts every identifier. The returned outcomes are in the
/// same order as `catalog`, whatever order the fetches completed in.
pub async fn collect_units(
    catalog: &[Identifier],
    fetcher: &dyn Fetcher,
    concurrency: usize,
) -> Vec<UnitOutcome> {
    let tasks = catalog.iter().enumerate().map(|(position, identifier)| {
        // Log records from fetch and extract (malformed tags included)
        // carry the identifier through this span
        let span = info_span!("unit", id = %identifier);

        async move {
            let result = process_unit(fetcher, identifier).await;
            if let Err(e) = &result {
                warn!("skipping unit: {}", e);
            }

            (
                position,
                UnitOutcome {
                    identifier: identifier.clone(),
                    result,
                },
            )
        }
        .instrument(span)
    });

    let mut finished: Vec<(usize, UnitOutcome)> = stream::iter(tasks)
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    finished.sort_by_key(|(position, _)| *position);
    finished.into_iter().map(|(_, outcome)| outcome).collect()
}

async fn process_unit(
    fetcher: &dyn Fetcher,
    identifier: &Identifier,
) -> Result<CommentBlock, DocError> {
    debug!(location = %fetcher.location(identifier), "fetching");

    let text = fetcher
        .fetch(identifier)
        .await
        .map_err(|e| DocError::FetchFailed {
            identifier: identifier.clone(),
            reason: format!("{:#}", e),
        })?;

    debug!(bytes = text.len(), "fetched");

    extract(&text).map_err(|_| DocError::NoCommentFound {
        identifier: identifier.clone(),
    })
}

/// Splits outcomes into renderable units and failures, keeping catalog order
/// in both.
pub fn partition(outcomes: Vec<UnitOutcome>) -> (Vec<(Identifier, CommentBlock)>, Vec<DocError>) {
    let mut units = Vec::new();
    let mut failures = Vec::new();

    for outcome in outcomes {
        match outcome.result {
            Ok(block) => units.push((outcome.identifier, block)),
            Err(e) => failures.push(e),
        }
    }

    (units, failures)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffer_unordered vs buffered
//    - buffer_unordered(N) yields each result as soon as it is ready
//    - buffered(N) would hold fast results back until the slow ones ahead
//      of them finish
//    - We take the faster one and restore order with sort_by_key afterwards
//
// 2. Why a span per unit?
//    - `.instrument(span)` enters the span every time the future is polled
//    - Any warn!/debug! inside (even deep in the extractor) is tagged with
//      `unit{id=string/pad}` without passing the identifier around
//
// 3. &dyn Fetcher
//    - A trait object: the pipeline works with any fetcher chosen at runtime
//    - async-trait boxes the returned future so the trait stays object safe
// -----------------------------------------------------------------------------
