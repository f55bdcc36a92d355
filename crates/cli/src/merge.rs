//! One-shot merge of the chat-session index from an old workspace store
//! into a new one.
//!
//! Three fallible steps, each terminal on failure: read the old index,
//! read the new index, write the merged index. The new store is only
//! touched in the final step, so any earlier failure leaves it unchanged.

use std::path::Path;

use anyhow::{Context, Result};
use chat_merge_core::{MergeReport, merge_indexes};
use chat_merge_storage::StateDb;

pub(crate) fn run(old_path: &Path, new_path: &Path, dry_run: bool) -> Result<()> {
    // the old store is read-only; close it before opening the target
    let old_index = {
        let old = StateDb::open_read_only(old_path)
            .with_context(|| format!("opening old store {}", old_path.display()))?;
        old.read_session_index()
            .with_context(|| format!("reading session index from {}", old_path.display()))?
    };
    tracing::info!(sessions = old_index.len(), "loaded old index");

    let mut new = StateDb::open_read_write(new_path)
        .with_context(|| format!("opening new store {}", new_path.display()))?;
    let new_index = new
        .read_session_index()
        .with_context(|| format!("reading session index from {}", new_path.display()))?;
    tracing::info!(sessions = new_index.len(), "loaded new index");

    let merged = merge_indexes(&old_index, &new_index);
    let report = MergeReport::new(&old_index, &new_index, &merged);

    if dry_run {
        println!(
            "Merged {} old + {} new = {} total sessions (dry run, nothing written)",
            report.old, report.new, report.total
        );
        return Ok(());
    }

    new.write_session_index(&merged)
        .with_context(|| format!("writing merged session index to {}", new_path.display()))?;
    tracing::info!(sessions = report.total, "committed merged index");

    println!("Merged {} old + {} new = {} total sessions", report.old, report.new, report.total);
    Ok(())
}
