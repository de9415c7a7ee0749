//! Reply accumulation.
//!
//! The reducer is pure so it can be tested without any transport;
//! [`drain_fragments`] is the only place that actually pulls from a stream.

use futures::{Stream, StreamExt};
use jinro_types::Result;

/// Append one fragment to the reply so far.
pub fn accumulate(mut acc: String, fragment: &str) -> String {
    acc.push_str(fragment);
    acc
}

/// Drain `stream` in arrival order, calling `on_progress` with every
/// intermediate accumulated value. Empty fragments are skipped.
///
/// Returns the full reply when the stream ends, or the first error.
/// Nothing is pulled from the stream after an error.
pub async fn drain_fragments<S, F>(mut stream: S, mut on_progress: F) -> Result<String>
where
    S: Stream<Item = Result<String>> + Unpin,
    F: FnMut(&str),
{
    let mut acc = String::new();
    while let Some(item) = stream.next().await {
        let fragment = item?;
        if fragment.is_empty() {
            continue;
        }
        acc = accumulate(acc, &fragment);
        on_progress(&acc);
    }
    Ok(acc)
}
