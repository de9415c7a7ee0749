//! Response body → text fragments.
//!
//! Knows nothing about where the bytes come from: the browser reader is
//! adapted into a [`ChunkStream`] by the Gemini provider.

use std::collections::VecDeque;
use std::pin::Pin;

use futures::{Stream, StreamExt, stream};

use jinro_core::ports::FragmentStream;
use jinro_types::Result;

use super::sse::SseDecoder;
use super::wire::chunk_text;

/// Raw body chunks in arrival order. Dropping it releases the body.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>>>>>;

struct ReadState {
    source: Option<ChunkStream>,
    decoder: SseDecoder,
    pending: VecDeque<Result<String>>,
}

impl ReadState {
    fn enqueue(&mut self, payloads: Vec<String>) {
        for payload in payloads {
            self.pending.push_back(chunk_text(&payload));
        }
    }

    /// Stop reading; the rest of the body is discarded.
    fn close(&mut self) {
        self.source = None;
        self.pending.clear();
    }
}

/// One fragment per streamed event. The first `Err` is the last item.
pub fn fragment_stream(chunks: ChunkStream) -> FragmentStream {
    let state = ReadState {
        source: Some(chunks),
        decoder: SseDecoder::new(),
        pending: VecDeque::new(),
    };

    Box::pin(stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.pending.pop_front() {
                if item.is_err() {
                    state.close();
                }
                return Some((item, state));
            }

            let source = state.source.as_mut()?;
            let chunk = source.next().await;
            match chunk {
                Some(Ok(bytes)) => {
                    let payloads = state.decoder.push(&bytes);
                    state.enqueue(payloads);
                }
                Some(Err(e)) => {
                    state.close();
                    state.pending.push_back(Err(e));
                }
                None => {
                    let payloads = state.decoder.finish();
                    state.enqueue(payloads);
                    state.source = None;
                }
            }
        }
    }))
}
