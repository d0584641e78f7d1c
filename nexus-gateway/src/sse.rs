/// Incremental decoder for the `alt=sse` framing of the streaming endpoint.
///
/// The wire format is line based: `data: <payload>` lines separated by blank
/// lines. Chunks arrive at arbitrary byte boundaries, so incomplete lines are
/// buffered until the next feed.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: String,
}

impl SseDecoder {
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.push_str(&String::from_utf8_lossy(chunk));

        let mut payloads = Vec::new();
        while let Some(index) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=index).collect();
            if let Some(payload) = parse_data_line(line.trim_end_matches(['\r', '\n'])) {
                payloads.push(payload);
            }
        }

        payloads
    }
}

fn parse_data_line(line: &str) -> Option<String> {
    let payload = line.strip_prefix("data:")?.trim_start();
    if payload.is_empty() {
        None
    } else {
        Some(payload.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::SseDecoder;

    #[test]
    fn feed_with_complete_event_returns_payload() {
        let mut decoder = SseDecoder::default();

        let payloads = decoder.feed(b"data: {\"a\":1}\n\n");

        assert_eq!(payloads, vec!["{\"a\":1}".to_string()]);
    }

    #[test]
    fn feed_with_event_split_over_chunks_buffers_until_newline() {
        let mut decoder = SseDecoder::default();

        assert!(decoder.feed(b"data: {\"a\"").is_empty());
        assert!(decoder.feed(b":1}").is_empty());

        let payloads = decoder.feed(b"\ndata: {\"b\":2}\n");

        assert_eq!(
            payloads,
            vec!["{\"a\":1}".to_string(), "{\"b\":2}".to_string()]
        );
    }

    #[test]
    fn feed_ignores_blank_and_non_data_lines() {
        let mut decoder = SseDecoder::default();

        let payloads = decoder.feed(b"event: message\r\n\r\ndata: x\r\n\r\n");

        assert_eq!(payloads, vec!["x".to_string()]);
    }

    #[test]
    fn feed_with_multiple_events_in_one_chunk_keeps_order() {
        let mut decoder = SseDecoder::default();

        let payloads = decoder.feed(b"data: one\n\ndata: two\n\ndata: three\n\n");

        assert_eq!(payloads, vec!["one", "two", "three"]);
    }
}
