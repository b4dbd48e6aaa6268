use bytes::BytesMut;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// Payload of a `data:` line, prefix stripped
    Data(String),
    /// `data: [DONE]`
    Done,
}

/// Splits a server-sent event byte stream into events.
///
/// Network chunks do not line up with event boundaries: one chunk may carry several
/// events, and an event (or a multi-byte character) may be cut in half. Bytes are held
/// until a full line is available, so text is only decoded on line boundaries.
#[derive(Debug, Default)]
pub struct SseLineBuffer {
    buffer: BytesMut,
}

impl SseLineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and returns every event completed by it.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|byte| *byte == b'\n') {
            let line = self.buffer.split_to(newline + 1);
            if let Some(event) = parse_line(&line) {
                events.push(event);
            }
        }

        events
    }

    /// Parses whatever is left once the stream has ended.
    pub fn flush(&mut self) -> Option<SseEvent> {
        let rest = self.buffer.split();
        parse_line(&rest)
    }
}

fn parse_line(raw: &[u8]) -> Option<SseEvent> {
    let line = String::from_utf8_lossy(raw);
    let line = line.trim();

    // Blank separators and `event:`, `id:`, `retry:` or `:` comment lines carry no payload.
    let data = line.strip_prefix("data:")?.trim();
    match data {
        "" => None,
        "[DONE]" => Some(SseEvent::Done),
        _ => Some(SseEvent::Data(data.to_string())),
    }
}
