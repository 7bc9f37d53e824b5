//! Streaming driver: pumps the input through the tokenizer and routes its
//! events through the level stack to the field handlers.

use std::io::{self, Read};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use gamelist_core::RecordSink;

use crate::dispatch;
use crate::error::LoadError;
use crate::field::{Field, FieldEvent, RecordBuilder};
use crate::level::LevelStack;
use crate::reader::ChunkReader;

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records the sink accepted.
    pub committed: usize,
    /// Records the sink refused (e.g. duplicate names).
    pub rejected: usize,
    /// Lines read.
    pub lines: u64,
    /// Bytes read.
    pub bytes: u64,
}

/// Parse a listing from `input`, handing each finished game to `sink`.
///
/// `namespace` is prefixed to game names and references so listings from
/// different engines can share one catalog. Records are only delivered
/// once their element closes; a record in progress when an error occurs
/// is never delivered.
pub fn load<R: Read>(
    input: R,
    namespace: &str,
    sink: &mut dyn RecordSink,
) -> Result<LoadSummary, LoadError> {
    let mut xml = Reader::from_reader(ChunkReader::new(input));
    let mut state = ParseState::new(namespace, sink);
    let mut buf = Vec::new();

    loop {
        let keep_going = {
            let event = xml.read_event_into(&mut buf);
            state.line = xml.get_ref().line();
            match event {
                Ok(Event::Start(ref e)) => state.start(e),
                Ok(Event::Empty(ref e)) => {
                    let opened = state.start(e);
                    if opened {
                        state.close();
                    }
                    opened
                }
                Ok(Event::End(_)) => {
                    state.close();
                    true
                }
                Ok(Event::Text(ref e)) => match e.unescape() {
                    Ok(text) => {
                        state.content(&text);
                        true
                    }
                    Err(err) => {
                        state.latch(LoadError::syntax(state.line, err.to_string()));
                        false
                    }
                },
                Ok(Event::CData(ref e)) => match std::str::from_utf8(e) {
                    Ok(text) => {
                        state.content(text);
                        true
                    }
                    Err(err) => {
                        state.latch(LoadError::syntax(state.line, err.to_string()));
                        false
                    }
                },
                Ok(Event::Eof) => {
                    state.finish();
                    false
                }
                Ok(_) => true,
                Err(quick_xml::Error::Io(err)) => {
                    let err = xml
                        .get_mut()
                        .take_failure()
                        .unwrap_or_else(|| io::Error::new(err.kind(), err.to_string()));
                    state.latch(LoadError::Io(err));
                    false
                }
                Err(err) => {
                    state.latch(LoadError::syntax(state.line, err.to_string()));
                    false
                }
            }
        };
        if !keep_going {
            break;
        }
        buf.clear();
    }

    let reader = xml.get_ref();
    let summary = LoadSummary {
        committed: state.builder.committed(),
        rejected: state.builder.rejected(),
        lines: reader.line(),
        bytes: reader.consumed(),
    };

    match state.error {
        Some(err) => Err(err),
        None => {
            log::debug!(
                "Loaded {} games under `{}' ({} rejected, {} lines, {} bytes)",
                summary.committed,
                namespace,
                summary.rejected,
                summary.lines,
                summary.bytes,
            );
            Ok(summary)
        }
    }
}

/// Open `path` and [`load`] it.
pub fn load_path(
    path: &Path,
    namespace: &str,
    sink: &mut dyn RecordSink,
) -> Result<LoadSummary, LoadError> {
    let file = std::fs::File::open(path)?;
    load(file, namespace, sink)
}

/// Mutable state of one load. Nothing here outlives the call.
struct ParseState<'s> {
    levels: LevelStack,
    builder: RecordBuilder,
    sink: &'s mut dyn RecordSink,
    /// First error seen. Once set, no handler runs again.
    error: Option<LoadError>,
    line: u64,
    seen_root: bool,
}

impl<'s> ParseState<'s> {
    fn new(namespace: &str, sink: &'s mut dyn RecordSink) -> Self {
        Self {
            levels: LevelStack::new(),
            builder: RecordBuilder::new(namespace),
            sink,
            error: None,
            line: 1,
            seen_root: false,
        }
    }

    /// Open an element from its start tag. Returns `false` if the tag
    /// could not be decoded.
    fn start(&mut self, e: &BytesStart<'_>) -> bool {
        if self.seen_root && self.levels.depth() == 0 {
            self.latch(LoadError::syntax(self.line, "junk after document element"));
        }
        match self.decode_start(e) {
            Ok((tag, attributes)) => {
                self.open(&tag, &attributes);
                true
            }
            Err(err) => {
                self.latch(err);
                false
            }
        }
    }

    fn decode_start(
        &self,
        e: &BytesStart<'_>,
    ) -> Result<(String, Vec<(String, String)>), LoadError> {
        let tag = self.utf8(e.name().as_ref())?.to_string();
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| LoadError::syntax(self.line, err.to_string()))?;
            let name = self.utf8(attr.key.as_ref())?.to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| LoadError::syntax(self.line, err.to_string()))?;
            self.check_chars(&value)?;
            attributes.push((name, value.into_owned()));
        }
        Ok((tag, attributes))
    }

    fn utf8<'b>(&self, bytes: &'b [u8]) -> Result<&'b str, LoadError> {
        std::str::from_utf8(bytes).map_err(|err| LoadError::syntax(self.line, err.to_string()))
    }

    /// Reject characters XML 1.0 does not allow in a document, including
    /// ones produced by character references.
    fn check_chars(&self, text: &str) -> Result<(), LoadError> {
        let invalid = text.chars().find(|&c| {
            (c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r'))
                || matches!(c, '\u{FFFE}' | '\u{FFFF}')
        });
        match invalid {
            Some(c) => Err(LoadError::syntax(
                self.line,
                format!("not well-formed (invalid character U+{:04X})", c as u32),
            )),
            None => Ok(()),
        }
    }

    /// Open an element, then replay each attribute as a child element
    /// whose text is the attribute value.
    fn open(&mut self, tag: &str, attributes: &[(String, String)]) {
        self.seen_root = true;
        if !self.levels.push(tag) || self.error.is_some() {
            return;
        }

        let field = self.levels.with_path(dispatch::resolve);
        self.levels.bind(field);
        if let Some(field) = field {
            self.dispatch(field, FieldEvent::Open, tag);
        }

        // Attributes never carry attributes of their own, so this recurses
        // at most one level.
        for (name, value) in attributes {
            self.open(name, &[]);
            self.text(value.as_bytes());
            self.close();
        }
    }

    /// Character data read from the document, as opposed to a replayed
    /// attribute value. Only whitespace may appear outside the root.
    fn content(&mut self, text: &str) {
        if self.levels.depth() == 0 {
            if !text.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r')) {
                let message = if self.seen_root {
                    "junk after document element"
                } else {
                    "text before document element"
                };
                self.latch(LoadError::syntax(self.line, message));
            }
            return;
        }
        match self.check_chars(text) {
            Ok(()) => self.text(text.as_bytes()),
            Err(err) => self.latch(err),
        }
    }

    fn text(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if self.levels.append(bytes).is_err() {
            let tag = self
                .levels
                .current()
                .map(|frame| frame.tag.clone())
                .unwrap_or_default();
            self.latch(LoadError::low_memory(tag, self.line));
        }
    }

    fn close(&mut self) {
        let Some(frame) = self.levels.pop() else {
            return;
        };
        if let Some(field) = frame.field {
            self.dispatch(field, FieldEvent::Data(&frame.data), &frame.tag);
            self.dispatch(field, FieldEvent::Close, &frame.tag);
        }
    }

    fn dispatch(&mut self, field: Field, event: FieldEvent<'_>, tag: &str) {
        if self.error.is_some() {
            return;
        }
        if field
            .handle(event, &mut self.builder, &mut *self.sink)
            .is_err()
        {
            self.latch(LoadError::invalid_state(tag, self.line));
        }
    }

    /// Checks at end of stream.
    fn finish(&mut self) {
        if !self.seen_root {
            self.latch(LoadError::syntax(self.line, "no element found"));
        } else if self.levels.depth() > 0 {
            let open = self.levels.depth();
            self.latch(LoadError::syntax(
                self.line,
                format!("unexpected end of input with {open} element(s) still open"),
            ));
        }
    }

    /// Record an error. Only the first one is kept.
    fn latch(&mut self, err: LoadError) {
        log::error!("{err}");
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
#[path = "tests/load_tests.rs"]
mod tests;
