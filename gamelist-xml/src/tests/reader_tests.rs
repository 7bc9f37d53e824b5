use super::*;

/// Reader that hands out `data` and then fails.
struct FailingReader {
    data: &'static [u8],
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream closed"));
        }
        self.served = true;
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        Ok(n)
    }
}

#[test]
fn counts_lines_as_bytes_are_consumed() {
    let mut reader = ChunkReader::new(&b"one\ntwo\nthree"[..]);
    assert_eq!(reader.line(), 1);

    let available = reader.fill_buf().unwrap().len();
    assert_eq!(available, 13);
    reader.consume(4);
    assert_eq!(reader.line(), 2);
    reader.consume(9);
    assert_eq!(reader.line(), 3);
    assert_eq!(reader.consumed(), 13);
}

#[test]
fn reads_in_fixed_chunks() {
    let data = vec![b'x'; CHUNK_SIZE * 2 + 10];
    let mut reader = ChunkReader::new(&data[..]);
    assert_eq!(reader.fill_buf().unwrap().len(), CHUNK_SIZE);
    reader.consume(CHUNK_SIZE);
    assert_eq!(reader.fill_buf().unwrap().len(), CHUNK_SIZE);
    reader.consume(CHUNK_SIZE);
    assert_eq!(reader.fill_buf().unwrap().len(), 10);
    reader.consume(10);
    assert!(reader.fill_buf().unwrap().is_empty());
}

#[test]
fn small_capacity_reads_whole_stream() {
    let mut reader = ChunkReader::with_capacity(3, &b"a\nb\nc\n"[..]);
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, "a\nb\nc\n");
    assert_eq!(reader.line(), 4);
}

#[test]
fn keeps_original_read_failure() {
    let mut reader = ChunkReader::new(FailingReader {
        data: b"<mame>",
        served: false,
    });
    let n = reader.fill_buf().unwrap().len();
    reader.consume(n);

    let err = reader.fill_buf().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);

    let original = reader.take_failure().unwrap();
    assert_eq!(original.kind(), io::ErrorKind::ConnectionReset);
    assert_eq!(original.to_string(), "stream closed");
    assert!(reader.take_failure().is_none());
}

#[test]
fn failed_stream_stays_failed() {
    let mut reader = ChunkReader::new(FailingReader {
        data: b"",
        served: true,
    });
    assert!(reader.fill_buf().is_err());
    assert!(reader.fill_buf().is_err());
}
