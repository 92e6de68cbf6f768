//! Line-atomic output shared by concurrent workers.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

use tracing::warn;

/// Serializes whole lines from any number of writers onto one stream.
///
/// The lock is taken for exactly one line. Lines from the same caller keep
/// their order; lines from different callers may interleave.
#[derive(Clone)]
pub struct PrintSink {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl PrintSink {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(out))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// A sink that records everything written to it.
    pub fn capture() -> (Self, Captured) {
        let captured = Captured::default();
        (Self::new(captured.clone()), captured)
    }

    pub fn line(&self, line: impl AsRef<str>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{}", line.as_ref()).and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to write output line");
        }
    }

    pub fn blank(&self) {
        self.line("");
    }
}

/// In-memory output of a [`PrintSink::capture`] sink.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    /// Emits a line in several small writes, so a missing lock would tear it.
    struct ByteAtATime(Captured);

    impl Write for ByteAtATime {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            match buf.first() {
                Some(b) => {
                    self.0.write(&[*b])?;
                    thread::yield_now();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_capture_records_lines() {
        let (sink, captured) = PrintSink::capture();
        sink.line("first");
        sink.blank();
        sink.line(String::from("second"));

        assert_eq!(captured.lines(), vec!["first", "", "second"]);
    }

    #[test]
    fn test_concurrent_lines_are_not_torn() {
        let captured = Captured::default();
        let sink = PrintSink::new(ByteAtATime(captured.clone()));

        let handles: Vec<_> = (0..4)
            .map(|writer| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for n in 0..50 {
                        sink.line(format!("[writer-{writer}] line {n:02} payload"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = captured.lines();
        assert_eq!(lines.len(), 200);

        for writer in 0..4 {
            let prefix = format!("[writer-{writer}] ");
            let own: Vec<&String> = lines.iter().filter(|l| l.starts_with(&prefix)).collect();
            assert_eq!(own.len(), 50);
            for (n, line) in own.iter().enumerate() {
                assert_eq!(**line, format!("[writer-{writer}] line {n:02} payload"));
            }
        }
    }
}
