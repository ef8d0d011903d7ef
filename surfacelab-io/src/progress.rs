//! Byte-count progress reporting for readers

use std::io::{self, BufRead, Read};

/// Wraps a buffered reader and reports the fraction of `total` bytes consumed
pub struct ProgressReader<'a, R> {
    inner: R,
    total: u64,
    consumed: u64,
    callback: &'a mut dyn FnMut(f32),
}

impl<'a, R> ProgressReader<'a, R> {
    pub fn new(inner: R, total: u64, callback: &'a mut dyn FnMut(f32)) -> Self {
        Self {
            inner,
            total,
            consumed: 0,
            callback,
        }
    }

    fn advance(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.consumed += n as u64;
        if self.total > 0 {
            (self.callback)((self.consumed as f64 / self.total as f64).min(1.0) as f32);
        }
    }
}

impl<R: Read> Read for ProgressReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.advance(n);
        Ok(n)
    }
}

impl<R: BufRead> BufRead for ProgressReader<'_, R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
        self.advance(amt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_monotonic_fractions() {
        let data = "line one\nline two\nline three\n";
        let mut seen = Vec::new();
        {
            let mut record = |f: f32| seen.push(f);
            let reader = ProgressReader::new(data.as_bytes(), data.len() as u64, &mut record);
            let lines: Vec<String> = reader.lines().collect::<io::Result<_>>().unwrap();
            assert_eq!(lines.len(), 3);
        }
        assert!(!seen.is_empty());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*seen.last().unwrap(), 1.0);
    }
}
