use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Something that hands out lines of user input one at a time.
///
/// `Ok(None)` means the input is exhausted; `Err` means reading failed.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Adapts any buffered reader (stdin, a file, a byte slice) into a `LineSource`.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> ReaderSource<R> {
        ReaderSource { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Pre-scripted lines, handy for driving the prediction loop in tests.
impl LineSource for VecDeque<String> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}
