use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// `Console` over any line reader and writer.
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StreamConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn write_banner(&mut self, banner: &str) -> Result<()> {
        self.writer.write_all(banner.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<Vec<u8>>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        // Paths need not be UTF-8, so read bytes rather than a `String`.
        let mut line = Vec::new();
        let bytes_read = self.reader.read_until(b'\n', &mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }

        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}
