//! Line-indexed file content

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TruncateError};

/// Whole-file UTF-8 text with an index of where each line ends.
///
/// Line ends are recorded one past the terminator, so every slice handed out
/// keeps its `\n`, `\r\n` or lone `\r` exactly as it was on disk.
pub struct FileContent {
    text: String,
    line_ends: Vec<usize>,
}

impl FileContent {
    /// Reads `path` fully and indexes its lines.
    ///
    /// The file handle is closed before this returns, on success or error.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut bytes = Vec::new();
        {
            let mut file = File::open(path.as_ref()).map_err(TruncateError::Read)?;
            file.read_to_end(&mut bytes).map_err(TruncateError::Read)?;
        }
        let text = String::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    pub fn from_text(text: String) -> Self {
        let mut content = Self {
            text,
            line_ends: Vec::new(),
        };
        content.build_line_index();
        content
    }

    fn build_line_index(&mut self) {
        let data = self.text.as_bytes();
        let mut i = 0;

        while i < data.len() {
            match data[i] {
                b'\n' => self.line_ends.push(i + 1),
                b'\r' => {
                    if data.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    self.line_ends.push(i + 1);
                }
                _ => {}
            }
            i += 1;
        }

        // Unterminated final line
        if self.line_ends.last().copied().unwrap_or(0) < data.len() {
            self.line_ends.push(data.len());
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_ends.len()
    }

    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Returns line `line_num` (zero-based) including its terminator
    pub fn get_line(&self, line_num: usize) -> Option<&str> {
        let end = *self.line_ends.get(line_num)?;
        let start = if line_num == 0 {
            0
        } else {
            self.line_ends[line_num - 1]
        };
        Some(&self.text[start..end])
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.line_count()).filter_map(move |i| self.get_line(i))
    }

    /// The first `keep_lines` lines as one contiguous slice.
    ///
    /// Asking for more lines than exist returns the whole text.
    pub fn prefix(&self, keep_lines: usize) -> &str {
        if keep_lines == 0 {
            return "";
        }
        match self.line_ends.get(keep_lines - 1) {
            Some(&end) => &self.text[..end],
            None => &self.text,
        }
    }
}
