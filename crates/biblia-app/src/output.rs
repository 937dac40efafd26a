use std::io::Write;

use serde::Serialize;

/// Widest bar drawn in text charts
const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Horizontal bar scaled against `max`. Non-zero values always get one block.
pub fn bar(value: usize, max: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let len = (value * BAR_WIDTH).div_ceil(max).clamp(1, BAR_WIDTH);
    "█".repeat(len)
}
