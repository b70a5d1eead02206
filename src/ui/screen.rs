// Plain-text drawing of the queue

use crate::engine::{Queue, QueueEntry};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

pub const EMPTY_QUEUE: &str = "Queue is empty...";

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

pub fn format_entry(position: usize, entry: &QueueEntry) -> String {
    let mut line = format!(
        "{}: [INPUT: {}, OUTPUT: {}, CRF: {}, VLIBRARY: {}, ALIBRARY: {}, FILE TYPE: {}, AUDIO BITRATE: {}K",
        position,
        entry.input(),
        entry.output,
        entry.crf,
        entry.video_library,
        entry.audio_library,
        entry.container,
        entry.audio_bitrate
    );
    if !entry.extra_args.is_empty() {
        line.push_str(&format!(", EXTRA: {}", entry.extra_args.join(" ")));
    }
    line.push(']');
    line
}

pub fn print_queue<W: Write>(out: &mut W, queue: &Queue) -> io::Result<()> {
    if queue.is_empty() {
        return writeln!(out, "{}", EMPTY_QUEUE);
    }

    for (i, entry) in queue.snapshot().iter().enumerate() {
        writeln!(out, "{}", format_entry(i + 1, entry))?;
    }
    Ok(())
}

pub fn print_files<W: Write>(out: &mut W, files: &[String]) -> io::Result<()> {
    for (i, file) in files.iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, file)?;
    }
    Ok(())
}
