// Interactive queue session: menu loop and its handlers

use crate::engine::{
    EntryOptions, HostPlatform, Queue, QueueEntry, encode_queue_with, format_ffmpeg_cmd,
    list_available_files, run_inherited,
};
use crate::ui::menu::{MENU_PROMPT, MenuCommand};
use crate::ui::screen::{EMPTY_QUEUE, clear_screen, print_files, print_queue};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed")]
    InputClosed,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Directory offered for file selection; ffmpeg runs here too
    pub directory: PathBuf,
    pub platform: HostPlatform,
    pub clear_screen: bool,
    /// Print the synthesized commands instead of running ffmpeg
    pub dry_run: bool,
}

impl SessionOptions {
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            platform: HostPlatform::current(),
            clear_screen: true,
            dry_run: false,
        }
    }
}

pub struct Session<R, W> {
    queue: Queue,
    input: R,
    out: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(queue: Queue, input: R, out: W, options: SessionOptions) -> Self {
        Self {
            queue,
            input,
            out,
            options,
        }
    }

    pub fn into_parts(self) -> (Queue, W) {
        (self.queue, self.out)
    }

    /// Run the menu until quit or end of input, encoding with inherited terminal streams
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.run_with(|_entry, cmd| run_inherited(cmd))
    }

    /// Same as [`Session::run`], with `runner` standing in for spawning ffmpeg
    pub fn run_with<F>(&mut self, mut runner: F) -> Result<(), SessionError>
    where
        F: FnMut(&QueueEntry, Command) -> io::Result<ExitStatus>,
    {
        tracing::info!(directory = %self.options.directory.display(), "session started");

        let result = self.menu_loop(&mut runner);
        match result {
            Ok(()) | Err(SessionError::InputClosed) => {
                tracing::info!(queued = self.queue.len(), "session ended");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn menu_loop<F>(&mut self, runner: &mut F) -> Result<(), SessionError>
    where
        F: FnMut(&QueueEntry, Command) -> io::Result<ExitStatus>,
    {
        loop {
            self.redraw()?;

            let line = self.prompt(MENU_PROMPT)?;
            match MenuCommand::parse(&line) {
                Some(MenuCommand::Add) => self.add_file()?,
                Some(MenuCommand::Remove) => self.remove_file()?,
                Some(MenuCommand::ChangeCrf) => self.change_crf()?,
                Some(MenuCommand::Encode) => self.encode(runner)?,
                Some(MenuCommand::Quit) => return Ok(()),
                None => {}
            }
        }
    }

    fn redraw(&mut self) -> Result<(), SessionError> {
        if self.options.clear_screen {
            clear_screen(&mut self.out)?;
        }
        print_queue(&mut self.out, &self.queue)?;
        Ok(())
    }

    fn add_file(&mut self) -> Result<(), SessionError> {
        let files = match list_available_files(&self.options.directory, &self.queue) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "directory listing failed");
                writeln!(self.out, "Error: {:#}", e)?;
                return self.pause();
            }
        };

        if files.is_empty() {
            writeln!(self.out, "No files available...")?;
            return self.pause();
        }

        print_files(&mut self.out, &files)?;

        let input = loop {
            let Some(position) = self.prompt_position("Select Input File: ")? else {
                return Ok(());
            };
            match position.checked_sub(1).and_then(|i| files.get(i)) {
                Some(name) => break name.clone(),
                None => writeln!(
                    self.out,
                    "No file at position {} (choose 1-{})",
                    position,
                    files.len()
                )?,
            }
        };

        let crf: u32 = self.prompt_number("CRF Rating: ")?;
        let options = EntryOptions {
            video_library: Some(self.prompt("Video Library: ")?),
            container: Some(self.prompt("Video Filetype: ")?),
            extra_args: Some(self.prompt("Extra Video Params: ")?),
            audio_library: Some(self.prompt("Audio Library: ")?),
            audio_bitrate: self.prompt_optional_number("Audio Bitrate: ")?,
        };

        self.queue.add_entry(input, crf, options);
        Ok(())
    }

    fn remove_file(&mut self) -> Result<(), SessionError> {
        if self.queue.is_empty() {
            writeln!(self.out, "{}", EMPTY_QUEUE)?;
            return self.pause();
        }

        loop {
            let Some(position) = self.prompt_position("Select Entry: ")? else {
                return Ok(());
            };
            match self.queue.remove_entry(position) {
                Ok(_) => return Ok(()),
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        }
    }

    fn change_crf(&mut self) -> Result<(), SessionError> {
        if self.queue.is_empty() {
            writeln!(self.out, "{}", EMPTY_QUEUE)?;
            return self.pause();
        }

        let position = loop {
            let Some(position) = self.prompt_position("Select Entry: ")? else {
                return Ok(());
            };
            match self.queue.get(position) {
                Ok(_) => break position,
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        };

        let crf: u32 = self.prompt_number("CRF Rating: ")?;
        if let Err(e) = self.queue.update_crf(position, crf) {
            writeln!(self.out, "{}", e)?;
            return self.pause();
        }
        Ok(())
    }

    fn encode<F>(&mut self, runner: &mut F) -> Result<(), SessionError>
    where
        F: FnMut(&QueueEntry, Command) -> io::Result<ExitStatus>,
    {
        if self.queue.is_empty() {
            writeln!(self.out, "{} nothing to encode.", EMPTY_QUEUE)?;
            return self.pause();
        }

        if self.options.dry_run {
            for entry in self.queue.snapshot() {
                writeln!(
                    self.out,
                    "{}",
                    format_ffmpeg_cmd(entry, self.options.platform)
                )?;
            }
            return self.pause();
        }

        let clear = self.options.clear_screen;
        let out = &mut self.out;
        let report = encode_queue_with(
            self.queue.snapshot(),
            self.options.platform,
            &self.options.directory,
            |entry, cmd| {
                if clear {
                    let _ = clear_screen(&mut *out);
                }
                runner(entry, cmd)
            },
        );

        tracing::info!(
            total = report.total(),
            succeeded = report.succeeded,
            failed = report.failed,
            "queue pass finished"
        );
        Ok(())
    }

    fn pause(&mut self) -> Result<(), SessionError> {
        self.prompt("Press Enter to continue...")?;
        Ok(())
    }

    /// Print `message` and read one trimmed line
    fn prompt(&mut self, message: &str) -> Result<String, SessionError> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Re-prompt until the answer parses
    fn prompt_number<T: FromStr>(&mut self, message: &str) -> Result<T, SessionError> {
        loop {
            match self.prompt(message)?.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.out, "Input invalid...")?,
            }
        }
    }

    /// Like `prompt_number`, but a blank answer is `None`
    fn prompt_optional_number<T: FromStr>(
        &mut self,
        message: &str,
    ) -> Result<Option<T>, SessionError> {
        loop {
            let answer = self.prompt(message)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.out, "Input invalid...")?,
            }
        }
    }

    /// A 1-based position; blank or `q` cancels
    fn prompt_position(&mut self, message: &str) -> Result<Option<usize>, SessionError> {
        loop {
            let answer = self.prompt(message)?;
            if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(position) => return Ok(Some(position)),
                Err(_) => writeln!(self.out, "Input invalid...")?,
            }
        }
    }
}
