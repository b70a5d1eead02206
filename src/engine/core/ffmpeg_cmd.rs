use super::platform::HostPlatform;
use super::types::QueueEntry;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

pub const FFMPEG_BIN: &str = "ffmpeg";

/// Encoder that gets the fixed tuning block
const AOM_AV1: &str = "libaom-av1";
const AOM_TUNING: [&str; 6] = ["-row-mt", "1", "-tiles", "4x4", "-cpu-used", "8"];

fn quoted(path: &str) -> String {
    format!("\"{}\"", path)
}

/// Synthesize the full ffmpeg invocation for one entry.
///
/// Pure: the same entry and platform always give the same list. Paths are wrapped in double
/// quotes the way a shell command line would show them; [`build_command`] removes them again
/// when the arguments are handed to the OS directly.
pub fn synthesize(entry: &QueueEntry, platform: HostPlatform) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();

    // cmd.exe resolves the program name for us
    if platform.is_windows() {
        args.push("cmd".to_string());
        args.push("/c".to_string());
    }

    args.push(FFMPEG_BIN.to_string());
    args.extend(["-hwaccel", "auto"].map(String::from));
    args.push("-i".to_string());
    args.push(quoted(entry.input()));
    args.push("-c:v".to_string());
    args.push(entry.video_library.clone());
    args.push("-crf".to_string());
    args.push(entry.crf.to_string());
    args.extend(["-b:v", "0", "-pix_fmt", "yuv420p"].map(String::from));

    if entry.video_library == AOM_AV1 {
        args.extend(AOM_TUNING.map(String::from));
    }

    args.extend(entry.extra_args.iter().cloned());

    args.push("-c:a".to_string());
    args.push(entry.audio_library.clone());
    args.push("-b:a".to_string());
    args.push(format!("{}K", entry.audio_bitrate));
    args.push(quoted(&entry.output));

    args
}

/// Strip one pair of surrounding double quotes
fn unquote(arg: &str) -> &str {
    arg.strip_prefix('"')
        .and_then(|a| a.strip_suffix('"'))
        .unwrap_or(arg)
}

/// Build a ready-to-spawn command for an entry.
/// `Command` does its own argument quoting, so the display quotes are removed here.
pub fn build_command(entry: &QueueEntry, platform: HostPlatform) -> Command {
    let args = synthesize(entry, platform);
    let mut parts = args.iter().map(|a| unquote(a));

    let program = parts.next().unwrap_or(FFMPEG_BIN);
    let mut cmd = Command::new(program);
    cmd.args(parts);
    cmd
}

/// Format the synthesized invocation as one line for display
pub fn format_ffmpeg_cmd(entry: &QueueEntry, platform: HostPlatform) -> String {
    synthesize(entry, platform).join(" ")
}

/// Spawn with inherited stdin/stdout/stderr and block until the child exits
pub fn run_inherited(mut cmd: Command) -> io::Result<ExitStatus> {
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
}

/// Tally of one pass over the queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl EncodeReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Encode every entry in order, one child process at a time.
///
/// `run` receives each entry with its prepared command (working directory already set to `dir`)
/// and must block until the process is done. A failed or unspawnable entry never stops the
/// loop and never touches the queue.
pub fn encode_queue_with<F>(
    entries: &[QueueEntry],
    platform: HostPlatform,
    dir: &Path,
    mut run: F,
) -> EncodeReport
where
    F: FnMut(&QueueEntry, Command) -> io::Result<ExitStatus>,
{
    let mut report = EncodeReport::default();

    for (i, entry) in entries.iter().enumerate() {
        let mut cmd = build_command(entry, platform);
        cmd.current_dir(dir);

        tracing::info!(
            position = i + 1,
            command = %format_ffmpeg_cmd(entry, platform),
            "starting encode"
        );

        match run(entry, cmd) {
            Ok(status) if status.success() => {
                tracing::info!(input = entry.input(), output = %entry.output, "encode finished");
                report.succeeded += 1;
            }
            Ok(status) => {
                tracing::warn!(input = entry.input(), %status, "encode exited unsuccessfully");
                report.failed += 1;
            }
            Err(e) => {
                tracing::warn!(input = entry.input(), error = %e, "failed to start ffmpeg");
                report.failed += 1;
            }
        }
    }

    report
}
