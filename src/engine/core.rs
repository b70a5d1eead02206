mod ffmpeg_cmd;
mod ffmpeg_info;
mod log;
mod platform;
mod queue;
mod scan;
mod types;

pub use ffmpeg_cmd::{
    EncodeReport, FFMPEG_BIN, build_command, encode_queue_with, format_ffmpeg_cmd, run_inherited,
    synthesize,
};
pub use ffmpeg_info::{ffmpeg_version, parse_version_line};
pub use log::{LOG_ENV, init_logging};
pub use platform::HostPlatform;
pub use queue::{Queue, QueueError};
pub use scan::list_available_files;
pub use types::{
    DEFAULT_AUDIO_BITRATE, DEFAULT_AUDIO_LIBRARY, DEFAULT_CONTAINER, DEFAULT_VIDEO_LIBRARY,
    EntryDefaults, EntryOptions, QueueEntry, derive_output_name,
};
