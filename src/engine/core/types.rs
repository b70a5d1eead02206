use serde::{Deserialize, Serialize};

pub const DEFAULT_VIDEO_LIBRARY: &str = "libaom-av1";
pub const DEFAULT_CONTAINER: &str = "webm";
pub const DEFAULT_AUDIO_LIBRARY: &str = "libopus";
pub const DEFAULT_AUDIO_BITRATE: u32 = 128;

/// Values used for any optional field the user leaves blank (or zero)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDefaults {
    #[serde(default = "default_video_library")]
    pub video_library: String,

    #[serde(default = "default_container")]
    pub container: String,

    #[serde(default = "default_audio_library")]
    pub audio_library: String,

    /// Audio bitrate in kbps
    #[serde(default = "default_audio_bitrate")]
    pub audio_bitrate: u32,
}

fn default_video_library() -> String {
    DEFAULT_VIDEO_LIBRARY.to_string()
}

fn default_container() -> String {
    DEFAULT_CONTAINER.to_string()
}

fn default_audio_library() -> String {
    DEFAULT_AUDIO_LIBRARY.to_string()
}

fn default_audio_bitrate() -> u32 {
    DEFAULT_AUDIO_BITRATE
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self {
            video_library: default_video_library(),
            container: default_container(),
            audio_library: default_audio_library(),
            audio_bitrate: default_audio_bitrate(),
        }
    }
}

/// Optional answers collected while adding a file.
/// `None`, blank strings and a zero bitrate all mean "keep the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryOptions {
    pub video_library: Option<String>,
    pub container: Option<String>,
    pub audio_library: Option<String>,
    pub audio_bitrate: Option<u32>,
    pub extra_args: Option<String>,
}

impl EntryOptions {
    pub fn video_library(mut self, value: impl Into<String>) -> Self {
        self.video_library = Some(value.into());
        self
    }

    pub fn container(mut self, value: impl Into<String>) -> Self {
        self.container = Some(value.into());
        self
    }

    pub fn audio_library(mut self, value: impl Into<String>) -> Self {
        self.audio_library = Some(value.into());
        self
    }

    pub fn audio_bitrate(mut self, value: u32) -> Self {
        self.audio_bitrate = Some(value);
        self
    }

    pub fn extra_args(mut self, value: impl Into<String>) -> Self {
        self.extra_args = Some(value.into());
        self
    }
}

/// One transcode job waiting in the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    input: String,
    pub output: String,
    pub crf: u32,
    pub video_library: String,
    pub container: String,
    pub audio_library: String,
    pub audio_bitrate: u32,
    pub extra_args: Vec<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl QueueEntry {
    /// Build an entry, filling blank options from `defaults` and deriving the output name
    pub fn new(
        input: impl Into<String>,
        crf: u32,
        options: EntryOptions,
        defaults: &EntryDefaults,
    ) -> Self {
        let input = input.into();

        let video_library =
            non_blank(options.video_library).unwrap_or_else(|| defaults.video_library.clone());
        let container = non_blank(options.container).unwrap_or_else(|| defaults.container.clone());
        let audio_library =
            non_blank(options.audio_library).unwrap_or_else(|| defaults.audio_library.clone());
        let audio_bitrate = options
            .audio_bitrate
            .filter(|b| *b != 0)
            .unwrap_or(defaults.audio_bitrate);

        // Unbalanced quotes make shlex give up; fall back to whitespace splitting
        let extra_args = non_blank(options.extra_args)
            .map(|raw| {
                shlex::split(&raw)
                    .unwrap_or_else(|| raw.split_whitespace().map(str::to_string).collect())
            })
            .unwrap_or_default();

        let output = derive_output_name(&input, &container);

        Self {
            input,
            output,
            crf,
            video_library,
            container,
            audio_library,
            audio_bitrate,
            extra_args,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

/// `<text before the first '.'>.<container>`
pub fn derive_output_name(input: &str, container: &str) -> String {
    let stem = input.split('.').next().unwrap_or_default();
    format!("{}.{}", stem, container)
}
