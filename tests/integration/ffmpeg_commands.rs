// Command synthesis checks against literal argument lists

use kcoder::engine::{EntryOptions, HostPlatform, build_command, format_ffmpeg_cmd, synthesize};

use crate::common::assertions::*;
use crate::common::helpers::*;

const AOM_TUNING: &str = "-row-mt 1 -tiles 4x4 -cpu-used 8";

#[test]
fn test_reference_clip_unix() {
    let clip = entry("clip.mp4", 30, EntryOptions::default());
    assert_eq!(
        format_ffmpeg_cmd(&clip, HostPlatform::Unix),
        "ffmpeg -hwaccel auto -i \"clip.mp4\" -c:v libaom-av1 -crf 30 -b:v 0 -pix_fmt yuv420p -row-mt 1 -tiles 4x4 -cpu-used 8 -c:a libopus -b:a 128K \"clip.webm\""
    );
}

#[test]
fn test_reference_clip_windows() {
    let clip = entry("clip.mp4", 30, EntryOptions::default());
    let unix = format_ffmpeg_cmd(&clip, HostPlatform::Unix);
    let windows = format_ffmpeg_cmd(&clip, HostPlatform::Windows);
    assert_eq!(windows, format!("cmd /c {}", unix));
}

#[test]
fn test_tuning_block_only_for_libaom() {
    for library in ["libaom-av1", "libsvtav1", "librav1e", "libx265", "libvpx-vp9"] {
        let job = entry(
            "clip.mp4",
            30,
            EntryOptions::default().video_library(library),
        );
        let cmd = format_ffmpeg_cmd(&job, HostPlatform::Unix);

        assert_flag_value(&cmd, "-c:v", library);
        if library == "libaom-av1" {
            assert_cmd_contains(&cmd, AOM_TUNING);
        } else {
            assert_cmd_not_contains(&cmd, "-row-mt");
            assert_cmd_not_contains(&cmd, "-tiles");
            assert_cmd_not_contains(&cmd, "-cpu-used");
        }
    }
}

#[test]
fn test_fixed_flags_always_present() {
    let job = entry(
        "talk.mov",
        18,
        EntryOptions::default()
            .video_library("libx264")
            .audio_library("aac")
            .audio_bitrate(256)
            .container("mp4"),
    );
    let cmd = format_ffmpeg_cmd(&job, HostPlatform::Unix);

    assert!(cmd.starts_with("ffmpeg -hwaccel auto -i \"talk.mov\""));
    assert_flag_value(&cmd, "-crf", "18");
    assert_flag_value(&cmd, "-b:v", "0");
    assert_flag_value(&cmd, "-pix_fmt", "yuv420p");
    assert_flag_value(&cmd, "-c:a", "aac");
    assert_flag_value(&cmd, "-b:a", "256K");
    assert!(cmd.ends_with("\"talk.mp4\""));
}

#[test]
fn test_output_is_last_argument() {
    let job = entry("a.b.c.mkv", 30, EntryOptions::default().extra_args("-g 120"));
    let args = synthesize(&job, HostPlatform::Windows);
    assert_eq!(args.last().map(String::as_str), Some("\"a.webm\""));
}

#[test]
fn test_built_command_matches_synthesized_arguments() {
    let job = entry("clip.mp4", 30, EntryOptions::default());
    let args = synthesize(&job, HostPlatform::Unix);
    let cmd = build_command(&job, HostPlatform::Unix);

    let built: Vec<String> = std::iter::once(cmd.get_program().to_string_lossy().to_string())
        .chain(cmd.get_args().map(|a| a.to_string_lossy().to_string()))
        .collect();
    let expected: Vec<String> = args.iter().map(|a| a.trim_matches('"').to_string()).collect();
    assert_eq!(built, expected);
}
