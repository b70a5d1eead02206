// Queue store behaviour: add/remove/update and file availability

use kcoder::engine::{EntryOptions, Queue, QueueError, list_available_files};

use crate::common::helpers::*;

fn three_entry_queue() -> Queue {
    let mut queue = Queue::new();
    queue.add_entry("one.mp4", 30, EntryOptions::default());
    queue.add_entry("two.mp4", 31, EntryOptions::default().video_library("libx265"));
    queue.add_entry("three.mp4", 32, EntryOptions::default().audio_bitrate(96));
    queue
}

#[test]
fn test_remove_first_of_three() {
    let mut queue = three_entry_queue();
    let before = queue.snapshot().to_vec();

    queue.remove_entry(1).unwrap();

    assert_eq!(queue.snapshot(), &before[1..]);
}

#[test]
fn test_remove_last_and_middle() {
    let mut queue = three_entry_queue();
    queue.remove_entry(3).unwrap();
    queue.remove_entry(1).unwrap();

    let inputs: Vec<&str> = queue.snapshot().iter().map(|e| e.input()).collect();
    assert_eq!(inputs, vec!["two.mp4"]);
}

#[test]
fn test_out_of_range_is_reported_not_applied() {
    let mut queue = three_entry_queue();
    let before = queue.snapshot().to_vec();

    assert!(matches!(
        queue.remove_entry(4),
        Err(QueueError::OutOfRange { position: 4, len: 3 })
    ));
    assert!(matches!(
        queue.update_crf(0, 10),
        Err(QueueError::OutOfRange { position: 0, len: 3 })
    ));
    assert_eq!(queue.snapshot(), &before[..]);

    let err = queue.get(7).unwrap_err();
    assert_eq!(err.to_string(), "No entry at position 7 (queue has 3 entries)");
}

#[test]
fn test_update_crf_changes_only_crf() {
    let mut queue = three_entry_queue();
    let before = queue.snapshot().to_vec();

    queue.update_crf(2, 45).unwrap();

    let after = queue.snapshot();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);

    let mut expected = before[1].clone();
    expected.crf = 45;
    assert_eq!(after[1], expected);
}

#[test]
fn test_listing_hides_queued_inputs() {
    let dir = media_dir(&["one.mp4", "two.mp4", "four.mkv", "notes.txt"]);
    let queue = three_entry_queue();

    let files = list_available_files(dir.path(), &queue).unwrap();
    assert_eq!(files, vec!["four.mkv", "notes.txt"]);
}

#[test]
fn test_listing_includes_non_video_files() {
    let dir = media_dir(&["readme", "movie.mp4"]);
    let files = list_available_files(dir.path(), &Queue::new()).unwrap();
    assert_eq!(files, vec!["movie.mp4", "readme"]);
}

#[test]
fn test_listing_skips_directories() {
    let dir = media_dir(&["movie.mp4"]);
    std::fs::create_dir(dir.path().join("season1.mkv")).unwrap();

    let files = list_available_files(dir.path(), &Queue::new()).unwrap();
    assert_eq!(files, vec!["movie.mp4"]);
}
