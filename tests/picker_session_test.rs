//! Scripted runs of the interactive picker.

mod common;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use common::{RecordingEncoder, write_silent_wav};
use sfxkit::effects::CLIP_EFFECTS;
use sfxkit::encoder::OutputCodec;
use sfxkit::picker::{PickSession, PickSettings, PickSummary, command};
use tempfile::TempDir;

struct Fixture {
    _temp_dir: TempDir,
    source: PathBuf,
    output_dir: PathBuf,
    preview: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("buttons.wav");
        let output_dir = temp_dir.path().join("out");
        let preview = temp_dir.path().join("preview.wav");
        std::fs::create_dir_all(&output_dir).unwrap();
        Self {
            _temp_dir: temp_dir,
            source,
            output_dir,
            preview,
        }
    }

    fn run(&self, encoder: &RecordingEncoder, script: &str) -> (PickSummary, String) {
        let mut out = Vec::new();
        let summary = {
            let mut session = PickSession::new(
                Cursor::new(script.as_bytes().to_vec()),
                &mut out,
                encoder,
                &self.source,
                5.0,
                &self.output_dir,
                "128k",
                &self.preview,
            );
            session.run(CLIP_EFFECTS).unwrap()
        };
        (summary, String::from_utf8(out).unwrap())
    }

    fn clip(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}

fn mp3() -> OutputCodec {
    OutputCodec::Mp3 {
        bitrate: "128k".to_string(),
    }
}

#[test]
fn test_skip_then_commit_then_quit() {
    let fx = Fixture::new();
    let encoder = RecordingEncoder::new();

    let (summary, output) = fx.run(&encoder, "skip\n0.5,1.2\ny\nquit\n");

    assert_eq!(summary.skipped, vec!["button_click"]);
    assert_eq!(summary.committed, vec!["card_deal"]);
    assert!(summary.failed.is_empty());
    assert!(summary.quit);

    let jobs = encoder.jobs();
    assert_eq!(jobs.len(), 2);

    let preview = &jobs[0];
    assert_eq!(preview.output, fx.preview);
    assert_eq!(preview.codec, OutputCodec::Container);
    assert_eq!(preview.start, Some(0.5));
    assert_eq!(preview.length, Some(1.2 - 0.5));

    let commit = &jobs[1];
    assert_eq!(commit.input, fx.source);
    assert_eq!(commit.output, fx.clip("card_deal.mp3"));
    assert_eq!(commit.start, Some(0.5));
    assert_eq!(commit.length, Some(1.2 - 0.5));
    assert_eq!(commit.codec, mp3());

    assert!(output.contains("Skipping button click"));
    assert!(output.contains("✓ card_deal.mp3 saved"));
    assert!(output.contains("Quitting."));
}

#[test]
fn test_invalid_ranges_prompt_again() {
    let fx = Fixture::new();
    let encoder = RecordingEncoder::new();

    let (summary, output) = fx.run(&encoder, "abc\n0.5\n3,1\n0,9\n0,1\ny\n");

    assert_eq!(summary.committed, vec!["button_click"]);
    // Input ran out at the second effect.
    assert!(summary.quit);
    assert_eq!(encoder.jobs().len(), 2);
    assert_eq!(output.matches("Enter range (0-5.0s): ").count(), 6);
}

#[test]
fn test_rejected_preview_asks_for_new_range() {
    let fx = Fixture::new();
    let encoder = RecordingEncoder::new();

    let (summary, output) = fx.run(&encoder, "0,1\nn\n1,2\ny\nquit\n");

    assert_eq!(summary.committed, vec!["button_click"]);
    assert!(output.contains("Enter a new range."));

    let jobs = encoder.jobs();
    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs[0].start, Some(0.0));
    assert_eq!(jobs[1].start, Some(1.0));
    assert_eq!(jobs[2].output, fx.clip("button_click.mp3"));
    assert_eq!(jobs[2].start, Some(1.0));
    assert_eq!(jobs[2].length, Some(1.0));
}

#[test]
fn test_preview_is_capped_and_can_be_replayed() {
    let fx = Fixture::new();
    let encoder = RecordingEncoder::new();

    let (summary, _) = fx.run(&encoder, "0,3\npreview\ny\nquit\n");
    assert_eq!(summary.committed, vec!["button_click"]);

    let jobs = encoder.jobs();
    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs[0], jobs[1]);
    assert_eq!(jobs[0].length, Some(2.0));
    assert_eq!(jobs[2].length, Some(3.0));
    assert_eq!(jobs[2].codec, mp3());
}

#[test]
fn test_commit_failure_moves_to_next_effect() {
    let fx = Fixture::new();
    let encoder = RecordingEncoder::failing_on(&["button_click.mp3"]);

    let (summary, output) = fx.run(&encoder, "0,1\ny\n1,2\ny\nquit\n");

    assert_eq!(summary.failed, vec!["button_click"]);
    assert_eq!(summary.committed, vec!["card_deal"]);
    assert!(output.contains("button_click.mp3 could not be written"));
    assert!(!fx.clip("button_click.mp3").exists());
    assert!(fx.clip("card_deal.mp3").exists());
}

#[test]
fn test_preview_failure_returns_to_range_prompt() {
    let fx = Fixture::new();
    let encoder = RecordingEncoder::failing_on(&["preview.wav"]);

    let (summary, output) = fx.run(&encoder, "0,1\nskip\nquit\n");

    assert_eq!(summary.skipped, vec!["button_click"]);
    assert!(summary.committed.is_empty());
    assert_eq!(encoder.jobs().len(), 1);
    assert!(output.contains("Preview failed"));
    assert!(!output.contains("Use this clip?"));
}

#[test]
fn test_keywords_are_case_insensitive() {
    let fx = Fixture::new();
    let encoder = RecordingEncoder::new();

    let (summary, _) = fx.run(&encoder, "SKIP\n Quit \n");

    assert_eq!(summary.skipped, vec!["button_click"]);
    assert!(summary.quit);
    assert!(encoder.jobs().is_empty());
}

#[test]
fn test_preview_file_is_removed_when_session_ends() {
    let fx = Fixture::new();
    let encoder = RecordingEncoder::new();

    let (_, output) = fx.run(&encoder, "0,1\nn\nquit\n");

    assert!(output.contains("Preview ready"));
    assert!(!fx.preview.exists());
}

#[test]
fn test_all_effects_answered_does_not_report_quit() {
    let fx = Fixture::new();
    let encoder = RecordingEncoder::new();

    let script = "skip\n".repeat(CLIP_EFFECTS.len());
    let (summary, _) = fx.run(&encoder, &script);

    assert_eq!(summary.skipped.len(), CLIP_EFFECTS.len());
    assert!(!summary.quit);
}

fn pick_settings(root: &Path) -> PickSettings {
    PickSettings {
        output_dir: root.join("clips"),
        bitrate: "96k".to_string(),
        preview_path: root.join("preview.wav"),
    }
}

#[test]
fn test_execute_reports_duration_and_summary() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("buttons.wav");
    write_silent_wav(&source, 5.0);
    let settings = pick_settings(temp_dir.path());

    let encoder = RecordingEncoder::new();
    let mut out = Vec::new();
    let summary = command::execute(
        &source,
        CLIP_EFFECTS,
        &settings,
        &encoder,
        Cursor::new(b"0.2,0.4\ny\nquit\n".to_vec()),
        &mut out,
    )
    .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(summary.committed, vec!["button_click"]);
    assert!(output.contains("Source duration: 5.00s"));
    assert!(output.contains("Saved 1 clip(s)"));
    assert!(settings.output_dir.join("button_click.mp3").exists());
    assert_eq!(
        encoder.jobs()[1].codec,
        OutputCodec::Mp3 {
            bitrate: "96k".to_string()
        }
    );
}

#[test]
fn test_execute_missing_source_fails_without_prompting() {
    let temp_dir = TempDir::new().unwrap();
    let settings = pick_settings(temp_dir.path());

    let encoder = RecordingEncoder::new();
    let mut out = Vec::new();
    let result = command::execute(
        &temp_dir.path().join("missing.wav"),
        CLIP_EFFECTS,
        &settings,
        &encoder,
        Cursor::new(Vec::new()),
        &mut out,
    );

    assert!(result.is_err());
    assert!(out.is_empty());
    assert!(!settings.output_dir.exists());
}
