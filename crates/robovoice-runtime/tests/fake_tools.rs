//! End-to-end tests of the process adapters against stand-in tools.
//!
//! Small shell scripts play the part of `say` and `ffmpeg` so the real
//! spawn/wait/capture path and the invoker's file handling run together on
//! any Unix machine. Everything lives in one test function: writing an
//! executable and running it while other test threads fork can fail with
//! `ETXTBSY`.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use robovoice_core::{InvokerService, NoopReporter, Outcome, SpeechRequest};
use robovoice_runtime::{FfmpegTranscoder, SaySynthesizer};

const GOOD_SAY: &str = r#"#!/bin/sh
echo "$@" >> "$(dirname "$0")/say.log"
out=""
while [ $# -gt 1 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    -v|-r) shift 2 ;;
    *) shift ;;
  esac
done
if [ -n "$out" ]; then printf 'FORM' > "$out"; fi
exit 0
"#;

const BAD_SAY: &str = r#"#!/bin/sh
echo "$@" >> "$(dirname "$0")/say.log"
for arg in "$@"; do
  if [ "$arg" = "-o" ]; then
    echo "Voice not found." >&2
    exit 1
  fi
done
exit 0
"#;

/// Parses options with `getopts`, like the real `say`, and records the
/// text it was asked to speak.
const GETOPTS_SAY: &str = r#"#!/bin/sh
out=""
while getopts "v:r:o:" opt; do
  case "$opt" in
    o) out="$OPTARG" ;;
    v|r) ;;
    *) echo "say: illegal option" >&2; exit 1 ;;
  esac
done
shift $((OPTIND - 1))
printf '%s' "$*" > "$(dirname "$0")/spoken.txt"
if [ -n "$out" ]; then printf 'FORM' > "$out"; fi
exit 0
"#;

const GOOD_FFMPEG: &str = r#"#!/bin/sh
in=""; out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -i) in="$2"; shift 2 ;;
    *) out="$1"; shift ;;
  esac
done
cp "$in" "$out"
"#;

const BAD_FFMPEG: &str = r#"#!/bin/sh
echo "Invalid data found when processing input" >&2
exit 1
"#;

fn install(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.to_string_lossy().into_owned()
}

fn invoker(say: &str, ffmpeg: &str) -> InvokerService {
    InvokerService::new(
        Arc::new(SaySynthesizer::new(say)),
        Arc::new(FfmpegTranscoder::new(ffmpeg)),
        Arc::new(NoopReporter),
    )
}

fn files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn say_log(bin: &Path) -> Vec<String> {
    std::fs::read_to_string(bin.join("say.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn invoker_runs_stand_in_tools() {
    let bin = tempfile::tempdir().unwrap();
    let good_say = install(bin.path(), "good-say", GOOD_SAY);
    let bad_say = install(bin.path(), "bad-say", BAD_SAY);
    let getopts_say = install(bin.path(), "getopts-say", GETOPTS_SAY);
    let good_ffmpeg = install(bin.path(), "good-ffmpeg", GOOD_FFMPEG);
    let bad_ffmpeg = install(bin.path(), "bad-ffmpeg", BAD_FFMPEG);

    // Synthesis and conversion succeed.
    let out = tempfile::tempdir().unwrap();
    let request = SpeechRequest::new("Ready")
        .unwrap()
        .with_output_dir(out.path());
    let outcome = invoker(&good_say, &good_ffmpeg).run(&request).await.unwrap();
    assert_eq!(
        outcome,
        Outcome::Converted {
            path: out.path().join("ready.wav")
        }
    );
    assert_eq!(files(out.path()), vec!["ready.wav"]);
    let expected = format!(
        "-v Zarvox -r 180 -o {} -- Ready",
        out.path().join("ready.aiff").display()
    );
    assert_eq!(say_log(bin.path()), vec![expected]);
    std::fs::remove_file(bin.path().join("say.log")).unwrap();

    // Conversion fails: the intermediate file stays.
    let out = tempfile::tempdir().unwrap();
    let request = SpeechRequest::new("Hello World!")
        .unwrap()
        .with_filename(Some("custom".into()))
        .unwrap()
        .with_output_dir(out.path());
    let outcome = invoker(&good_say, &bad_ffmpeg).run(&request).await.unwrap();
    match outcome {
        Outcome::IntermediateOnly { path, reason } => {
            assert_eq!(path, out.path().join("custom.aiff"));
            assert!(reason.contains("Invalid data"), "{reason}");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(files(out.path()), vec!["custom.aiff"]);
    std::fs::remove_file(bin.path().join("say.log")).unwrap();

    // Synthesis fails: direct playback with the robot voice, no files.
    let out = tempfile::tempdir().unwrap();
    let request = SpeechRequest::new("Ready")
        .unwrap()
        .with_output_dir(out.path());
    let outcome = invoker(&bad_say, &good_ffmpeg).run(&request).await.unwrap();
    assert_eq!(
        outcome,
        Outcome::PlayedDirectly {
            synthesis_error: Some("Voice not found.".into())
        }
    );
    assert!(files(out.path()).is_empty());
    assert_eq!(say_log(bin.path()).last().map(String::as_str), Some("-v Zarvox -r 180 -- Ready"));
    std::fs::remove_file(bin.path().join("say.log")).unwrap();

    // Play-only: one playback invocation, no files.
    let out = tempfile::tempdir().unwrap();
    let request = SpeechRequest::new("Test")
        .unwrap()
        .with_play_only(true)
        .with_output_dir(out.path());
    invoker(&good_say, &good_ffmpeg).run(&request).await.unwrap();
    assert!(files(out.path()).is_empty());
    assert_eq!(say_log(bin.path()), vec!["-v Zarvox -r 180 -- Test".to_string()]);

    // Text that looks like an option is still spoken, not parsed.
    let out = tempfile::tempdir().unwrap();
    let request = SpeechRequest::new("-hello")
        .unwrap()
        .with_output_dir(out.path());
    let outcome = invoker(&getopts_say, &good_ffmpeg).run(&request).await.unwrap();
    assert_eq!(
        outcome,
        Outcome::Converted {
            path: out.path().join("-hello.wav")
        }
    );
    assert_eq!(
        std::fs::read_to_string(bin.path().join("spoken.txt")).unwrap(),
        "-hello"
    );
    assert_eq!(files(out.path()), vec!["-hello.wav"]);

    // Speech command missing entirely.
    let out = tempfile::tempdir().unwrap();
    let missing: PathBuf = bin.path().join("no-such-say");
    let request = SpeechRequest::new("Ready")
        .unwrap()
        .with_output_dir(out.path());
    let result = invoker(&missing.to_string_lossy(), &good_ffmpeg)
        .run(&request)
        .await;
    assert!(result.is_err());
    assert!(files(out.path()).is_empty());
}
