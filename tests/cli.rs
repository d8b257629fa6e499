use assert_cmd::Command;
use filetime::FileTime;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn sorter() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_media-month-sorter"));
    cmd.env("LC_ALL", "en_US.UTF-8").env_remove("RUST_LOG");
    cmd
}

fn set_mtime(path: &Path, unix_seconds: i64) {
    filetime::set_file_mtime(path, FileTime::from_unix_time(unix_seconds, 0)).unwrap();
}

/// 2020-01-02 12:00:00 UTC
const JAN_2_2020_NOON: i64 = 1_577_966_400;

/// JPEG with a single IFD0 `DateTime` tag
fn jpeg_with_datetime(date_time: &str) -> Vec<u8> {
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM\x00\x2a");
    tiff.extend_from_slice(&8u32.to_be_bytes());
    tiff.extend_from_slice(&1u16.to_be_bytes());
    tiff.extend_from_slice(&0x0132u16.to_be_bytes());
    tiff.extend_from_slice(&2u16.to_be_bytes());
    tiff.extend_from_slice(&20u32.to_be_bytes());
    tiff.extend_from_slice(&26u32.to_be_bytes());
    tiff.extend_from_slice(&0u32.to_be_bytes());
    tiff.extend_from_slice(date_time.as_bytes());
    tiff.push(0);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&(8 + tiff.len() as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\x00\x00");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

#[test]
fn shows_help() {
    sorter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn missing_source_exits_with_one() {
    sorter()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--source"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn empty_source_argument_exits_with_one() {
    sorter()
        .args(["--source", ""])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--source"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn empty_source_in_config_file_exits_with_one() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("sorter.toml");
    fs::write(&config_path, "source = \"\"\n").unwrap();

    sorter()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn moves_photo_by_capture_date_into_source() {
    let dir = tempdir().unwrap();
    let photo = dir.path().join("img1.jpg");
    fs::write(&photo, jpeg_with_datetime("2021:07:15 10:20:30")).unwrap();

    sorter()
        .arg("--source")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved: img1.jpg → 2021/Juli"));

    assert!(dir.path().join("2021").join("Juli").join("img1.jpg").is_file());
    assert!(!photo.exists());
}

#[test]
fn moves_file_by_modification_time_into_destination() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("in");
    let dest = dir.path().join("out");
    fs::create_dir(&source).unwrap();
    let note = source.join("note.txt");
    fs::write(&note, "note").unwrap();
    set_mtime(&note, JAN_2_2020_NOON);

    sorter()
        .arg("--source")
        .arg(&source)
        .arg("--destination")
        .arg(&dest)
        .assert()
        .success();

    assert!(dest.join("2020").join("Jänner").join("note.txt").is_file());
    assert!(!note.exists());
}

#[test]
fn dry_run_only_prints() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("in");
    let dest = dir.path().join("out");
    fs::create_dir(&source).unwrap();
    let note = source.join("note.txt");
    fs::write(&note, "note").unwrap();
    set_mtime(&note, JAN_2_2020_NOON);

    let expected = dest.join("2020").join("Jänner").join("note.txt");
    sorter()
        .arg("--source")
        .arg(&source)
        .arg("--destination")
        .arg(&dest)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "[Dry Run] note.txt → {}",
            expected.display()
        )));

    assert!(note.is_file());
    assert!(!dest.exists());
}

#[test]
fn config_file_supplies_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("in");
    fs::create_dir(&source).unwrap();
    let note = source.join("note.txt");
    fs::write(&note, "note").unwrap();
    set_mtime(&note, JAN_2_2020_NOON);

    let config_path = dir.path().join("sorter.toml");
    fs::write(
        &config_path,
        format!("source = {:?}\ndry_run = true\n", source.display().to_string()),
    )
    .unwrap();

    sorter()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[Dry Run] note.txt"));

    assert!(note.is_file());
}

#[test]
fn broken_config_file_fails() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "source = [").unwrap();

    sorter()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("broken.toml"));
}

#[test]
fn unreadable_source_still_exits_cleanly() {
    let dir = tempdir().unwrap();

    sorter()
        .arg("--source")
        .arg(dir.path().join("missing"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Error while reading:"));
}

#[test]
fn prints_sample_config() {
    sorter()
        .arg("--print-sample-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("source = "));
}
