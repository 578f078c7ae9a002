#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn snapfolio_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("snapfolio"));
    cmd.env("SNAPFOLIO_HOME", home.join(".snapfolio"))
        .env_remove("RUST_LOG")
        .current_dir(home);
    cmd
}

fn write_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 90]))
        .save(path)
        .unwrap();
}

#[test]
fn optimize_missing_input_fails() {
    let temp = TempDir::new().unwrap();

    snapfolio_cmd(temp.path())
        .args(["optimize", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn list_without_catalog_suggests_manifest() {
    let temp = TempDir::new().unwrap();

    snapfolio_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("snapfolio manifest"))
        .stdout(predicate::str::contains("No photos found."));
}

#[test]
fn optimize_catalog_and_browse_workflow() {
    let temp = TempDir::new().unwrap();
    let raw = temp.path().join("raw");
    let gallery = temp.path().join("gallery");
    let manifest = temp.path().join("photos.json");
    fs::create_dir_all(&raw).unwrap();
    write_png(&raw.join("sunset-beach.png"), 1600, 900);
    write_png(&raw.join("pine_forest.png"), 400, 300);

    // 1. Optimize into the gallery dir
    snapfolio_cmd(temp.path())
        .args(["optimize", raw.to_str().unwrap(), gallery.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed: 2/2"));

    assert!(gallery.join("sunset-beach.jpg").exists());
    assert!(gallery.join("sunset-beach-thumb.jpg").exists());
    let (width, _) = image::image_dimensions(gallery.join("sunset-beach.jpg")).unwrap();
    assert_eq!(width, 1200);

    // 2. Build the manifest from the optimized files
    snapfolio_cmd(temp.path())
        .args([
            "manifest",
            "--gallery-dir",
            gallery.to_str().unwrap(),
            "--output",
            manifest.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 photo(s)"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&manifest).unwrap()).unwrap();
    assert_eq!(written["metadata"]["totalPhotos"], 2);
    assert_eq!(written["photos"][0]["title"], "Pine Forest");

    // 3. List and search
    snapfolio_cmd(temp.path())
        .args(["list", "--manifest", manifest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pine Forest"))
        .stdout(predicate::str::contains("Sunset Beach"));

    snapfolio_cmd(temp.path())
        .args(["list", "-s", "SUNSET", "--manifest", manifest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunset Beach"))
        .stdout(predicate::str::contains("Pine Forest").not());

    // 4. View with neighbours
    snapfolio_cmd(temp.path())
        .args(["view", "1", "--manifest", manifest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 / 2"))
        .stdout(predicate::str::contains("#2 ›"));

    snapfolio_cmd(temp.path())
        .args(["view", "9", "--manifest", manifest.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Photo not found: 9"));

    // 5. Likes live only for the session
    snapfolio_cmd(temp.path())
        .args(["browse", "--manifest", manifest.to_str().unwrap()])
        .write_stdin("open 2\nlike\nnext\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Liked #2 Sunset Beach (1 likes)"))
        .stdout(predicate::str::contains("Already at the last photo."));

    let after: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&manifest).unwrap()).unwrap();
    assert_eq!(after["photos"][1]["likes"], 0);
}

#[test]
fn config_set_is_used_by_later_runs() {
    let temp = TempDir::new().unwrap();

    snapfolio_cmd(temp.path())
        .args(["config", "page-size", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 5"));

    snapfolio_cmd(temp.path())
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5"));

    snapfolio_cmd(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("quality = 80"));
}

#[test]
fn formats_lists_jpeg() {
    let temp = TempDir::new().unwrap();

    snapfolio_cmd(temp.path())
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("JPEG"));
}
