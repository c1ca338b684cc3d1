use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn julia() -> Command {
    Command::cargo_bin("julia").unwrap()
}

#[test]
fn renders_a_png() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("small.png");
    julia()
        .args(&["-s", "16x12", "-t", "3", "-i", "40", "-a", "2"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Time taken"));

    let img = image::open(&out).unwrap().to_rgba();
    assert_eq!((img.width(), img.height()), (16, 12));
}

#[test]
fn thread_count_does_not_change_the_image() {
    let dir = tempdir().unwrap();
    let render = |threads: &str, name: &str| {
        let out = dir.path().join(name);
        julia()
            .args(&["-s", "20x20", "-i", "30", "-a", "3", "-c", "-0.12,-0.77"])
            .args(&["-t", threads])
            .arg("-o")
            .arg(&out)
            .assert()
            .success();
        image::open(&out).unwrap().to_rgba().into_raw()
    };
    assert_eq!(render("1", "one.png"), render("5", "five.png"));
}

#[test]
fn presets_and_mandelbrot_are_accepted() {
    let dir = tempdir().unwrap();
    julia()
        .args(&["-s", "8x8", "-i", "10", "-p", "4"])
        .arg("-o")
        .arg(dir.path().join("preset.png"))
        .assert()
        .success();
    julia()
        .args(&["-s", "8x8", "-i", "10", "-f", "mandelbrot", "-m", "-0.5,0"])
        .arg("-o")
        .arg(dir.path().join("mandel.png"))
        .assert()
        .success();
}

#[test]
fn rejects_bad_arguments() {
    julia()
        .args(&["-t", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be between"));
    julia()
        .args(&["-z", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Zoom must be greater than zero"));
    julia()
        .args(&["-s", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
    julia()
        .args(&["-s", "0x5", "-o", "never.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure: canvas must be at least 1x1"));
    julia()
        .args(&["-p", "2", "-c", "0.1,0.1"])
        .assert()
        .failure();
}

#[test]
fn reports_sink_failures() {
    let dir = tempdir().unwrap();
    julia()
        .args(&["-s", "4x4", "-i", "5"])
        .arg("-o")
        .arg(dir.path().join("missing").join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure: could not write image"));
}
