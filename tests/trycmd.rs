use regex::Regex;
use std::{env::remove_var, ffi::OsStr, fs::read_dir, fs::read_to_string, path::Path};
use trycmd::TestCases;

#[ctor::ctor]
fn initialize() {
    unsafe {
        remove_var("RUST_BACKTRACE");
        remove_var("RUST_LIB_BACKTRACE");
    }
}

#[test]
fn trycmd() {
    let test_cases = TestCases::new();

    test_cases.env("RUST_LOG", "off");

    test_cases.case("tests/trycmd/*.toml");
}

#[test]
fn completeness() {
    let mut missing = Vec::new();
    for result in read_dir("tests/trycmd").unwrap() {
        let entry = result.unwrap();
        let path = entry.path();
        if path.extension() != Some(OsStr::new("toml")) {
            continue;
        }
        for extension in ["stderr", "stdout"] {
            let path = path.with_extension(extension);
            if !path.try_exists().unwrap() {
                missing.push(path);
            }
        }
    }
    assert!(missing.is_empty(), "missing files: {missing:#?}");
}

#[test]
fn correctness() {
    for result in read_dir("tests/trycmd").unwrap() {
        let entry = result.unwrap();
        let path = entry.path();
        if path.extension() != Some(OsStr::new("toml")) {
            continue;
        }
        let contents = read_to_string(&path).unwrap();
        let table = toml::from_str::<toml::Table>(&contents).unwrap();

        let bin = table
            .get("bin")
            .and_then(|value| value.as_table())
            .and_then(|table| table.get("name"))
            .and_then(|value| value.as_str());

        assert_eq!(Some("multiply"), bin, "failed for `{}`", path.display());
    }
}

#[test]
fn failures_have_empty_stdout() {
    let re = Regex::new(r"(?m)^code\s*=\s*[1-9]").unwrap();
    for result in read_dir("tests/trycmd").unwrap() {
        let entry = result.unwrap();
        let path = entry.path();
        if path.extension() != Some(OsStr::new("toml")) {
            continue;
        }
        let contents = read_to_string(&path).unwrap();
        if !re.is_match(&contents) {
            continue;
        }
        let stdout = read_to_string(Path::new(&path).with_extension("stdout")).unwrap();
        assert!(stdout.is_empty(), "failed for `{}`", path.display());
    }
}
