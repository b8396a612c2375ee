use std::fs;
use std::path::Path;

use mycommands::core::run;
use mycommands::models::Style;
use tempfile::TempDir;

fn args(strs: &[&str]) -> Vec<String> {
    strs.iter().map(|s| s.to_string()).collect()
}

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// A source tree with `x.txt` and `sub/y.txt`.
fn sample_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("A/x.txt"), "hello\n");
    write(&tmp.path().join("A/sub/y.txt"), "nested contents");
    tmp
}

// =============================================================================
// ls
// =============================================================================

#[test]
fn test_ls_directories_then_files() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("one")).unwrap();
    fs::create_dir(tmp.path().join("two")).unwrap();
    write(&tmp.path().join("a.txt"), "abc");
    write(&tmp.path().join("b.bin"), &"x".repeat(1536));

    let result = run("ls", &[], tmp.path());
    assert!(!result.failed);
    assert_eq!(result.output.len(), 1);

    let spans = &result.output[0].spans;
    assert_eq!(spans[0].text, format!("{}: ", tmp.path().display()));
    let tokens: Vec<_> = spans[1..].iter().filter(|s| s.text != " ").collect();
    assert_eq!(tokens.len(), 4);
    assert!(tokens[..2].iter().all(|s| s.text.ends_with('/') && s.style == Style::Blue));
    assert!(tokens[2..].iter().all(|s| !s.text.ends_with('/')));

    let texts: Vec<_> = tokens.iter().map(|s| s.text.as_str()).collect();
    assert!(texts.contains(&"a.txt (3 B)"));
    assert!(texts.contains(&"b.bin (1.5 KB)"));
    let txt = tokens.iter().find(|s| s.text.starts_with("a.txt")).unwrap();
    assert_eq!(txt.style, Style::Cyan);
}

#[test]
fn test_ls_relative_path_keeps_label() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("docs/readme.txt"), "");

    let result = run("ls", &args(&["docs"]), tmp.path());
    assert_eq!(result.plain_lines(), vec!["docs: readme.txt (0 B)"]);
}

#[test]
fn test_ls_empty_directory() {
    let tmp = TempDir::new().unwrap();
    let result = run("ls", &args(&["."]), tmp.path());
    assert_eq!(result.plain_lines(), vec![".: "]);
}

#[test]
fn test_ls_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let result = run("ls", &args(&["nope"]), tmp.path());
    assert!(result.failed);
    let lines = result.plain_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("nope: Error: "));
    assert!(result.output[0].is_error());
}

#[test]
fn test_ls_on_file_fails() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("f.txt"), "x");
    let result = run("ls", &args(&["f.txt"]), tmp.path());
    assert!(result.failed);
}

// =============================================================================
// cat
// =============================================================================

#[test]
fn test_cat_prints_framed_lines() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("data.json"), "{\n  \"a\": 1\n}\n");

    let result = run("cat", &args(&["data.json"]), tmp.path());
    assert!(!result.failed);
    let lines = result.plain_lines();
    assert_eq!(
        lines[0],
        format!("Contents of file {}:", tmp.path().join("data.json").display())
    );
    assert!(lines[1].chars().all(|c| c == '-'));
    assert_eq!(&lines[2..5], &["{", "  \"a\": 1", "}"]);
    assert_eq!(lines[5], lines[1]);
    assert_eq!(lines.len(), 6);

    for line in &result.output[2..5] {
        assert_eq!(line.spans[0].style, Style::DarkYellow);
    }
}

#[test]
fn test_cat_missing_file() {
    let tmp = TempDir::new().unwrap();
    let result = run("cat", &args(&["missing.txt"]), tmp.path());
    assert!(result.failed);
    let lines = result.plain_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Contents of file "));
    assert!(lines[1].starts_with("---"));
    assert!(lines[2].starts_with("Error: "));
}

#[test]
fn test_cat_invalid_utf8() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bin.txt"), [0xff, 0xfe, b'\n']).unwrap();
    let result = run("cat", &args(&["bin.txt"]), tmp.path());
    assert!(result.failed);
    assert!(result.plain_lines().last().unwrap().starts_with("Error: "));
}

// =============================================================================
// cp
// =============================================================================

#[test]
fn test_cp_recursive_tree() {
    let tmp = sample_tree();
    let result = run("cp", &args(&["-r", "A", "B"]), tmp.path());
    assert!(!result.failed, "{:?}", result.plain_lines());
    assert_eq!(result.output[0].spans[0].style, Style::Green);

    let b = tmp.path().join("B");
    assert_eq!(fs::read(b.join("x.txt")).unwrap(), b"hello\n");
    assert_eq!(fs::read(b.join("sub/y.txt")).unwrap(), b"nested contents");
}

#[test]
fn test_cp_file_into_directory() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("note.txt"), "keep me");
    fs::create_dir(tmp.path().join("backup")).unwrap();

    let result = run("cp", &args(&["note.txt", "backup"]), tmp.path());
    assert!(!result.failed);
    assert_eq!(
        fs::read_to_string(tmp.path().join("backup/note.txt")).unwrap(),
        "keep me"
    );
}

#[test]
fn test_cp_file_overwrites() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("new.txt"), "new");
    write(&tmp.path().join("old.txt"), "old contents");

    let result = run("cp", &args(&["new.txt", "old.txt"]), tmp.path());
    assert!(!result.failed);
    assert_eq!(fs::read_to_string(tmp.path().join("old.txt")).unwrap(), "new");
}

#[test]
fn test_cp_directory_without_recursive() {
    let tmp = sample_tree();
    let result = run("cp", &args(&["A", "dir2"]), tmp.path());
    assert!(result.failed);
    assert_eq!(result.plain_lines(), vec!["Error: use -r to copy directories"]);
    assert!(!tmp.path().join("dir2").exists());
}

#[test]
fn test_cp_missing_source() {
    let tmp = TempDir::new().unwrap();
    let result = run("cp", &args(&["ghost", "dest"]), tmp.path());
    assert!(result.failed);
    let line = &result.plain_lines()[0];
    assert!(line.starts_with("Error: source not found: "));
    assert!(line.ends_with("ghost"));
}

#[test]
fn test_cp_is_idempotent() {
    let tmp = sample_tree();
    for _ in 0..2 {
        let result = run("cp", &args(&["--recursive", "A", "B"]), tmp.path());
        assert!(!result.failed);
    }
    let mut names: Vec<_> = fs::read_dir(tmp.path().join("B"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["sub", "x.txt"]);
    assert_eq!(fs::read_dir(tmp.path().join("B/sub")).unwrap().count(), 1);

    for _ in 0..2 {
        assert!(!run("cp", &args(&["A/x.txt", "copy.txt"]), tmp.path()).failed);
    }
    assert_eq!(fs::read(tmp.path().join("copy.txt")).unwrap(), b"hello\n");
}

#[test]
fn test_cp_into_missing_parent_fails() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("a.txt"), "a");
    let result = run("cp", &args(&["a.txt", "no/such/dir/a.txt"]), tmp.path());
    assert!(result.failed);
    assert!(result.plain_lines()[0].starts_with("Error: "));
}
