//! Integration tests for the treedump CLI


use harness::{TestTree, run_treedump};

#[test]
fn test_basic_output_shows_tree_and_content() {
    let tree = TestTree::new();
    tree.add_file("main.py", "print('hello')\n");
    tree.add_file("src/util.py", "x = 1\n");

    let (stdout, _stderr, success) = run_treedump(tree.path(), &["."]);
    assert!(success, "treedump should succeed");
    assert!(stdout.contains("main.py"), "should show main.py");
    assert!(stdout.contains("├── ") || stdout.contains("└── "), "should draw connectors");
    assert!(
        stdout.contains("1: print('hello')"),
        "should show numbered content: {}",
        stdout
    );
    assert!(stdout.contains("1 directories, 2 files"));
}

#[test]
fn test_extension_filter() {
    let tree = TestTree::new();
    tree.add_file("keep.py", "kept");
    tree.add_file("drop.rs", "dropped");

    let (stdout, _stderr, success) = run_treedump(tree.path(), &[".", "-e", ".py"]);
    assert!(success);
    assert!(stdout.contains("keep.py"));
    assert!(
        !stdout.contains("drop.rs"),
        "should exclude non-matching extension: {}",
        stdout
    );
}

#[test]
fn test_extension_without_dot_normalized() {
    let tree = TestTree::new();
    tree.add_file("keep.py", "kept");

    let (stdout, _stderr, success) = run_treedump(tree.path(), &[".", "-e", "py"]);
    assert!(success, "bare extension should be normalized, not rejected");
    assert!(stdout.contains("keep.py"));
}

#[test]
fn test_blacklisted_folder_fully_pruned() {
    let tree = TestTree::new();
    tree.add_file("src/main.py", "m");
    tree.add_file("node_modules/pkg/index.js", "j");

    let (stdout, _stderr, success) =
        run_treedump(tree.path(), &[".", "--blacklist-folder", "node_modules"]);
    assert!(success);
    assert!(stdout.contains("main.py"));
    assert!(!stdout.contains("node_modules"), "blacklisted dir hidden");
    assert!(!stdout.contains("index.js"), "descendants hidden too");
}

#[test]
fn test_priority_folder_ordering() {
    let tree = TestTree::new();
    tree.add_dir("zebra");
    tree.add_dir("src");
    tree.add_dir("apple");

    let (stdout, _stderr, success) =
        run_treedump(tree.path(), &[".", "--priority-folder", "src"]);
    assert!(success);
    let src_pos = stdout.find("src").unwrap();
    let apple_pos = stdout.find("apple").unwrap();
    let zebra_pos = stdout.find("zebra").unwrap();
    assert!(src_pos < apple_pos, "priority folder first: {}", stdout);
    assert!(apple_pos < zebra_pos, "remainder alphabetical: {}", stdout);
}

#[test]
fn test_compact_mode_suppresses_content() {
    let tree = TestTree::new();
    tree.add_file("main.py", "print('hello')\n");

    let (stdout, _stderr, success) = run_treedump(tree.path(), &[".", "--compact"]);
    assert!(success);
    assert!(stdout.contains("main.py"));
    assert!(
        !stdout.contains("print('hello')"),
        "compact mode should not show content: {}",
        stdout
    );
}

#[test]
fn test_max_lines_flag() {
    let tree = TestTree::new();
    let content: String = (1..=10).map(|i| format!("line {}\n", i)).collect();
    tree.add_file("long.txt", &content);

    let (stdout, _stderr, success) = run_treedump(tree.path(), &[".", "--max-lines", "3"]);
    assert!(success);
    assert!(stdout.contains("3: line 3"));
    assert!(!stdout.contains("4: line 4"));
    assert!(stdout.contains("... 7 more lines truncated"));
}

#[test]
fn test_output_file_gets_header() {
    let tree = TestTree::new();
    tree.add_file("main.py", "x = 1\n");
    let out_path = tree.path().join("dump.txt");

    let (stdout, _stderr, success) =
        run_treedump(tree.path(), &[".", "-o", out_path.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("Tree written to"));

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert!(written.starts_with("File Structure - "));
    assert!(written.contains("Scan Date: "));
    assert!(written.contains(&"=".repeat(80)));
    assert!(written.contains("1: x = 1"));
}

#[test]
fn test_missing_root_fails() {
    let tree = TestTree::new();

    let (_stdout, stderr, success) = run_treedump(tree.path(), &["does-not-exist"]);
    assert!(!success, "missing root should fail");
    assert!(
        stderr.contains("root path not found"),
        "should report structured error: {}",
        stderr
    );
}

#[test]
fn test_file_root_fails() {
    let tree = TestTree::new();
    tree.add_file("plain.txt", "x");

    let (_stdout, stderr, success) = run_treedump(tree.path(), &["plain.txt"]);
    assert!(!success);
    assert!(stderr.contains("not a directory"), "stderr: {}", stderr);
}

#[test]
fn test_config_file_settings_applied() {
    let tree = TestTree::new();
    tree.add_file("keep.py", "kept");
    tree.add_file("drop.log", "dropped");
    tree.add_file(
        "settings.json",
        r#"{
            "extensions": [".py", ".json"],
            "blacklist_files": ["settings.json"],
            "max_lines": 100,
            "compact_view": false
        }"#,
    );

    let (stdout, _stderr, success) =
        run_treedump(tree.path(), &[".", "--config", "settings.json"]);
    assert!(success);
    assert!(stdout.contains("keep.py"));
    assert!(!stdout.contains("drop.log"), "config extensions applied");
    assert!(
        !stdout.contains("settings.json"),
        "config blacklist applied: {}",
        stdout
    );
}

#[test]
fn test_cli_flags_override_config_file() {
    let tree = TestTree::new();
    tree.add_file("a.py", "py");
    tree.add_file("b.md", "md");
    tree.add_file("settings.json", r#"{"extensions": [".py"]}"#);

    let (stdout, _stderr, success) = run_treedump(
        tree.path(),
        &[".", "--config", "settings.json", "-e", ".md"],
    );
    assert!(success);
    assert!(stdout.contains("b.md"), "flag extension wins: {}", stdout);
    assert!(!stdout.contains("a.py"));
}

#[test]
fn test_invalid_config_file_fails() {
    let tree = TestTree::new();
    tree.add_file("broken.json", "{ not json");

    let (_stdout, stderr, success) = run_treedump(tree.path(), &[".", "--config", "broken.json"]);
    assert!(!success);
    assert!(stderr.contains("cannot parse config file"), "stderr: {}", stderr);
}

#[test]
fn test_stdout_output_is_idempotent() {
    let tree = TestTree::new();
    tree.add_file("src/main.py", "print('hi')\n");
    tree.add_file("README.md", "# Readme\n");

    let (first, _, ok1) = run_treedump(tree.path(), &["."]);
    let (second, _, ok2) = run_treedump(tree.path(), &["."]);
    assert!(ok1 && ok2);
    assert_eq!(first, second, "unchanged input must give identical output");
}

#[test]
fn test_unreadable_file_warns_but_succeeds() {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let tree = TestTree::new();
        tree.add_file("ok.txt", "fine");
        let locked = tree.add_file("locked.txt", "secret");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        if std::fs::read(&locked).is_ok() {
            // Privileged user; permission bits are not enforced here.
            return;
        }

        let (stdout, stderr, success) = run_treedump(tree.path(), &["."]);
        assert!(success, "one unreadable file must not fail the run");
        assert!(stdout.contains("[Error reading file:"), "stdout: {}", stdout);
        assert!(stderr.contains("warning"), "stderr: {}", stderr);

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o644)).unwrap();
    }
}
