// Discovery tests - scanning real directory trees
//
// Covers file name matching, recursion, recency ordering and the menu
// built from a scan.

use findreadme_core::discovery::{DiscoveryError, SearchContext, scan};
use findreadme_core::labels::build_menu;
use findreadme_core::plan::{Plan, plan};
use findreadme_core::RunMode;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

fn write_aged(path: &Path, age_secs: u64) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    let file = File::create(path).expect("create file");
    file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
        .expect("set mtime");
}

#[test]
fn finds_readme_variants_at_any_depth() {
    let dir = tempdir().expect("tempdir");
    write_aged(&dir.path().join("README.md"), 50);
    write_aged(&dir.path().join("pkg/readme"), 40);
    write_aged(&dir.path().join("pkg/deep/nested/Readme.rst"), 30);
    write_aged(&dir.path().join("legacy/OLD_README.TXT"), 20);
    write_aged(&dir.path().join("notes/read.me"), 10);
    write_aged(&dir.path().join("src/lib.rs"), 5);
    write_aged(&dir.path().join("CHANGELOG.md"), 5);

    let report = scan(&SearchContext::new(dir.path())).expect("scan");
    assert_eq!(report.files.len(), 5);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.newest().map(|f| f.path.clone()), Some(dir.path().join("notes/read.me")));
}

#[test]
fn orders_newest_first() {
    let dir = tempdir().expect("tempdir");
    write_aged(&dir.path().join("a/README"), 1_000);
    write_aged(&dir.path().join("b/README"), 10);
    write_aged(&dir.path().join("c/README"), 100);

    let report = scan(&SearchContext::new(dir.path())).expect("scan");
    let order: Vec<PathBuf> = report.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        order,
        vec![
            dir.path().join("b/README"),
            dir.path().join("c/README"),
            dir.path().join("a/README"),
        ]
    );
    assert!(report.files.windows(2).all(|w| w[0].modified >= w[1].modified));
}

#[test]
fn missing_root_is_reported() {
    let result = scan(&SearchContext::new("/nonexistent/findreadme/root"));
    assert!(matches!(result, Err(DiscoveryError::RootNotFound { .. })));
}

#[cfg(unix)]
#[test]
fn does_not_follow_symlinked_directories() {
    let dir = tempdir().expect("tempdir");
    let outside = tempdir().expect("tempdir");
    write_aged(&outside.path().join("README"), 0);
    std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).expect("symlink");

    let report = scan(&SearchContext::new(dir.path())).expect("scan");
    assert!(report.is_empty());
}

#[cfg(unix)]
#[test]
fn keeps_symlinks_to_readme_files() {
    let dir = tempdir().expect("tempdir");
    let outside = tempdir().expect("tempdir");
    let target = outside.path().join("NOTES.txt");
    write_aged(&target, 60);
    std::os::unix::fs::symlink(&target, dir.path().join("README")).expect("symlink");

    let report = scan(&SearchContext::new(dir.path())).expect("scan");
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.files[0].path, dir.path().join("README"));
    let target_modified = fs::metadata(&target).and_then(|m| m.modified()).expect("mtime");
    assert_eq!(report.files[0].modified, target_modified);
}

#[cfg(unix)]
#[test]
fn broken_readme_symlink_is_counted_as_skipped() {
    let dir = tempdir().expect("tempdir");
    std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("README"))
        .expect("symlink");

    let report = scan(&SearchContext::new(dir.path())).expect("scan");
    assert!(report.is_empty());
    assert_eq!(report.skipped, 1);
}

#[cfg(unix)]
#[test]
fn symlinked_directory_named_readme_is_ignored() {
    let dir = tempdir().expect("tempdir");
    let outside = tempdir().expect("tempdir");
    std::os::unix::fs::symlink(outside.path(), dir.path().join("readme")).expect("symlink");

    let report = scan(&SearchContext::new(dir.path())).expect("scan");
    assert!(report.is_empty());
    assert_eq!(report.skipped, 0);
}

#[test]
fn list_mode_menu_uses_relative_paths() {
    let dir = tempdir().expect("tempdir");
    write_aged(&dir.path().join("README"), 10);
    write_aged(&dir.path().join("docs/README.md"), 20);

    let context = SearchContext::new(dir.path());
    let report = scan(&context).expect("scan");
    let menu = build_menu(&report.files, &context);

    assert!(menu.options[0].label.starts_with("README "));
    assert!(menu.options[1].label.starts_with("docs/README.md "));
    assert_eq!(
        PathBuf::from(&menu.options[1].payload),
        dir.path().join("docs/README.md")
    );

    let Plan::Choose(planned) = plan(&report.files, RunMode::List, &context) else {
        panic!("expected a menu for several files in list mode");
    };
    assert_eq!(planned, menu);
}

#[test]
fn recent_mode_opens_newest_file() {
    let dir = tempdir().expect("tempdir");
    write_aged(&dir.path().join("old/README"), 500);
    write_aged(&dir.path().join("new/README"), 5);

    let context = SearchContext::new(dir.path());
    let report = scan(&context).expect("scan");
    assert_eq!(
        plan(&report.files, RunMode::Recent, &context),
        Plan::Open(dir.path().join("new/README"))
    );
}
