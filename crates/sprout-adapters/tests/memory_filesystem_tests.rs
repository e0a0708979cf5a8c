//! Destination policy through the in-memory filesystem.

use std::path::{Path, PathBuf};

use sprout_adapters::{MemoryFilesystem, MemoryTemplates};
use sprout_core::prelude::*;

fn templates() -> MemoryTemplates {
    MemoryTemplates::new()
        .with_file("go/README.md.tmpl", "# {{.ProjectName}}\n")
        .with_file_mode("go/scripts/build.sh", "#!/bin/sh\n", Some(0o755))
}

struct NoopRunner;

impl CommandRunner for NoopRunner {
    fn run(&self, _dir: &Path, _args: &[String]) -> Result<(), CommandFailure> {
        Ok(())
    }
}

fn creator(fs: &MemoryFilesystem) -> Creator {
    Creator::new(
        Box::new(templates()),
        Box::new(fs.clone()),
        Box::new(NoopRunner),
    )
}

fn forced(dir: &str) -> Options {
    Options::builder("go", "demo")
        .output_dir(PathBuf::from(dir))
        .force(true)
        .build()
}

/// A `work/demo` directory holding one file of the user's.
fn existing_project() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("work/demo")).unwrap();
    fs.write_file(Path::new("work/demo/notes.txt"), b"mine", FileMode::DEFAULT)
        .unwrap();
    fs
}

#[test]
fn force_keeps_old_tree_when_parent_is_read_only() {
    let fs = existing_project();
    fs.set_read_only("work");
    let writes_before = fs.write_count();

    let mut out = Vec::new();
    let err = creator(&fs).create(forced("work"), &mut out).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FilesystemIo);
    assert_eq!(
        fs.read_file(Path::new("work/demo/notes.txt")).unwrap(),
        b"mine"
    );
    assert_eq!(fs.write_count(), writes_before);
    assert!(!String::from_utf8(out).unwrap().contains("removing due to --force"));
}

#[test]
fn force_replaces_old_tree_when_parent_is_writable() {
    let fs = existing_project();

    let mut out = Vec::new();
    creator(&fs).create(forced("work"), &mut out).unwrap();

    assert_eq!(
        fs.list_files(),
        vec![
            PathBuf::from("work/demo/README.md"),
            PathBuf::from("work/demo/scripts/build.sh"),
        ]
    );
    assert_eq!(
        fs.read_file(Path::new("work/demo/README.md")).unwrap(),
        b"# demo\n"
    );
    assert_eq!(
        fs.mode(Path::new("work/demo/scripts/build.sh")),
        Some(FileMode::EXECUTABLE)
    );
    assert_eq!(
        fs.mode(Path::new("work/demo/README.md")),
        Some(FileMode::DEFAULT)
    );
}

#[test]
fn dry_run_makes_no_writes() {
    let fs = existing_project();
    let writes_before = fs.write_count();

    let options = Options::builder("go", "demo")
        .output_dir(PathBuf::from("work"))
        .dry_run(true)
        .build();
    let outcome = creator(&fs).create(options, &mut Vec::new()).unwrap();

    assert!(outcome.dry_run);
    assert_eq!(fs.write_count(), writes_before);
    assert_eq!(fs.list_files(), vec![PathBuf::from("work/demo/notes.txt")]);
}
