//! Records the permission bits of every bundled template file.
//!
//! `include_dir` embeds contents only, so the modes are written to
//! `$OUT_DIR/template_modes.rs` as a sorted `(path, mode)` table.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

fn main() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
    println!("cargo:rerun-if-changed={}", root.display());

    let mut modes = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.unwrap_or_else(|e| panic!("failed to walk templates: {e}"));
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(&root)
            .unwrap_or_else(|e| panic!("template outside root: {e}"));
        let key = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if let Some(mode) = file_mode(entry.path()) {
            modes.push((key, mode));
        }
    }

    modes.sort();

    let mut table = String::from("pub(crate) static TEMPLATE_MODES: &[(&str, u32)] = &[\n");
    for (path, mode) in &modes {
        let _ = writeln!(table, "    ({path:?}, 0o{mode:o}),");
    }
    table.push_str("];\n");

    let out = Path::new(&env::var("OUT_DIR").expect("OUT_DIR is set by cargo"))
        .join("template_modes.rs");
    fs::write(out, table).unwrap_or_else(|e| panic!("failed to write mode table: {e}"));
}

#[cfg(unix)]
fn file_mode(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).ok().map(|m| m.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> Option<u32> {
    None
}
