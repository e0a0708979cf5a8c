//! Captures the git revision of the source tree for `sprout version`.
//!
//! Emits `SPROUT_GIT_REVISION` (7 characters) and `SPROUT_GIT_DIRTY` when the
//! build runs inside a git checkout; outside one, neither is set.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=SPROUT_BUILD_TAG");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");

    let Some(head) = git(&["rev-parse", "HEAD"]) else {
        return;
    };
    let revision: String = head.chars().take(7).collect();
    println!("cargo:rustc-env=SPROUT_GIT_REVISION={revision}");

    let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
        .is_some_and(|status| !status.is_empty());
    println!("cargo:rustc-env=SPROUT_GIT_DIRTY={dirty}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
