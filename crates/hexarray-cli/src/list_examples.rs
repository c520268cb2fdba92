use std::path::Path;
use std::{env, fs, process};

use anyhow::Context;

/// List the entries of `<cwd>/examples/`, one `"<index> <name>"` line each.
///
/// Entries come out in filesystem iteration order; indices start at 1.
/// Both precondition failures report to stdout and exit 1, which callers
/// (and the tests) rely on.
fn main() -> anyhow::Result<()> {
    let examples = env::current_dir()
        .context("cannot determine the current directory")?
        .join("examples");

    if !examples.exists() {
        println!("Path to examples does not exist.");
        println!(" - {}", examples.display());
        process::exit(1);
    }
    if !examples.is_dir() {
        println!("Path to examples is not a directory.");
        println!(" - {}", examples.display());
        process::exit(1);
    }

    let entries = fs::read_dir(&examples)
        .with_context(|| format!("failed to read {}", examples.display()))?;

    for (index, entry) in entries.enumerate() {
        let entry =
            entry.with_context(|| format!("failed to read an entry of {}", examples.display()))?;
        println!("{} {}", index + 1, display_name(&entry.path()));
    }

    Ok(())
}

/// Regular files print their stem (extension stripped); directories and
/// anything else keep their full name, dots included.
fn display_name(path: &Path) -> String {
    let name = if path.is_file() {
        path.file_stem()
    } else {
        path.file_name()
    };
    name.map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
