//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use graphlab::registry;
use xshell::{Shell, cmd};

/// Default edge length of gallery images, in pixels.
const DEFAULT_GALLERY_SIZE: u32 = 480;

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
    /// Render every family with its default parameters into a directory.
    Gallery {
        /// Output directory, relative to the repository root.
        #[arg(default_value = "gallery")]
        out: PathBuf,
        /// Image edge length in pixels.
        #[arg(short, long, default_value_t = DEFAULT_GALLERY_SIZE)]
        size: u32,
    },
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
    /// Release build of the `graphlab` binary.
    graphlab_bin: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate must live at <repo>/xtask")?
            .to_path_buf();

        Ok(Self {
            graphlab_bin: root.join("target").join("release").join("graphlab"),
            root,
        })
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Gallery { out, size } => gallery(&paths, &out, size),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(paths: &RepoPaths) -> Result<()> {
    format_workspace(paths)?;
    lint_workspace(paths)?;
    format_workspace(paths)?;
    Ok(())
}

/// Run tests using cargo nextest.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo nextest run --all").run()?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests"
    )
    .run()?;
    Ok(())
}

/// Create a shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}

/// Build the CLI once, then plot every registered family into `out`.
///
/// Also writes an `index.md` listing each image with its formula.
fn gallery(paths: &RepoPaths, out: &Path, size: u32) -> Result<()> {
    let sh = repo_shell(paths)?;
    println!("Building graphlab (release)...");
    cmd!(sh, "cargo build --release -q -p graphlab-cli").run()?;
    if !paths.graphlab_bin.is_file() {
        bail!("expected binary at {}", paths.graphlab_bin.display());
    }

    let out = paths.root.join(out);
    fs::create_dir_all(&out)
        .with_context(|| format!("failed to create directory {}", out.display()))?;

    let bin = &paths.graphlab_bin;
    let size = size.to_string();
    let mut index = String::from("# Gallery\n\n");
    for family in registry().list_all() {
        let file = format!("{:02}-{}.png", family.id, slug(family.name));
        let target = out.join(&file);
        let id = family.id.to_string();
        cmd!(sh, "{bin} plot {id} -s {size} {target}")
            .quiet()
            .ignore_stdout()
            .run()
            .with_context(|| format!("failed to plot {}", family.name))?;
        writeln!(
            index,
            "## {:02}. {}\n\n`{}`\n\n![{}]({file})\n",
            family.id, family.name, family.formula, family.name
        )?;
        println!("{}", describe_file(&target)?);
    }

    let index_path = out.join("index.md");
    fs::write(&index_path, index)
        .with_context(|| format!("failed to write {}", index_path.display()))?;
    println!("Wrote {} images to {}", registry().len(), out.display());
    Ok(())
}

/// Lowercase ASCII file stem for a family name.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_owned()
}

/// Describe a file size and basename.
fn describe_file(path: &Path) -> Result<String> {
    let metadata =
        fs::metadata(path).with_context(|| format!("failed to stat file {}", path.display()))?;
    let size = human_size(metadata.len());
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    Ok(format!("{size} \t{name}"))
}

/// Render a byte count as a human-friendly string.
fn human_size(bytes: u64) -> String {
    let units = ["B", "KB", "MB", "GB"];
    let mut amount = bytes as f64;

    for unit in units {
        if amount < 1024.0 || unit == units[units.len() - 1] {
            return format!("{amount:.1} {unit}");
        }
        amount /= 1024.0;
    }

    format!("{amount:.1} TB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_file_safe() {
        assert_eq!(slug("Rose curve"), "rose-curve");
        assert_eq!(slug("Lissajous (a, b)"), "lissajous-a-b");
        assert_eq!(slug("Hexagram"), "hexagram");
    }

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(human_size(512), "512.0 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
    }
}
