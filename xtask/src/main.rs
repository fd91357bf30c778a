//! Bookshelf release tooling
//!
//!   cargo xtask build-web [--dev]   # wasm + shell page into dist/web
//!   cargo xtask package-itch        # dist/bookshelf-itch.zip

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Matches the [[bin]] name in the root Cargo.toml
const BIN_NAME: &str = "bookshelf";
const WASM_TARGET: &str = "wasm32-unknown-unknown";
/// Pinned to the macroquad version in the root Cargo.toml
const MQ_JS_BUNDLE_URL: &str =
    "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";
const ITCH_ZIP: &str = "bookshelf-itch.zip";

#[derive(Parser)]
#[command(name = "xtask", about = "Release tooling for Bookshelf")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build the web version into dist/web
    BuildWeb {
        /// Prefix the page title with [DEV]
        #[arg(long)]
        dev: bool,
    },
    /// Build the web version and zip it for itch.io
    PackageItch,
}

fn main() -> Result<()> {
    let root = workspace_root()?;
    match Cli::parse().command {
        Task::BuildWeb { dev } => build_web(&root, dev),
        Task::PackageItch => {
            build_web(&root, false)?;
            package_itch(&root)
        }
    }
}

fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().with_context(|| format!("failed to spawn {:?}", cmd))?;
    if !status.success() {
        bail!("{:?} exited with {}", cmd, status);
    }
    Ok(())
}

fn build_web(root: &Path, dev: bool) -> Result<()> {
    let out = root.join("dist/web");
    let wasm = format!("{}.wasm", BIN_NAME);

    println!("Compiling {} for {}...", BIN_NAME, WASM_TARGET);
    run(Command::new("cargo")
        .current_dir(root)
        .args(["build", "--release", "--target", WASM_TARGET, "--bin", BIN_NAME]))?;

    if out.exists() {
        fs::remove_dir_all(&out)?;
    }
    fs::create_dir_all(out.join("assets"))?;

    let built = root.join("target").join(WASM_TARGET).join("release").join(&wasm);
    fs::copy(&built, out.join(&wasm)).with_context(|| format!("missing {}", built.display()))?;

    let page = fs::read_to_string(root.join("docs/index.html")).context("missing docs/index.html")?;
    let page = if dev {
        page.replace("<title>Bookshelf", "<title>[DEV] Bookshelf")
    } else {
        page
    };
    fs::write(out.join("index.html"), page)?;

    // The layout is compiled in; the copy is only there to be read
    fs::copy(root.join("assets/bookshelf.ron"), out.join("assets/bookshelf.ron"))?;

    let bundle = out.join("mq_js_bundle.js");
    println!("Fetching {}...", MQ_JS_BUNDLE_URL);
    run(Command::new("curl").args(["-sSL", "-o"]).arg(&bundle).arg(MQ_JS_BUNDLE_URL))?;

    println!("Web build ready in {}", out.display());
    Ok(())
}

fn package_itch(root: &Path) -> Result<()> {
    let dist = root.join("dist");
    let zip = dist.join(ITCH_ZIP);
    if zip.exists() {
        fs::remove_file(&zip)?;
    }

    run(Command::new("zip")
        .current_dir(dist.join("web"))
        .args(["-qr", &format!("../{}", ITCH_ZIP), "."]))?;

    println!("itch.io upload: {}", zip.display());
    Ok(())
}
