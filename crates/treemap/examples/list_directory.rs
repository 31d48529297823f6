//! CLI example that loads a directory and prints its treemap
//!
//! Usage:
//!   cargo run --example list_directory [path] [width] [height]
//!
//! If no path is provided, uses the current directory. The whole tree is
//! expanded and every visible file rectangle is printed with its path.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use treemap::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("."));
    let width = parse_dimension(args.get(2), 1024)?;
    let height = parse_dimension(args.get(3), 768)?;

    println!("Loading directory: {}", path.display());

    let tree: TreemapTree<PathBuf> = TreemapTree::new().labeling(FilesystemLabeling);
    let mut builder = RecordBuilder::new(tree);
    collect_files(&path, &mut Vec::new(), &mut builder)?;

    let root_name = path
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| path.display().to_string());
    let (mut tree, root) = builder.finish(root_name)?;

    tree.layout(root, Rect::new(0, 0, width, height))?;
    tree.expand_all(root)?;

    println!();
    println!("Treemap ({}x{}):", width, height);
    println!("═══════════════════════════════");
    for id in tree.visible_nodes(root) {
        let node = tree.get(id).context("visible node missing from tree")?;
        println!(
            "{:>24}  {}  {:>10}  {}",
            node.rect().to_string(),
            node.colour(),
            format_size(node.data_size()),
            tree.path_string(id)?
        );
    }

    println!("═══════════════════════════════");
    println!("Summary:");
    println!("  Total items: {}", tree.node_count());
    println!("  Directories: {}", tree.internal_nodes(root).len());
    println!("  Files: {}", tree.leaves(root).len());
    println!(
        "  Total size: {}",
        format_size(tree.get(root).map(|n| n.data_size()).unwrap_or(0))
    );
    Ok(())
}

fn parse_dimension(arg: Option<&String>, default: i32) -> Result<i32> {
    match arg {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid dimension {:?}", value)),
        None => Ok(default),
    }
}

/// Walk `dir`, feeding one record per regular file
fn collect_files(
    dir: &Path,
    segments: &mut Vec<String>,
    builder: &mut RecordBuilder<PathBuf>,
) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut entries: Vec<_> = entries.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let entry_path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Skipping {}: {}", entry_path.display(), e);
                continue;
            }
        };

        if metadata.is_dir() {
            segments.push(name);
            collect_files(&entry_path, segments, builder)?;
            segments.pop();
        } else if metadata.is_file() {
            builder.insert(Record::new(
                segments.iter().cloned(),
                name,
                metadata.len(),
                entry_path,
            ))?;
        } else {
            debug!("Ignoring {}", entry_path.display());
        }
    }
    Ok(())
}

/// Format file size in human-readable format
fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
