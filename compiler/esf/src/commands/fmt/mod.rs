//! The `fmt` command: apply parenthesis spacing to JavaScript files.
//!
//! Supports single files, directories, and stdin. Files are formatted in
//! parallel; each is an independent document.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use esf_fmt::FormatConfig;
use rayon::prelude::*;
use tracing::debug;

use crate::{describe_error, format_source};

/// Options of the format command.
#[derive(Debug, Default)]
pub struct FmtOptions {
    /// Report files that would change without writing them.
    pub check: bool,
    /// Read from stdin and write to stdout.
    pub stdin: bool,
    /// JSON configuration file.
    pub config: Option<PathBuf>,
}

/// Result of formatting a single file.
#[derive(Debug, PartialEq, Eq)]
pub enum FormatResult {
    /// Already formatted.
    Unchanged,
    /// Rewritten in place.
    Formatted,
    /// Would be rewritten (check mode).
    WouldFormat,
    /// Could not be read, parsed, or written.
    Error(String),
}

/// Totals over a set of files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatSummary {
    pub formatted: usize,
    pub unchanged: usize,
    pub errors: usize,
}

/// Format one file, writing it back unless `check` is set.
pub fn format_file(path: &Path, config: &FormatConfig, check: bool) -> FormatResult {
    let display = path.display().to_string();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return FormatResult::Error(format!("error reading '{display}': {e}")),
    };

    let formatted = match format_source(&content, config) {
        Ok(formatted) => formatted,
        Err(e) => return FormatResult::Error(describe_error(&display, &content, &e)),
    };

    if formatted == content {
        return FormatResult::Unchanged;
    }
    if check {
        return FormatResult::WouldFormat;
    }
    if let Err(e) = std::fs::write(path, &formatted) {
        return FormatResult::Error(format!("error writing '{display}': {e}"));
    }
    FormatResult::Formatted
}

/// The `.js` files under `path`, sorted; `path` itself if it is a file.
///
/// Hidden entries and `node_modules` are skipped during the walk.
pub fn collect_js_files(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        visit_js_files(path, &mut files);
        files.sort();
    }
    files
}

fn visit_js_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory '{}': {e}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') || name == "node_modules" {
                continue;
            }
        }

        if path.is_dir() {
            visit_js_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "js") {
            files.push(path);
        }
    }
}

/// Format every file reachable from `paths` in parallel.
pub fn format_paths(paths: &[PathBuf], config: &FormatConfig, check: bool) -> FormatSummary {
    let mut missing = 0;
    let mut files = Vec::new();
    for path in paths {
        if path.exists() {
            files.extend(collect_js_files(path));
        } else {
            eprintln!("Path not found: {}", path.display());
            missing += 1;
        }
    }
    debug!(files = files.len(), "formatting");

    let formatted_count = AtomicUsize::new(0);
    let unchanged_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(missing);

    files.par_iter().for_each(|file| {
        match format_file(file, config, check) {
            FormatResult::Formatted => {
                println!("Formatted: {}", file.display());
                formatted_count.fetch_add(1, Ordering::Relaxed);
            }
            FormatResult::WouldFormat => {
                println!("Would format: {}", file.display());
                formatted_count.fetch_add(1, Ordering::Relaxed);
            }
            FormatResult::Unchanged => {
                unchanged_count.fetch_add(1, Ordering::Relaxed);
            }
            FormatResult::Error(message) => {
                eprintln!("{message}");
                error_count.fetch_add(1, Ordering::Relaxed);
            }
        }
    });

    FormatSummary {
        formatted: formatted_count.load(Ordering::Relaxed),
        unchanged: unchanged_count.load(Ordering::Relaxed),
        errors: error_count.load(Ordering::Relaxed),
    }
}

/// Format stdin to stdout. Returns false on error.
fn format_stdin(config: &FormatConfig) -> bool {
    let mut content = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut content) {
        eprintln!("Error reading from stdin: {e}");
        return false;
    }
    match format_source(&content, config) {
        Ok(formatted) => {
            print!("{formatted}");
            true
        }
        Err(e) => {
            eprintln!("{}", describe_error("<stdin>", &content, &e));
            false
        }
    }
}

/// Parse `fmt` arguments into options and paths.
fn parse_args(args: &[String]) -> Result<(FmtOptions, Vec<PathBuf>), String> {
    let mut options = FmtOptions::default();
    let mut paths = Vec::new();
    for arg in args {
        if let Some(path) = arg.strip_prefix("--config=") {
            if path.is_empty() {
                return Err("--config requires a path".to_string());
            }
            options.config = Some(PathBuf::from(path));
            continue;
        }
        match arg.as_str() {
            "--check" => options.check = true,
            "--stdin" => options.stdin = true,
            arg if arg.starts_with('-') => return Err(format!("Unknown option: {arg}")),
            _ => paths.push(PathBuf::from(arg)),
        }
    }
    if options.stdin && !paths.is_empty() {
        return Err("Cannot specify paths with --stdin".to_string());
    }
    if options.stdin && options.check {
        return Err("Cannot use --check with --stdin".to_string());
    }
    Ok((options, paths))
}

fn print_fmt_help() {
    println!("Usage: esf fmt [options] [paths...]");
    println!();
    println!("Apply expression parenthesis spacing to .js files.");
    println!("Directories are searched recursively; defaults to the current directory.");
    println!();
    println!("Options:");
    println!("  --check            Report files that would change, exit 1 if any");
    println!("  --stdin            Read from stdin, write to stdout");
    println!("  --config=<file>    JSON config ({{\"whiteSpace\": {{\"before\": .., \"after\": ..}}}})");
    println!("  -h, --help         Show this help");
}

/// Entry point of `esf fmt`.
pub fn run_format(args: &[String]) {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_fmt_help();
        return;
    }

    let (options, mut paths) = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Run 'esf fmt --help' for usage");
            std::process::exit(1);
        }
    };

    let config = match &options.config {
        Some(path) => match FormatConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => FormatConfig::default(),
    };

    if options.stdin {
        if !format_stdin(&config) {
            std::process::exit(1);
        }
        return;
    }

    if paths.is_empty() {
        paths.push(PathBuf::from("."));
    }

    let summary = format_paths(&paths, &config, options.check);
    let total = summary.formatted + summary.unchanged + summary.errors;
    if total > 1 {
        println!();
        if options.check {
            println!(
                "{} would be formatted, {} already formatted, {} errors",
                summary.formatted, summary.unchanged, summary.errors
            );
        } else {
            println!(
                "{} formatted, {} unchanged, {} errors",
                summary.formatted, summary.unchanged, summary.errors
            );
        }
    }

    if summary.errors > 0 || (options.check && summary.formatted > 0) {
        std::process::exit(1);
    }
}
