//! CLI entry point for treedump

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use chrono::Local;
use clap::Parser;
use serde::Deserialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use treedump::{GenerateConfig, Generated, generate};

#[derive(Parser, Debug)]
#[command(name = "treedump")]
#[command(about = "Generate a text snapshot of a directory tree with line-numbered file contents")]
#[command(version)]
struct Args {
    /// Root directory to scan (defaults to the configured root, then ".")
    path: Option<PathBuf>,

    /// Write the artifact to FILE instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Include only files with this extension, e.g. "-e .py" (repeatable;
    /// none means all files)
    #[arg(short = 'e', long = "ext")]
    ext: Vec<String>,

    /// Exclude directories with this exact name anywhere in the tree (repeatable)
    #[arg(long = "blacklist-folder", value_name = "NAME")]
    blacklist_folder: Vec<String>,

    /// Exclude files with this exact name anywhere in the tree (repeatable)
    #[arg(long = "blacklist-file", value_name = "NAME")]
    blacklist_file: Vec<String>,

    /// Sort directories with this name to the front of their siblings
    /// (repeatable, earlier flags sort first)
    #[arg(long = "priority-folder", value_name = "NAME")]
    priority_folder: Vec<String>,

    /// Sort files with this name to the front of their siblings (repeatable)
    #[arg(long = "priority-file", value_name = "NAME")]
    priority_file: Vec<String>,

    /// Maximum content lines per file, 0 for unlimited (default: 1000)
    #[arg(long = "max-lines", value_name = "N")]
    max_lines: Option<usize>,

    /// Maximum characters per content line, 0 for unlimited (default: 300)
    #[arg(long = "max-line-length", value_name = "N")]
    max_line_length: Option<usize>,

    /// Structure-only output, suppressing file contents
    #[arg(short = 'c', long = "compact")]
    compact: bool,

    /// Load settings from a JSON file; explicit flags override its values
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Never color warnings on stderr
    #[arg(long = "no-color")]
    no_color: bool,
}

/// Settings document, in the same JSON shape the GUI front-end persists.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    root_dir: String,
    output_file: String,
    extensions: Vec<String>,
    blacklist_folders: Vec<String>,
    blacklist_files: Vec<String>,
    priority_folders: Vec<String>,
    priority_files: Vec<String>,
    max_lines: Option<usize>,
    max_line_length: Option<usize>,
    compact_view: bool,
}

fn load_settings(path: &Path) -> Result<SettingsFile, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("cannot read config file {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("cannot parse config file {}: {}", path.display(), e))
}

/// Ensure an extension carries a leading dot so it passes engine validation.
fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{}", trimmed)
    }
}

/// Header prepended when the artifact is written to a file, matching the
/// settings document's front-end convention. Kept out of the engine so its
/// output stays byte-identical across runs.
fn file_header(root: &Path, config: &GenerateConfig) -> String {
    let absolute = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let extensions = if config.included_extensions.is_empty() {
        "all files".to_string()
    } else {
        config.included_extensions.join(", ")
    };
    format!(
        "File Structure - {}\nScan Date: {}\nExtensions: {}\n{}\n\n",
        absolute.display(),
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        extensions,
        "=".repeat(80),
    )
}

fn print_warnings(result: &Generated, use_color: bool) -> io::Result<()> {
    let choice = if use_color && io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    for warning in &result.warnings {
        stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(stderr, "treedump: warning:")?;
        stderr.reset()?;
        writeln!(stderr, " {}", warning)?;
    }
    if !result.warnings.is_empty() {
        writeln!(
            stderr,
            "treedump: completed with {} warning(s)",
            result.warnings.len()
        )?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => match load_settings(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("treedump: {}", e);
                process::exit(1);
            }
        },
        None => SettingsFile::default(),
    };

    let extensions = if args.ext.is_empty() {
        settings.extensions
    } else {
        args.ext
    };

    let config = GenerateConfig {
        included_extensions: extensions.iter().map(|e| normalize_extension(e)).collect(),
        blacklisted_folders: if args.blacklist_folder.is_empty() {
            settings.blacklist_folders.into_iter().collect()
        } else {
            args.blacklist_folder.into_iter().collect()
        },
        blacklisted_files: if args.blacklist_file.is_empty() {
            settings.blacklist_files.into_iter().collect()
        } else {
            args.blacklist_file.into_iter().collect()
        },
        priority_folders: if args.priority_folder.is_empty() {
            settings.priority_folders
        } else {
            args.priority_folder
        },
        priority_files: if args.priority_file.is_empty() {
            settings.priority_files
        } else {
            args.priority_file
        },
        max_lines_per_file: args.max_lines.or(settings.max_lines).unwrap_or(1000),
        max_line_length: args.max_line_length.or(settings.max_line_length).unwrap_or(300),
        compact_view: args.compact || settings.compact_view,
    };

    let root = args
        .path
        .or_else(|| {
            if settings.root_dir.is_empty() {
                None
            } else {
                Some(PathBuf::from(settings.root_dir))
            }
        })
        .unwrap_or_else(|| PathBuf::from("."));

    let output_path = args.output.or_else(|| {
        if settings.output_file.is_empty() {
            None
        } else {
            Some(PathBuf::from(settings.output_file))
        }
    });

    let result = match generate(&root, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("treedump: {}", e);
            process::exit(1);
        }
    };

    let written = match &output_path {
        Some(path) => {
            let artifact = format!("{}{}", file_header(&root, &config), result.text);
            fs::write(path, artifact).map(|_| {
                println!("Tree written to {}", path.display());
            })
        }
        None => io::stdout().write_all(result.text.as_bytes()),
    };
    if let Err(e) = written {
        eprintln!("treedump: error writing output: {}", e);
        process::exit(1);
    }

    if let Err(e) = print_warnings(&result, !args.no_color) {
        eprintln!("treedump: error writing warnings: {}", e);
        process::exit(1);
    }
}
