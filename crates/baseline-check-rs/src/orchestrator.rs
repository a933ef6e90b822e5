//! Main orchestration logic.

use crate::cli::{Args, OutputFormat, Threshold};
use crate::config::CheckConfig;
use crate::output::{CheckSummary, FormattedFinding, Formatter, Severity};
use baseline_data::{DataError, FeatureRegistry};
use baseline_scanner::{Finding, FindingStatus, ScanOptions, ScanReport, Scanner, TextDocument};
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSetBuilder};
use rayon::prelude::*;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;
use walkdir::WalkDir;

/// Orchestration errors.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The embedded dataset failed to load.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// Watch error.
    #[error("watch error: {0}")]
    WatchFailed(String),
}

/// Runs the scan on all files.
pub async fn run(args: Args) -> Result<CheckSummary, OrchestratorError> {
    let workspace = if args.workspace.is_relative() {
        std::env::current_dir()
            .map(|p| Utf8PathBuf::try_from(p).unwrap_or_default())
            .unwrap_or_default()
            .join(&args.workspace)
    } else {
        args.workspace.clone()
    };

    // Load configuration
    let config = match &args.config {
        Some(path) => CheckConfig::load_file(path),
        None => CheckConfig::load(&workspace),
    };

    let registry = FeatureRegistry::load()?;

    // CLI flags override the config file
    let options = ScanOptions {
        rem_base: args.rem_base.unwrap_or(config.rem_base),
        reference_browser: args
            .reference_browser
            .clone()
            .unwrap_or_else(|| config.reference_browser.clone())
            .into(),
    };
    let pacing = Duration::from_millis(args.pacing_ms.unwrap_or(config.pacing_ms));
    let scanner = Scanner::with_options(&registry, options);

    let timings_enabled =
        args.timings || read_env_bool("BASELINE_CHECK_RS_TIMINGS").unwrap_or(false);

    // Build ignore glob set
    let mut ignore_builder = GlobSetBuilder::new();
    for pattern in args.ignore.iter().chain(&config.ignore) {
        let glob = Glob::new(pattern).map_err(|e| OrchestratorError::InvalidGlob(e.to_string()))?;
        ignore_builder.add(glob);
    }

    // Add default ignores
    for pattern in [
        "**/node_modules/**",
        "**/dist/**",
        "**/target/**",
        "**/.git/**",
    ] {
        if let Ok(glob) = Glob::new(pattern) {
            ignore_builder.add(glob);
        }
    }

    let ignore_set = ignore_builder
        .build()
        .map_err(|e| OrchestratorError::InvalidGlob(e.to_string()))?;

    // Find scannable files
    let scan_start = Instant::now();
    let extensions = config.file_extensions();
    let files: Vec<Utf8PathBuf> = WalkDir::new(&workspace)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Utf8PathBuf::try_from(e.into_path()).ok())
        .filter(|p| {
            let file_name = p.file_name().unwrap_or("");
            extensions.iter().any(|ext| file_name.ends_with(ext))
        })
        .filter(|p| {
            let relative = p.strip_prefix(&workspace).unwrap_or(p);
            !ignore_set.is_match(relative.as_str())
        })
        .collect();
    let file_scan_time = if timings_enabled {
        Some(scan_start.elapsed())
    } else {
        None
    };

    if args.watch {
        let extensions: Vec<String> = extensions.iter().map(|s| s.to_string()).collect();
        run_watch_mode(
            &args,
            &workspace,
            &scanner,
            pacing,
            extensions,
            files,
            file_scan_time,
        )
        .await
    } else {
        run_single_scan(&args, &workspace, &scanner, pacing, files, file_scan_time).await
    }
}

/// Runs a single scan pass.
async fn run_single_scan(
    args: &Args,
    workspace: &Utf8Path,
    scanner: &Scanner<'_>,
    pacing: Duration,
    files: Vec<Utf8PathBuf>,
    file_scan_time: Option<Duration>,
) -> Result<CheckSummary, OrchestratorError> {
    let total_start = Instant::now();
    let timings_enabled =
        args.timings || read_env_bool("BASELINE_CHECK_RS_TIMINGS").unwrap_or(false);
    let formatter = Formatter::new(args.output);
    let output_json = matches!(args.output, OutputFormat::Json);
    let hint_count = AtomicUsize::new(0);
    let info_count = AtomicUsize::new(0);
    let warning_count = AtomicUsize::new(0);
    let limited_count = AtomicUsize::new(0);

    struct FileOutput {
        text: Option<String>,
        json: Vec<FormattedFinding>,
    }

    // Filters one file's report by threshold, counts what passes, and
    // renders it for the selected output format.
    let collect_output =
        |file_path: &Utf8PathBuf, source: &str, report: &ScanReport| -> Option<FileOutput> {
            let findings: Vec<Finding> = report
                .findings()
                .filter(|finding| {
                    include_severity(Severity::from_status(finding.status), args.threshold)
                })
                .cloned()
                .collect();

            for finding in &findings {
                match Severity::from_status(finding.status) {
                    Severity::Hint => {
                        hint_count.fetch_add(1, Ordering::Relaxed);
                    }
                    Severity::Info => {
                        info_count.fetch_add(1, Ordering::Relaxed);
                    }
                    Severity::Warning => {
                        warning_count.fetch_add(1, Ordering::Relaxed);
                    }
                }
                if finding.status == FindingStatus::Limited {
                    limited_count.fetch_add(1, Ordering::Relaxed);
                }
            }

            if findings.is_empty() {
                return None;
            }

            let relative_path = file_path.strip_prefix(workspace).unwrap_or(file_path);
            Some(FileOutput {
                text: if output_json {
                    None
                } else {
                    Some(formatter.format(&findings, relative_path, source))
                },
                json: if output_json {
                    Formatter::format_json_findings(&findings, relative_path)
                } else {
                    Vec::new()
                },
            })
        };

    let scan_phase_start = Instant::now();
    // Scan files in parallel, or sequentially when pacing is requested
    let outputs: Vec<FileOutput> = if pacing.is_zero() {
        files
            .par_iter()
            .filter_map(|file_path| {
                let source = read_source(file_path)?;
                let doc = TextDocument::new(&source);
                let report = scanner.scan_document(&doc);
                collect_output(file_path, &source, &report)
            })
            .collect()
    } else {
        let mut collected = Vec::new();
        for file_path in &files {
            let Some(source) = read_source(file_path) else {
                continue;
            };
            let doc = TextDocument::new(&source);
            let report = scanner.scan_document_paced(&doc, pacing).await;
            if let Some(output) = collect_output(file_path, &source, &report) {
                collected.push(output);
            }
        }
        collected
    };
    let scan_phase_time = scan_phase_start.elapsed();

    let mut json_output = Vec::new();

    // Print findings
    if output_json {
        for output in outputs {
            json_output.extend(output.json);
        }
    } else {
        for output in outputs {
            if let Some(text) = output.text {
                print!("{}", text);
            }
        }
    }

    if timings_enabled {
        eprintln!("=== baseline-check-rs timings ===");
        if let Some(scan_time) = file_scan_time {
            eprintln!("file scan: {:?} ({} files)", scan_time, files.len());
        }
        eprintln!("scan phase: {:?} ({} files)", scan_phase_time, files.len());
        eprintln!("total: {:?}", total_start.elapsed());
    }

    let summary = CheckSummary {
        file_count: files.len(),
        hint_count: hint_count.load(Ordering::Relaxed),
        info_count: info_count.load(Ordering::Relaxed),
        warning_count: warning_count.load(Ordering::Relaxed),
        limited_count: limited_count.load(Ordering::Relaxed),
        fail_on_limited: args.fail_on_limited,
    };

    // Print summary
    if output_json {
        let json = serde_json::to_string_pretty(&json_output).unwrap_or_else(|_| "[]".to_string());
        println!("{}", json);
    } else {
        println!("{}", summary.format());
    }

    Ok(summary)
}

fn read_source(path: &Utf8Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            None
        }
    }
}

fn include_severity(severity: Severity, threshold: Threshold) -> bool {
    match threshold {
        Threshold::Hint => true,
        Threshold::Info => severity >= Severity::Info,
        Threshold::Warning => severity >= Severity::Warning,
    }
}

fn read_env_bool(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Runs in watch mode.
async fn run_watch_mode(
    args: &Args,
    workspace: &Utf8Path,
    scanner: &Scanner<'_>,
    pacing: Duration,
    extensions: Vec<String>,
    initial_files: Vec<Utf8PathBuf>,
    file_scan_time: Option<Duration>,
) -> Result<CheckSummary, OrchestratorError> {
    use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

    println!("Starting watch mode...\n");

    // Initial scan
    let _summary = run_single_scan(
        args,
        workspace,
        scanner,
        pacing,
        initial_files.clone(),
        file_scan_time,
    )
    .await?;

    // Set up file watcher with tokio channel
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        },
        Config::default().with_poll_interval(Duration::from_secs(1)),
    )
    .map_err(|e| OrchestratorError::WatchFailed(e.to_string()))?;

    watcher
        .watch(workspace.as_std_path(), RecursiveMode::Recursive)
        .map_err(|e| OrchestratorError::WatchFailed(e.to_string()))?;

    println!("Watching for changes... (Ctrl+C to stop)\n");

    while let Some(event) = rx.recv().await {
        // Check whether any scannable files changed
        let relevant = event.paths.iter().any(|p| {
            p.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| extensions.iter().any(|ext| name.ends_with(ext.as_str())))
        });

        if relevant {
            if !args.preserve_watch_output {
                // Clear screen
                print!("\x1B[2J\x1B[1;1H");
            }

            println!("File changed, re-scanning...\n");

            // Re-run scan
            let _ = run_single_scan(
                args,
                workspace,
                scanner,
                pacing,
                initial_files.clone(),
                file_scan_time,
            )
            .await;
        }
    }

    Err(OrchestratorError::WatchFailed(
        "watch channel closed unexpectedly".to_string(),
    ))
}
