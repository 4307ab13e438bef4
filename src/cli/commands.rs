use std::fs;
use std::path::Path;

use log::{info, warn};
use walkdir::WalkDir;

use crate::cli::types::Cli;
use crate::toc::{self, TocOptions, TocResult};
use crate::utils::error::{BoxResult, TocifyError};

/// Handle the default generate action for a file or directory input
pub fn handle_generate_command(cli: &Cli) -> BoxResult<()> {
    let options = TocOptions {
        ordered_list: cli.ordered,
        list_class: cli.list_class.clone().unwrap_or_default(),
    };

    if cli.input.is_dir() {
        if let Some(output) = &cli.output {
            fs::create_dir_all(output)?;
        }
        process_directory(cli, &options)
    } else if cli.input.is_file() {
        process_file(&cli.input, cli, &options)
    } else {
        Err(TocifyError::Input(format!(
            "input path does not exist: {}",
            cli.input.display()
        ))
        .into())
    }
}

/// Process every HTML file below the input directory
fn process_directory(cli: &Cli, options: &TocOptions) -> BoxResult<()> {
    let mut processed = 0;
    let mut skipped = 0;

    for entry in WalkDir::new(&cli.input).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_html_file(path) {
            continue;
        }

        match process_file(path, cli, options) {
            Ok(()) => processed += 1,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                skipped += 1;
            }
        }
    }

    if processed == 0 && skipped == 0 {
        warn!("No HTML files found in {}", cli.input.display());
    }
    info!("Processed {} files ({} skipped)", processed, skipped);

    Ok(())
}

/// Generate the TOC for a single article file
fn process_file(path: &Path, cli: &Cli, options: &TocOptions) -> BoxResult<()> {
    let article_text = fs::read_to_string(path)?;
    let result = toc::generate_with_options(&article_text, options)?;

    if result.error_msg.is_empty() {
        info!("{}: {} headings", path.display(), result.heading_count);
    } else {
        warn!("{}: {}", path.display(), result.error_msg);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.toc_list);
    }

    if let Some(output) = &cli.output {
        write_updated_article(output, path, &result)?;
    }

    Ok(())
}

/// Write the annotated article copy next to its target path
fn write_updated_article(output: &Path, source: &Path, result: &TocResult) -> BoxResult<()> {
    if !result.error_msg.is_empty() {
        warn!(
            "Not writing {}: the source has no headings",
            source.display()
        );
        return Ok(());
    }

    let target = if output.is_dir() {
        let file_name = source.file_name().ok_or_else(|| {
            TocifyError::Input(format!("input has no file name: {}", source.display()))
        })?;
        output.join(file_name)
    } else {
        output.to_path_buf()
    };

    fs::write(&target, &result.updated_text)?;
    info!("Wrote annotated article to {}", target.display());

    Ok(())
}

fn is_html_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("html") | Some("htm")
    )
}
