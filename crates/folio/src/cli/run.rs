//! Generation command handler.

use super::Cli;
use folio_core::{ProgressEvent, default_toc_prompt};
use folio_generator::BookGenerator;
use folio_interface::ProgressSink;
use folio_models::{GeminiConfig, GeminiSource};
use folio_writer::BookWriter;
use std::io::Write;

/// Runs a full generation: table of contents, optional edit and browse
/// pauses, then the chapter-by-chapter content loop.
#[tracing::instrument(skip_all, fields(title = %cli.title))]
pub async fn run_generation(cli: Cli) -> anyhow::Result<()> {
    let config = GeminiConfig::resolve(cli.model.as_deref(), &cli.api_key_file)?;
    tracing::info!(model = config.model(), "Resolved Gemini configuration");
    println!("Using Gemini model: {}", config.model());
    println!("Output directory: {}", cli.output_dir.display());

    let source = GeminiSource::new(&config);
    let writer = BookWriter::new(&cli.output_dir)?;
    let progress: Box<dyn ProgressSink> = Box::new(render_progress);
    let mut generator = BookGenerator::new(source, writer).with_progress(progress);

    let toc_prompt = cli
        .toc_prompt
        .clone()
        .unwrap_or_else(|| default_toc_prompt(&cli.title));

    println!("\nGenerating table of contents for '{}'...", cli.title);
    let toc = generator.generate_toc(&cli.title, &toc_prompt).await?;
    println!("\n{}", toc.to_markdown());

    // The sidecar is always written so a later run can pick the TOC up.
    if let Some(json_path) = generator.save_toc()? {
        println!("TOC saved to {}", json_path.display());
    }

    if cli.interactive_toc {
        let applied = generator
            .pause_for_edit(|json_path| {
                println!("\nEdit {} as needed.", json_path.display());
                wait_for_enter("Press Enter to continue after saving your changes...");
            })
            .await?;
        if applied {
            println!("Edited table of contents loaded.");
        } else {
            println!("Edited file could not be loaded; keeping the generated table of contents.");
        }
    }

    if cli.browse_after_toc {
        match generator.filepath() {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(content) => {
                    println!("\n{content}");
                    wait_for_enter("Press Enter to continue with book generation...");
                }
                Err(e) => eprintln!("Error reading book file: {e}"),
            },
            None => println!("No book content available yet."),
        }
    }

    println!("\nStarting book generation...");
    match generator.generate_book().await? {
        Some(path) => println!("\nBook written to {}", path.display()),
        None => {
            eprintln!("\nBook generation aborted; partial output left in place.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn wait_for_enter(message: &str) {
    print!("{message} ");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}

/// Renders progress events as console lines.
fn render_progress(event: ProgressEvent) {
    match event {
        ProgressEvent::Started { chapters, units } => {
            println!("Generating {chapters} chapters ({units} sections)...");
        }
        ProgressEvent::UnitCompleted {
            completed,
            total,
            label,
        } => {
            println!("  [{completed}/{total}] {label}");
        }
        ProgressEvent::SectionCompleted { chapter, title, .. } => {
            println!("Chapter {chapter} complete: {title}");
        }
        ProgressEvent::Finished => println!("All chapters generated."),
        ProgressEvent::Failed { message } => eprintln!("Generation failed: {message}"),
    }
}
