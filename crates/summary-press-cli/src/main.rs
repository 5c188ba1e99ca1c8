use anyhow::Result;
use clap::Parser;
use summary_press_config::{Config, PaperSize};
use summary_press_engine::{Converter, PageGeometry, PageSize, ParseOptions, PdfRenderer, io};
use std::{path::PathBuf, process};

#[derive(Debug, Parser)]
#[command(name = "summary-press")]
#[command(about = "Convert markdown-flavoured book summaries into styled PDFs")]
#[command(version)]
struct Args {
    /// Summary file to convert; omit to convert a whole folder
    input: Option<PathBuf>,

    /// Output PDF path (defaults to INPUT with a .pdf extension)
    output: Option<PathBuf>,

    /// Convert every summary in the input folder
    #[arg(long, conflicts_with_all = ["input", "output"])]
    folder: bool,

    /// Folder scanned in folder mode (overrides config)
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Folder that receives PDFs in folder mode (overrides config)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Mode {
    Single { input: PathBuf, output: PathBuf },
    Folder { input_dir: PathBuf, output_dir: PathBuf },
}

impl Args {
    fn mode(&self, config: &Config) -> Mode {
        match &self.input {
            Some(input) if !self.folder => Mode::Single {
                input: input.clone(),
                output: self
                    .output
                    .clone()
                    .unwrap_or_else(|| io::default_output_for(input)),
            },
            _ => Mode::Folder {
                input_dir: self
                    .input_dir
                    .clone()
                    .unwrap_or_else(|| config.input_dir.clone()),
                output_dir: self
                    .output_dir
                    .clone()
                    .unwrap_or_else(|| config.output_dir.clone()),
            },
        }
    }
}

fn parse_options(config: &Config) -> ParseOptions {
    ParseOptions {
        date_format: config.date_format.clone(),
        fallback_title: config.fallback_title.clone(),
        ..ParseOptions::default()
    }
}

fn page_geometry(config: &Config) -> PageGeometry {
    let size = match config.page_size {
        PaperSize::A4 => PageSize::A4,
        PaperSize::Letter => PageSize::Letter,
    };
    PageGeometry::new(size, config.margin)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Fix or remove the config file, or pass --config <file> (default location {})",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    let converter = Converter::new(
        parse_options(&config),
        PdfRenderer::new(page_geometry(&config)),
    );

    match args.mode(&config) {
        Mode::Single { input, output } => {
            if let Err(e) = converter.convert_file(&input, &output) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
            println!("✓ Created {}", output.display());
        }
        Mode::Folder {
            input_dir,
            output_dir,
        } => {
            let report =
                match converter.convert_folder(&input_dir, &output_dir, &config.input_extension) {
                    Ok(report) => report,
                    Err(e) => {
                        eprintln!("Error: {e}");
                        eprintln!(
                            "Put your summaries in '{}' or pass --input-dir <folder>",
                            input_dir.display()
                        );
                        process::exit(1);
                    }
                };

            for (input, output) in &report.succeeded {
                println!("✓ {} -> {}", input.display(), output.display());
            }
            for (input, e) in &report.failed {
                println!("✗ {}: {e}", input.display());
            }
            println!(
                "Converted {} of {} file(s) into {}",
                report.succeeded.len(),
                report.total(),
                output_dir.display()
            );

            if !report.is_success() {
                process::exit(1);
            }
        }
    }

    Ok(())
}
