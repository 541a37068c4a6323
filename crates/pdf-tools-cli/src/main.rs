use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use pdf_step_repeat::constants::{
    DEFAULT_BACK_OFFSET_X_MM, DEFAULT_BACK_OFFSET_Y_MM, DEFAULT_MARGIN_MM, pt_to_mm,
};
use pdf_step_repeat::{
    BackOffset, ImpositionSummary, MarginSpec, SheetFormat, StepRepeatOptions,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdft", about = "PDF tools CLI", version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step-and-repeat a two-sided card (page 1 front, page 2 back) onto print sheets
    StepRepeat {
        /// Input PDF with at least two pages
        input: PathBuf,

        /// Output PDF file [default: <input>_PRINT.pdf next to the input]
        output: Option<PathBuf>,

        /// Paper format: A4, A3, SRA4 or SRA3
        #[arg(short, long, default_value = "A4")]
        paper: String,

        /// Minimum print margin in mm on every side (overrides the per-axis margins)
        #[arg(long)]
        margin_mm: Option<f32>,

        /// Minimum left/right print margin in mm
        #[arg(long, default_value_t = DEFAULT_MARGIN_MM)]
        margin_x_mm: f32,

        /// Minimum top/bottom print margin in mm
        #[arg(long, default_value_t = DEFAULT_MARGIN_MM)]
        margin_y_mm: f32,

        /// Horizontal shift of the back side in mm (duplex registration)
        #[arg(long, default_value_t = DEFAULT_BACK_OFFSET_X_MM, allow_negative_numbers = true)]
        back_offset_x_mm: f32,

        /// Vertical shift of the back side in mm (duplex registration)
        #[arg(long, default_value_t = DEFAULT_BACK_OFFSET_Y_MM, allow_negative_numbers = true)]
        back_offset_y_mm: f32,

        /// Load options from a JSON file instead of the flags above
        #[arg(
            long,
            conflicts_with_all = [
                "paper",
                "margin_mm",
                "margin_x_mm",
                "margin_y_mm",
                "back_offset_x_mm",
                "back_offset_y_mm",
            ]
        )]
        config: Option<PathBuf>,

        /// Write the effective options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Print the plan only, don't generate PDF
        #[arg(long)]
        plan_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or(if cli.debug { "debug" } else { "warn" });
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::StepRepeat {
            input,
            output,
            paper,
            margin_mm,
            margin_x_mm,
            margin_y_mm,
            back_offset_x_mm,
            back_offset_y_mm,
            config,
            save_config,
            plan_only,
        } => {
            let options = match config {
                Some(path) => {
                    log::debug!("Loading options from {}", path.display());
                    StepRepeatOptions::load(&path)
                        .await
                        .with_context(|| format!("Failed to load {}", path.display()))?
                }
                None => StepRepeatOptions {
                    sheet_format: SheetFormat::from_name(&paper)?,
                    margins: MarginSpec::resolve(margin_mm, margin_x_mm, margin_y_mm),
                    back_offset: BackOffset {
                        x_mm: back_offset_x_mm,
                        y_mm: back_offset_y_mm,
                    },
                    ..Default::default()
                },
            };
            options.validate()?;

            if let Some(path) = save_config {
                options.save(&path).await?;
                println!("Saved options → {}", path.display());
            }

            let document = pdf_step_repeat::load_pdf(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let summary = pdf_step_repeat::calculate_summary(&document, &options)?;
            print_summary(&summary);

            if plan_only {
                return Ok(());
            }

            let output = output.unwrap_or_else(|| pdf_step_repeat::default_output_path(&input));
            let imposed = pdf_step_repeat::impose(&document, &options).await?;
            pdf_step_repeat::save_pdf(imposed, &output).await?;
            println!("Imposed → {}", output.display());
        }
    }

    Ok(())
}

fn print_summary(summary: &ImpositionSummary) {
    let (paper_w, paper_h) = summary.sheet_format.dimensions_mm();
    let scenario = &summary.plan.scenario;
    let card = summary.final_card();
    let margins = summary.plan.margins;

    println!("Step-and-repeat plan:");
    println!(
        "  Paper: {} ({} x {} mm)",
        summary.sheet_format, paper_w, paper_h
    );
    println!(
        "  Minimum margins: {:.2} x {:.2} mm",
        summary.margins.x_mm, summary.margins.y_mm
    );
    println!(
        "  Cards per sheet: {} ({} columns x {} rows)",
        scenario.capacity(),
        scenario.cols,
        scenario.rows
    );
    println!("  Trim: {} mm per edge", scenario.trim_mm);
    println!("  Rotated: {}", if scenario.rotate { "yes" } else { "no" });
    println!(
        "  Final card: {:.2} x {:.2} mm",
        pt_to_mm(card.width),
        pt_to_mm(card.height)
    );
    println!(
        "  Final margins: {:.2} x {:.2} mm",
        pt_to_mm(margins.x),
        pt_to_mm(margins.y)
    );
    println!(
        "  Back offset: {:.2} x {:.2} mm",
        summary.back_offset.x_mm, summary.back_offset.y_mm
    );
}
