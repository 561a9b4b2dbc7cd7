#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]

use std::{env, error::Error, fs::OpenOptions, io::Write, path::Path, process::ExitCode};

use chainset::{
    config::{ANALYSIS_FILE_ENV, AnalysisConfig},
    dataset::load_records,
    logger::initialize_logger,
    workload::{AnalysisReport, ListOrder, run_analysis},
};
use log::{error, info};
use plotters::prelude::*;

// Bars per ordering plus one gap
const SLOT_WIDTH: usize = 4;
const OPERATIONS: [&str; 3] = ["Insert", "Search", "Delete"];

fn append_csv_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

fn render_chart(report: &AnalysisReport, path: &Path) -> Result<(), Box<dyn Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
    ];

    let seconds: Vec<[f64; 3]> = report
        .runs
        .iter()
        .map(|run| {
            let t = run.timings;
            [t.insert.as_secs_f64(), t.search.as_secs_f64(), t.delete.as_secs_f64()]
        })
        .collect();

    let max_seconds = seconds
        .iter()
        .flat_map(|row| row.iter())
        .fold(0.0_f64, |max, &x| max.max(x))
        .max(1e-6) *
        1.1; // Add 10% margin

    let slots = report.runs.len() * SLOT_WIDTH;
    let labels: Vec<&str> = report.runs.iter().map(|run| run.order.label()).collect();

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Chained hash set timings ({} entries)", report.entries),
            (font_family, 35),
        )
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0..slots, 0.0..max_seconds)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|x| {
            if *x % SLOT_WIDTH == 1 {
                labels.get(*x / SLOT_WIDTH).map_or_else(String::new, ToString::to_string)
            } else {
                String::new()
            }
        })
        .x_desc("List order")
        .y_desc("Elapsed time (s)")
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (op_idx, &operation) in OPERATIONS.iter().enumerate() {
        let color = colors[op_idx % colors.len()];
        chart
            .draw_series(seconds.iter().enumerate().map(|(run_idx, row)| {
                let x = run_idx * SLOT_WIDTH + op_idx;
                Rectangle::new([(x, 0.0), (x + 1, row[op_idx])], color.filled())
            }))?
            .label(operation)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = AnalysisConfig::from_args(env::args().skip(1))?
        .with_analysis_file(env::var_os(ANALYSIS_FILE_ENV).map(Into::into));

    let records = load_records(&config.input, config.lines)?;

    println!("\n========================================");
    println!("Hash Table Performance Analysis");
    println!("Dataset: {}", config.input.display());
    println!("Number of entries: {}", records.len());
    println!("========================================\n");

    let mut rng = rand::rng();
    let report = run_analysis(&records, &mut rng);
    debug_assert_eq!(report.runs.len(), ListOrder::ALL.len());

    for run in &report.runs {
        println!("{run}");
    }

    append_csv_line(&config.analysis_file, &report.csv_line())?;
    info!("appended results to {}", config.analysis_file.display());

    if let Some(plot) = &config.plot {
        render_chart(&report, plot)?;
        println!("\nGenerated timing chart: {}", plot.display());
    }

    println!("\nResults appended to {}", config.analysis_file.display());
    println!("========================================\n");

    Ok(())
}

fn main() -> ExitCode {
    initialize_logger();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
