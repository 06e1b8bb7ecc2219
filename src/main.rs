// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use formulation_analysis::constants::DEFAULT_CONFIDENCE_LEVEL;
use formulation_analysis::data_analysis::anova::anova;
use formulation_analysis::data_analysis::descriptive::{batch_variability, summary_statistics};
use formulation_analysis::data_analysis::inference::{compare_means, confidence_interval};
use formulation_analysis::data_analysis::regression::linear_regression;
use formulation_analysis::data_input::csv_loader::load_dataset;
use formulation_analysis::data_input::dataset::{ColumnId, FormulationDataset};
use formulation_analysis::data_input::synthetic::generate_dataset;
use formulation_analysis::plot_framework::{render_box_plot, render_histogram, render_xy_chart};
use formulation_analysis::plot_functions::plot_box::box_plot;
use formulation_analysis::plot_functions::plot_compare_distributions::compare_distributions;
use formulation_analysis::plot_functions::plot_control_chart::control_chart;
use formulation_analysis::plot_functions::plot_histogram::histogram;
use formulation_analysis::plot_functions::plot_scatter::scatter_plot;
use formulation_analysis::types::AnalysisError;

const SYNTHETIC_ROWS: usize = 100;
const SYNTHETIC_SEED: u64 = 42;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [input_file.csv] [control_parameter]", args[0]);
        eprintln!("Without an input file, a synthetic {SYNTHETIC_ROWS}-row dataset is generated.");
        std::process::exit(1);
    }

    let (dataset, root_name) = if let Some(input_file) = args.get(1) {
        let input_path = Path::new(input_file);
        let root_name = input_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        println!("Loading formulation data from '{input_file}'...");
        (load_dataset(input_path)?, root_name)
    } else {
        println!(
            "No input file given; generating a synthetic formulation dataset ({SYNTHETIC_ROWS} rows, seed {SYNTHETIC_SEED})."
        );
        (
            generate_dataset(SYNTHETIC_ROWS, SYNTHETIC_SEED),
            "synthetic_formulation".to_string(),
        )
    };
    println!("Loaded {} rows.", dataset.rows());

    let control_parameter = match args.get(2) {
        Some(name) => ColumnId::from_name(name)?,
        None => ColumnId::Viscosity,
    };

    print_summary(&dataset);
    print_anova(&dataset)?;
    print_regression(&dataset)?;
    print_compare_means(&dataset)?;
    print_confidence_interval(&dataset)?;

    println!("\n--- Batch Variability ---");
    println!("  {}", batch_variability(&dataset, ColumnId::Viscosity)?);

    render_charts(&dataset, &root_name, control_parameter)?;

    println!(
        "\nAnalysis complete (formulation-analysis v{}).",
        formulation_analysis::crate_version()
    );
    Ok(())
}

fn print_summary(dataset: &FormulationDataset) {
    println!("\n--- Summary Statistics ---");
    let summary = summary_statistics(dataset);
    println!(
        "  {:<24} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Column", "Count", "Mean", "StdDev", "Min", "Q1", "Median", "Q3", "Max"
    );
    for s in &summary.numeric {
        println!(
            "  {:<24} {:>6} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
            s.column.name(),
            s.count,
            s.mean,
            s.std_dev,
            s.min,
            s.q1,
            s.median,
            s.q3,
            s.max
        );
    }
    for s in &summary.categorical {
        let levels: Vec<String> = s
            .level_counts
            .iter()
            .map(|(level, count)| format!("{level}: {count}"))
            .collect();
        println!(
            "  {:<24} {:>6}  mode = {:<12} [{}]",
            s.column.name(),
            s.count,
            s.mode,
            levels.join(", ")
        );
    }
}

fn print_anova(dataset: &FormulationDataset) -> Result<(), Box<dyn Error>> {
    println!("\n--- Analysis of Variance (Drug_Release ~ Excipient_Concentration) ---");
    match anova(
        dataset,
        ColumnId::DrugRelease,
        ColumnId::ExcipientConcentration,
    ) {
        Ok(result) => {
            println!(
                "  Between: SS = {:.3}, df = {}, MS = {:.3}",
                result.ss_between, result.df_between, result.ms_between
            );
            println!(
                "  Within:  SS = {:.3}, df = {}, MS = {:.3}",
                result.ss_within, result.df_within, result.ms_within
            );
            println!(
                "  F({}, {}) = {:.4}, p = {:.4}",
                result.df_between, result.df_within, result.f_stat, result.p_value
            );
            Ok(())
        }
        // A continuous factor sampled without repeated values leaves no
        // within-group df; report it rather than abort the whole run.
        Err(AnalysisError::InsufficientData { .. }) => {
            println!("  Skipped: factor has no repeated levels to group by.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_regression(dataset: &FormulationDataset) -> Result<(), Box<dyn Error>> {
    println!(
        "\n--- Linear Regression (Drug_Release ~ Excipient_Concentration + Particle_Size + pH) ---"
    );
    let result = linear_regression(
        dataset,
        ColumnId::DrugRelease,
        &[
            ColumnId::ExcipientConcentration,
            ColumnId::ParticleSize,
            ColumnId::Ph,
        ],
    )?;
    println!(
        "  {:<26} {:>12} {:>12} {:>10} {:>10}",
        "Term", "Estimate", "StdError", "t", "p"
    );
    for entry in &result.coefficients {
        println!(
            "  {:<26} {:>12.4} {:>12.4} {:>10.3} {:>10.4}",
            entry.term, entry.estimate, entry.std_error, entry.t_stat, entry.p_value
        );
    }
    println!(
        "  R-squared = {:.4}, adjusted = {:.4}, residual std error = {:.4} on {} df",
        result.r_squared, result.adj_r_squared, result.residual_std_error, result.df_residual
    );
    Ok(())
}

fn print_compare_means(dataset: &FormulationDataset) -> Result<(), Box<dyn Error>> {
    println!("\n--- Compare Means (Drug_Release by Formulation_Type) ---");
    let result = compare_means(dataset, ColumnId::FormulationType, ColumnId::DrugRelease)?;
    println!(
        "  {} (n = {}): mean = {:.3};  {} (n = {}): mean = {:.3}",
        result.group_labels[0],
        result.group_counts[0],
        result.group_means[0],
        result.group_labels[1],
        result.group_counts[1],
        result.group_means[1]
    );
    println!(
        "  Welch t = {:.4} on {:.1} df, p = {:.4}",
        result.t_stat, result.df, result.p_value
    );
    println!(
        "  Mean difference = {:.3}, {:.0}% CI [{:.3}, {:.3}]",
        result.mean_difference,
        result.confidence * 100.0,
        result.ci_lower,
        result.ci_upper
    );
    Ok(())
}

fn print_confidence_interval(dataset: &FormulationDataset) -> Result<(), Box<dyn Error>> {
    println!("\n--- Confidence Interval (Drug_Release) ---");
    let interval = confidence_interval(dataset, ColumnId::DrugRelease, DEFAULT_CONFIDENCE_LEVEL)?;
    println!(
        "  mean = {:.3}, {:.0}% CI [{:.3}, {:.3}] (n = {})",
        interval.mean,
        interval.confidence * 100.0,
        interval.lower,
        interval.upper,
        interval.count
    );
    Ok(())
}

fn render_charts(
    dataset: &FormulationDataset,
    root_name: &str,
    control_parameter: ColumnId,
) -> Result<(), Box<dyn Error>> {
    println!("\n--- Rendering Charts ---");

    let scatter = scatter_plot(
        dataset,
        ColumnId::ExcipientConcentration,
        ColumnId::DrugRelease,
    )?;
    render_xy_chart(&scatter, &format!("{root_name}_Scatter.png"))?;

    let particle_hist = histogram(dataset, ColumnId::ParticleSize, None)?;
    render_histogram(&particle_hist, &format!("{root_name}_Histogram.png"))?;

    let stability_boxes = box_plot(dataset, ColumnId::StorageCondition, ColumnId::StabilityIndex)?;
    render_box_plot(&stability_boxes, &format!("{root_name}_BoxPlot.png"))?;

    let release_by_type =
        compare_distributions(dataset, ColumnId::FormulationType, ColumnId::DrugRelease)?;
    render_histogram(
        &release_by_type,
        &format!("{root_name}_CompareDistributions.png"),
    )?;

    let control = control_chart(dataset, control_parameter)?;
    render_xy_chart(&control, &format!("{root_name}_ControlChart.png"))?;

    Ok(())
}
