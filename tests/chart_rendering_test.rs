// tests/chart_rendering_test.rs
// Renders each chart kind to a temp file and checks a PNG was produced.

use formulation_analysis::data_input::dataset::ColumnId;
use formulation_analysis::data_input::synthetic::generate_dataset;
use formulation_analysis::plot_framework::{render_box_plot, render_histogram, render_xy_chart};
use formulation_analysis::plot_functions::plot_box::box_plot;
use formulation_analysis::plot_functions::plot_compare_distributions::compare_distributions;
use formulation_analysis::plot_functions::plot_control_chart::control_chart;
use formulation_analysis::plot_functions::plot_histogram::histogram;
use formulation_analysis::plot_functions::plot_scatter::scatter_plot;

fn temp_png(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("formulation_chart_{name}.png"))
}

fn assert_rendered(path: &std::path::Path) {
    let metadata = std::fs::metadata(path).expect("chart file exists");
    assert!(metadata.len() > 0, "chart file is empty");
    std::fs::remove_file(path).ok();
}

#[test]
fn scatter_chart_renders_to_png() {
    let dataset = generate_dataset(50, 23);
    let config = scatter_plot(
        &dataset,
        ColumnId::ExcipientConcentration,
        ColumnId::DrugRelease,
    )
    .unwrap();
    let path = temp_png("scatter");
    render_xy_chart(&config, &path.to_string_lossy()).unwrap();
    assert_rendered(&path);
}

#[test]
fn histogram_renders_to_png() {
    let dataset = generate_dataset(50, 23);
    let config = histogram(&dataset, ColumnId::ParticleSize, Some(12)).unwrap();
    let path = temp_png("histogram");
    render_histogram(&config, &path.to_string_lossy()).unwrap();
    assert_rendered(&path);
}

#[test]
fn box_plot_renders_to_png() {
    let dataset = generate_dataset(50, 23);
    let config = box_plot(&dataset, ColumnId::StorageCondition, ColumnId::StabilityIndex).unwrap();
    let path = temp_png("box");
    render_box_plot(&config, &path.to_string_lossy()).unwrap();
    assert_rendered(&path);
}

#[test]
fn distribution_comparison_renders_to_png() {
    let dataset = generate_dataset(50, 23);
    let config =
        compare_distributions(&dataset, ColumnId::FormulationType, ColumnId::DrugRelease).unwrap();
    let path = temp_png("compare");
    render_histogram(&config, &path.to_string_lossy()).unwrap();
    assert_rendered(&path);
}

#[test]
fn control_chart_renders_to_png() {
    let dataset = generate_dataset(50, 23);
    let config = control_chart(&dataset, ColumnId::Viscosity).unwrap();
    let path = temp_png("control");
    render_xy_chart(&config, &path.to_string_lossy()).unwrap();
    assert_rendered(&path);
}
