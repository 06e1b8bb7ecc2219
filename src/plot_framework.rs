// src/plot_framework.rs

use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::IntoDrawingArea;
use plotters::element::{Circle, PathElement, Rectangle, Text};
use plotters::prelude::BitMapBackend;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    COLOR_BOX_MEDIAN, COLOR_WHISKER, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE,
    FONT_SIZE_GROUP_LABEL, FONT_SIZE_LEGEND, LINE_WIDTH_LEGEND, LINE_WIDTH_MEDIAN, PLOT_HEIGHT,
    PLOT_WIDTH, SCATTER_POINT_RADIUS,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// How a series is drawn on an x/y chart.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SeriesMarker {
    Line,
    Points,
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub marker: SeriesMarker,
}

/// Renderable descriptor for an x/y chart (scatter, line, control chart).
#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// One overlaid series of bin counts sharing the histogram's edges.
#[derive(Clone)]
pub struct HistogramSeries {
    pub label: String,
    pub color: RGBColor,
    pub counts: Vec<usize>,
}

/// Renderable descriptor for a histogram; `bin_edges` has one more entry
/// than each series' `counts`.
#[derive(Clone)]
pub struct HistogramConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bin_edges: Vec<f64>,
    pub series: Vec<HistogramSeries>,
}

/// Five-number summary of one group on a box plot.
#[derive(Clone)]
pub struct GroupBoxStats {
    pub label: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Renderable descriptor for a grouped box plot.
#[derive(Clone)]
pub struct BoxPlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub box_color: RGBColor,
    pub groups: Vec<GroupBoxStats>,
}

/// Renders an x/y chart descriptor to a PNG file.
pub fn render_xy_chart(config: &PlotConfig, output_filename: &str) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(config.x_range.clone(), config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(15)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &config.series {
        if s.data.is_empty() {
            continue;
        }
        let annotations = match s.marker {
            SeriesMarker::Line => chart.draw_series(LineSeries::new(
                s.data.iter().cloned(),
                s.color.stroke_width(s.stroke_width),
            ))?,
            SeriesMarker::Points => chart.draw_series(
                s.data
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), SCATTER_POINT_RADIUS, s.color.filled())),
            )?,
        };
        if !s.label.is_empty() {
            let color = s.color;
            annotations.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    root_area.present()?;
    println!("  Chart saved as '{output_filename}'.");
    Ok(())
}

/// Renders a histogram descriptor to a PNG file. Multiple series are drawn
/// as translucent overlaid bars with a legend.
pub fn render_histogram(
    config: &HistogramConfig,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let x_start = config.bin_edges.first().copied().unwrap_or(0.0);
    let x_end = config.bin_edges.last().copied().unwrap_or(1.0);
    let max_count = config
        .series
        .iter()
        .flat_map(|s| s.counts.iter())
        .copied()
        .max()
        .unwrap_or(0);
    let y_end = (max_count as f64 * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_start..x_end, 0.0..y_end)?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(15)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let opacity = if config.series.len() > 1 { 0.45 } else { 0.8 };
    for series in &config.series {
        let color = series.color;
        chart
            .draw_series(series.counts.iter().enumerate().filter_map(|(bin, &count)| {
                if count == 0 {
                    return None;
                }
                let left = *config.bin_edges.get(bin)?;
                let right = *config.bin_edges.get(bin + 1)?;
                Some(Rectangle::new(
                    [(left, 0.0), (right, count as f64)],
                    color.mix(opacity).filled(),
                ))
            }))?
            .label(&series.label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.mix(0.6).filled())
            });
    }

    if config.series.len() > 1 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    root_area.present()?;
    println!("  Chart saved as '{output_filename}'.");
    Ok(())
}

/// Renders a grouped box plot descriptor to a PNG file. Boxes span the
/// interquartile range, whiskers run to the group extremes, and group
/// labels are drawn along the bottom of the plot area.
pub fn render_box_plot(
    config: &BoxPlotConfig,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let value_min = config
        .groups
        .iter()
        .fold(f64::INFINITY, |acc, g| acc.min(g.min));
    let value_max = config
        .groups
        .iter()
        .fold(f64::NEG_INFINITY, |acc, g| acc.max(g.max));
    let (y_start, y_end) = calculate_range(value_min, value_max);
    let x_end = config.groups.len().max(1) as f64;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_end, y_start..y_end)?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(0)
        .y_labels(10)
        .disable_x_mesh()
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    const BOX_HALF_WIDTH: f64 = 0.3;
    const CAP_HALF_WIDTH: f64 = 0.12;
    let label_style = ("sans-serif", FONT_SIZE_GROUP_LABEL)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (index, group) in config.groups.iter().enumerate() {
        let center = index as f64 + 0.5;

        // Whisker with end caps.
        chart.draw_series(LineSeries::new(
            vec![(center, group.min), (center, group.max)],
            COLOR_WHISKER.stroke_width(1),
        ))?;
        for cap in [group.min, group.max] {
            chart.draw_series(LineSeries::new(
                vec![(center - CAP_HALF_WIDTH, cap), (center + CAP_HALF_WIDTH, cap)],
                COLOR_WHISKER.stroke_width(1),
            ))?;
        }

        // Interquartile box, filled then outlined.
        let corners = [
            (center - BOX_HALF_WIDTH, group.q1),
            (center + BOX_HALF_WIDTH, group.q3),
        ];
        chart.draw_series(std::iter::once(Rectangle::new(
            corners,
            config.box_color.mix(0.35).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            corners,
            config.box_color.stroke_width(1),
        )))?;

        // Median line.
        chart.draw_series(LineSeries::new(
            vec![
                (center - BOX_HALF_WIDTH, group.median),
                (center + BOX_HALF_WIDTH, group.median),
            ],
            COLOR_BOX_MEDIAN.stroke_width(LINE_WIDTH_MEDIAN),
        ))?;

        // Group label just above the bottom edge.
        let label_y = y_start + (y_end - y_start) * 0.02;
        chart.draw_series(std::iter::once(Text::new(
            group.label.clone(),
            (center, label_y),
            label_style.clone(),
        )))?;
    }

    root_area.present()?;
    println!("  Chart saved as '{output_filename}'.");
    Ok(())
}


// src/plot_framework.rs
