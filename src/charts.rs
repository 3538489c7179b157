// src/charts.rs

use std::collections::HashMap;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Axis, BarChart, Block, Borders, Chart, Dataset as ChartDataset, GraphType, List,
        ListItem, Paragraph, Wrap,
    },
    Frame,
};

use crate::chart_spec::{Aggregation, ChartKind, ChartSpec};
use crate::dataset::Dataset;

const PALETTE: [Color; 7] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::LightBlue,
    Color::LightRed,
    Color::White,
];


pub struct LineSeries {
    pub points: Vec<(f64, f64)>,
    pub first_label: String,
    pub last_label: String,
}

pub struct GroupTotal {
    pub label: String,
    pub total: f64,
}

pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub share: f64,
}


fn parse_amount(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

// One point per row with a parseable value, x = row index. The label column
// only contributes the first/last axis labels.
pub fn line_series(dataset: &Dataset, spec: &ChartSpec) -> Option<LineSeries> {
    let label_idx = dataset.column_index(spec.label_column())?;
    let value_idx = dataset.column_index(spec.value_column())?;

    let labels = &dataset.data.columns[label_idx];
    let values = &dataset.data.columns[value_idx];

    let mut points = Vec::new();
    for (row_idx, cell) in values.iter().enumerate() {
        if let Some(value) = parse_amount(cell) {
            points.push((row_idx as f64, value));
        }
    }

    Some(LineSeries {
        points,
        first_label: labels.first().cloned().unwrap_or_default(),
        last_label: labels.last().cloned().unwrap_or_default(),
    })
}

// Group rows by the spec's label column and sum parseable values per group,
// largest total first, truncated to the spec's group cap. Rows without a
// parseable value are skipped.
pub fn grouped_totals(dataset: &Dataset, spec: &ChartSpec) -> Option<Vec<GroupTotal>> {
    let label_idx = dataset.column_index(spec.label_column())?;
    let value_idx = dataset.column_index(spec.value_column())?;

    let labels = &dataset.data.columns[label_idx];
    let values = &dataset.data.columns[value_idx];

    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, f64> = HashMap::new();

    for (label, cell) in labels.iter().zip(values.iter()) {
        if let Some(value) = parse_amount(cell) {
            if !sums.contains_key(label.as_str()) {
                order.push(label);
            }
            *sums.entry(label.as_str()).or_insert(0.0) += value;
        }
    }

    let mut totals: Vec<GroupTotal> = order
        .into_iter()
        .map(|label| GroupTotal {
            label: label.to_string(),
            total: sums[label],
        })
        .collect();

    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    if let Some(cap) = spec.group_cap {
        totals.truncate(cap);
    }
    Some(totals)
}

// Slice values sum to the table's total parseable amount; shares sum to 1.
pub fn pie_slices(dataset: &Dataset, spec: &ChartSpec) -> Option<Vec<PieSlice>> {
    let totals = grouped_totals(dataset, spec)?;
    let total: f64 = totals.iter().map(|group| group.total).sum();
    if total <= 0.0 {
        return Some(Vec::new());
    }

    Some(
        totals
            .into_iter()
            .map(|group| PieSlice {
                share: group.total / total,
                value: group.total,
                label: group.label,
            })
            .collect(),
    )
}


pub fn render_chart(f: &mut Frame, area: Rect, spec: &ChartSpec, dataset: &Dataset) {
    match spec.aggregation {
        Aggregation::None => {
            if let Some(series) = line_series(dataset, spec) {
                render_line(f, area, spec, &series);
            }
        }
        Aggregation::GroupSum => match spec.kind {
            ChartKind::Pie => {
                if let Some(slices) = pie_slices(dataset, spec) {
                    render_pie(f, area, spec, &slices);
                }
            }
            _ => {
                if let Some(totals) = grouped_totals(dataset, spec) {
                    render_bars(f, area, spec, &totals);
                }
            }
        },
    }
}


fn titled_block(spec: &ChartSpec) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", spec.title))
}

pub fn render_warning(f: &mut Frame, area: Rect, spec: &ChartSpec) {
    let warning = Paragraph::new(spec.warning())
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true })
        .block(titled_block(spec));
    f.render_widget(warning, area);
}

fn render_placeholder(f: &mut Frame, area: Rect, spec: &ChartSpec) {
    let placeholder = Paragraph::new("No numeric data to plot")
        .style(Style::default().fg(Color::DarkGray))
        .block(titled_block(spec));
    f.render_widget(placeholder, area);
}

fn format_value(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn render_line(f: &mut Frame, area: Rect, spec: &ChartSpec, series: &LineSeries) {
    if series.points.is_empty() {
        render_placeholder(f, area, spec);
        return;
    }

    let x_min = series.points.first().map_or(0.0, |p| p.0);
    let mut x_max = series.points.last().map_or(0.0, |p| p.0);
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for &(_, y) in &series.points {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let pad = ((y_max - y_min) * 0.05).max(1.0);
    let y_min = y_min - pad;
    let y_max = y_max + pad;

    let dataset = ChartDataset::default()
        .name(spec.title)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(spec.accent))
        .data(&series.points);

    let axis_style = Style::default().fg(Color::DarkGray);
    let chart = Chart::new(vec![dataset])
        .block(titled_block(spec))
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::raw(series.first_label.clone()),
                    Span::raw(series.last_label.clone()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format_value(y_min)),
                    Span::raw(format_value((y_min + y_max) / 2.0)),
                    Span::raw(format_value(y_max)),
                ]),
        );

    f.render_widget(chart, area);
}

// Filled wedge between two cumulative shares, 12 o'clock start, clockwise.
fn wedge_points(start: f64, end: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    let mut t = start;
    while t < end {
        let angle = std::f64::consts::FRAC_PI_2 - t * std::f64::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        let mut radius = 0.12;
        while radius <= 1.0 {
            points.push((cos * radius, sin * radius));
            radius += 0.08;
        }
        t += 0.004;
    }
    points
}

fn render_pie(f: &mut Frame, area: Rect, spec: &ChartSpec, slices: &[PieSlice]) {
    if slices.is_empty() {
        render_placeholder(f, area, spec);
        return;
    }

    let block = titled_block(spec);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let mut wedges = Vec::new();
    let mut start = 0.0;
    for (i, slice) in slices.iter().enumerate() {
        let end = start + slice.share;
        wedges.push((wedge_points(start, end), PALETTE[i % PALETTE.len()]));
        start = end;
    }

    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            for (points, color) in &wedges {
                ctx.draw(&Points {
                    coords: points,
                    color: *color,
                });
            }
        });
    f.render_widget(canvas, halves[0]);

    let items: Vec<ListItem> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let color = PALETTE[i % PALETTE.len()];
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(format!(
                    "{} {:.1}% ({})",
                    slice.label,
                    slice.share * 100.0,
                    format_value(slice.value)
                )),
            ]))
        })
        .collect();
    f.render_widget(List::new(items), halves[1]);
}

fn render_bars(f: &mut Frame, area: Rect, spec: &ChartSpec, totals: &[GroupTotal]) {
    if totals.is_empty() {
        render_placeholder(f, area, spec);
        return;
    }

    let labels: Vec<String> = totals
        .iter()
        .map(|group| group.label.chars().take(7).collect())
        .collect();
    let bars: Vec<(&str, u64)> = labels
        .iter()
        .zip(totals.iter())
        .map(|(label, group)| (label.as_str(), group.total.round().max(0.0) as u64))
        .collect();

    let chart = BarChart::default()
        .block(titled_block(spec))
        .bar_width(7)
        .bar_gap(1)
        .bar_style(Style::default().fg(spec.accent))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(spec.accent)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::Gray))
        .data(&bars);

    f.render_widget(chart, area);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_spec::{CUSTOMER_SEGMENTATION, SALES_OVER_TIME, TOP_PRODUCTS};
    use crate::data_loader::TableData;

    fn dataset(headers: &[&str], rows: &[&[&str]]) -> Dataset {
        let mut columns: Vec<Vec<String>> = headers.iter().map(|_| Vec::new()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                columns[i].push(cell.to_string());
            }
        }
        Dataset::new(TableData::new(
            headers.iter().map(|h| h.to_string()).collect(),
            columns,
        ))
    }

    #[test]
    fn test_line_series_one_point_per_parseable_row() {
        let data = dataset(
            &["date", "amount"],
            &[
                &["2024-01-01", "10"],
                &["2024-01-02", "n/a"],
                &["2024-01-03", "30.5"],
            ],
        );
        let series = line_series(&data, &SALES_OVER_TIME).unwrap();
        assert_eq!(series.points, vec![(0.0, 10.0), (2.0, 30.5)]);
        assert_eq!(series.first_label, "2024-01-01");
        assert_eq!(series.last_label, "2024-01-03");
    }

    #[test]
    fn test_line_series_missing_column() {
        let data = dataset(&["date", "region"], &[&["2024-01-01", "West"]]);
        assert!(line_series(&data, &SALES_OVER_TIME).is_none());
    }

    #[test]
    fn test_pie_slices_sum_to_total() {
        let data = dataset(
            &["region", "amount"],
            &[
                &["West", "10"],
                &["East", "30"],
                &["West", "20"],
                &["North", "40"],
            ],
        );
        let slices = pie_slices(&data, &CUSTOMER_SEGMENTATION).unwrap();
        let total: f64 = slices.iter().map(|s| s.value).sum();
        assert!((total - 100.0).abs() < 1e-9);
        let shares: f64 = slices.iter().map(|s| s.share).sum();
        assert!((shares - 1.0).abs() < 1e-9);
        // Largest first
        assert_eq!(slices[0].label, "North");
        assert!((slices[0].share - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_pie_slices_empty_when_no_numeric_rows() {
        let data = dataset(&["region", "amount"], &[&["West", "n/a"]]);
        let slices = pie_slices(&data, &CUSTOMER_SEGMENTATION).unwrap();
        assert!(slices.is_empty());
    }

    #[test]
    fn test_grouped_totals_sums_per_group() {
        let data = dataset(
            &["product", "amount"],
            &[
                &["Widget", "5"],
                &["Gadget", "2"],
                &["Widget", "7"],
                &["Gadget", "bad"],
            ],
        );
        let totals = grouped_totals(&data, &TOP_PRODUCTS).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].label, "Widget");
        assert!((totals[0].total - 12.0).abs() < 1e-9);
        assert!((totals[1].total - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_grouped_totals_caps_at_ten_largest() {
        let rows: Vec<Vec<String>> = (0..15)
            .map(|i| vec![format!("product-{}", i), format!("{}", i + 1)])
            .collect();
        let borrowed: Vec<Vec<&str>> = rows
            .iter()
            .map(|row| row.iter().map(String::as_str).collect())
            .collect();
        let row_slices: Vec<&[&str]> = borrowed.iter().map(Vec::as_slice).collect();
        let data = dataset(&["product", "amount"], &row_slices);

        let top = grouped_totals(&data, &TOP_PRODUCTS).unwrap();
        assert_eq!(top.len(), 10);
        // 10 largest sums, descending: 15, 14, ..., 6
        assert_eq!(top[0].label, "product-14");
        assert!((top[0].total - 15.0).abs() < 1e-9);
        assert!((top[9].total - 6.0).abs() < 1e-9);
        assert!(top.windows(2).all(|w| w[0].total >= w[1].total));
    }

    #[test]
    fn test_wedge_points_stay_inside_unit_circle() {
        let points = wedge_points(0.0, 0.25);
        assert!(!points.is_empty());
        for (x, y) in points {
            assert!(x * x + y * y <= 1.0 + 1e-9);
        }
    }
}
