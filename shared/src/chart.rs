//! Typed configuration for the chart shim. The charting library itself lives
//! on the JS side of the boundary; the Rust side only builds these values
//! and hands them over, so everything here is plain data with serde names
//! matching what the shim expects.

use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::UnwrapThrowExt;

use crate::proto::{AnalyticsSummary, TopCustomer};
use crate::utils::render_chart;

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: ColorSpec,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_thickness: Option<u32>,
}

/// One colour for the whole dataset, or one per bar.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    One(&'static str),
    PerBar(Vec<&'static str>),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
    pub scales: BTreeMap<&'static str, Axis>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ticks {
    pub color: &'static str,
}

fn linear_axis(position: &'static str, title: &'static str, overlay: bool) -> Axis {
    Axis {
        kind: Some("linear"),
        display: Some(true),
        position: Some(position),
        title: Some(AxisTitle {
            display: true,
            text: title,
        }),
        grid: overlay.then_some(Grid {
            draw_on_chart_area: Some(false),
            ..Grid::default()
        }),
        ..Axis::default()
    }
}

/// The overview chart: one bar per metric, each on its own axis so the
/// dollar figures don't flatten the transaction count.
pub fn summary_chart(summary: &AnalyticsSummary) -> ChartConfig {
    let datasets = vec![
        Dataset {
            label: "Total Sales ($)".to_string(),
            data: vec![summary.total_sales],
            background_color: ColorSpec::One("#4CAF50"),
            y_axis_id: Some("y"),
            border_radius: None,
            bar_thickness: None,
        },
        Dataset {
            label: "Total Transactions".to_string(),
            data: vec![summary.total_transactions as f64],
            background_color: ColorSpec::One("#2196F3"),
            y_axis_id: Some("y1"),
            border_radius: None,
            bar_thickness: None,
        },
        Dataset {
            label: "Avg Order Value ($)".to_string(),
            data: vec![summary.average_order_value],
            background_color: ColorSpec::One("#FF9800"),
            y_axis_id: Some("y2"),
            border_radius: None,
            bar_thickness: None,
        },
    ];

    let mut scales = BTreeMap::new();
    scales.insert("y", linear_axis("left", "Total Sales ($)", false));
    scales.insert("y1", linear_axis("right", "Total Transactions", true));
    scales.insert("y2", linear_axis("right", "Avg Order Value ($)", true));

    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels: vec!["Metrics".to_string()],
            datasets,
        },
        options: ChartOptions {
            responsive: true,
            plugins: None,
            scales,
        },
    }
}

/// Top customers by sales, one coloured bar each, legend hidden since the
/// bars are already labelled.
pub fn top_customers_chart(customers: &[TopCustomer]) -> ChartConfig {
    let labels = customers
        .iter()
        .map(|c| c.customer_name.clone())
        .collect::<Vec<_>>();
    let data = customers.iter().map(|c| c.total_sales).collect::<Vec<_>>();

    let mut scales = BTreeMap::new();
    scales.insert(
        "y",
        Axis {
            begin_at_zero: Some(true),
            ticks: Some(Ticks { color: "#888" }),
            grid: Some(Grid {
                color: Some("#eee"),
                ..Grid::default()
            }),
            ..Axis::default()
        },
    );
    scales.insert(
        "x",
        Axis {
            ticks: Some(Ticks { color: "#444" }),
            grid: Some(Grid {
                display: Some(false),
                ..Grid::default()
            }),
            ..Axis::default()
        },
    );

    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: "Sales ($)".to_string(),
                data,
                background_color: ColorSpec::PerBar(vec!["#6A5ACD", "#20B2AA", "#FFA07A"]),
                y_axis_id: None,
                border_radius: Some(8),
                bar_thickness: Some(50),
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: Some(Plugins {
                legend: Legend { display: false },
            }),
            scales,
        },
    }
}

/// Hand a configuration to the shim. Serialised JSON-compatible so the shim
/// sees plain objects rather than JS Maps.
pub fn render(target_id: &str, config: &ChartConfig) {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let value = serde::Serialize::serialize(config, &serializer)
        .expect_throw("failed to serialise chart config");
    render_chart(target_id, value);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn summary_chart_carries_the_exact_metric_values() {
        let summary = AnalyticsSummary {
            total_sales: 1000.0,
            total_transactions: 20,
            average_order_value: 50.0,
        };
        let config = summary_chart(&summary);
        assert_eq!(config.kind, "bar");
        assert_eq!(config.data.datasets.len(), 3);
        assert_eq!(config.data.datasets[0].data, vec![1000.0]);
        assert_eq!(config.data.datasets[1].data, vec![20.0]);
        assert_eq!(config.data.datasets[2].data, vec![50.0]);
        assert_eq!(config.data.datasets[0].y_axis_id, Some("y"));
        assert_eq!(config.data.datasets[1].y_axis_id, Some("y1"));
        assert_eq!(config.data.datasets[2].y_axis_id, Some("y2"));
    }

    #[wasm_bindgen_test]
    fn summary_chart_overlays_skip_the_chart_area() {
        let summary = AnalyticsSummary {
            total_sales: 1.0,
            total_transactions: 1,
            average_order_value: 1.0,
        };
        let config = summary_chart(&summary);
        let y1 = config.options.scales.get("y1").unwrap();
        assert_eq!(
            y1.grid.as_ref().unwrap().draw_on_chart_area,
            Some(false)
        );
        assert!(config.options.scales.get("y").unwrap().grid.is_none());
    }

    #[wasm_bindgen_test]
    fn top_customers_chart_maps_names_and_sales() {
        let customers = vec![
            TopCustomer {
                customer_name: "Acme".to_string(),
                total_sales: 300.0,
            },
            TopCustomer {
                customer_name: "Globex".to_string(),
                total_sales: 200.0,
            },
        ];
        let config = top_customers_chart(&customers);
        assert_eq!(config.data.labels, vec!["Acme", "Globex"]);
        assert_eq!(config.data.datasets[0].data, vec![300.0, 200.0]);
        assert!(!config.options.plugins.as_ref().unwrap().legend.display);
    }

    #[wasm_bindgen_test]
    fn dataset_serialises_with_chartjs_field_names() {
        let dataset = Dataset {
            label: "Sales ($)".to_string(),
            data: vec![1.0],
            background_color: ColorSpec::One("#eee"),
            y_axis_id: Some("y"),
            border_radius: Some(8),
            bar_thickness: None,
        };
        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["backgroundColor"], "#eee");
        assert_eq!(json["yAxisID"], "y");
        assert_eq!(json["borderRadius"], 8);
        assert!(json.get("barThickness").is_none());
    }
}
