//! Analytics summaries and chart payloads.
//!
//! Charts are drawn by Plotly in the browser; this module only produces the
//! trace/layout JSON handed to `Plotly.newPlot`. Month and crop keys come
//! from `BTreeMap`s so every series is ordered lexicographically.

use serde::Serialize;
use serde_json::{json, Value};
use shared_types::{AnalyticsSummary, BuyerAnalytics, FarmerAnalytics, NgoAnalytics};

/// Shown in place of the summary when the fetch fails.
pub const ANALYTICS_FAILED_NOTICE: &str = "Failed to load analytics";

/// DOM ids of the two chart slots on the analytics page.
pub const PRIMARY_CHART_ID: &str = "quantity-chart";
pub const SECONDARY_CHART_ID: &str = "secondary-chart";

const CHART_HEIGHT: u32 = 380;

/// Gauge geometry for the buyer savings indicator.
pub const GAUGE_MAX: f64 = 200.0;
pub const GAUGE_REFERENCE: f64 = 100.0;
pub const GAUGE_THRESHOLD: f64 = 150.0;

/// A labelled numeric series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One `Plotly.newPlot` call plus an optional follow-up animation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Value,
    pub layout: Value,
    pub config: Value,
    /// Transition length in milliseconds for `Plotly.animate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate_ms: Option<u32>,
}

impl ChartSpec {
    fn new(data: Value, layout: Value) -> Self {
        Self {
            data,
            layout,
            config: json!({ "responsive": true, "displayModeBar": false }),
            animate_ms: None,
        }
    }

    fn animated(mut self, ms: u32) -> Self {
        self.animate_ms = Some(ms);
        self
    }
}

/// Both charts for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsCharts {
    pub primary: ChartSpec,
    pub secondary: ChartSpec,
}

/// The one-line summary above the charts.
pub fn summary_text(summary: &AnalyticsSummary) -> String {
    match summary {
        AnalyticsSummary::Farmer(f) => format!(
            "You sold {:.1} kg crops and earned Rs. {:.2} total.",
            f.total_quantity, f.total_earnings
        ),
        AnalyticsSummary::Buyer(b) => format!(
            "{} listings available. Average savings: Rs. {:.2} per item.",
            b.total_listings, b.avg_savings_per_item
        ),
        AnalyticsSummary::Ngo(n) => format!(
            "You received {:.1} kg of donated food ({} donations). {} available now.",
            n.total_claimed_quantity, n.claimed_count, n.available_count
        ),
    }
}

pub fn charts(summary: &AnalyticsSummary) -> AnalyticsCharts {
    match summary {
        AnalyticsSummary::Farmer(f) => farmer_charts(f),
        AnalyticsSummary::Buyer(b) => buyer_charts(b),
        AnalyticsSummary::Ngo(n) => ngo_charts(n),
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

pub fn listing_type_series(f: &FarmerAnalytics) -> Series {
    Series {
        labels: vec!["Sell".into(), "Barter".into(), "Donate".into()],
        values: vec![f.sell_count as f64, f.barter_count as f64, f.donate_count as f64],
    }
}

pub fn monthly_earnings_series(f: &FarmerAnalytics) -> Series {
    let mut series = Series::default();
    for (month, m) in &f.monthly_data {
        series.labels.push(month.clone());
        series.values.push(m.earnings);
    }
    series
}

pub fn crop_type_series(b: &BuyerAnalytics) -> Series {
    let mut series = Series::default();
    for (crop, count) in &b.crop_types {
        series.labels.push(crop.clone());
        series.values.push(*count as f64);
    }
    series
}

pub fn claim_status_series(n: &NgoAnalytics) -> Series {
    Series {
        labels: vec!["Claimed by You".into(), "Available".into()],
        values: vec![n.claimed_count as f64, n.available_count as f64],
    }
}

pub fn monthly_claims_series(n: &NgoAnalytics) -> Series {
    let mut series = Series::default();
    for (month, qty) in &n.monthly_claims {
        series.labels.push(month.clone());
        series.values.push(*qty);
    }
    series
}

// ---------------------------------------------------------------------------
// Chart payloads
// ---------------------------------------------------------------------------

fn farmer_charts(f: &FarmerAnalytics) -> AnalyticsCharts {
    let types = listing_type_series(f);
    let primary = ChartSpec::new(
        json!([{
            "values": types.values,
            "labels": types.labels,
            "type": "pie",
            "marker": { "colors": ["#4caf50", "#ff9800", "#2196f3"] },
            "textinfo": "label+percent",
            "hoverinfo": "label+value+percent",
        }]),
        json!({
            "title": "Listing Distribution by Type",
            "showlegend": true,
            "height": CHART_HEIGHT,
            "margin": { "t": 40, "b": 20, "l": 20, "r": 20 },
        }),
    );

    let earnings = monthly_earnings_series(f);
    let text: Vec<String> = earnings.values.iter().map(|e| format!("Rs. {e:.2}")).collect();
    let secondary = ChartSpec::new(
        json!([{
            "x": earnings.labels,
            "y": earnings.values,
            "type": "bar",
            "marker": { "color": "#4caf50", "line": { "color": "#2e7d32", "width": 1.5 } },
            "text": text,
            "textposition": "outside",
            "hovertemplate": "<b>%{x}</b><br>Earnings: Rs. %{y:.2f}<extra></extra>",
        }]),
        json!({
            "title": "Monthly Earnings",
            "xaxis": { "title": "Month" },
            "yaxis": { "title": "Earnings (Rs.)" },
            "height": CHART_HEIGHT,
            "margin": { "t": 40, "b": 60, "l": 60, "r": 20 },
        }),
    )
    .animated(1000);

    AnalyticsCharts { primary, secondary }
}

fn buyer_charts(b: &BuyerAnalytics) -> AnalyticsCharts {
    let crops = crop_type_series(b);
    let primary = ChartSpec::new(
        json!([{
            "y": crops.labels,
            "x": crops.values,
            "type": "bar",
            "orientation": "h",
            "marker": { "color": "#66bb6a", "line": { "color": "#388e3c", "width": 1 } },
            "hovertemplate": "<b>%{y}</b><br>Count: %{x}<extra></extra>",
        }]),
        json!({
            "title": "Available Crops",
            "xaxis": { "title": "Number of Listings" },
            "yaxis": { "title": "Crop Type" },
            "height": CHART_HEIGHT,
            "margin": { "t": 40, "b": 60, "l": 100, "r": 20 },
        }),
    );

    let secondary = ChartSpec::new(
        json!([{
            "type": "indicator",
            "mode": "gauge+number+delta",
            "value": b.avg_savings_per_item,
            "title": { "text": "Avg Savings per Item (Rs.)" },
            "delta": { "reference": GAUGE_REFERENCE },
            "gauge": {
                "axis": { "range": [0.0, GAUGE_MAX] },
                "bar": { "color": "#4caf50" },
                "steps": [
                    { "range": [0, 50], "color": "#c8e6c9" },
                    { "range": [50, 100], "color": "#81c784" },
                    { "range": [100, 200], "color": "#66bb6a" },
                ],
                "threshold": {
                    "line": { "color": "red", "width": 4 },
                    "thickness": 0.75,
                    "value": GAUGE_THRESHOLD,
                },
            },
        }]),
        json!({
            "height": CHART_HEIGHT,
            "margin": { "t": 20, "b": 20, "l": 20, "r": 20 },
        }),
    );

    AnalyticsCharts { primary, secondary }
}

fn ngo_charts(n: &NgoAnalytics) -> AnalyticsCharts {
    let status = claim_status_series(n);
    let primary = ChartSpec::new(
        json!([{
            "values": status.values,
            "labels": status.labels,
            "type": "pie",
            "marker": { "colors": ["#2196f3", "#ff9800"] },
            "textinfo": "label+value",
            "hoverinfo": "label+value+percent",
        }]),
        json!({
            "title": "Donation Status",
            "showlegend": true,
            "height": CHART_HEIGHT,
            "margin": { "t": 40, "b": 20, "l": 20, "r": 20 },
        }),
    );

    let claims = monthly_claims_series(n);
    let secondary = ChartSpec::new(
        json!([{
            "x": claims.labels,
            "y": claims.values,
            "type": "scatter",
            "mode": "lines+markers",
            "line": { "color": "#2196f3", "width": 3, "shape": "spline" },
            "marker": { "size": 10, "color": "#1976d2" },
            "fill": "tozeroy",
            "fillcolor": "rgba(33, 150, 243, 0.1)",
            "hovertemplate": "<b>%{x}</b><br>Quantity: %{y:.1f} kg<extra></extra>",
        }]),
        json!({
            "title": "Monthly Food Received (kg)",
            "xaxis": { "title": "Month" },
            "yaxis": { "title": "Quantity (kg)" },
            "height": CHART_HEIGHT,
            "margin": { "t": 40, "b": 60, "l": 60, "r": 20 },
        }),
    )
    .animated(1500);

    AnalyticsCharts { primary, secondary }
}

/// JavaScript that draws `spec` into the element with id `target`.
///
/// The charting script loads asynchronously, so drawing is retried until
/// `window.Plotly` exists.
pub fn plot_script(target: &str, spec: &ChartSpec) -> String {
    let target = Value::String(target.to_string());
    let mut draw = format!(
        "Plotly.newPlot({target}, {data}, {layout}, {config})",
        data = spec.data,
        layout = spec.layout,
        config = spec.config,
    );
    if let Some(ms) = spec.animate_ms {
        draw.push_str(&format!(
            ".then(() => Plotly.animate({target}, {{ data: {data}, traces: [0], layout: {{}} }}, \
             {{ transition: {{ duration: {ms}, easing: 'cubic-in-out' }}, frame: {{ duration: {ms} }} }}))",
            data = spec.data,
        ));
    }
    format!("(function draw() {{ if (!window.Plotly) {{ return setTimeout(draw, 100); }} {draw}; }})();")
}
