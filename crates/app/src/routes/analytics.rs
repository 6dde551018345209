use crate::session::use_session;
use client::analytics::{
    charts, plot_script, summary_text, ANALYTICS_FAILED_NOTICE, PRIMARY_CHART_ID, SECONDARY_CHART_ID,
};
use client::ApiClient;
use dioxus::prelude::*;
use shared_types::AppConfig;
use shared_ui::{Card, PageHeader, SkeletonCards};

/// Summary line and two charts for the signed-in role.
#[component]
pub fn Analytics() -> Element {
    let api = use_context::<ApiClient>();
    let config = use_context::<AppConfig>();
    let session = use_session();

    let summary = use_resource(move || {
        let api = api.clone();
        let current = session.session();
        async move {
            let current = current?;
            match api.analytics(current.role, &current.username).await {
                Ok(summary) => Some(Ok(summary)),
                Err(e) => {
                    tracing::error!(error = %e, role = %current.role, "Failed to load analytics");
                    Some(Err(e))
                }
            }
        }
    });

    // Hand the chart JSON to Plotly once the containers are on the page.
    use_effect(move || {
        if let Some(Some(Ok(data))) = &*summary.read() {
            let drawn = charts(data);
            document::eval(&plot_script(PRIMARY_CHART_ID, &drawn.primary));
            document::eval(&plot_script(SECONDARY_CHART_ID, &drawn.secondary));
        }
    });

    let body = match &*summary.read() {
        None => rsx! { SkeletonCards { count: 2 } },
        Some(Some(Ok(data))) => rsx! {
            p { class: "analytics-summary", {summary_text(data)} }
            div { class: "analytics-charts",
                Card { div { id: PRIMARY_CHART_ID, class: "analytics-chart" } }
                Card { div { id: SECONDARY_CHART_ID, class: "analytics-chart" } }
            }
        },
        Some(_) => rsx! {
            p { class: "analytics-summary", "{ANALYTICS_FAILED_NOTICE}" }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./analytics.css") }
        document::Script { src: config.charts.plotly_src.clone() }
        PageHeader { title: "Analytics" }
        {body}
    }
}
