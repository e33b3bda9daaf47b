use chrono::NaiveDate;
use dioxus::prelude::*;

#[component]
pub fn StatCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    #[props(into)] description: Option<String>,
) -> Element {
    rsx!(
        div { class: "stat bg-base-200 rounded-box",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
            if let Some(description) = description {
                div { class: "stat-desc", "{description}" }
            }
        }
    )
}

/// Horizontal bar per day, scaled against the busiest day
#[component]
pub fn DailyChart(#[props(into)] title: String, series: Vec<(NaiveDate, usize)>) -> Element {
    let max = series.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);

    rsx!(
        div { class: "bg-base-200 rounded-box p-4",
            h3 { class: "font-semibold mb-2", "{title}" }
            for (day, count) in series {
                div { key: "{day}", class: "flex items-center gap-2 text-sm",
                    span { class: "w-24", {day.format("%b %d").to_string()} }
                    progress {
                        class: "progress progress-primary flex-1",
                        value: "{count}",
                        max: "{max}",
                    }
                    span { class: "w-8 text-right", "{count}" }
                }
            }
        }
    )
}
