//! Static project page.

/// How forecasts are produced, shown on the about page.
const WORKFLOW: [(&str, &str); 4] = [
    (
        "Data Collection",
        "Historical tea auction prices are gathered and cleaned.",
    ),
    (
        "Data Analysis",
        "A seasonal time-series model (SARIMAX) produces the base forecast.",
    ),
    (
        "Prediction",
        "A bidirectional LSTM refines the forecast from historical patterns.",
    ),
    (
        "User Interface",
        "Forecasts and market trends are served over HTTP to this client.",
    ),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AboutView;

impl AboutView {
    pub fn render(&self) -> String {
        let mut out = String::from("About TeaCast\n\n");
        out.push_str("TeaCast forecasts Sri Lankan tea auction prices.\n\nHow it works\n");
        for (i, (title, text)) in WORKFLOW.iter().enumerate() {
            out.push_str(&format!("  {}. {title}: {text}\n", i + 1));
        }
        out
    }
}
