//! Analytics dashboard page.

use std::fmt::Write;
use std::sync::Arc;

use super::{Loader, ViewState};
use crate::models::{CategoryTile, DashboardBundle};
use crate::TeaCastClient;

pub const DASHBOARD_FAILED: &str = "Failed to load dashboard data";

#[derive(Default)]
pub struct DashboardView {
    loader: Loader<DashboardBundle>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, client: &Arc<TeaCastClient>) {
        let client = Arc::clone(client);
        self.loader.start(move || match client.dashboard().fetch() {
            Ok(bundle) => ViewState::Ready(bundle),
            Err(_) => ViewState::Failed(DASHBOARD_FAILED.to_string()),
        });
    }

    pub fn poll(&mut self) -> bool {
        self.loader.poll()
    }

    pub fn wait(&mut self) -> &ViewState<DashboardBundle> {
        self.loader.wait()
    }

    pub fn unmount(&mut self) {
        self.loader.cancel();
    }

    pub fn state(&self) -> &ViewState<DashboardBundle> {
        self.loader.state()
    }

    /// Priority tiles in fixed order, then the rest in server order.
    pub fn tiles(&self) -> (Vec<CategoryTile>, Vec<CategoryTile>) {
        self.state()
            .data()
            .map(DashboardBundle::partition_categories)
            .unwrap_or_default()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let bundle = match self.state() {
            ViewState::Loading => return "Loading dashboard data...\n".to_string(),
            ViewState::Failed(msg) => return format!("{msg}\n"),
            ViewState::Empty => return "No dashboard data available.\n".to_string(),
            ViewState::Ready(bundle) => bundle,
        };
        let series = &bundle.tea_price_data;

        let _ = writeln!(out, "Tea Market Analytics Dashboard\n");
        let _ = writeln!(out, "Tea Price Trends (Western High - BOPF/BOPFSp)");
        write_series(
            &mut out,
            series.tea_prices.iter().filter_map(|p| Some((&p.date, p.price?))),
            "LKR",
        );

        let (priority, others) = self.tiles();
        let _ = writeln!(out);
        for tile in &priority {
            write_tile(&mut out, tile);
        }

        let _ = writeln!(out, "\nOther Tea Categories");
        for tile in &others {
            write_tile(&mut out, tile);
        }

        let _ = writeln!(out, "\nEconomic Indicators");
        let _ = writeln!(out, "USD-LKR Exchange Rate");
        write_series(
            &mut out,
            series.usd_rates.iter().filter_map(|p| Some((&p.date, p.rate?))),
            "LKR",
        );
        let _ = writeln!(out, "Crude Oil Price Trends");
        write_series(
            &mut out,
            series
                .crude_oil_prices
                .iter()
                .filter_map(|p| Some((&p.date, p.price?))),
            "LKR",
        );
        out
    }
}

fn write_tile(out: &mut String, tile: &CategoryTile) {
    let _ = writeln!(
        out,
        "  {:<18} LKR {:.2}  {}",
        tile.name, tile.average_price, tile.date
    );
}

/// One-line summary of a chart series: point count and latest value.
fn write_series<'a>(out: &mut String, points: impl Iterator<Item = (&'a String, f64)>, unit: &str) {
    let (count, last) = points.fold((0usize, None), |(n, _), p| (n + 1, Some(p)));
    match last {
        Some((date, value)) => {
            let _ = writeln!(out, "  {count} points, latest {date}: {unit} {value:.2}");
        }
        None => {
            let _ = writeln!(out, "  No data");
        }
    }
}
