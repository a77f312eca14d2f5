//! Landing page with the auction ticker.

use std::fmt::Write;
use std::sync::Arc;

use super::{Loader, ViewState};
use crate::models::AuctionPriceEntry;
use crate::TeaCastClient;

pub const NO_AUCTION_DATA: &str = "No auction data available.";

#[derive(Default)]
pub struct HomeView {
    loader: Loader<Vec<AuctionPriceEntry>>,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, client: &Arc<TeaCastClient>) {
        let client = Arc::clone(client);
        self.loader.start(move || {
            let entries = client.auction_prices().fetch();
            if entries.is_empty() {
                ViewState::Empty
            } else {
                ViewState::Ready(entries)
            }
        });
    }

    pub fn poll(&mut self) -> bool {
        self.loader.poll()
    }

    pub fn wait(&mut self) -> &ViewState<Vec<AuctionPriceEntry>> {
        self.loader.wait()
    }

    pub fn unmount(&mut self) {
        self.loader.cancel();
    }

    pub fn state(&self) -> &ViewState<Vec<AuctionPriceEntry>> {
        self.loader.state()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Welcome to TeaCast");
        let _ = writeln!(
            out,
            "Tea auction prices and forecasts. See /analytics and /predictions.\n"
        );
        let _ = writeln!(out, "Current Tea Auction Prices");

        match self.state() {
            ViewState::Loading => {
                let _ = writeln!(out, "Loading auction data...");
            }
            ViewState::Failed(msg) => {
                let _ = writeln!(out, "{msg}");
            }
            ViewState::Empty => {
                let _ = writeln!(out, "{NO_AUCTION_DATA}");
            }
            ViewState::Ready(entries) => {
                for entry in entries {
                    let _ = writeln!(out, "  {}", entry.name);
                    let _ = writeln!(out, "    Auction Date: {}", entry.date);
                    let _ = writeln!(out, "    Starting Price: {}", entry.price);
                }
            }
        }
        out
    }
}
