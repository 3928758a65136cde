//! Paging and fetch handlers for the joke TUI.
//!
//! Every accepted page change yields a [`FetchTicket`]; the ticket is turned
//! into a command that runs the fetch and reports back with
//! [`AppMsg::PageLoaded`]. Whether the outcome is applied is up to the
//! controller.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::JokeApp;
use crate::controller::{FetchTicket, Resolution};
use crate::jokes::{FetchError, PageResult};
use crate::tui::messages::AppMsg;

impl JokeApp {
    /// Dispatches Prev/Next/Reload messages.
    pub(super) fn handle_paging_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let ticket = match msg {
            AppMsg::NextPage => self.controller.on_next(),
            AppMsg::PrevPage => self.controller.on_prev(),
            AppMsg::Reload => Some(self.controller.on_reload()),
            _ => None,
        }?;
        Some(self.fetch_cmd(ticket))
    }

    /// Dispatches fetch results to the controller.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if let AppMsg::PageLoaded { ticket, result } = msg {
            self.handle_page_loaded(*ticket, result);
        }
        None
    }

    fn handle_page_loaded(&mut self, ticket: FetchTicket, result: &Result<PageResult, FetchError>) {
        if self.controller.on_fetch_resolved(ticket, result.clone()) == Resolution::Applied {
            self.scroll_offset = 0;
        }
    }

    /// Creates a command that fetches the ticket's page.
    pub(super) fn fetch_cmd(&self, ticket: FetchTicket) -> Cmd {
        let source = self.source.clone();
        Box::pin(async move {
            let result = match source {
                Some(source) => source.fetch_page(ticket.page()).await,
                None => Err(FetchError::Configuration {
                    message: "no joke source configured".to_owned(),
                }),
            };
            Some(Box::new(AppMsg::PageLoaded { ticket, result }) as Box<dyn Any + Send>)
        })
    }
}
