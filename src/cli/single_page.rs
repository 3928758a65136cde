//! Single page mode: print one page of jokes and exit.
//!
//! The requested page goes through the same controller as the TUI: page 1
//! is loaded first to learn the bounds, then the page number is submitted
//! exactly as if it had been typed.

use jokepager::AppError;
use jokepager::controller::{FetchTicket, PageController, Resolution};
use jokepager::jokes::{JokeSource, PageResult, validate_page_input};

use super::output::write_page;

/// Loads page `requested` from `source` and writes it to stdout.
///
/// # Errors
///
/// Returns [`AppError::InvalidPage`] if `requested` is outside the
/// collection, or [`AppError::Fetch`] if a fetch fails.
pub async fn run(source: &dyn JokeSource, requested: u32) -> Result<(), AppError> {
    let page = load_page(source, requested).await?;
    write_page(&page)
}

/// Drives a controller to page `requested` and returns that page.
///
/// # Errors
///
/// Same as [`run`], minus output failures.
pub async fn load_page(source: &dyn JokeSource, requested: u32) -> Result<PageResult, AppError> {
    let (mut controller, ticket) = PageController::mount();
    resolve(&mut controller, source, ticket).await?;

    let text = requested.to_string();
    controller.on_page_text_change(&text);
    let Some(ticket) = controller.on_submit() else {
        return Err(invalid_page(&text, controller.total_pages()));
    };
    resolve(&mut controller, source, ticket).await?;

    controller.result().cloned().ok_or_else(|| AppError::InvalidPage {
        message: format!("page {requested} returned no result"),
    })
}

async fn resolve(
    controller: &mut PageController,
    source: &dyn JokeSource,
    ticket: FetchTicket,
) -> Result<(), AppError> {
    let outcome = source.fetch_page(ticket.page()).await;
    match controller.on_fetch_resolved(ticket, outcome) {
        Resolution::Applied | Resolution::Stale => Ok(()),
        Resolution::Failed => Err(controller.fetch_error().cloned().map_or_else(
            || AppError::InvalidPage {
                message: format!("page {} failed to load", ticket.page()),
            },
            AppError::from,
        )),
    }
}

fn invalid_page(text: &str, total_pages: Option<u32>) -> AppError {
    let message = validate_page_input(text, total_pages)
        .err()
        .map_or_else(|| format!("page {text} was rejected"), |error| error.to_string());
    AppError::InvalidPage { message }
}
