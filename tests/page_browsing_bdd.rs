//! Behavioural tests for browsing pages against a stub joke service.
//!
//! The controller is driven the same way the TUI drives it: every accepted
//! page change yields a ticket, the ticket's page is fetched through the
//! caching HTTP source, and the outcome is handed back to the controller.

mod support;

use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use jokepager::controller::FetchTicket;
use jokepager::jokes::{CachingJokeSource, HttpJokeSource, JokeSource, SourceSettings};
use jokepager::PageController;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use wiremock::MockServer;

use support::joke_server::{mount_pages, requests_for_page, search_url};
use support::runtime::{SharedRuntime, scenario_runtime_and_service};

#[derive(ScenarioState, Default)]
struct BrowsingState {
    runtime: Slot<SharedRuntime>,
    server: Slot<Rc<MockServer>>,
    source: Slot<Arc<dyn JokeSource>>,
    controller: Slot<PageController>,
}

#[fixture]
fn browsing_state() -> BrowsingState {
    BrowsingState::default()
}

fn seed_service(state: &BrowsingState, total: u32, failing: Option<u32>) -> Result<(), io::Error> {
    let (runtime, server) = scenario_runtime_and_service(&state.runtime, &state.server)?;
    runtime.block_on(mount_pages(&server, total, failing));

    let settings = SourceSettings {
        base_url: search_url(&server),
        timeout: Duration::from_secs(5),
        ..SourceSettings::default()
    };
    let remote = HttpJokeSource::new(&settings).map_err(io::Error::other)?;
    state
        .source
        .set(Arc::new(CachingJokeSource::new(remote, 16)));
    Ok(())
}

/// Fetches the ticket's page and hands the outcome to the controller.
fn resolve(state: &BrowsingState, controller: &mut PageController, ticket: FetchTicket) {
    let runtime = state.runtime.get().expect("runtime should be initialised");
    let source = state.source.get().expect("joke service should be seeded");
    let outcome = runtime.block_on(source.fetch_page(ticket.page()));
    controller.on_fetch_resolved(ticket, outcome);
}

/// Runs `action` against the stored controller, resolving any fetch it issues.
fn drive(state: &BrowsingState, action: impl FnOnce(&mut PageController) -> Option<FetchTicket>) {
    let mut controller = state
        .controller
        .take()
        .expect("browser should be mounted first");
    if let Some(ticket) = action(&mut controller) {
        resolve(state, &mut controller, ticket);
    }
    state.controller.set(controller);
}

fn with_controller<T>(state: &BrowsingState, read: impl FnOnce(&PageController) -> T) -> T {
    state
        .controller
        .with_ref(read)
        .expect("browser should be mounted first")
}

// --- Given steps ---

#[given("a joke service with {total:u32} pages")]
fn joke_service(browsing_state: &BrowsingState, total: u32) -> Result<(), io::Error> {
    seed_service(browsing_state, total, None)
}

#[given("a joke service with {total:u32} pages where page {failing:u32} fails")]
fn failing_joke_service(
    browsing_state: &BrowsingState,
    total: u32,
    failing: u32,
) -> Result<(), io::Error> {
    seed_service(browsing_state, total, Some(failing))
}

// --- When steps ---

#[when("the browser mounts")]
fn browser_mounts(browsing_state: &BrowsingState) {
    let (mut controller, ticket) = PageController::mount();
    resolve(browsing_state, &mut controller, ticket);
    browsing_state.controller.set(controller);
}

#[when("the user moves to the next page")]
fn next_page(browsing_state: &BrowsingState) {
    drive(browsing_state, PageController::on_next);
}

#[when("the user moves to the previous page")]
fn previous_page(browsing_state: &BrowsingState) {
    drive(browsing_state, PageController::on_prev);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the user submits page {text}")]
fn submit_page(browsing_state: &BrowsingState, text: String) {
    let typed = text.trim_matches('"');
    drive(browsing_state, |controller| {
        controller.on_page_text_change(typed);
        controller.on_submit()
    });
}

// --- Then steps ---

#[then("page {current:u32} of {total:u32} is displayed")]
fn page_displayed(browsing_state: &BrowsingState, current: u32, total: u32) {
    let shown = with_controller(browsing_state, |controller| {
        (
            controller.current_page().map(|page| page.get()),
            controller.total_pages(),
        )
    });

    assert_eq!(shown, (Some(current), Some(total)));
}

#[then("the service was asked for page {page:u32} exactly {count:usize} times")]
fn request_count(browsing_state: &BrowsingState, page: u32, count: usize) {
    let runtime = browsing_state
        .runtime
        .get()
        .expect("runtime should be initialised");
    let server = browsing_state
        .server
        .get()
        .expect("server should be initialised");

    let received = runtime.block_on(requests_for_page(&server, page));

    assert_eq!(received, count, "requests for page {page}");
}

#[then("the next page control is disabled")]
fn next_disabled(browsing_state: &BrowsingState) {
    assert!(!with_controller(browsing_state, PageController::can_go_next));
}

#[then("the page input is flagged as invalid")]
fn input_flagged(browsing_state: &BrowsingState) {
    assert!(with_controller(
        browsing_state,
        PageController::validation_error
    ));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the fetch error mentions {fragment}")]
fn fetch_error_mentions(browsing_state: &BrowsingState, fragment: String) {
    let expected = fragment.trim_matches('"');
    let message = with_controller(browsing_state, |controller| {
        controller.fetch_error().map(ToString::to_string)
    })
    .expect("a fetch error should be recorded");

    assert!(
        message.contains(expected),
        "expected {expected:?} in {message:?}"
    );
}

#[scenario(path = "tests/features/page_browsing.feature", index = 0)]
fn first_page_loads_on_mount(browsing_state: BrowsingState) {
    let _ = browsing_state;
}

#[scenario(path = "tests/features/page_browsing.feature", index = 1)]
fn revisited_page_is_cached(browsing_state: BrowsingState) {
    let _ = browsing_state;
}

#[scenario(path = "tests/features/page_browsing.feature", index = 2)]
fn typed_page_is_loaded(browsing_state: BrowsingState) {
    let _ = browsing_state;
}

#[scenario(path = "tests/features/page_browsing.feature", index = 3)]
fn out_of_range_page_is_rejected(browsing_state: BrowsingState) {
    let _ = browsing_state;
}

#[scenario(path = "tests/features/page_browsing.feature", index = 4)]
fn failing_page_keeps_previous_jokes(browsing_state: BrowsingState) {
    let _ = browsing_state;
}
