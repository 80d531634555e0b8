use std::sync::Arc;
use std::time::Duration;

use dex_protocol::Region;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::navigator::{NavigatorState, SearchNavigator, SearchTarget, SettleOutcome};

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(350);
pub const DEFAULT_HIGHLIGHT_WINDOW: Duration = Duration::from_millis(3000);

/// UI-side port the driver steers. Implementations must tolerate repeated
/// `expand_region` calls for an already expanded region.
pub trait Viewport: Send + Sync + 'static {
    fn expand_region(&self, region_name: &str);

    /// Whether the form's element is currently rendered.
    fn is_present(&self, formeid: &str) -> bool;

    /// Scroll so the form sits in the vertical centre of the viewport.
    fn scroll_into_view(&self, formeid: &str);

    fn set_highlight(&self, formeid: Option<&str>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTiming {
    pub settle_delay: Duration,
    pub highlight_window: Duration,
}

impl Default for SearchTiming {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            highlight_window: DEFAULT_HIGHLIGHT_WINDOW,
        }
    }
}

/// Timed follow-up of one search. Dropping it does not cancel the timers.
#[derive(Debug)]
pub struct SearchHandle {
    pub target: SearchTarget,
    task: JoinHandle<()>,
}

impl SearchHandle {
    /// Waits until the settle and highlight timers of this search have run.
    pub async fn finished(self) {
        if let Err(err) = self.task.await {
            log::warn!("Search #{} timer task failed: {err}", self.target.generation);
        }
    }
}

/// Drives `SearchNavigator` against a `Viewport` on tokio timers.
pub struct SearchDriver<V: Viewport> {
    navigator: Arc<Mutex<SearchNavigator>>,
    viewport: Arc<V>,
    timing: SearchTiming,
}

impl<V: Viewport> SearchDriver<V> {
    pub fn new(viewport: Arc<V>, timing: SearchTiming) -> Self {
        Self {
            navigator: Arc::new(Mutex::new(SearchNavigator::new())),
            viewport,
            timing,
        }
    }

    pub fn viewport(&self) -> &Arc<V> {
        &self.viewport
    }

    pub fn timing(&self) -> SearchTiming {
        self.timing
    }

    pub async fn state(&self) -> NavigatorState {
        self.navigator.lock().await.state().clone()
    }

    /// Locates the form, expands its region and schedules the
    /// scroll/highlight and highlight-clear steps.
    ///
    /// A miss is returned as `SearchError::SearchMiss` for the UI to surface.
    pub async fn submit(&self, query: &str, regions: &[Region]) -> Result<SearchHandle> {
        let target = {
            let mut navigator = self.navigator.lock().await;
            let had_highlight = navigator.highlighted().is_some();
            let outcome = navigator.submit(query, regions);
            if had_highlight && navigator.highlighted().is_none() {
                self.viewport.set_highlight(None);
            }
            outcome?
        };

        self.viewport.expand_region(&target.region_name);

        let task = tokio::spawn(run_timers(
            Arc::clone(&self.navigator),
            Arc::clone(&self.viewport),
            self.timing,
            target.clone(),
        ));
        Ok(SearchHandle { target, task })
    }
}

async fn run_timers<V: Viewport>(
    navigator: Arc<Mutex<SearchNavigator>>,
    viewport: Arc<V>,
    timing: SearchTiming,
    target: SearchTarget,
) {
    tokio::time::sleep(timing.settle_delay).await;
    {
        let mut navigator = navigator.lock().await;
        let present = viewport.is_present(&target.formeid);
        match navigator.settle(target.generation, present) {
            SettleOutcome::Highlight(target) => {
                viewport.scroll_into_view(&target.formeid);
                viewport.set_highlight(Some(&target.formeid));
            }
            SettleOutcome::Missed | SettleOutcome::Stale => return,
        }
    }

    tokio::time::sleep(timing.highlight_window).await;
    let mut navigator = navigator.lock().await;
    if navigator.clear_highlight(target.generation) {
        viewport.set_highlight(None);
    }
}
