use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use dex_filter::{build_view, CatalogView, FilterSettings, OwnershipIndex};
use dex_protocol::{sort_regions, Region};

use crate::api::DexApi;
use crate::error::Result;
use crate::session::Session;

/// Everything one successful load cycle produced.
#[derive(Debug, Clone)]
pub struct DexSnapshot {
    pub generation: u64,
    /// Sorted: the trailing region is last.
    pub regions: Vec<Region>,
    pub ownership: OwnershipIndex,
    /// Settings the cycle was started with.
    pub settings: FilterSettings,
}

impl DexSnapshot {
    pub fn view(&self) -> CatalogView {
        build_view(&self.regions, &self.ownership, &self.settings)
    }
}

#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        generation: u64,
    },
    Ready(Arc<DexSnapshot>),
    Failed {
        generation: u64,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Applied(Arc<DexSnapshot>),
    /// A newer cycle started before this one resolved; its result was dropped.
    Superseded { generation: u64, current: u64 },
}

impl LoadOutcome {
    pub fn snapshot(&self) -> Option<&Arc<DexSnapshot>> {
        match self {
            LoadOutcome::Applied(snapshot) => Some(snapshot),
            LoadOutcome::Superseded { .. } => None,
        }
    }
}

/// Runs load cycles against a `DexApi`.
///
/// Both fetches run concurrently and are joined all-or-nothing. Each cycle
/// takes a generation; a cycle that resolves after a newer one started is
/// discarded and never touches the stored state.
pub struct DexLoader<A: DexApi> {
    api: A,
    generation: AtomicU64,
    state: Mutex<LoadState>,
}

impl<A: DexApi> DexLoader<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            generation: AtomicU64::new(0),
            state: Mutex::new(LoadState::Idle),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> LoadState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn snapshot(&self) -> Option<Arc<DexSnapshot>> {
        match self.state() {
            LoadState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub async fn load(&self, session: &Session, settings: &FilterSettings) -> Result<LoadOutcome> {
        let credential = session.credential()?;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.set_state(LoadState::Loading { generation });
        log::info!("Load cycle #{generation} started");

        let fetched = tokio::try_join!(
            self.api.fetch_catalog(credential, settings),
            self.api.fetch_owned(credential, settings)
        );

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.current_generation();
        if current != generation {
            log::warn!("Discarding load cycle #{generation}, #{current} is newer");
            return Ok(LoadOutcome::Superseded {
                generation,
                current,
            });
        }

        let (mut regions, owned) = match fetched {
            Ok(fetched) => fetched,
            Err(err) => {
                log::warn!("Load cycle #{generation} failed: {err}");
                *state = LoadState::Failed {
                    generation,
                    message: err.to_string(),
                };
                return Err(err);
            }
        };

        sort_regions(&mut regions);
        let ownership = OwnershipIndex::build(&owned);
        let unmatched = ownership.unmatched_formeids(&regions);
        if !unmatched.is_empty() {
            log::debug!(
                "{} owned forms are absent from the catalog slice",
                unmatched.len()
            );
        }
        log::info!(
            "Load cycle #{generation} ready: {} regions, {} owned instances, {} owned forms",
            regions.len(),
            owned.len(),
            ownership.len()
        );

        let snapshot = Arc::new(DexSnapshot {
            generation,
            regions,
            ownership,
            settings: settings.clone(),
        });
        *state = LoadState::Ready(Arc::clone(&snapshot));
        Ok(LoadOutcome::Applied(snapshot))
    }

    fn set_state(&self, next: LoadState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
