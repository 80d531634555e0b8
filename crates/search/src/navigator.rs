use dex_protocol::Region;

use crate::error::{Result, SearchError};

/// Form located by a search, tagged with the generation of the search that
/// found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTarget {
    pub generation: u64,
    pub region_index: usize,
    pub region_name: String,
    pub form_index: usize,
    pub formeid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigatorState {
    #[default]
    Idle,
    Searching {
        generation: u64,
        query: String,
    },
    Found(SearchTarget),
    Highlighted(SearchTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Target is on screen: scroll to it and highlight it.
    Highlight(SearchTarget),
    /// Target element is absent (usually filtered out). Back to idle, no error.
    Missed,
    /// A newer search owns the navigator.
    Stale,
}

/// First form whose name contains `query` (case-insensitive), scanning
/// regions in their given order and forms in catalog order.
pub fn find_form(regions: &[Region], query: &str) -> Option<(usize, usize)> {
    let needle = query.to_lowercase();
    regions.iter().enumerate().find_map(|(region_index, region)| {
        region
            .pokemon
            .iter()
            .position(|form| form.name.to_lowercase().contains(&needle))
            .map(|form_index| (region_index, form_index))
    })
}

/// Find-expand-scroll-highlight state machine.
///
/// Every submit bumps the generation. Settle and clear callbacks carry the
/// generation they were scheduled for and are ignored once a newer search
/// has started.
#[derive(Debug, Default)]
pub struct SearchNavigator {
    state: NavigatorState,
    generation: u64,
}

impl SearchNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn highlighted(&self) -> Option<&str> {
        match &self.state {
            NavigatorState::Highlighted(target) => Some(target.formeid.as_str()),
            _ => None,
        }
    }

    /// Starts a new search. An empty query is rejected and leaves the
    /// current state untouched.
    pub fn submit(&mut self, query: &str, regions: &[Region]) -> Result<SearchTarget> {
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        self.generation += 1;
        let generation = self.generation;
        self.state = NavigatorState::Searching {
            generation,
            query: query.to_string(),
        };

        let Some((region_index, form_index)) = find_form(regions, query) else {
            log::debug!("Search #{generation} for '{query}' found nothing");
            self.state = NavigatorState::Idle;
            return Err(SearchError::SearchMiss {
                query: query.to_string(),
            });
        };

        let region = &regions[region_index];
        let form = &region.pokemon[form_index];
        let target = SearchTarget {
            generation,
            region_index,
            region_name: region.region_name.clone(),
            form_index,
            formeid: form.formeid.clone(),
            name: form.name.clone(),
        };
        log::debug!(
            "Search #{generation} matched {} in {}",
            target.formeid,
            target.region_name
        );
        self.state = NavigatorState::Found(target.clone());
        Ok(target)
    }

    /// Runs once the expansion has settled.
    pub fn settle(&mut self, generation: u64, present: bool) -> SettleOutcome {
        let target = match &self.state {
            NavigatorState::Found(target) if target.generation == generation => target.clone(),
            _ => return SettleOutcome::Stale,
        };

        if present {
            self.state = NavigatorState::Highlighted(target.clone());
            SettleOutcome::Highlight(target)
        } else {
            log::debug!("Search #{generation}: {} is not rendered", target.formeid);
            self.state = NavigatorState::Idle;
            SettleOutcome::Missed
        }
    }

    /// Ends the highlight window. Returns `false` for stale generations.
    pub fn clear_highlight(&mut self, generation: u64) -> bool {
        match &self.state {
            NavigatorState::Highlighted(target) if target.generation == generation => {
                self.state = NavigatorState::Idle;
                true
            }
            _ => false,
        }
    }
}
