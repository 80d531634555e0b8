use std::sync::Arc;

use dex_filter::{reduce, CatalogView, FilterSettings, SettingsAction};
use dex_search::{SearchDriver, SearchTiming, Viewport};

use crate::api::{DexApi, HttpDexApi};
use crate::config::DexConfig;
use crate::error::Result;
use crate::load::{DexLoader, DexSnapshot, LoadOutcome, LoadState};
use crate::preferences::{FilePreferenceStore, PreferenceStore};
use crate::session::Session;

/// Session-scoped entry point for a UI layer.
///
/// Settings are read from the store once at construction. Every saved
/// change is persisted first and then triggers a full reload.
pub struct Pokedex<A: DexApi, S: PreferenceStore> {
    config: DexConfig,
    session: Session,
    loader: DexLoader<A>,
    store: S,
    settings: FilterSettings,
}

impl Pokedex<HttpDexApi, FilePreferenceStore> {
    /// HTTP collaborator plus on-disk preferences, both from `config`.
    pub fn connect(config: DexConfig, session: Session) -> Result<Self> {
        let api = HttpDexApi::new(&config)?;
        let store = FilePreferenceStore::new(
            config.resolve_preferences_dir(),
            config.preference_ttl(),
        );
        Ok(Self::new(config, session, api, store))
    }
}

impl<A: DexApi, S: PreferenceStore> Pokedex<A, S> {
    pub fn new(config: DexConfig, session: Session, api: A, store: S) -> Self {
        let settings = store.load();
        Self {
            config,
            session,
            loader: DexLoader::new(api),
            store,
            settings,
        }
    }

    pub fn config(&self) -> &DexConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn loader(&self) -> &DexLoader<A> {
        &self.loader
    }

    /// Replaces the credential after a login.
    pub fn login(&mut self, session: Session) {
        self.session = session;
    }

    /// Recovery action offered after a failed cycle: forget the credential
    /// so the UI routes back to login.
    pub fn reset_session(&mut self) {
        self.session.reset();
    }

    /// First load cycle.
    pub async fn mount(&self) -> Result<LoadOutcome> {
        self.loader.load(&self.session, &self.settings).await
    }

    pub async fn reload(&self) -> Result<LoadOutcome> {
        self.mount().await
    }

    /// Persists `settings` immediately and starts a fresh load cycle.
    pub async fn save_settings(&mut self, settings: FilterSettings) -> Result<LoadOutcome> {
        self.store.save(&settings)?;
        self.settings = settings;
        self.reload().await
    }

    pub async fn apply(&mut self, action: SettingsAction) -> Result<LoadOutcome> {
        let next = reduce(self.settings.clone(), action);
        self.save_settings(next).await
    }

    pub fn state(&self) -> LoadState {
        self.loader.state()
    }

    pub fn snapshot(&self) -> Option<Arc<DexSnapshot>> {
        self.loader.snapshot()
    }

    /// Visible catalog of the current snapshot, `None` before the first
    /// successful cycle or after a failed one.
    pub fn view(&self) -> Option<CatalogView> {
        self.snapshot().map(|snapshot| snapshot.view())
    }

    pub fn search_timing(&self) -> SearchTiming {
        self.config.search_timing()
    }

    pub fn search_driver<V: Viewport>(&self, viewport: Arc<V>) -> SearchDriver<V> {
        SearchDriver::new(viewport, self.search_timing())
    }
}
