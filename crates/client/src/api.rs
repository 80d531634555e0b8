use std::fmt::Display;

use async_trait::async_trait;
use dex_filter::FilterSettings;
use dex_protocol::{OwnedInstance, Region};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::DexConfig;
use crate::error::{ClientError, Endpoint, Result};

/// Catalog and ownership collaborator.
///
/// Catalog axes in `settings` are forwarded as query parameters; the
/// collaborator applies them.
#[async_trait]
pub trait DexApi: Send + Sync {
    async fn fetch_catalog(&self, credential: &str, settings: &FilterSettings)
        -> Result<Vec<Region>>;

    async fn fetch_owned(
        &self,
        credential: &str,
        settings: &FilterSettings,
    ) -> Result<Vec<OwnedInstance>>;
}

/// `?types=`
pub fn catalog_query(settings: &FilterSettings) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    push_csv(&mut query, "types", &settings.pokemon_types);
    query
}

/// `?natures=&berries=&types=`
pub fn owned_query(settings: &FilterSettings) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    push_csv(&mut query, "natures", &settings.natures);
    push_csv(&mut query, "berries", &settings.berry_preferences);
    push_csv(&mut query, "types", &settings.pokemon_types);
    query
}

fn push_csv<'a, T, I>(query: &mut Vec<(&'static str, String)>, key: &'static str, items: I)
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let csv = items
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    if !csv.is_empty() {
        query.push((key, csv));
    }
}

pub fn endpoint_url(
    base_url: &str,
    endpoint: Endpoint,
    query: &[(&'static str, String)],
) -> Result<Url> {
    let raw = format!("{}/{}", base_url.trim().trim_end_matches('/'), endpoint.path());
    let mut url = Url::parse(&raw)
        .map_err(|err| ClientError::Config(format!("invalid API base URL '{base_url}': {err}")))?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// reqwest-backed `DexApi`.
#[derive(Debug, Clone)]
pub struct HttpDexApi {
    client: Client,
    base_url: String,
}

impl HttpDexApi {
    pub fn new(config: &DexConfig) -> Result<Self> {
        config.validate().map_err(ClientError::Config)?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| ClientError::Config(format!("Failed to build HTTP client: {err}")))?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&'static str, String)],
        credential: &str,
    ) -> Result<T> {
        let url = endpoint_url(&self.base_url, endpoint, query)?;
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, credential)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|err| ClientError::fetch(endpoint, None, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::fetch(
                endpoint,
                Some(status.as_u16()),
                format!("HTTP {status}"),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ClientError::fetch(endpoint, Some(status.as_u16()), err.to_string()))
    }
}

#[async_trait]
impl DexApi for HttpDexApi {
    async fn fetch_catalog(
        &self,
        credential: &str,
        settings: &FilterSettings,
    ) -> Result<Vec<Region>> {
        self.get_json(Endpoint::Catalog, &catalog_query(settings), credential)
            .await
    }

    async fn fetch_owned(
        &self,
        credential: &str,
        settings: &FilterSettings,
    ) -> Result<Vec<OwnedInstance>> {
        self.get_json(Endpoint::Ownership, &owned_query(settings), credential)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_filter::{toggle_item, Berry, PokemonType};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_settings_send_no_query() {
        let settings = FilterSettings::default();
        assert!(catalog_query(&settings).is_empty());
        assert!(owned_query(&settings).is_empty());

        let url = endpoint_url(
            "https://api.pokefarm.com/",
            Endpoint::Catalog,
            &catalog_query(&settings),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://api.pokefarm.com/dex");
    }

    #[test]
    fn catalog_only_forwards_types() {
        let settings = toggle_item(FilterSettings::default(), Berry::Sour.into());
        let settings = toggle_item(settings, PokemonType::Water.into());
        let settings = toggle_item(settings, PokemonType::Fire.into());
        assert_eq!(
            catalog_query(&settings),
            vec![("types", "Fire,Water".to_string())]
        );
    }

    #[test]
    fn ownership_forwards_every_catalog_axis() {
        let settings = toggle_item(FilterSettings::default(), Berry::Sour.into());
        let settings = toggle_item(settings, PokemonType::Bug.into());
        assert_eq!(
            owned_query(&settings),
            vec![
                ("natures", "Bold,Impish,Lax,Relaxed".to_string()),
                ("berries", "Sour".to_string()),
                ("types", "Bug".to_string()),
            ]
        );

        let url = endpoint_url(
            "http://localhost:9000/api",
            Endpoint::Ownership,
            &owned_query(&settings),
        )
        .unwrap();
        assert_eq!(url.path(), "/api/pokemon");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[1], ("berries".to_string(), "Sour".to_string()));
        assert_eq!(pairs[0].1, "Bold,Impish,Lax,Relaxed");
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let err = endpoint_url("::nope::", Endpoint::Catalog, &[]).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn http_api_targets_configured_base_url() {
        let config = DexConfig {
            api_base_url: "http://localhost:9000/api".to_string(),
            ..DexConfig::default()
        };
        let api = HttpDexApi::new(&config).unwrap();
        assert_eq!(api.base_url(), "http://localhost:9000/api");
    }

    #[test]
    fn http_api_rejects_invalid_config() {
        let config = DexConfig {
            api_base_url: String::new(),
            ..DexConfig::default()
        };
        assert!(matches!(
            HttpDexApi::new(&config),
            Err(ClientError::Config(_))
        ));
    }
}
