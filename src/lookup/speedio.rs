use crate::errors::AppResult;
use crate::lookup::EinLookup;
use crate::models::{Ein, LookupRecord, PLACEHOLDER};
use serde::{Deserialize, Deserializer};
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://api-publica.speedio.com.br/buscarcnpj";

/// Blocking client for the public Speedio CNPJ endpoint.
pub struct SpeedioClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl SpeedioClient {
    pub fn new(url: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("rvisitcheck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl EinLookup for SpeedioClient {
    fn lookup(&self, ein: &Ein) -> AppResult<Option<LookupRecord>> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("cnpj", ein.digits())])
            .send()?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let body: SpeedioResponse = response.json()?;
        Ok(Some(body.into_record(ein)))
    }
}

/// Raw answer of the service. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct SpeedioResponse {
    #[serde(rename = "BAIRRO", default, deserialize_with = "text_or_number")]
    pub district: Option<String>,
    #[serde(rename = "RAZAO SOCIAL", default, deserialize_with = "text_or_number")]
    pub legal_name: Option<String>,
    #[serde(rename = "NOME FANTASIA", default, deserialize_with = "text_or_number")]
    pub trade_name: Option<String>,
    #[serde(rename = "LOGRADOURO", default, deserialize_with = "text_or_number")]
    pub street: Option<String>,
    #[serde(rename = "NUMERO", default, deserialize_with = "text_or_number")]
    pub number: Option<String>,
    #[serde(rename = "CNPJ", default, deserialize_with = "text_or_number")]
    pub cnpj: Option<String>,
}

impl SpeedioResponse {
    /// Map to a registry-ready record, substituting the placeholder for
    /// anything missing. `queried` is used when the answer carries no valid CNPJ.
    pub fn into_record(self, queried: &Ein) -> LookupRecord {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let region = non_empty(self.district).unwrap_or_else(|| PLACEHOLDER.to_string());

        let name = non_empty(self.trade_name)
            .or_else(|| non_empty(self.legal_name))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        let ein = self
            .cnpj
            .as_deref()
            .and_then(|c| Ein::from_digits(c).ok())
            .unwrap_or_else(|| queried.clone());

        let address = match (non_empty(self.street), non_empty(self.number)) {
            (Some(street), Some(number)) => format!("{street}, {number}"),
            _ => PLACEHOLDER.to_string(),
        };

        LookupRecord {
            region,
            name,
            ein,
            address,
        }
    }
}

/// The service sends `NUMERO` (and occasionally other fields) as JSON numbers.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s.trim().to_string()),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
