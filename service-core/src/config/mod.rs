use config::{Config, ConfigError, Environment, File, Map};
use serde::de::DeserializeOwned;

/// Load settings from an optional `configuration` file layered under the process environment.
///
/// Environment variables are matched against field names case-insensitively, so `API_URL`
/// fills `api_url`. A `.env` file in the working directory is applied first when present.
/// Missing fields fall back to the serde defaults declared on `T`.
pub fn load<T: DeserializeOwned>() -> Result<T, ConfigError> {
    dotenvy::dotenv().ok();

    Config::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(Environment::default())
        .build()?
        .try_deserialize()
}

/// Load settings from an explicit set of variables instead of the process environment.
pub fn load_from<T, I, K, V>(vars: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let source: Map<String, String> = vars
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect();

    Config::builder()
        .add_source(Environment::default().source(Some(source)))
        .build()?
        .try_deserialize()
}
