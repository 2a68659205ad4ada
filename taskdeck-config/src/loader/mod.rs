pub mod error;

use once_cell::sync::Lazy;
use std::{fs, path::PathBuf};
use taskdeck_core::query::SortableAccess;

use self::error::ConfigLoadError;
use crate::{
    models::{
        Config, ConfigMetadata, CorsConfig, DEFAULT_HOST, DEFAULT_PORT,
        DemoConfig, ListingConfig, ServerConfig,
        sources::{EnvConfig, FileConfig},
    },
    validation::{self, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("taskdeck.toml"),
        PathBuf::from("config/taskdeck.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
struct ConfigLoaderOptions {
    config_path: Option<PathBuf>,
    skip_env_file: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.options.skip_env_file = true;
        self
    }

    /// Load `.env`, read the process environment and compose the result
    /// with the configuration file, if any.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose configuration from an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let mut warnings = ConfigWarnings::default();

        if file_config.is_none() {
            warnings.push_with_hint(
                "No taskdeck.toml detected; using environment variables and defaults",
                "Set TASKDECK_CONFIG_PATH to point at a configuration file",
            );
        }

        let config = compose(file_config.unwrap_or_default(), env, config_path)?;
        warnings.extend(validation::apply_guard_rails(&config)?);

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if self.options.skip_env_file {
            return Ok(false);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(true),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.clone(),
                None => return Ok((None, None)),
            },
        };

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

/// Merge file and environment sources. Environment values win.
pub fn compose(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        server: file_server,
        listing: file_listing,
        cors: file_cors,
        demo: file_demo,
    } = file;

    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
    };

    let sortable_access =
        match env.sortable_access.or(file_listing.sortable_access) {
            Some(raw) => SortableAccess::parse(&raw).ok_or(
                ConfigLoadError::InvalidSortableAccess { value: raw },
            )?,
            None => SortableAccess::default(),
        };

    let cors_defaults = CorsConfig::default();
    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or(cors_defaults.allowed_origins),
        allowed_methods: env
            .cors_allowed_methods
            .or(file_cors.allowed_methods)
            .unwrap_or(cors_defaults.allowed_methods),
        allowed_headers: env
            .cors_allowed_headers
            .or(file_cors.allowed_headers)
            .unwrap_or(cors_defaults.allowed_headers),
        allow_credentials: env
            .cors_allow_credentials
            .or(file_cors.allow_credentials)
            .unwrap_or(cors_defaults.allow_credentials),
    };

    let demo = DemoConfig {
        seed: env
            .seed_demo
            .or(file_demo.seed)
            .unwrap_or(DemoConfig::default().seed),
    };

    Ok(Config {
        server,
        listing: ListingConfig { sortable_access },
        cors,
        demo,
        metadata: ConfigMetadata {
            env_file_loaded: false,
            config_path,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults_apply_without_sources() {
        let config =
            compose(FileConfig::default(), EnvConfig::default(), None)
                .expect("compose");

        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.listing.sortable_access, SortableAccess::Readable);
        assert!(config.demo.seed);
        assert!(config.metadata.config_path.is_none());
    }

    #[test]
    fn file_values_are_read() {
        let file = write_config(
            r#"
[server]
host = "127.0.0.1"
port = 9090

[listing]
sortable_access = "write"

[demo]
seed = false
"#,
        );

        let load = ConfigLoader::new()
            .with_config_path(file.path())
            .without_env_file()
            .load_with_env(EnvConfig::default())
            .expect("load");

        assert_eq!(load.config.server.bind_address(), "127.0.0.1:9090");
        assert_eq!(
            load.config.listing.sortable_access,
            SortableAccess::Writable
        );
        assert!(!load.config.demo.seed);
        assert_eq!(
            load.config.metadata.config_path.as_deref(),
            Some(file.path())
        );
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn env_overrides_file() {
        let file = write_config("[server]\nport = 9090\n");
        let env = EnvConfig {
            server_port: Some(7070),
            sortable_access: Some("readable".into()),
            ..EnvConfig::default()
        };

        let load = ConfigLoader::new()
            .with_config_path(file.path())
            .without_env_file()
            .load_with_env(env)
            .expect("load");

        assert_eq!(load.config.server.port, 7070);
        assert_eq!(
            load.config.listing.sortable_access,
            SortableAccess::Readable
        );
    }

    #[test]
    fn unknown_sortable_access_is_rejected() {
        let env = EnvConfig {
            sortable_access: Some("sideways".into()),
            ..EnvConfig::default()
        };

        let err =
            compose(FileConfig::default(), env, None).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidSortableAccess { ref value } if value == "sideways"
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.toml");

        let err = ConfigLoader::new()
            .with_config_path(&missing)
            .without_env_file()
            .load_with_env(EnvConfig::default())
            .unwrap_err();

        assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let file = write_config("[server\nport = ");

        let err = ConfigLoader::new()
            .with_config_path(file.path())
            .without_env_file()
            .load_with_env(EnvConfig::default())
            .unwrap_err();

        assert!(matches!(err, ConfigLoadError::Parse { .. }));
    }
}
