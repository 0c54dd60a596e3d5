use crate::feedback::Feedback;
use color_eyre::Result;
use watchlist_api::{ServerClient, SharedListBackend};
use watchlist_config::{Config, PathManager, ProfileStore};

/// Everything a command handler needs, built once at startup and passed
/// in explicitly rather than reached for as globals.
pub struct ClientContext {
    pub backend: Box<dyn SharedListBackend>,
    pub profile: ProfileStore,
    pub paths: PathManager,
    pub config: Config,
    pub server_url: String,
    pub feedback: Feedback,
}

impl ClientContext {
    pub fn initialise(server_override: Option<&str>, feedback: Feedback) -> Result<Self> {
        let paths = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

        let config = Config::load_or_default(&paths.config_file()).map_err(|e| {
            color_eyre::eyre::eyre!(
                "Failed to load config from {}: {}",
                paths.config_file().display(),
                e
            )
        })?;
        config
            .validate()
            .map_err(|e| color_eyre::eyre::eyre!("Invalid config: {}", e))?;

        let server_url = config.resolve_server_url(server_override);

        let mut profile = ProfileStore::new(paths.profile_file());
        profile.load().map_err(|e| {
            color_eyre::eyre::eyre!(
                "Failed to load profile from {}: {}",
                paths.profile_file().display(),
                e
            )
        })?;

        Ok(Self {
            backend: Box::new(ServerClient::new(&server_url)),
            profile,
            paths,
            config,
            server_url,
            feedback,
        })
    }
}
