use crate::{config::Config, i18n::Catalogs};

pub struct AppState {
    pub config: Config,
    pub catalogs: Catalogs,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let catalogs = Catalogs::load_dir(&config.locale_dir, &config.default_language)?;

        Ok(Self { config, catalogs })
    }
}
