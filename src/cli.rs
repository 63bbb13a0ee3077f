use anyhow::Context;
use clap::Parser;
use config::Config;

/// Console employee record manager backed by SQLite.
#[derive(Debug, Parser)]
#[command(name = "employee-records", version, about)]
pub struct Cli {
    /// SQLite database file; overrides DATABASE_URL
    #[arg(short, long)]
    pub database: Option<String>,

    /// Read environment variables from this file instead of ./.env
    #[arg(long)]
    pub env_file: Option<String>,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::from_env(self.env_file.as_deref()).with_context(|| {
            format!(
                "failed to load environment file {}",
                self.env_file.as_deref().unwrap_or(".env")
            )
        })?;

        if let Some(database) = &self.database {
            config.database_url = database.clone();
        }
        Ok(config)
    }
}
