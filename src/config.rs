use dotenvy::dotenv;
use std::env;
use std::fmt;

#[derive(Clone)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
    pub midtrans_base_url: String,
    pub midtrans_server_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok(); // Load .env file if present

        Ok(Config {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            database_url: env::var("DATABASE_URL")?,
            midtrans_base_url: env::var("MIDTRANS_BASE_URL")
                .unwrap_or_else(|_| "https://api.sandbox.midtrans.com".to_string()),
            midtrans_server_key: env::var("MIDTRANS_SERVER_KEY")?,
        })
    }
}

// The server key authenticates us to the gateway and signs callbacks; it
// must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server_port", &self.server_port)
            .field("database_url", &self.database_url)
            .field("midtrans_base_url", &self.midtrans_base_url)
            .field("midtrans_server_key", &"<redacted>")
            .finish()
    }
}
