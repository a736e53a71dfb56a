use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NEVERNOTE_HOST";
    pub const PORT: &str = "PORT";
    /// Set to "false" or "0" to start without the example `English` notebook.
    pub const SEED_EXAMPLE: &str = "NEVERNOTE_SEED_EXAMPLE";
    /// Number of actix worker threads (defaults to the number of CPUs).
    pub const WORKERS: &str = "NEVERNOTE_WORKERS";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 5000;
    pub const SEED_EXAMPLE: bool = true;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_example: bool,
    pub workers: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            seed_example: defaults::SEED_EXAMPLE,
            workers: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var(env_vars::HOST).unwrap_or_else(|_| defaults::HOST.to_string()),
            port: env::var(env_vars::PORT)
                .unwrap_or_else(|_| defaults::PORT.to_string())
                .parse()
                .expect("PORT must be a valid number"),
            seed_example: parse_flag(env::var(env_vars::SEED_EXAMPLE).ok(), defaults::SEED_EXAMPLE),
            workers: env::var(env_vars::WORKERS)
                .ok()
                .map(|v| v.parse().expect("NEVERNOTE_WORKERS must be a valid number")),
        }
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// "1"/"true" enable, "0"/"false" disable (case-insensitive); anything else keeps the default.
fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.map(|v| v.trim().to_lowercase()) {
        Some(v) if v == "1" || v == "true" => true,
        Some(v) if v == "0" || v == "false" => false,
        _ => default,
    }
}
