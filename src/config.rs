//! Runtime settings, read from command-line flags with environment fallbacks.

use std::path::PathBuf;

use clap::Args;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_DATA_FILE: &str = "questions.json";
pub const DEFAULT_PAGES_DIR: &str = "pages";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Location of the persisted question list.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// JSON file holding the questions (created with defaults if missing)
    #[arg(long, env = "QUIZDECK_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, Args)]
pub struct ServeConfig {
    /// Port for HTTP server
    #[arg(short, long, env = "QUIZDECK_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "QUIZDECK_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[command(flatten)]
    pub store: StoreConfig,

    /// Directory holding the page fragments (home.html, questions.html)
    #[arg(long, env = "QUIZDECK_PAGES_DIR", default_value = DEFAULT_PAGES_DIR)]
    pub pages_dir: PathBuf,

    /// Directory served under /static
    #[arg(long, env = "QUIZDECK_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,
}

impl ServeConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            store: StoreConfig::default(),
            pages_dir: PathBuf::from(DEFAULT_PAGES_DIR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeConfig,
    }

    // Declared defaults, not parsed values: parsing would pick up any
    // QUIZDECK_* variable set in the environment.
    fn flag_default(id: &str) -> String {
        let command = TestCli::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id().as_str() == id)
            .unwrap_or_else(|| panic!("no argument {id}"));
        arg.get_default_values()[0].to_string_lossy().into_owned()
    }

    #[test]
    fn defaults_match_flag_defaults() {
        let default = ServeConfig::default();

        assert_eq!(flag_default("port"), default.port.to_string());
        assert_eq!(flag_default("host"), default.host);
        assert_eq!(PathBuf::from(flag_default("data_file")), default.store.data_file);
        assert_eq!(PathBuf::from(flag_default("pages_dir")), default.pages_dir);
        assert_eq!(PathBuf::from(flag_default("static_dir")), default.static_dir);
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = TestCli::parse_from([
            "quizdeck",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--data-file",
            "/tmp/q.json",
        ])
        .serve;

        assert_eq!(parsed.port, 8080);
        assert_eq!(parsed.address(), "127.0.0.1:8080");
        assert_eq!(parsed.store.data_file, PathBuf::from("/tmp/q.json"));
    }
}
