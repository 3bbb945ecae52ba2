use std::{
    collections::HashMap,
    env,
    fs,
    io::{BufRead, BufReader},
    path::PathBuf,
    time::Duration,
};

use directories::BaseDirs;

pub const DEFAULT_EXAMPLE: &str = "Hello world!";

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .playgroundrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                merge_lines(&mut map, reader.lines().map_while(Result::ok));
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    /// Build a config from rc-file text on top of the defaults, ignoring the environment.
    pub fn from_rc(text: &str) -> Self {
        let mut map = default_map();
        merge_lines(&mut map, text.lines().map(str::to_string));
        Self { inner: map, config_path: default_config_path() }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).cloned()
    }

    #[cfg(test)]
    pub fn set(&mut self, key: &str, value: &str) {
        self.inner.insert(key.to_string(), value.to_string());
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.trim().parse::<u64>().ok())
    }

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from)
    }

    pub fn compiler(&self) -> String {
        self.get("PLAYGROUND_COMPILER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "rustc".to_string())
    }

    pub fn compiler_args(&self) -> Vec<String> {
        self.get("PLAYGROUND_COMPILER_ARGS")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn run_timeout(&self) -> Duration {
        // Zero would time out every run before it starts
        let secs = self
            .get_u64("PLAYGROUND_RUN_TIMEOUT")
            .filter(|&s| s > 0)
            .unwrap_or(10);
        Duration::from_secs(secs)
    }

    pub fn work_dir(&self) -> PathBuf {
        self.get_path("PLAYGROUND_WORK_DIR").unwrap_or_else(default_work_dir)
    }

    pub fn log_file(&self) -> PathBuf {
        self.get_path("PLAYGROUND_LOG_FILE")
            .unwrap_or_else(|| default_work_dir().join("playground.log"))
    }

    /// Log filter string; `RUST_LOG` wins over `PLAYGROUND_LOG_LEVEL`.
    pub fn log_filter(&self) -> String {
        self.get("RUST_LOG")
            .or_else(|| self.get("PLAYGROUND_LOG_LEVEL"))
            .unwrap_or_else(|| "info".to_string())
    }

    pub fn default_example(&self) -> String {
        self.get("PLAYGROUND_DEFAULT_EXAMPLE")
            .unwrap_or_else(|| DEFAULT_EXAMPLE.to_string())
    }
}

fn merge_lines(map: &mut HashMap<String, String>, lines: impl Iterator<Item = String>) {
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            map.insert(k.trim().to_string(), v.trim().to_string());
        }
    }
}

fn is_config_key(k: &str) -> bool {
    k == "RUST_LOG" || k.starts_with("PLAYGROUND_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("stylus_playground").join(".playgroundrc")
}

fn default_work_dir() -> PathBuf {
    env::temp_dir().join("stylus_playground")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    let work = default_work_dir();

    // Paths
    m.insert(
        "PLAYGROUND_WORK_DIR".into(),
        work.to_string_lossy().into_owned(),
    );
    m.insert(
        "PLAYGROUND_LOG_FILE".into(),
        work.join("playground.log").to_string_lossy().into_owned(),
    );

    // Toolchain
    m.insert("PLAYGROUND_COMPILER".into(), "rustc".into());
    m.insert("PLAYGROUND_COMPILER_ARGS".into(), "--edition 2021".into());
    m.insert("PLAYGROUND_RUN_TIMEOUT".into(), "10".into());

    // Strings
    m.insert("PLAYGROUND_LOG_LEVEL".into(), "info".into());
    m.insert("PLAYGROUND_DEFAULT_EXAMPLE".into(), DEFAULT_EXAMPLE.into());

    m
}
