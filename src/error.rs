use thiserror::Error;

#[derive(Error, Debug)]
pub enum HdobError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid config file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("Invalid time of day '{0}': expected HH:MM, HH:MM:SS, HHMM or HHMMSS")]
    TimeOfDay(String),

    #[error("Time of day out of range: {0}")]
    TimeOfDayRange(String),

    #[error("Invalid storm date '{0}': expected YYYYMMDD")]
    StormDate(String),

    #[error("Unsupported report interval {0}s: expected 10, 30, 60 or 120")]
    Interval(u32),
}

pub type Result<T> = std::result::Result<T, HdobError>;
