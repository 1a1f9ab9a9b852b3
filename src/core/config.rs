use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub wilayah: WilayahConfig,
    pub residents: ResidentsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Upstream Indonesian region API (api-wilayah-indonesia)
#[derive(Debug, Clone)]
pub struct WilayahConfig {
    /// Base URL without trailing slash, e.g. `https://www.emsifa.com/api-wilayah-indonesia/api`
    pub base_url: String,
    /// Per-request timeout for upstream calls
    pub timeout: Duration,
}

/// In-memory resident dataset and the simulated save collaborator
#[derive(Debug, Clone)]
pub struct ResidentsConfig {
    /// Seed the dataset with sample records at startup
    pub seed: bool,
    /// Fixed latency applied to every save
    pub save_latency: Duration,
    /// Probability in `0.0..=1.0` that a save fails
    pub save_failure_rate: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            wilayah: WilayahConfig::from_env()?,
            residents: ResidentsConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Sensus Penduduk API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for Sensus Penduduk".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl WilayahConfig {
    const DEFAULT_BASE_URL: &'static str = "https://www.emsifa.com/api-wilayah-indonesia/api";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("WILAYAH_API_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("WILAYAH_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "WILAYAH_API_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for WilayahConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ResidentsConfig {
    // The server saves immediately by default; the form simulation uses its own constants
    const DEFAULT_SAVE_LATENCY_MS: u64 = 0;
    const DEFAULT_SAVE_FAILURE_RATE: f64 = 0.0;

    pub fn from_env() -> Result<Self, String> {
        let seed = env::var("RESIDENTS_SEED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|_| "RESIDENTS_SEED must be true or false".to_string())?;

        let save_latency_ms = env::var("SIMULATED_SAVE_LATENCY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_SAVE_LATENCY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "SIMULATED_SAVE_LATENCY_MS must be a valid number".to_string())?;

        let save_failure_rate = env::var("SIMULATED_SAVE_FAILURE_RATE")
            .unwrap_or_else(|_| Self::DEFAULT_SAVE_FAILURE_RATE.to_string())
            .parse::<f64>()
            .map_err(|_| "SIMULATED_SAVE_FAILURE_RATE must be a valid number".to_string())?;

        if !(0.0..=1.0).contains(&save_failure_rate) {
            return Err("SIMULATED_SAVE_FAILURE_RATE must be between 0.0 and 1.0".to_string());
        }

        Ok(Self {
            seed,
            save_latency: Duration::from_millis(save_latency_ms),
            save_failure_rate,
        })
    }
}
