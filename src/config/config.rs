use dotenv::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub static_dir: String,
}

impl Config {
    pub fn init() -> Config {
        dotenv().ok();
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let port = std::env::var("PORT").unwrap_or_else(|_| String::new());

        let port = if port.is_empty() {
            3000 // Default port if environment variable is not set
        } else {
            port.parse::<u16>().expect("Failed to parse PORT as u16")
        };

        let static_dir =
            std::env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string());

        Config {
            database_url,
            port,
            static_dir,
        }
    }
}
