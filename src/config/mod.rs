use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000")
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Dish collection endpoint that receives submitted records
    #[serde(default = "default_dishes_endpoint")]
    pub dishes_endpoint: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_dishes_endpoint() -> String {
    "https://umzzcc503l.execute-api.us-west-2.amazonaws.com/dishes/".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let config: AppConfig = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.dishes_endpoint.ends_with("/dishes/"));
    }

    #[test]
    fn test_endpoint_override() {
        let config: AppConfig = envy::from_iter(vec![
            ("DISHES_ENDPOINT".to_string(), "http://localhost:9000/dishes".to_string()),
            ("BIND_ADDR".to_string(), "127.0.0.1:8080".to_string()),
        ])
        .unwrap();
        assert_eq!(config.dishes_endpoint, "http://localhost:9000/dishes");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }
}
