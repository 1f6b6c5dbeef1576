#[cfg(test)]
mod tests {
    use crate::config::StoreBackend;
    use crate::test_utils::test_config;

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("postgres".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
        assert_eq!("PostgreSQL".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
        assert_eq!(" memory ".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("mongodb".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_server_address_joins_host_and_port() {
        let mut config = test_config(StoreBackend::Memory);
        config.host = "0.0.0.0".to_string();
        config.port = 8000;
        assert_eq!(config.server_address(), "0.0.0.0:8000");
    }
}
