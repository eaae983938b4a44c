//! Environment-driven service configuration

use serde::{Deserialize, Serialize};
use tracing::info;

/// Resolved runtime configuration for one service process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub port: String,
    pub service_name: String,
}

impl ServiceConfig {
    /// Resolve the listening port from `<SERVICE_NAME>_PORT`, falling back to
    /// `default_port` when the variable is unset or empty.
    ///
    /// The value is taken verbatim; an unusable port only fails when the
    /// listener binds.
    pub fn load(service_name: &str, default_port: &str) -> Self {
        Self::from_lookup(service_name, default_port, |key| std::env::var(key).ok())
    }

    /// Same as [`ServiceConfig::load`] but reads variables through `lookup`.
    pub fn from_lookup<F>(service_name: &str, default_port: &str, lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let port = lookup(&Self::port_env_var(service_name))
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default_port.to_string());

        Self {
            port,
            service_name: service_name.to_string(),
        }
    }

    /// Name of the variable overriding the port, e.g. `WORKER_FLOW_PORT`.
    pub fn port_env_var(service_name: &str) -> String {
        format!("{}_PORT", service_name.to_uppercase().replace('-', "_"))
    }

    /// Listen on every interface; the IPv6 wildcard also accepts IPv4 clients.
    pub fn bind_address(&self) -> String {
        format!("[::]:{}", self.port)
    }

    pub fn log_startup(&self) {
        info!(
            service = %self.service_name,
            port = %self.port,
            "{} service starting on port {}",
            self.service_name,
            self.port
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn lookup_in<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl FnOnce(&str) -> Option<String> + 'a {
        move |key| vars.get(key).map(|value| value.to_string())
    }

    #[test]
    fn test_default_port_when_unset() {
        let vars = HashMap::new();
        let config = ServiceConfig::from_lookup("worker_flow", "8080", lookup_in(&vars));

        assert_eq!(config.port, "8080");
        assert_eq!(config.service_name, "worker_flow");
    }

    #[test]
    fn test_default_port_when_empty() {
        let vars = HashMap::from([("WORKER_FLOW_PORT", "")]);
        let config = ServiceConfig::from_lookup("worker_flow", "8080", lookup_in(&vars));

        assert_eq!(config.port, "8080");
    }

    #[test]
    fn test_override_is_taken_verbatim() {
        let vars = HashMap::from([("WORKER_POST_PORT", "9090")]);
        let config = ServiceConfig::from_lookup("worker_post", "8081", lookup_in(&vars));
        assert_eq!(config.port, "9090");

        let vars = HashMap::from([("WORKER_POST_PORT", "not-a-port")]);
        let config = ServiceConfig::from_lookup("worker_post", "8081", lookup_in(&vars));
        assert_eq!(config.port, "not-a-port");
    }

    #[test]
    fn test_other_services_variable_is_ignored() {
        let vars = HashMap::from([("WORKER_FLOW_PORT", "9999")]);
        let config = ServiceConfig::from_lookup("worker_post", "8081", lookup_in(&vars));

        assert_eq!(config.port, "8081");
    }

    #[test]
    fn test_port_env_var_name() {
        assert_eq!(ServiceConfig::port_env_var("worker_flow"), "WORKER_FLOW_PORT");
        assert_eq!(ServiceConfig::port_env_var("WORKER_POST"), "WORKER_POST_PORT");
        assert_eq!(ServiceConfig::port_env_var("api-gateway"), "API_GATEWAY_PORT");
    }

    #[test]
    fn test_load_reads_process_environment() {
        // Unique name so no other test touches this variable.
        std::env::set_var("CONFIG_LOAD_CHECK_PORT", "7070");
        let config = ServiceConfig::load("config_load_check", "8080");
        std::env::remove_var("CONFIG_LOAD_CHECK_PORT");

        assert_eq!(config.port, "7070");
        assert_eq!(config.bind_address(), "[::]:7070");
    }

    #[test]
    fn test_startup_line_names_service_and_port() {
        let captured = CapturedLog::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = ServiceConfig::from_lookup("worker_flow", "8080", |_| None);
        tracing::subscriber::with_default(subscriber, || config.log_startup());

        let output = captured.contents();
        assert!(output.contains("INFO"), "{}", output);
        assert!(output.contains("worker_flow service starting on port 8080"), "{}", output);
        assert!(output.contains("port=8080"), "{}", output);
    }
}
