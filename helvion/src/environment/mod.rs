use helvion_config::Config;
use helvion_core_contact_impl::ContactFeatureConfig;
use helvion_core_health_impl::HealthFeatureConfig;
use types::{ContactFeature, Email, HealthFeature, RestServer, Template};

pub mod types;

/// Feature configs derived from the loaded [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    contact: ContactFeatureConfig,
    health: HealthFeatureConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            contact: ContactFeatureConfig {
                email: config.contact.email.clone().into(),
            },
            health: HealthFeatureConfig {
                cache_ttl: config.health.cache_ttl.into(),
            },
        }
    }
}

/// Wires the services of the http server together.
#[derive(Debug, Clone)]
pub struct Provider {
    config: ConfigProvider,
    email: Email,
    template: Template,
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            config,
            email,
            template: Template::default(),
        }
    }

    pub fn contact_feature(&self) -> ContactFeature {
        ContactFeature::new(
            self.email.clone(),
            self.template.clone(),
            self.config.contact.clone(),
        )
    }

    pub fn health_feature(&self) -> HealthFeature {
        HealthFeature::new(self.email.clone(), self.config.health.clone())
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer::new(self.health_feature(), self.contact_feature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn provide_rest_server() {
        let config = helvion_config::load_dev_config().unwrap();
        let provider = Provider::new(ConfigProvider::new(&config), Email::dummy());

        let _server: RestServer = provider.rest_server();
    }

    #[test]
    fn feature_configs() {
        let config = helvion_config::load_dev_config().unwrap();

        let sut = ConfigProvider::new(&config);

        assert_eq!(sut.contact.email.0.email.to_string(), "inbox@example.com");
        assert_eq!(sut.health.cache_ttl.as_secs(), 10);
    }
}
