use helvion_core_contact_impl::ContactFeatureServiceImpl;
use helvion_core_health_impl::HealthFeatureServiceImpl;
use helvion_email_impl::EmailServiceImpl;
use helvion_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = helvion_api_rest::RestServer<HealthFeature, ContactFeature>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Email, Template>;
pub type HealthFeature = HealthFeatureServiceImpl<Email>;

// Infrastructure
pub type Email = EmailServiceImpl;
pub type Template = TemplateServiceImpl;
