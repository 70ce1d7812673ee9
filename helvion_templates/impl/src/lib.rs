use std::sync::Arc;

use helvion_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone, Default)]
pub struct TemplateServiceImpl {
    state: State,
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        tera.add_raw_templates(std::iter::once(BASE_TEMPLATE).chain(TEMPLATES.iter().copied()))
            .unwrap();

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use helvion_templates_contracts::{ContactMessageTemplate, ContactMessageTextTemplate};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn contact_message() {
        // Arrange
        let sut = TemplateServiceImpl::default();

        // Act
        let result = sut
            .render(&ContactMessageTemplate {
                name: "Ana".into(),
                email: "ana@test.com".into(),
                message: "Hi\nsecond line".into(),
            })
            .unwrap();

        // Assert
        assert!(result.starts_with("<!DOCTYPE html>"));
        assert!(result.contains("<title>Nuevo Mensaje de Contacto</title>"));
        assert!(result.contains(r#"<p style="margin: 0; color: #F2EBE5; font-size: 18px;">Ana</p>"#));
        assert!(result.contains(r#"href="mailto:ana@test.com""#));
        assert!(result.contains("Responder a Ana"));
        assert!(result.contains("white-space: pre-wrap;\">Hi\nsecond line</p>"));
        assert!(result.contains("Transmitido de forma segura desde Helvion System"));
    }

    #[test]
    fn contact_message_escapes_markup() {
        // Arrange
        let sut = TemplateServiceImpl::default();

        // Act
        let result = sut
            .render(&ContactMessageTemplate {
                name: "<script>alert(1)</script>".into(),
                email: "ana@test.com\" onclick=\"x".into(),
                message: "<b>bold</b> & more".into(),
            })
            .unwrap();

        // Assert
        assert!(!result.contains("<script>"));
        assert!(result.contains("&lt;script&gt;"));
        assert!(!result.contains("\" onclick=\""));
        assert!(result.contains("&lt;b&gt;bold&lt;"));
        assert!(result.contains("&amp; more"));
    }

    #[test]
    fn contact_message_text() {
        // Arrange
        let sut = TemplateServiceImpl::default();

        // Act
        let result = sut
            .render(&ContactMessageTextTemplate {
                name: "Ana <3".into(),
                email: "ana@test.com".into(),
                message: "Hi".into(),
            })
            .unwrap();

        // Assert
        assert_eq!(
            result,
            "Tienes un nuevo mensaje de Ana <3 (ana@test.com). Mensaje: Hi"
        );
    }
}
