use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ObservabilityConfig {
    pub(crate) service_context: ServiceContext,
}

impl ObservabilityConfig {
    pub(crate) fn from_env(component: &str) -> Self {
        Self::from_values(
            component,
            env_string("SERVICE_NAME"),
            env_string("STAGE"),
        )
    }

    fn from_values(
        component: &str,
        service_name: Option<String>,
        environment: Option<String>,
    ) -> Self {
        let component = component.trim().to_string();

        let service_name = service_name
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| component.clone());

        let environment = environment
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            service_context: ServiceContext {
                service_name,
                environment,
                component,
            },
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_component_and_unknown() {
        let config = ObservabilityConfig::from_values(" fruit-sort ", None, Some("".into()));

        assert_eq!(
            config.service_context,
            ServiceContext {
                service_name: "fruit-sort".into(),
                environment: "unknown".into(),
                component: "fruit-sort".into(),
            }
        );
    }

    #[test]
    fn uses_explicit_values() {
        let config = ObservabilityConfig::from_values(
            "fruit-sort",
            Some("fruits-web".into()),
            Some("Production".into()),
        );

        assert_eq!(config.service_context.service_name, "fruits-web");
        assert_eq!(config.service_context.environment, "Production");
    }
}
