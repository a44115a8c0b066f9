//! Services shared with every screen through Yew context.
use crate::api::HttpApi;
use disaster_core::{ClientConfig, GameApi};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct Services {
    pub api: Rc<dyn GameApi>,
    pub config: Rc<ClientConfig>,
}

impl Services {
    #[must_use]
    pub fn new(api: Rc<dyn GameApi>, config: ClientConfig) -> Self {
        Self {
            api,
            config: Rc::new(config),
        }
    }

    /// Services backed by the real backend, configured at compile time.
    #[must_use]
    pub fn browser() -> Self {
        let config = crate::paths::client_config();
        Self::new(Rc::new(HttpApi::from_config(&config)), config)
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api) && Rc::ptr_eq(&self.config, &other.config)
    }
}

/// Active locale code. Screens read it so a language switch re-renders them
/// without losing their state.
#[derive(Clone, PartialEq, Debug)]
pub struct Locale(pub AttrValue);

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().unwrap_or_else(Services::browser)
}

#[hook]
pub fn use_locale() -> Option<Locale> {
    use_context::<Locale>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_compare_by_identity() {
        let services = Services::browser();
        let same = services.clone();
        assert!(services == same);
        assert!(services != Services::browser());
        assert_eq!(services.config.poll_interval_ms, 3_000);
    }
}
