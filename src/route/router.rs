use log::{debug, warn};

use super::{RouteError, RouterConfig, destination::Destination, parse::parse_uri};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouterState {
    #[default]
    Idle,
    Presenting(Destination),
}

/// Tracks the destination currently presented from a deep link.
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
    state: RouterState,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            state: RouterState::Idle,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn active(&self) -> Option<&Destination> {
        match &self.state {
            RouterState::Idle => None,
            RouterState::Presenting(d) => Some(d),
        }
    }

    /// Parses `uri` and presents the result. Errors leave the state untouched.
    pub fn handle_uri(&mut self, uri: &str) -> Result<Destination, RouteError> {
        match parse_uri(&self.config, uri) {
            Ok(dest) => {
                self.navigate(dest.clone());
                Ok(dest)
            }
            Err(err) => {
                warn!("ignoring deep link: {err}");
                Err(err)
            }
        }
    }

    pub fn navigate(&mut self, dest: Destination) {
        debug!("presenting {dest:?}");
        self.state = RouterState::Presenting(dest);
    }

    /// Returns to idle, yielding what was presented.
    pub fn dismiss(&mut self) -> Option<Destination> {
        match std::mem::take(&mut self.state) {
            RouterState::Idle => None,
            RouterState::Presenting(d) => Some(d),
        }
    }

    pub fn uri_for(&self, dest: &Destination) -> String {
        dest.to_uri(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_then_dismiss() {
        let mut router = Router::default();
        let dest = router.handle_uri("lafufu://wishlist").expect("route");
        assert_eq!(dest, Destination::Wishlist);
        assert_eq!(router.active(), Some(&Destination::Wishlist));
        assert_eq!(router.dismiss(), Some(Destination::Wishlist));
        assert_eq!(router.state(), &RouterState::Idle);
        assert_eq!(router.dismiss(), None);
    }

    #[test]
    fn rejected_link_keeps_current_destination() {
        let mut router = Router::default();
        router.navigate(Destination::Explore);
        assert!(router.handle_uri("ftp://nope").is_err());
        assert_eq!(router.active(), Some(&Destination::Explore));
    }
}
