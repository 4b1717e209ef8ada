//! Deep links into an external map provider.
//!
//! The explorer never routes by itself; it hands both endpoints to a map
//! service.  Two link shapes are supported:
//!
//! | Method              | Shape                                                      |
//! |---------------------|------------------------------------------------------------|
//! | `directions_url`    | `<base>/dir/<oLat>,<oLng>/<dLat>,<dLng>`                   |
//! | `embed_url`         | `<base>/embed/v1/directions?key=..&origin=..&destination=..&center=..&zoom=..` |

use roam_core::ExplorerConfig;

use crate::{RouteError, RouteResult, RouteSummary};

/// Builds provider links for route summaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapLink {
    base:      String,
    embed_key: Option<String>,
    zoom:      u8,
}

impl MapLink {
    /// `base` is the provider root, e.g. `https://www.google.com/maps`.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, embed_key: None, zoom: 12 }
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self {
            base:      config.map_base().to_string(),
            embed_key: config.embed_api_key.clone(),
            zoom:      config.embed_zoom,
        }
    }

    pub fn with_embed_key(mut self, key: impl Into<String>) -> Self {
        self.embed_key = Some(key.into());
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Turn-by-turn directions from the route's origin to its destination.
    pub fn directions_url(&self, route: &RouteSummary) -> String {
        format!(
            "{}/dir/{}/{}",
            self.base,
            route.origin.to_link_segment(),
            route.destination.to_link_segment(),
        )
    }

    /// An embeddable directions view centred between the endpoints.
    ///
    /// The key is percent-encoded.  Fails with [`RouteError::MissingEmbedKey`]
    /// when no key is configured.
    pub fn embed_url(&self, route: &RouteSummary) -> RouteResult<String> {
        let key = self.embed_key.as_deref().ok_or(RouteError::MissingEmbedKey)?;
        let key = urlencoding::encode(key);
        let center = route.origin.midpoint(route.destination);
        Ok(format!(
            "{}/embed/v1/directions?key={}&origin={}&destination={}&center={}&zoom={}",
            self.base,
            key,
            route.origin.to_link_segment(),
            route.destination.to_link_segment(),
            center.to_link_segment(),
            self.zoom,
        ))
    }
}
