//! Explorer configuration.
//!
//! # Design
//!
//! Everything a session needs to know up front lives in one plain struct,
//! `ExplorerConfig`.  It is built with `Default` and overridden field by
//! field, or (with the `serde` feature) deserialized from a partial JSON
//! document where missing fields fall back to their defaults.
//!
//! The geometric constants of the sampler and summarizer are *not*
//! configurable; only the search radius is.

/// How the destination of a generated route is labelled for display.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LabelStyle {
    /// `Random Destination (lat, lng)` with four decimals.
    #[default]
    Coordinates,
    /// A random `Target XXXXXXXX` token.
    Codename,
}

/// Which visual skin renders the session.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeKind {
    /// Plain cards with friendly copy.
    #[default]
    Explorer,
    /// Green-on-black terminal skin with a glyph rain banner.
    Matrix,
}

impl ThemeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKind::Explorer => "explorer",
            ThemeKind::Matrix   => "matrix",
        }
    }
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options handed to a geolocation provider with each request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocateOptions {
    pub high_accuracy:  bool,
    /// Give up after this many milliseconds.
    pub timeout_ms:     u32,
    /// Accept a cached fix no older than this.
    pub maximum_age_ms: u32,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            high_accuracy:  true,
            timeout_ms:     10_000,
            maximum_age_ms: 60_000,
        }
    }
}

/// Top-level session configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExplorerConfig {
    /// Upper bound of the great-circle distance to a sampled destination.
    pub max_distance_km: f64,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed:            Option<u64>,
    pub theme:           ThemeKind,
    pub label:           LabelStyle,
    /// Base of directions links, without trailing slash.
    pub map_base_url:    String,
    /// API key for embedded map views; embed links are unavailable without it.
    pub embed_api_key:   Option<String>,
    pub embed_zoom:      u8,
    pub locate:          LocateOptions,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_distance_km: 20.0,
            seed:            None,
            theme:           ThemeKind::Explorer,
            label:           LabelStyle::Coordinates,
            map_base_url:    "https://www.google.com/maps".to_string(),
            embed_api_key:   None,
            embed_zoom:      12,
            locate:          LocateOptions::default(),
        }
    }
}

impl ExplorerConfig {
    /// Check the fields that the session cannot work around at runtime.
    pub fn validate(&self) -> crate::CoreResult<()> {
        if !self.max_distance_km.is_finite() || self.max_distance_km < 0.0 {
            return Err(crate::CoreError::Config(format!(
                "max_distance_km must be finite and non-negative, got {}",
                self.max_distance_km
            )));
        }
        if self.map_base_url.trim().is_empty() {
            return Err(crate::CoreError::Config("map_base_url is empty".into()));
        }
        if self.embed_zoom == 0 {
            return Err(crate::CoreError::Config("embed_zoom must be at least 1".into()));
        }
        Ok(())
    }

    /// `map_base_url` without any trailing `/`.
    pub fn map_base(&self) -> &str {
        self.map_base_url.trim_end_matches('/')
    }
}
