//! Configuration for the SAVE_CODE compiler.

/// Format version tag written into the header and metadata footer.
pub const FORMAT_VERSION: &str = "v2.0.1";

/// Public address of the Nexus Hub.
pub const HUB_URL: &str = "nexushubadventure.com";

/// Assistants the document is known to restore in.
pub const COMPATIBLE: [&str; 4] = ["Claude", "ChatGPT", "Gemini", "Grok"];

/// Settings that are stamped into every compiled document.
///
/// Documents that share a `format_version` must share a layout; change the
/// version before changing any section template.
#[derive(Debug, Clone)]
pub struct SaveConfig {
    /// Version tag, e.g. `v2.0.1`.
    pub format_version: String,
    /// Compression profile label.
    pub compression: String,
    /// Hub address used for persistent fields and campaign links.
    pub hub_url: String,
    /// Assistants listed as compatible in the footer.
    pub compatible: Vec<String>,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            compression: "BALANCED".to_string(),
            hub_url: HUB_URL.to_string(),
            compatible: COMPATIBLE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SaveConfig {
    /// Set the hub address.
    pub fn with_hub_url(mut self, url: impl Into<String>) -> Self {
        self.hub_url = url.into();
        self
    }

    /// Set the compression label.
    pub fn with_compression(mut self, compression: impl Into<String>) -> Self {
        self.compression = compression.into();
        self
    }

    /// Full tag, e.g. `SAVE_CODE v2.0.1`.
    pub fn tag(&self) -> String {
        format!("SAVE_CODE {}", self.format_version)
    }

    /// Link to a campaign page on the hub.
    pub fn campaign_url(&self, campaign_id: &str) -> String {
        format!("{}/campaign.html?id={campaign_id}", self.hub_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SaveConfig::default();
        assert_eq!(cfg.tag(), "SAVE_CODE v2.0.1");
        assert_eq!(cfg.compression, "BALANCED");
        assert_eq!(cfg.compatible.join(", "), "Claude, ChatGPT, Gemini, Grok");
    }

    #[test]
    fn campaign_url() {
        let cfg = SaveConfig::default();
        assert_eq!(
            cfg.campaign_url("abc"),
            "nexushubadventure.com/campaign.html?id=abc"
        );
        let cfg = cfg.with_hub_url("localhost:8080");
        assert_eq!(cfg.campaign_url("x"), "localhost:8080/campaign.html?id=x");
    }
}
