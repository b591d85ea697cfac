//! Payment gateway (Razorpay) configuration.

use serde::{Deserialize, Serialize};

/// Payment gateway configuration.
///
/// The gateway is considered enabled only when both key fields are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsConfig {
    /// Razorpay API key id.
    #[serde(default)]
    pub razorpay_key_id: String,
    /// Razorpay API key secret.
    #[serde(default)]
    pub razorpay_key_secret: String,
    /// Razorpay orders endpoint (overridable for tests).
    #[serde(default = "default_orders_url")]
    pub orders_url: String,
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            razorpay_key_id: String::new(),
            razorpay_key_secret: String::new(),
            orders_url: default_orders_url(),
        }
    }
}

impl PaymentsConfig {
    /// Whether the gateway credentials are configured.
    pub fn is_enabled(&self) -> bool {
        !self.razorpay_key_id.is_empty() && !self.razorpay_key_secret.is_empty()
    }
}

fn default_orders_url() -> String {
    "https://api.razorpay.com/v1/orders".to_string()
}
