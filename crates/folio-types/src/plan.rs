//! Subscription plans offered at checkout.

use serde::{Deserialize, Serialize};

/// A subscription tier handed to the payment collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    /// Monthly price in whole dollars.
    pub price: u32,
    pub features: Vec<String>,
    /// Highlighted in the plan picker.
    #[serde(default)]
    pub popular: bool,
}

impl Plan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: u32,
        features: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            features: features.iter().map(|f| f.to_string()).collect(),
            popular: false,
        }
    }

    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    /// `"$29/month"`.
    pub fn price_label(&self) -> String {
        format!("${}/month", self.price)
    }
}
