use serde::{Deserialize, Serialize};

/// A request to generate a website.
///
/// This is the input of the generation pipeline. It is usually produced by the
/// intake service from a natural-language chat message, but clients may also
/// build it directly. The wire format is camelCase because the API contract is
/// consumed by a JavaScript client.
///
/// `description` and `site_name` default to the empty string when absent from
/// the JSON body; the request validator (not serde) reports missing fields as
/// structured syntax errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteRequest {
    /// Free-text description of the desired website. Required.
    #[serde(default)]
    pub description: String,
    /// Display name of the website. Required.
    #[serde(default)]
    pub site_name: String,
    /// Optional styling preferences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<SiteStyle>,
    /// Optional list of page names the site should include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<String>>,
    /// Optional list of feature names to showcase on the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

/// Styling preferences attached to a `WebsiteRequest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStyle {
    /// Primary accent color (hex, basic CSS keyword, or rgb()/rgba()).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Secondary accent color, same accepted forms as `primary_color`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    /// Free-form theme hint (e.g. "dark"). Currently informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}
