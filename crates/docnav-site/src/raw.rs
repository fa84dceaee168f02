//! Descriptor shape as authored on disk.
//!
//! The document is read in two steps. Lists of entries (`head`, `nav`,
//! `sidebar`, `socialLinks` and nested `items`) are first kept as untyped
//! values, then each entry is deserialized on its own with [`parse_node`]
//! so shape errors carry the entry's location instead of the document's.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::descriptor::AttrValue;
use crate::error::DescriptorError;

/// Top-level descriptor document.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawDescriptor {
    pub base: Option<String>,
    pub title: String,
    pub description: String,
    pub head: Vec<Value>,
    pub theme_config: RawThemeConfig,
}

/// `[tag, attrs]` or `[tag, attrs, content]` head directive.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawHeadTag {
    WithContent(String, BTreeMap<String, AttrValue>, String),
    Bare(String, BTreeMap<String, AttrValue>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawThemeConfig {
    pub logo: Option<String>,
    pub nav: Vec<Value>,
    pub sidebar: Vec<Value>,
    pub social_links: Vec<Value>,
    pub footer: Option<RawFooter>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawNavItem {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Sidebar entry before it is split into group or leaf.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSidebarItem {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub collapsed: Option<bool>,
    #[serde(default)]
    pub items: Option<Vec<Value>>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSocialLink {
    pub icon: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct RawFooter {
    pub message: Option<String>,
    pub copyright: Option<String>,
}

/// Deserialize one list entry, reporting failures at `location`.
pub(crate) fn parse_node<T: DeserializeOwned>(
    value: Value,
    location: &str,
) -> Result<T, DescriptorError> {
    serde_json::from_value(value).map_err(|e| DescriptorError::malformed(location, e.to_string()))
}
