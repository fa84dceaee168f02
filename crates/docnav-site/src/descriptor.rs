//! Typed site navigation descriptor.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::error::DescriptorError;
use crate::link::LinkRef;
use crate::raw::{RawDescriptor, RawHeadTag, RawNavItem, RawSocialLink, parse_node};
use crate::sidebar::{self, SidebarNode};

/// Site navigation descriptor.
///
/// Built once by [`load`](crate::load) and never mutated afterwards.
/// Serializes back to the generator's config layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    /// Path prefix the site is served under (starts and ends with `/`).
    pub base: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Logo image path.
    pub logo: Option<String>,
    /// HTML head directives in document order.
    pub head: Vec<HeadTag>,
    /// Footer copyright line.
    pub footer_copyright: Option<String>,
    /// Footer message line.
    pub footer_message: Option<String>,
    /// Top navigation bar entries in display order.
    pub nav: Vec<NavItem>,
    /// Sidebar tree in display order.
    pub sidebar: Vec<SidebarNode>,
    /// Social links in display order.
    pub social_links: Vec<SocialLink>,
}

/// Top navigation bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Document path or external URL.
    pub link: String,
}

/// Link to a social profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Provider icon.
    pub icon: SocialIcon,
    /// Profile URL.
    pub link: String,
}

/// Social providers with a built-in icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    /// All known providers.
    pub const ALL: [Self; 11] = [
        Self::Discord,
        Self::Facebook,
        Self::Github,
        Self::Instagram,
        Self::Linkedin,
        Self::Mastodon,
        Self::Npm,
        Self::Slack,
        Self::Twitter,
        Self::X,
        Self::Youtube,
    ];

    /// Identifier as written in the descriptor.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown social provider.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownIcon(pub String);

impl FromStr for SocialIcon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| UnknownIcon(s.to_owned()))
    }
}

/// HTML head directive (`<tag attrs>content</tag>`).
///
/// Serializes as `[tag, attrs]` or `[tag, attrs, content]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    /// Element name (e.g., `link`, `meta`, `script`).
    pub tag: String,
    /// Element attributes.
    pub attrs: BTreeMap<String, AttrValue>,
    /// Inner content, for elements such as inline scripts.
    pub content: Option<String>,
}

/// Head attribute value, kept with its authored type
/// (`async: true`, `width: 32`, `rel: "icon"`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean attribute.
    Bool(bool),
    /// Numeric attribute.
    Number(Number),
    /// String attribute.
    String(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl PartialEq<&str> for AttrValue {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::String(s) if s == other)
    }
}

/// Take a required string field, rejecting absent or blank values.
pub(crate) fn require_field(
    value: Option<String>,
    location: &str,
    field: &str,
) -> Result<String, DescriptorError> {
    match value {
        None => Err(DescriptorError::malformed(
            location,
            format!("missing required field `{field}`"),
        )),
        Some(v) if v.trim().is_empty() => Err(DescriptorError::malformed(
            location,
            format!("`{field}` cannot be empty"),
        )),
        Some(v) => Ok(v),
    }
}

impl SiteMeta {
    /// Build and validate a descriptor from its authored form.
    pub(crate) fn from_raw(raw: RawDescriptor) -> Result<Self, DescriptorError> {
        let base = raw.base.unwrap_or_else(|| "/".to_owned());
        if !base.starts_with('/') || !base.ends_with('/') {
            return Err(DescriptorError::malformed(
                "base",
                format!("base \"{base}\" must start and end with `/`"),
            ));
        }

        let head = raw
            .head
            .into_iter()
            .enumerate()
            .map(|(i, tag)| HeadTag::from_value(tag, &format!("head[{i}]")))
            .collect::<Result<_, _>>()?;

        let theme = raw.theme_config;
        let nav = theme
            .nav
            .into_iter()
            .enumerate()
            .map(|(i, item)| NavItem::from_value(item, &format!("themeConfig.nav[{i}]")))
            .collect::<Result<_, _>>()?;
        let sidebar = sidebar::from_values(theme.sidebar, "themeConfig.sidebar")?;
        let social_links = theme
            .social_links
            .into_iter()
            .enumerate()
            .map(|(i, link)| {
                SocialLink::from_value(link, &format!("themeConfig.socialLinks[{i}]"))
            })
            .collect::<Result<_, _>>()?;
        let footer = theme.footer.unwrap_or_default();

        Ok(Self {
            base,
            title: raw.title,
            description: raw.description,
            logo: theme.logo,
            head,
            footer_copyright: footer.copyright,
            footer_message: footer.message,
            nav,
            sidebar,
            social_links,
        })
    }

    /// Every `link` field in the descriptor.
    ///
    /// Order: nav bar, then the sidebar depth-first, then social links,
    /// each in author order.
    #[must_use]
    pub fn links(&self) -> Vec<LinkRef<'_>> {
        let mut links = Vec::new();

        for (i, item) in self.nav.iter().enumerate() {
            links.push(LinkRef {
                location: format!("themeConfig.nav[{i}]"),
                text: &item.text,
                link: &item.link,
            });
        }

        sidebar::collect_links(&self.sidebar, "themeConfig.sidebar", &mut links);

        for (i, social) in self.social_links.iter().enumerate() {
            links.push(LinkRef {
                location: format!("themeConfig.socialLinks[{i}]"),
                text: social.icon.as_str(),
                link: &social.link,
            });
        }

        links
    }
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

/// Borrowed view of [`SiteMeta`] in the generator's config layout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export<'a> {
    base: &'a str,
    title: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    head: &'a [HeadTag],
    theme_config: ExportTheme<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportTheme<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty")]
    nav: &'a [NavItem],
    #[serde(skip_serializing_if = "is_empty")]
    sidebar: &'a [SidebarNode],
    #[serde(skip_serializing_if = "is_empty")]
    social_links: &'a [SocialLink],
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<ExportFooter<'a>>,
}

#[derive(Serialize)]
struct ExportFooter<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    copyright: Option<&'a str>,
}

impl Serialize for SiteMeta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let footer = (self.footer_copyright.is_some() || self.footer_message.is_some()).then(|| {
            ExportFooter {
                message: self.footer_message.as_deref(),
                copyright: self.footer_copyright.as_deref(),
            }
        });

        Export {
            base: &self.base,
            title: &self.title,
            description: &self.description,
            head: &self.head,
            theme_config: ExportTheme {
                logo: self.logo.as_deref(),
                nav: &self.nav,
                sidebar: &self.sidebar,
                social_links: &self.social_links,
                footer,
            },
        }
        .serialize(serializer)
    }
}

impl NavItem {
    fn from_value(value: Value, location: &str) -> Result<Self, DescriptorError> {
        let raw: RawNavItem = parse_node(value, location)?;
        Ok(Self {
            text: require_field(raw.text, location, "text")?,
            link: require_field(raw.link, location, "link")?,
        })
    }
}

impl SocialLink {
    fn from_value(value: Value, location: &str) -> Result<Self, DescriptorError> {
        let raw: RawSocialLink = parse_node(value, location)?;
        let icon = raw.icon.parse::<SocialIcon>().map_err(|UnknownIcon(name)| {
            DescriptorError::malformed(location, format!("unknown social icon \"{name}\""))
        })?;
        Ok(Self {
            icon,
            link: require_field(raw.link, location, "link")?,
        })
    }
}

impl HeadTag {
    fn from_value(value: Value, location: &str) -> Result<Self, DescriptorError> {
        let raw: RawHeadTag = serde_json::from_value(value).map_err(|_| {
            DescriptorError::malformed(
                location,
                "head directive must be [tag, {attrs}] or [tag, {attrs}, content] \
                 with string, number or boolean attribute values",
            )
        })?;
        let (tag, attrs, content) = match raw {
            RawHeadTag::WithContent(tag, attrs, content) => (tag, attrs, Some(content)),
            RawHeadTag::Bare(tag, attrs) => (tag, attrs, None),
        };
        let tag = require_field(Some(tag), location, "tag")?;
        Ok(Self {
            tag,
            attrs,
            content,
        })
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut tuple = serializer.serialize_tuple(len)?;
        tuple.serialize_element(&self.tag)?;
        tuple.serialize_element(&self.attrs)?;
        if let Some(content) = &self.content {
            tuple.serialize_element(content)?;
        }
        tuple.end()
    }
}
