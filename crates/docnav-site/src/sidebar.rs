//! Sidebar tree.
//!
//! An authored entry with an `items` key is a [`SidebarGroup`], anything
//! else is a [`SidebarLeaf`]. Groups nest arbitrarily deep and preserve
//! author order at every level.

use serde::Serialize;
use serde_json::Value;

use crate::descriptor::require_field;
use crate::error::DescriptorError;
use crate::link::LinkRef;
use crate::raw::{RawSidebarItem, parse_node};

/// Sidebar entry: either a collapsible group or a terminal link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarNode {
    /// Named section containing further entries.
    Group(SidebarGroup),
    /// Terminal entry pointing at one document or URL.
    Leaf(SidebarLeaf),
}

/// Named, collapsible sidebar section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Display label.
    pub text: String,
    /// Whether the section starts collapsed.
    pub collapsed: bool,
    /// Child entries in display order.
    pub items: Vec<SidebarNode>,
    /// Default link for the section header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Terminal sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarLeaf {
    /// Display label.
    pub text: String,
    /// Collapse flag as authored (has no effect on a leaf).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Document path or external URL.
    pub link: String,
}

impl SidebarNode {
    /// Display label of this entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Group(group) => &group.text,
            Self::Leaf(leaf) => &leaf.text,
        }
    }

    /// Link carried by this entry, if any.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.link.as_deref(),
            Self::Leaf(leaf) => Some(&leaf.link),
        }
    }

    /// Depth of the subtree rooted here (a leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Group(group) => 1 + group.items.iter().map(Self::depth).max().unwrap_or(0),
            Self::Leaf(_) => 1,
        }
    }

    /// Build a node from its authored form.
    pub(crate) fn from_value(value: Value, location: &str) -> Result<Self, DescriptorError> {
        let raw: RawSidebarItem = parse_node(value, location)?;
        let text = require_field(raw.text, location, "text")?;

        let Some(items) = raw.items else {
            if raw.link.is_none() {
                return Err(DescriptorError::malformed(
                    location,
                    format!("sidebar entry \"{text}\" has neither `items` nor `link`"),
                ));
            }
            let link = require_field(raw.link, location, "link")?;
            return Ok(Self::Leaf(SidebarLeaf {
                text,
                collapsed: raw.collapsed,
                link,
            }));
        };

        let link = match raw.link {
            Some(link) => Some(require_field(Some(link), location, "link")?),
            None => None,
        };
        if items.is_empty() && link.is_none() {
            return Err(DescriptorError::malformed(
                location,
                format!("sidebar group \"{text}\" has no items and no link"),
            ));
        }

        let items = from_values(items, &format!("{location}.items"))?;

        Ok(Self::Group(SidebarGroup {
            text,
            collapsed: raw.collapsed.unwrap_or(false),
            items,
            link,
        }))
    }
}

/// Build an ordered list of nodes, naming each by its index under `prefix`.
pub(crate) fn from_values(
    values: Vec<Value>,
    prefix: &str,
) -> Result<Vec<SidebarNode>, DescriptorError> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, item)| SidebarNode::from_value(item, &format!("{prefix}[{i}]")))
        .collect()
}

/// Collect every link in the tree, depth-first in author order.
pub(crate) fn collect_links<'a>(nodes: &'a [SidebarNode], prefix: &str, out: &mut Vec<LinkRef<'a>>) {
    for (i, node) in nodes.iter().enumerate() {
        let location = format!("{prefix}[{i}]");
        if let Some(link) = node.link() {
            out.push(LinkRef {
                location: location.clone(),
                text: node.text(),
                link,
            });
        }
        if let SidebarNode::Group(group) = node {
            collect_links(&group.items, &format!("{location}.items"), out);
        }
    }
}
