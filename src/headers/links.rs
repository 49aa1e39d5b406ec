//! Navigation links (RFC 8288 `Link` header) for item ranges
//!
//! Every link points at the request's own path and query; only the
//! `items="from-to"` parameter differs between relations.
//! Format: `<url>; rel="next"; items="30-39", <url>; rel="prev"; items="10-19"`

use crate::range::{CollectionContext, RangeRequest, ResolvedWindow};
use crate::types::Quantity;
use std::fmt;

/// Link relation used for pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkRelation {
    First,
    Last,
    Next,
    Prev,
}

impl LinkRelation {
    /// Relation name as written in `rel="..."`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }

    /// Parse a relation name; `previous` is accepted as an alias for `prev`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            "next" => Some(Self::Next),
            "prev" | "previous" => Some(Self::Prev),
            _ => None,
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigation link: a relation and the item range to request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationLink {
    pub relation: LinkRelation,
    pub items: RangeRequest,
}

/// Up to four navigation links, kept in `first, last, next, prev` order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationLinks {
    target: String,
    links: Vec<NavigationLink>,
}

impl NavigationLinks {
    /// Derive the links for a served window.
    ///
    /// `target` is the request path plus query string, reused verbatim.
    /// Nothing is produced for windows that served no items.
    pub fn build(window: &ResolvedWindow, ctx: &CollectionContext, target: &str) -> Self {
        let mut links = Vec::with_capacity(4);
        let target = target.to_string();

        let Some(last_served) = window.last_served() else {
            return Self { target, links };
        };
        if !window.outcome.serves_items() {
            return Self { target, links };
        }

        let step = window.requested_limit;
        let has_more = window.has_more(ctx);

        if window.offset > 0 {
            links.push(NavigationLink {
                relation: LinkRelation::First,
                items: RangeRequest::starting_at(0, step),
            });
        }

        if has_more {
            if let Quantity::Finite(total) = ctx.total_items {
                // Anchored to the grid of the page just served, not max_page_size
                let last_from = ((total - 1) / window.limit) * window.limit;
                links.push(NavigationLink {
                    relation: LinkRelation::Last,
                    items: RangeRequest::starting_at(last_from, step),
                });
            }

            links.push(NavigationLink {
                relation: LinkRelation::Next,
                items: RangeRequest::starting_at(last_served.saturating_add(1), step),
            });
        }

        if window.offset > 0 {
            let back = step.clamp_to(ctx.max_page_size);
            links.push(NavigationLink {
                relation: LinkRelation::Prev,
                items: RangeRequest::starting_at(window.offset.saturating_sub(back), step),
            });
        }

        Self { target, links }
    }

    /// Links in header order
    pub fn iter(&self) -> impl Iterator<Item = &NavigationLink> {
        self.links.iter()
    }

    /// Look up a relation
    pub fn get(&self, relation: LinkRelation) -> Option<RangeRequest> {
        self.links
            .iter()
            .find(|link| link.relation == relation)
            .map(|link| link.items)
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True when there is nothing to emit
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The `Link` header value, or `None` when there are no links
    pub fn header_value(&self) -> Option<String> {
        if self.links.is_empty() {
            return None;
        }

        let rendered: Vec<String> = self
            .links
            .iter()
            .map(|link| {
                format!(
                    "<{}>; rel=\"{}\"; items=\"{}\"",
                    self.target, link.relation, link.items
                )
            })
            .collect();
        Some(rendered.join(", "))
    }
}

/// A link read back from a `Link` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLink {
    /// Target between `<` and `>`
    pub url: String,
    /// Relation, when it is one of the pagination relations
    pub relation: Option<LinkRelation>,
    /// Raw `rel` value
    pub rel: String,
    /// `items` parameter, when present and well formed
    pub items: Option<RangeRequest>,
}

/// Parse a `Link` header into its entries.
///
/// Entries without a `<url>` or a `rel` are skipped.
pub fn parse_link_header(header: &str) -> Vec<ParsedLink> {
    let mut parsed = Vec::new();

    for part in split_links(header) {
        let mut url = None;
        let mut rel = None;
        let mut items = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some((key, value)) = segment.split_once('=') {
                let value = value.trim().trim_matches('"').trim_matches('\'');
                match key.trim().to_ascii_lowercase().as_str() {
                    "rel" => rel = Some(value),
                    "items" => items = value.parse::<RangeRequest>().ok(),
                    _ => {}
                }
            }
        }

        if let (Some(url), Some(rel)) = (url, rel) {
            parsed.push(ParsedLink {
                url: url.to_string(),
                relation: LinkRelation::from_name(rel),
                rel: rel.to_string(),
                items,
            });
        }
    }

    parsed
}

/// Find the entry for `relation` in a `Link` header
pub fn find_link(header: &str, relation: LinkRelation) -> Option<ParsedLink> {
    parse_link_header(header)
        .into_iter()
        .find(|link| link.relation == Some(relation))
}

// Commas may appear inside `<...>` targets, so split only outside angle brackets.
fn split_links(header: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(header[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(header[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}
