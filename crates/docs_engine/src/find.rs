use std::fmt;

use ego_tree::NodeRef;
use regex::Regex;
use scraper::node::Node;
use scraper::ElementRef;
use thiserror::Error;

/// How one attribute value is matched.
#[derive(Debug, Clone)]
pub enum AttrMatch {
    Exact(String),
    Pattern(Regex),
}

impl AttrMatch {
    fn matches(&self, value: &str) -> bool {
        match self {
            AttrMatch::Exact(expected) => value == expected,
            AttrMatch::Pattern(pattern) => pattern.is_match(value),
        }
    }
}

impl fmt::Display for AttrMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrMatch::Exact(value) => write!(f, "={value:?}"),
            AttrMatch::Pattern(pattern) => write!(f, "~=/{}/", pattern.as_str()),
        }
    }
}

/// Attribute constraints a tag must satisfy; empty matches any tag.
#[derive(Debug, Clone, Default)]
pub struct AttrFilter {
    entries: Vec<(String, AttrMatch)>,
}

impl AttrFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn exact(mut self, attr: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .push((attr.into(), AttrMatch::Exact(value.into())));
        self
    }

    pub fn pattern(mut self, attr: impl Into<String>, pattern: Regex) -> Self {
        self.entries.push((attr.into(), AttrMatch::Pattern(pattern)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        self.entries.iter().all(|(attr, matcher)| {
            let Some(value) = element.value().attr(attr) else {
                return false;
            };
            // `class` is multi-valued: any single class may satisfy the filter.
            if attr == "class" {
                matcher.matches(value) || value.split_whitespace().any(|c| matcher.matches(c))
            } else {
                matcher.matches(value)
            }
        })
    }
}

impl fmt::Display for AttrFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, (attr, matcher)) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{attr}{matcher}")?;
        }
        f.write_str("]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tag <{tag}> not found (filter {filter})")]
pub struct TagNotFound {
    pub tag: String,
    pub filter: String,
}

/// First descendant of `scope` named `tag` that satisfies `filter`.
pub fn find_tag<'a>(
    scope: ElementRef<'a>,
    tag: &str,
    filter: &AttrFilter,
) -> Result<ElementRef<'a>, TagNotFound> {
    matching_descendants(scope, tag, filter)
        .next()
        .ok_or_else(|| TagNotFound {
            tag: tag.to_string(),
            filter: filter.to_string(),
        })
}

/// Every descendant of `scope` named `tag` that satisfies `filter`, in
/// document order.
pub fn find_all_tags<'a>(scope: ElementRef<'a>, tag: &str, filter: &AttrFilter) -> Vec<ElementRef<'a>> {
    matching_descendants(scope, tag, filter).collect()
}

fn matching_descendants<'a, 'q>(
    scope: ElementRef<'a>,
    tag: &'q str,
    filter: &'q AttrFilter,
) -> impl Iterator<Item = ElementRef<'a>> + 'q
where
    'a: 'q,
{
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name().eq_ignore_ascii_case(tag) && filter.matches(*el))
}

/// Concatenated text of every text node below `element`.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Next sibling element of `element` named `tag`.
pub fn next_sibling_tag<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name().eq_ignore_ascii_case(tag))
}

/// True when a text node directly below `node` equals `text` once trimmed.
pub fn has_own_text(node: NodeRef<'_, Node>, text: &str) -> bool {
    node.children().any(|child| match child.value() {
        Node::Text(own) => own.trim().trim_end_matches(':').trim() == text,
        _ => false,
    })
}
