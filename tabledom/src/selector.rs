//! A small CSS selector subset for querying element trees.
//!
//! Supported: selector lists (`a, b`), descendant combinators (`a b`), tag
//! names, `*`, `.class`, `#id`, `:first-child` and `:last-child`.

use std::collections::HashSet;

use thiserror::Error;

use crate::element::Element;
use crate::types::Tag;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unknown tag \"{0}\" in selector")]
    UnknownTag(String),
    #[error("unsupported pseudo-class \":{0}\"")]
    UnsupportedPseudo(String),
    #[error("unexpected character '{found}' at offset {offset} in selector")]
    Unexpected { found: char, offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pseudo {
    FirstChild,
    LastChild,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<Tag>,
    id: Option<String>,
    classes: Vec<String>,
    pseudos: Vec<Pseudo>,
}

/// Position information needed to evaluate structural pseudo-classes.
#[derive(Clone, Copy)]
struct PathEntry<'a> {
    element: &'a Element,
    index: usize,
    siblings: usize,
}

impl Compound {
    fn matches(&self, entry: &PathEntry<'_>) -> bool {
        let el = entry.element;
        if self.tag.is_some_and(|tag| tag != el.tag) {
            return false;
        }
        if self.id.as_ref().is_some_and(|id| *id != el.id) {
            return false;
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.pseudos.iter().all(|p| match p {
            Pseudo::FirstChild => entry.index == 0,
            Pseudo::LastChild => entry.index + 1 == entry.siblings,
        })
    }
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    groups: Vec<Vec<Compound>>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut groups = Vec::new();
        for group in input.split(',') {
            let mut chain = Vec::new();
            for part in group.split_whitespace() {
                let offset = part.as_ptr() as usize - input.as_ptr() as usize;
                chain.push(parse_compound(part, offset)?);
            }
            if chain.is_empty() {
                return Err(SelectorError::Empty);
            }
            groups.push(chain);
        }
        Ok(Self { groups })
    }

    fn matches(&self, path: &[PathEntry<'_>]) -> bool {
        self.groups.iter().any(|chain| matches_chain(chain, path))
    }
}

fn parse_compound(part: &str, offset: usize) -> Result<Compound, SelectorError> {
    let mut compound = Compound::default();
    let mut rest = part;
    let mut pos = offset;

    let name_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '*'))
        .unwrap_or(rest.len());
    let name = &rest[..name_len];
    if !name.is_empty() && name != "*" {
        let tag = Tag::from_name(name).ok_or_else(|| SelectorError::UnknownTag(name.to_string()))?;
        compound.tag = Some(tag);
    }
    rest = &rest[name_len..];
    pos += name_len;

    while let Some(marker) = rest.chars().next() {
        let body = &rest[marker.len_utf8()..];
        let len = body
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(body.len());
        let ident = &body[..len];
        if ident.is_empty() {
            return Err(SelectorError::Unexpected {
                found: marker,
                offset: pos,
            });
        }
        match marker {
            '.' => compound.classes.push(ident.to_string()),
            '#' => compound.id = Some(ident.to_string()),
            ':' => compound.pseudos.push(match ident {
                "first-child" => Pseudo::FirstChild,
                "last-child" => Pseudo::LastChild,
                other => return Err(SelectorError::UnsupportedPseudo(other.to_string())),
            }),
            found => return Err(SelectorError::Unexpected { found, offset: pos }),
        }
        rest = &body[len..];
        pos += marker.len_utf8() + len;
    }

    Ok(compound)
}

/// Right-to-left descendant matching: the last compound must match the
/// element itself, earlier ones match ancestors in order.
fn matches_chain(chain: &[Compound], path: &[PathEntry<'_>]) -> bool {
    let Some((last, ancestors_chain)) = chain.split_last() else {
        return false;
    };
    let Some((target, ancestors)) = path.split_last() else {
        return false;
    };
    if !last.matches(target) {
        return false;
    }

    let mut remaining = ancestors_chain.iter().rev().peekable();
    for ancestor in ancestors.iter().rev() {
        match remaining.peek() {
            Some(compound) if compound.matches(ancestor) => {
                remaining.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    remaining.peek().is_none()
}

/// All descendants of `root` (excluding `root`) matching `selector`, in document order.
pub fn select<'a>(root: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    select_scoped(root, selector, Scope::Subtree)
}

/// IDs of the elements [`select`] would return.
pub fn select_ids(root: &Element, selector: &Selector) -> Vec<String> {
    ids(select(root, selector))
}

/// Like [`select`], but tables nested below `table` are opaque: they can match
/// themselves, nothing inside them is considered.
pub fn select_in_table<'a>(table: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    select_scoped(table, selector, Scope::OwnTable)
}

/// IDs of the elements [`select_in_table`] would return.
pub fn select_ids_in_table(table: &Element, selector: &Selector) -> Vec<String> {
    ids(select_in_table(table, selector))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Subtree,
    OwnTable,
}

fn ids(elements: Vec<&Element>) -> Vec<String> {
    elements.into_iter().map(|el| el.id.clone()).collect()
}

fn select_scoped<'a>(root: &'a Element, selector: &Selector, scope: Scope) -> Vec<&'a Element> {
    let mut found = Vec::new();
    let mut seen = HashSet::new();
    let mut path = vec![PathEntry {
        element: root,
        index: 0,
        siblings: 1,
    }];
    collect(&mut path, selector, scope, &mut found, &mut seen);
    found
}

fn collect<'a>(
    path: &mut Vec<PathEntry<'a>>,
    selector: &Selector,
    scope: Scope,
    found: &mut Vec<&'a Element>,
    seen: &mut HashSet<&'a str>,
) {
    let Some(parent) = path.last().map(|entry| entry.element) else {
        return;
    };
    let children = parent.children();
    for (index, child) in children.iter().enumerate() {
        path.push(PathEntry {
            element: child,
            index,
            siblings: children.len(),
        });
        if selector.matches(path) && seen.insert(child.id.as_str()) {
            found.push(child);
        }
        if !(scope == Scope::OwnTable && child.tag == Tag::Table) {
            collect(path, selector, scope, found, seen);
        }
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound_parts() {
        let sel = Selector::parse("tr.odd:last-child").unwrap();
        let compound = &sel.groups[0][0];
        assert_eq!(compound.tag, Some(Tag::Tr));
        assert_eq!(compound.classes, vec!["odd".to_string()]);
        assert_eq!(compound.pseudos, vec![Pseudo::LastChild]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("tr,"), Err(SelectorError::Empty));
        assert_eq!(
            Selector::parse("span"),
            Err(SelectorError::UnknownTag("span".to_string()))
        );
        assert_eq!(
            Selector::parse("tr:nth-child"),
            Err(SelectorError::UnsupportedPseudo("nth-child".to_string()))
        );
        assert!(matches!(
            Selector::parse("tr > td"),
            Err(SelectorError::Unexpected { found: '>', .. })
        ));
    }
}
