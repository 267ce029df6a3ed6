use crate::{Error, Result};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A parsed XML element with its namespace resolved.
#[derive(Debug, Clone)]
pub(crate) struct Element {
    /// Namespace URI the element is in, if any
    pub(crate) namespace: Option<String>,

    pub(crate) local_name: String,

    /// Attributes by qualified name, in document order
    pub(crate) attributes: Vec<(String, String)>,

    pub(crate) children: Vec<Element>,
}

/// Namespace bindings introduced by one element: `None` is the default
/// namespace.
type Scope = Vec<(Option<String>, String)>;

impl Element {
    /// Parses `src` and returns its root element.
    pub(crate) fn parse(src: &str) -> Result<Element> {
        let mut reader = Reader::from_str(src);
        reader.trim_text(true);

        let mut scopes: Vec<Scope> = vec![];
        let mut stack: Vec<Element> = vec![];
        let mut root = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let element = Element::open(&start, &mut scopes)?;
                    stack.push(element);
                }
                Event::Empty(start) => {
                    let element = Element::open(&start, &mut scopes)?;
                    scopes.pop();
                    attach(element, &mut stack, &mut root)?;
                }
                Event::End(_) => {
                    scopes.pop();
                    let Some(element) = stack.pop() else {
                        return Err(Error::document_malformed("unbalanced closing tag"));
                    };
                    attach(element, &mut stack, &mut root)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(Error::document_malformed(format!(
                "element `{}` is never closed",
                open.local_name
            )));
        }

        root.ok_or_else(|| Error::document_malformed("document has no root element"))
    }

    fn open(start: &BytesStart<'_>, scopes: &mut Vec<Scope>) -> Result<Element> {
        let mut attributes = vec![];
        let mut scope = Scope::new();

        for attr in start.attributes() {
            let attr = attr?;
            let key = decode(attr.key.as_ref())?;
            let value = attr.unescape_value()?.into_owned();

            if key == "xmlns" {
                scope.push((None, value.clone()));
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                scope.push((Some(prefix.to_string()), value.clone()));
            }

            attributes.push((key, value));
        }
        scopes.push(scope);

        let name = start.name();
        let prefix = name.prefix().map(|prefix| decode(prefix.as_ref())).transpose()?;
        let local_name = decode(name.local_name().as_ref())?;

        let namespace = scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter().rev())
            .find(|(bound, _)| *bound == prefix)
            .map(|(_, uri)| uri.clone());

        if namespace.is_none() {
            if let Some(prefix) = prefix {
                return Err(Error::document_malformed(format!(
                    "element `{prefix}:{local_name}` uses an undeclared namespace prefix"
                )));
            }
        }

        Ok(Element {
            namespace,
            local_name,
            attributes,
            children: vec![],
        })
    }

    /// Returns the value of an unprefixed attribute.
    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the value of a required attribute.
    pub(crate) fn expect_attr(&self, name: &str) -> Result<&str> {
        self.attr(name).ok_or_else(|| {
            Error::document_malformed(format!(
                "`{}` element is missing the `{}` attribute",
                self.local_name, name
            ))
        })
    }

    /// Returns `true` if this element is `local_name` in `namespace`.
    pub(crate) fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.local_name == local_name && self.namespace.as_deref() == Some(namespace)
    }

    /// Iterates the child elements named `local_name` in `namespace`.
    pub(crate) fn children_named<'a>(
        &'a self,
        namespace: &'a str,
        local_name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children
            .iter()
            .filter(move |child| child.is(namespace, local_name))
    }

    /// Follows `path` one child element per step, taking the first match at
    /// every step.
    pub(crate) fn descend(&self, namespace: &str, path: &[&str]) -> Option<&Element> {
        path.iter().try_fold(self, |element, step| {
            element
                .children
                .iter()
                .find(|child| child.is(namespace, step))
        })
    }

    /// Iterates every element below this one, depth first, in document order.
    pub(crate) fn descendants(&self) -> impl Iterator<Item = &Element> {
        let mut pending: Vec<&Element> = self.children.iter().rev().collect();
        core::iter::from_fn(move || {
            let next = pending.pop()?;
            pending.extend(next.children.iter().rev());
            Some(next)
        })
    }
}

fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(Error::document_malformed(
                "document has more than one root element",
            ))
        }
    }
    Ok(())
}

fn decode(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(String::from)
        .map_err(|err| Error::document_malformed(err.to_string()))
}
