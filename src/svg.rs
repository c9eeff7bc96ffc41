//! SVG template document: an owned, mutable element tree.
//!
//! The template is read with `roxmltree`, copied into an arena of elements so
//! it can be edited, and written back out as XML text. Only elements, text and
//! comments survive the round trip; the XML declaration is regenerated.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::document::DiagramDocument;
use crate::error::DiagramError;
use crate::layout::Point;

// ── Constants ────────────────────────────────────────────────────────────────

pub const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

const PATH_STYLE: &str = "fill:none;fill-rule:evenodd;stroke:{color};stroke-width:1;stroke-linecap:butt;stroke-linejoin:miter;stroke-miterlimit:4;stroke-dasharray:none;stroke-opacity:1";
const TEXT_STYLE: &str = "font-style:normal;font-weight:normal;font-size:7.66974545px;line-height:125%;font-family:sans-serif;text-align:center;letter-spacing:0px;word-spacing:0px;text-anchor:middle;fill:{color};fill-opacity:1;stroke:none;stroke-width:1px;stroke-linecap:butt;stroke-linejoin:miter;stroke-opacity:1";

static STROKE_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"stroke:#[0-9a-fA-F]+").expect("valid stroke pattern"));

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape(s).replace('"', "&quot;")
}

fn style_with(template: &str, color: &str) -> String {
    template.replace("{color}", color)
}

/// Parse `translate(x, y)` / `translate(x)`; other transforms yield `None`.
fn parse_translate(transform: &str) -> Option<(f64, f64)> {
    let t = transform.trim();
    let t = t.strip_prefix("translate(")?;
    let t = t.strip_suffix(')')?;
    let parts = t
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    match parts.as_slice() {
        [x, y] => Some((*x, *y)),
        [x] => Some((*x, 0.0)),
        _ => None,
    }
}

// ── Tree ─────────────────────────────────────────────────────────────────────

/// Handle to an element of an [`SvgDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
enum Content {
    Element(ElementId),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct ElementData {
    /// Qualified name as written, e.g. `path` or `svg:path`.
    name: String,
    local: String,
    /// Namespace declarations made on this element: `(prefix, uri)`.
    namespaces: Vec<(Option<String>, String)>,
    /// Attributes by qualified name, in document order.
    attrs: Vec<(String, String)>,
    /// Resolved `inkscape:label`, whatever prefix the template uses.
    label: Option<String>,
    children: Vec<Content>,
    parent: Option<ElementId>,
}

impl ElementData {
    fn new(name: String, local: String, parent: Option<ElementId>) -> Self {
        Self {
            name,
            local,
            namespaces: Vec::new(),
            attrs: Vec::new(),
            label: None,
            children: Vec::new(),
            parent,
        }
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attr(&mut self, name: &str, value: String) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }
}

/// Mutable SVG document.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    elements: Vec<ElementData>,
    root: ElementId,
    /// Prefix used for elements created by the annotator (`""` or `"svg:"`).
    element_prefix: String,
}

fn qualified(
    node: roxmltree::Node<'_, '_>,
    ns: Option<&str>,
    local: &str,
    is_attr: bool,
) -> String {
    let Some(uri) = ns else {
        return local.to_string();
    };
    if !is_attr && node.namespaces().any(|n| n.name().is_none() && n.uri() == uri) {
        return local.to_string();
    }
    match node.lookup_prefix(uri) {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_string(),
    }
}

impl SvgDocument {
    /// Parse a template document.
    pub fn parse(text: &str) -> Result<Self, DiagramError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)
            .map_err(|e| DiagramError::Template(e.to_string()))?;

        let mut svg = SvgDocument {
            elements: Vec::new(),
            root: ElementId(0),
            element_prefix: String::new(),
        };
        svg.root = svg.import(doc.root_element(), None);
        let root_name = &svg.elements[svg.root.0].name;
        if let Some((prefix, _)) = root_name.split_once(':') {
            svg.element_prefix = format!("{prefix}:");
        }
        Ok(svg)
    }

    fn import(&mut self, node: roxmltree::Node<'_, '_>, parent: Option<ElementId>) -> ElementId {
        let tag = node.tag_name();
        let mut data = ElementData::new(
            qualified(node, tag.namespace(), tag.name(), false),
            tag.name().to_string(),
            parent,
        );

        let inherited: Vec<(Option<&str>, &str)> = node
            .parent_element()
            .map(|p| p.namespaces().map(|n| (n.name(), n.uri())).collect())
            .unwrap_or_default();
        data.namespaces = node
            .namespaces()
            .filter(|n| n.uri() != XML_NS)
            .filter(|n| !inherited.contains(&(n.name(), n.uri())))
            .map(|n| (n.name().map(str::to_string), n.uri().to_string()))
            .collect();

        for attr in node.attributes() {
            if attr.namespace() == Some(INKSCAPE_NS) && attr.name() == "label" {
                data.label = Some(attr.value().to_string());
            }
            data.attrs.push((
                qualified(node, attr.namespace(), attr.name(), true),
                attr.value().to_string(),
            ));
        }

        let id = ElementId(self.elements.len());
        self.elements.push(data);

        for child in node.children() {
            let content = if child.is_element() {
                Content::Element(self.import(child, Some(id)))
            } else if child.is_text() {
                Content::Text(child.text().unwrap_or_default().to_string())
            } else if child.is_comment() {
                Content::Comment(child.text().unwrap_or_default().to_string())
            } else {
                continue;
            };
            self.elements[id.0].children.push(content);
        }
        id
    }

    fn push_element(
        &mut self,
        parent: ElementId,
        local: &str,
        attrs: Vec<(String, String)>,
    ) -> ElementId {
        let id = ElementId(self.elements.len());
        let mut data = ElementData::new(
            format!("{}{local}", self.element_prefix),
            local.to_string(),
            Some(parent),
        );
        data.attrs = attrs;
        self.elements.push(data);
        self.elements[parent.0].children.push(Content::Element(id));
        id
    }

    /// Descendants of `scope` (excluding itself) in document order.
    fn descendants(&self, scope: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = self.child_elements(scope);
        stack.reverse();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.child_elements(id).into_iter().rev());
        }
        out
    }

    fn find_labeled(&self, scope: ElementId, label: &str) -> Option<ElementId> {
        self.descendants(scope)
            .into_iter()
            .find(|id| self.elements[id.0].label.as_deref() == Some(label))
    }

    /// Declare on `element` the namespaces it inherits from ancestors below
    /// the root, so it stays well-formed once moved under the root.
    fn carry_namespaces(&mut self, element: ElementId) {
        let root = self.root;
        let mut inherited: Vec<(Option<String>, String)> = Vec::new();
        let mut ancestor = self.elements[element.0].parent;
        while let Some(id) = ancestor.filter(|id| *id != root) {
            for (prefix, uri) in &self.elements[id.0].namespaces {
                // The closest declaration of a prefix wins.
                if !inherited.iter().any(|(p, _)| p == prefix) {
                    inherited.push((prefix.clone(), uri.clone()));
                }
            }
            ancestor = self.elements[id.0].parent;
        }

        let own = &self.elements[element.0].namespaces;
        let at_root = &self.elements[root.0].namespaces;
        inherited.retain(|decl| {
            !own.iter().any(|(p, _)| *p == decl.0) && !at_root.contains(decl)
        });
        self.elements[element.0].namespaces.extend(inherited);
    }

    fn describe(&self, id: ElementId) -> String {
        let data = &self.elements[id.0];
        data.label.clone().unwrap_or_else(|| data.name.clone())
    }

    // ── Inspection ───────────────────────────────────────────────────────────

    pub fn label(&self, id: ElementId) -> Option<&str> {
        self.elements[id.0].label.as_deref()
    }

    pub fn local_name(&self, id: ElementId) -> &str {
        &self.elements[id.0].local
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements[id.0].attr(name)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements[id.0].parent
    }

    pub fn child_elements(&self, id: ElementId) -> Vec<ElementId> {
        self.elements[id.0]
            .children
            .iter()
            .filter_map(|c| match c {
                Content::Element(e) => Some(*e),
                _ => None,
            })
            .collect()
    }

    /// Concatenated text of `id` and its descendants.
    pub fn text(&self, id: ElementId) -> String {
        let mut out = String::new();
        for content in &self.elements[id.0].children {
            match content {
                Content::Text(t) => out.push_str(t),
                Content::Element(e) => out.push_str(&self.text(*e)),
                Content::Comment(_) => {}
            }
        }
        out
    }

    // ── Serialization ────────────────────────────────────────────────────────

    pub fn to_svg_string(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.write_element(&mut out, self.root);
        out.push('\n');
        out
    }

    fn write_element(&self, out: &mut String, id: ElementId) {
        let data = &self.elements[id.0];
        out.push('<');
        out.push_str(&data.name);
        for (prefix, uri) in &data.namespaces {
            match prefix {
                Some(p) => {
                    let _ = write!(out, " xmlns:{p}=\"{}\"", escape_attr(uri));
                }
                None => {
                    let _ = write!(out, " xmlns=\"{}\"", escape_attr(uri));
                }
            }
        }
        for (name, value) in &data.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
        }
        if data.children.is_empty() {
            out.push_str(" />");
            return;
        }
        out.push('>');
        for content in &data.children {
            match content {
                Content::Element(child) => self.write_element(out, *child),
                Content::Text(t) => out.push_str(&escape(t)),
                Content::Comment(c) => {
                    let _ = write!(out, "<!--{c}-->");
                }
            }
        }
        let _ = write!(out, "</{}>", data.name);
    }
}

// ── Diagram boundary ─────────────────────────────────────────────────────────

impl DiagramDocument for SvgDocument {
    type Element = ElementId;

    fn root(&self) -> ElementId {
        self.root
    }

    fn find_element_by_label(
        &self,
        scope: ElementId,
        label: &str,
    ) -> Result<ElementId, DiagramError> {
        self.find_labeled(scope, label)
            .ok_or_else(|| DiagramError::not_found(label))
    }

    fn find_parent_by_label(
        &self,
        scope: ElementId,
        label: &str,
    ) -> Result<ElementId, DiagramError> {
        self.find_labeled(scope, label)
            .and_then(|id| self.parent(id))
            .ok_or_else(|| DiagramError::not_found(label))
    }

    fn set_style_color(&mut self, element: ElementId, old: &str, new: &str) {
        let mut targets = vec![element];
        targets.extend(self.descendants(element));
        for id in targets {
            let data = &mut self.elements[id.0];
            if let Some(style) = data.attr("style") {
                let updated = style.replace(old, new);
                data.set_attr("style", updated);
            }
        }
    }

    fn set_stroke_color(&mut self, element: ElementId, color: &str) {
        let data = &mut self.elements[element.0];
        if let Some(style) = data.attr("style") {
            let replacement = format!("stroke:{color}");
            let updated = STROKE_COLOR
                .replace_all(style, NoExpand(&replacement))
                .into_owned();
            data.set_attr("style", updated);
        }
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        let target = self
            .child_elements(element)
            .into_iter()
            .find(|id| self.local_name(*id) == "tspan")
            .unwrap_or(element);
        // Only the leading text changes; nested elements and tail text stay.
        let children = &mut self.elements[target.0].children;
        let leading = children
            .iter()
            .take_while(|c| matches!(c, Content::Text(_)))
            .count();
        children.drain(..leading);
        children.insert(0, Content::Text(text.to_string()));
    }

    fn add_line(&mut self, parent: ElementId, from: Point, to: Point, color: &str) {
        self.push_element(
            parent,
            "path",
            vec![
                ("style".to_string(), style_with(PATH_STYLE, color)),
                (
                    "d".to_string(),
                    format!("M {},{} L {},{}", from.x, from.y, to.x, to.y),
                ),
            ],
        );
    }

    fn add_text(&mut self, parent: ElementId, at: Point, text: &str, color: &str) {
        let id = self.push_element(
            parent,
            "text",
            vec![
                ("style".to_string(), style_with(TEXT_STYLE, color)),
                ("x".to_string(), at.x.to_string()),
                ("y".to_string(), at.y.to_string()),
            ],
        );
        self.elements[id.0].children.push(Content::Text(text.to_string()));
    }

    fn get_translation_offset(&self, element: ElementId) -> (f64, f64) {
        self.elements[element.0]
            .attr("transform")
            .and_then(parse_translate)
            .unwrap_or((0.0, 0.0))
    }

    fn shift_position(&mut self, element: ElementId, dx: f64, dy: f64) -> Result<(), DiagramError> {
        let mut moved = Vec::with_capacity(2);
        for (attribute, delta) in [("x", dx), ("y", dy)] {
            let value = self.elements[element.0]
                .attr(attribute)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .ok_or_else(|| DiagramError::Attribute {
                    label: self.describe(element),
                    attribute: attribute.to_string(),
                })?;
            moved.push((attribute, value + delta));
        }
        for (attribute, value) in moved {
            self.elements[element.0].set_attr(attribute, value.to_string());
        }
        Ok(())
    }

    fn reparent_to_root_end(&mut self, element: ElementId) {
        if element == self.root {
            return;
        }
        self.carry_namespaces(element);
        if let Some(parent) = self.elements[element.0].parent {
            self.elements[parent.0]
                .children
                .retain(|c| !matches!(c, Content::Element(e) if *e == element));
        }
        let root = self.root;
        self.elements[root.0].children.push(Content::Element(element));
        self.elements[element.0].parent = Some(root);
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_svg.rs"]
mod tests;
