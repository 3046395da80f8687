use crate::prelude::{ConversionError, ConversionResult};
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fmt::Display;
use std::io::{Cursor, Write};

/// Owned XML element. Cloning produces an independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn clear_text(&mut self) {
        self.text = None;
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Overwrites an existing attribute in place, or appends a new one.
    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(name, _)| name == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key.to_string(), value)),
        }
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn clear_children(&mut self) -> usize {
        let removed = self.children.len();
        self.children.clear();
        removed
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|child| child.name == name)
    }

    /// Follows a `/`-separated chain of direct-child tag names.
    pub fn find_path(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .try_fold(self, |element, segment| element.child(segment))
    }

    pub fn find_path_mut(&mut self, path: &str) -> Option<&mut Element> {
        path.split('/')
            .try_fold(self, |element, segment| element.child_mut(segment))
    }

    /// Pre-order walk starting with `self`.
    pub fn iter(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Pre-order walk over everything below `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    pub fn find_descendant_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|child| {
            if child.name == name {
                Some(child)
            } else {
                child.find_descendant_mut(name)
            }
        })
    }

    /// Parses a complete document and returns its root element.
    ///
    /// Leaf text is kept exactly as written (after unescaping). Whitespace
    /// between child elements is layout and is dropped. Comments, processing
    /// instructions and the declaration are ignored.
    pub fn parse_str(xml: &str) -> ConversionResult<Self> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => open.push(Element::from_start(e)?),
                Ok(Event::Empty(ref e)) => {
                    let element = Element::from_start(e)?;
                    close_element(element, &mut open, &mut root)?;
                }
                Ok(Event::End(ref e)) => {
                    let element = open.pop().ok_or_else(|| {
                        ConversionError::Xml(format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(e.name().as_ref())
                        ))
                    })?;
                    close_element(element, &mut open, &mut root)?;
                }
                Ok(Event::Text(ref e)) => {
                    let text = e.unescape().map_err(xml_error)?;
                    append_text(&mut open, &text)?;
                }
                Ok(Event::CData(e)) => {
                    let raw = e.into_inner();
                    append_text(&mut open, &String::from_utf8_lossy(&raw))?;
                }
                Ok(Event::Eof) => break,
                Err(err) => {
                    return Err(ConversionError::Xml(format!(
                        "at byte {}: {}",
                        reader.buffer_position(),
                        err
                    )))
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(unclosed) = open.last() {
            return Err(ConversionError::Xml(format!(
                "unclosed element <{}>",
                unclosed.name
            )));
        }
        root.ok_or_else(|| ConversionError::Xml("document has no root element".into()))
    }

    /// Serializes the tree as a UTF-8 document with an XML declaration.
    pub fn to_xml_string(&self) -> ConversionResult<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;
        self.write_into(&mut writer)?;
        String::from_utf8(writer.into_inner().into_inner()).map_err(xml_error)
    }

    fn from_start(start: &BytesStart<'_>) -> ConversionResult<Self> {
        let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr.map_err(xml_error)?;
            let value = attr.unescape_value().map_err(xml_error)?;
            element.attributes.push((
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                value.into_owned(),
            ));
        }
        Ok(element)
    }

    fn write_into<W: Write>(&self, writer: &mut Writer<W>) -> ConversionResult<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.text.is_none() {
            return writer.write_event(Event::Empty(start)).map_err(xml_error);
        }

        writer
            .write_event(Event::Start(start.borrow()))
            .map_err(xml_error)?;
        if let Some(text) = &self.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml_error)?;
        }
        for child in &self.children {
            child.write_into(writer)?;
        }
        writer
            .write_event(Event::End(start.to_end()))
            .map_err(xml_error)
    }
}

/// Iterator returned by [`Element::iter`] and [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

fn close_element(
    mut element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
) -> ConversionResult<()> {
    let layout_only = element
        .text
        .as_deref()
        .is_some_and(|text| text.trim().is_empty());
    if layout_only && !element.children.is_empty() {
        element.text = None;
    }
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(ConversionError::Xml(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

fn append_text(open: &mut [Element], text: &str) -> ConversionResult<()> {
    if text.is_empty() {
        return Ok(());
    }
    let Some(current) = open.last_mut() else {
        if text.trim().is_empty() {
            return Ok(());
        }
        return Err(ConversionError::Xml("text outside the root element".into()));
    };
    match current.text.as_mut() {
        Some(existing) => existing.push_str(text),
        None => current.text = Some(text.to_string()),
    }
    Ok(())
}

fn xml_error<E: Display>(err: E) -> ConversionError {
    ConversionError::Xml(err.to_string())
}
