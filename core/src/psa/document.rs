use crate::prelude::{ConversionError, ConversionResult};
use crate::xml::Element;

const CALC_ARRAY: &str = "CalcArray";

/// PSA setup document: a skeleton with a `CalcArray` insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsaDocument {
    root: Element,
}

impl PsaDocument {
    pub fn parse(xml: &str) -> ConversionResult<Self> {
        Self::from_element(Element::parse_str(xml)?)
    }

    pub fn from_element(root: Element) -> ConversionResult<Self> {
        let document = Self { root };
        document.calc_array()?;
        Ok(document)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn calc_array(&self) -> ConversionResult<&Element> {
        self.root
            .descendants()
            .find(|node| node.name() == CALC_ARRAY)
            .ok_or_else(missing_calc_array)
    }

    pub fn entries(&self) -> ConversionResult<&[Element]> {
        Ok(self.calc_array()?.children())
    }

    /// Value of `CalcArray@Size`, if present and numeric.
    pub fn declared_size(&self) -> Option<usize> {
        self.calc_array()
            .ok()?
            .attribute("Size")
            .and_then(|size| size.trim().parse().ok())
    }

    /// Replaces the array contents and stamps `Size`. Returns the number of
    /// entries that were discarded.
    pub fn replace_entries(&mut self, entries: Vec<Element>) -> ConversionResult<usize> {
        let array = self
            .root
            .find_descendant_mut(CALC_ARRAY)
            .ok_or_else(missing_calc_array)?;
        let discarded = array.clear_children();
        if array.text().is_some_and(|text| text.trim().is_empty()) {
            array.clear_text();
        }
        let size = entries.len();
        for entry in entries {
            array.push_child(entry);
        }
        array.set_attribute("Size", size.to_string());
        Ok(discarded)
    }

    pub fn to_xml_string(&self) -> ConversionResult<String> {
        self.root.to_xml_string()
    }
}

fn missing_calc_array() -> ConversionError {
    ConversionError::MalformedTemplate("PSA skeleton has no CalcArray node".into())
}
