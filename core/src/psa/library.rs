use crate::prelude::{ConversionError, ConversionResult};
use crate::xml::Element;

/// Read-only library of `CalcArrayItem`-style templates keyed by `(CalcID, UnitID)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcTemplateLibrary {
    root: Element,
}

impl CalcTemplateLibrary {
    pub fn parse(xml: &str) -> ConversionResult<Self> {
        Ok(Self::from_element(Element::parse_str(xml)?))
    }

    pub fn from_element(root: Element) -> Self {
        Self { root }
    }

    /// First template node carrying `CalcID`.
    pub fn template(&self, calc_id: &str) -> Option<&Element> {
        self.root
            .descendants()
            .find(|node| node.attribute("CalcID") == Some(calc_id))
    }

    /// First template node carrying `CalcID` whose direct child carries `UnitID`.
    pub fn template_for(&self, calc_id: &str, unit_id: &str) -> Option<&Element> {
        self.root.descendants().find(|node| {
            node.attribute("CalcID") == Some(calc_id)
                && node
                    .children()
                    .iter()
                    .any(|child| child.attribute("UnitID") == Some(unit_id))
        })
    }

    pub fn instantiate(&self, calc_id: &str) -> ConversionResult<Element> {
        self.template(calc_id)
            .cloned()
            .ok_or_else(|| ConversionError::MissingTemplate {
                calc_id: calc_id.to_string(),
                unit_id: None,
                sensor_id: None,
            })
    }

    pub fn instantiate_for(
        &self,
        calc_id: &str,
        unit_id: &str,
        sensor_id: u32,
    ) -> ConversionResult<Element> {
        self.template_for(calc_id, unit_id)
            .cloned()
            .ok_or_else(|| ConversionError::MissingTemplate {
                calc_id: calc_id.to_string(),
                unit_id: Some(unit_id.to_string()),
                sensor_id: Some(sensor_id),
            })
    }
}
