//! Reader for registry documents whose element names carry the data
//!
//! Google's Maven indexes name each child element after a group or artifact:
//!
//! ```text
//! <androidx.core>
//!   <core versions="1.0.0,1.1.0"/>
//! </androidx.core>
//! ```

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A direct child element of the document root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildElement {
    /// Local element name
    pub name: String,
    /// Unescaped value of the first attribute, if any
    pub first_attribute: Option<String>,
}

/// Collects the direct children of the root element, in document order
pub fn root_children(xml: &str) -> Result<Vec<ChildElement>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut children = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 1 {
                    children.push(child_element(&e)?);
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 1 {
                    children.push(child_element(&e)?);
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(children)
}

fn child_element(element: &BytesStart<'_>) -> Result<ChildElement, quick_xml::Error> {
    let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
    let first_attribute = match element.attributes().next() {
        Some(attribute) => Some(attribute?.unescape_value()?.into_owned()),
        None => None,
    };

    Ok(ChildElement {
        name,
        first_attribute,
    })
}
