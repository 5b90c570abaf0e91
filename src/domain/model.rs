/// One flat key-value object in the JSON array format. Built on the
/// `preserve_order` map so keys keep their insertion order through a
/// parse/serialize cycle.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// An ordered set of CSV records sharing one header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
