/// A materialised record: projected column name to value, in projection order.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Storage type of a collection field. Drives how query-string values are parsed
/// before they are bound into a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
    Uuid,
    Timestamp,
    TextArray,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub hidden: bool,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            hidden: false,
        }
    }

    pub const fn hidden(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            hidden: true,
        }
    }
}

/// A foreign-key field that can be expanded into (a projection of) the referenced record.
#[derive(Debug, Clone, Copy)]
pub struct Populate {
    pub path: &'static str,
    pub target: &'static CollectionSchema,
    pub select: &'static [&'static str],
}

#[derive(Debug)]
pub struct CollectionSchema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl CollectionSchema {
    pub const ID_FIELD: &'static str = "id";

    /// Looks up a field that may be exposed to clients. Hidden fields are never returned.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name && !f.hidden)
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(|f| !f.hidden)
    }
}
