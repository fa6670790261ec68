use crate::domain::entities::schema::CollectionSchema;

/// Columns returned per record. The identity field always comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub fields: Vec<&'static str>,
}

impl Projection {
    /// All visible fields of the collection.
    pub fn all(schema: &CollectionSchema) -> Self {
        Self {
            fields: schema.visible_fields().map(|f| f.name).collect(),
        }
    }

    /// Builds a projection from a comma-separated `select` value.
    /// Unknown and hidden names are dropped; `None` or a blank value selects everything.
    pub fn parse(schema: &CollectionSchema, select: Option<&str>) -> Self {
        match select.map(str::trim) {
            Some(select) if !select.is_empty() => Self::of(schema, select.split(',')),
            _ => Self::all(schema),
        }
    }

    pub fn of<'a, I>(schema: &CollectionSchema, names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = vec![CollectionSchema::ID_FIELD];
        for name in names {
            if let Some(field) = schema.field(name.trim()) {
                if !fields.contains(&field.name) {
                    fields.push(field.name);
                }
            }
        }
        Self { fields }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| *f == name)
    }
}
