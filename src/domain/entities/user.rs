use crate::domain::entities::schema::{CollectionSchema, Field, FieldKind};

// Only reachable as a populate target; there is no public user listing.
pub static USERS: CollectionSchema = CollectionSchema {
    name: "users",
    fields: &[
        Field::new("id", FieldKind::Uuid),
        Field::new("name", FieldKind::Text),
        Field::new("email", FieldKind::Text),
        Field::new("role", FieldKind::Text),
        Field::hidden("password", FieldKind::Text),
        Field::new("created_at", FieldKind::Timestamp),
    ],
};
