use crate::domain::entities::schema::{CollectionSchema, Field, FieldKind};

pub static BOOTCAMPS: CollectionSchema = CollectionSchema {
    name: "bootcamps",
    fields: &[
        Field::new("id", FieldKind::Uuid),
        Field::new("name", FieldKind::Text),
        Field::new("slug", FieldKind::Text),
        Field::new("description", FieldKind::Text),
        Field::new("website", FieldKind::Text),
        Field::new("phone", FieldKind::Text),
        Field::new("email", FieldKind::Text),
        Field::new("address", FieldKind::Text),
        Field::new("careers", FieldKind::TextArray),
        Field::new("average_rating", FieldKind::Float),
        Field::new("average_cost", FieldKind::Float),
        Field::new("photo", FieldKind::Text),
        Field::new("housing", FieldKind::Boolean),
        Field::new("job_assistance", FieldKind::Boolean),
        Field::new("job_guarantee", FieldKind::Boolean),
        Field::new("accept_gi", FieldKind::Boolean),
        Field::new("user", FieldKind::Uuid),
        Field::new("created_at", FieldKind::Timestamp),
    ],
};
