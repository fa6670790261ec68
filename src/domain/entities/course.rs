use crate::domain::entities::bootcamp::BOOTCAMPS;
use crate::domain::entities::schema::{CollectionSchema, Field, FieldKind, Populate};

pub static COURSES: CollectionSchema = CollectionSchema {
    name: "courses",
    fields: &[
        Field::new("id", FieldKind::Uuid),
        Field::new("title", FieldKind::Text),
        Field::new("description", FieldKind::Text),
        Field::new("weeks", FieldKind::Integer),
        Field::new("tuition", FieldKind::Float),
        Field::new("minimum_skill", FieldKind::Text),
        Field::new("scholarship_available", FieldKind::Boolean),
        Field::new("bootcamp", FieldKind::Uuid),
        Field::new("user", FieldKind::Uuid),
        Field::new("created_at", FieldKind::Timestamp),
    ],
};

pub static COURSE_BOOTCAMP: Populate = Populate {
    path: "bootcamp",
    target: &BOOTCAMPS,
    select: &["name", "description"],
};
