use crate::domain::entities::bootcamp::BOOTCAMPS;
use crate::domain::entities::schema::{CollectionSchema, Field, FieldKind, Populate};
use crate::domain::entities::user::USERS;

pub static REVIEWS: CollectionSchema = CollectionSchema {
    name: "reviews",
    fields: &[
        Field::new("id", FieldKind::Uuid),
        Field::new("title", FieldKind::Text),
        Field::new("text", FieldKind::Text),
        Field::new("rating", FieldKind::Integer),
        Field::new("bootcamp", FieldKind::Uuid),
        Field::new("user", FieldKind::Uuid),
        Field::new("created_at", FieldKind::Timestamp),
    ],
};

pub static REVIEW_BOOTCAMP: Populate = Populate {
    path: "bootcamp",
    target: &BOOTCAMPS,
    select: &["name", "description"],
};

pub static REVIEW_USER: Populate = Populate {
    path: "user",
    target: &USERS,
    select: &["name"],
};
