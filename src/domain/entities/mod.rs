pub mod bootcamp;
pub mod course;
pub mod review;
pub mod schema;
pub mod user;
