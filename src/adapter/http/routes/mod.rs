pub mod bootcamp;
pub mod course;
pub mod review;
