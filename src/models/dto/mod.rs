pub mod request;

pub use request::{NewMaterial, NewProject, NewQuestion, NewStudent, NewTeacher, NewTest};
