pub mod fixtures {
    use chrono::{Duration, Local};

    use crate::models::dto::request::{NewProject, NewStudent, NewTeacher, NewTest};

    /// A valid student request; password is always "123".
    pub fn new_student(username: &str) -> NewStudent {
        NewStudent {
            username: username.to_string(),
            password: "123".to_string(),
            email: format!("{}@example.com", username),
            full_name: format!("Test Student {}", username),
            student_number: "00000".to_string(),
            class_name: "XII RPL".to_string(),
        }
    }

    pub fn new_teacher(username: &str) -> NewTeacher {
        NewTeacher {
            username: username.to_string(),
            password: "123".to_string(),
            email: format!("{}@example.com", username),
            full_name: format!("Test Teacher {}", username),
            staff_number: "99999".to_string(),
            subject: None,
        }
    }

    pub fn new_project(title: &str, student_id: u32, teacher_id: u32) -> NewProject {
        NewProject {
            title: title.to_string(),
            description: "a project used by tests".to_string(),
            deadline: Local::now().date_naive() + Duration::days(7),
            student_id,
            teacher_id,
        }
    }

    pub fn new_test(title: &str) -> NewTest {
        NewTest {
            title: title.to_string(),
            duration_minutes: 30,
        }
    }
}

/// Makes `log` output visible when a test fails.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
