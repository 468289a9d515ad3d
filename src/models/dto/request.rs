//! Creation payloads for the store's factory operations. The presentation
//! layer hands these over with already-parsed primitives; the store
//! validates them before touching any state.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]+$").expect("USERNAME_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewStudent {
    #[validate(
        length(min = 3, max = 50),
        regex(path = *USERNAME_REGEX, message = "Username must be alphanumeric with underscores")
    )]
    pub username: String,

    #[validate(length(min = 3, max = 100))]
    pub password: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100))]
    pub full_name: String,

    #[validate(length(min = 1, max = 20))]
    pub student_number: String,

    #[validate(length(min = 1, max = 50))]
    pub class_name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTeacher {
    #[validate(
        length(min = 3, max = 50),
        regex(path = *USERNAME_REGEX, message = "Username must be alphanumeric with underscores")
    )]
    pub username: String,

    #[validate(length(min = 3, max = 100))]
    pub password: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100))]
    pub full_name: String,

    #[validate(length(min = 1, max = 20))]
    pub staff_number: String,

    /// Defaults to "Object-Oriented Programming" when omitted.
    #[validate(length(min = 1, max = 100))]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMaterial {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[validate(length(min = 1, max = 50))]
    pub topic: String,

    pub author_id: u32,

    #[validate(url(message = "Invalid resource URL"))]
    pub resource_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    #[validate(range(min = 1, max = 480))]
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1))]
    pub prompt: String,

    #[validate(length(min = 1))]
    pub choice_a: String,

    #[validate(length(min = 1))]
    pub choice_b: String,

    #[validate(length(min = 1))]
    pub choice_c: String,

    #[validate(length(min = 1))]
    pub choice_d: String,

    /// Answer letter A-D, any case; parsed (and normalized) on attach.
    pub correct_choice: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    pub deadline: NaiveDate,

    pub student_id: u32,

    pub teacher_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_student() -> NewStudent {
        NewStudent {
            username: "sandy".to_string(),
            password: "123".to_string(),
            email: "sandy@email.com".to_string(),
            full_name: "Sandy Putra Pratama".to_string(),
            student_number: "12345".to_string(),
            class_name: "XII RPL".to_string(),
        }
    }

    #[test]
    fn test_valid_student_passes() {
        assert!(valid_student().validate().is_ok());
    }

    #[test]
    fn test_short_username_fails() {
        let mut request = valid_student();
        request.username = "ab".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_username_with_spaces_fails() {
        let mut request = valid_student();
        request.username = "sandy putra".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bad_email_fails() {
        let mut request = valid_student();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_teacher_subject_is_optional() {
        let request = NewTeacher {
            username: "bambang".to_string(),
            password: "123".to_string(),
            email: "bambang@email.com".to_string(),
            full_name: "Bambang Sujatmiko".to_string(),
            staff_number: "98765".to_string(),
            subject: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_material_rejects_bad_resource_url() {
        let request = NewMaterial {
            title: "Introduction to OOP".to_string(),
            content: "text".to_string(),
            topic: "OOP Basics".to_string(),
            author_id: 1,
            resource_url: Some("not a url".to_string()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_test_duration_must_be_positive() {
        let request = NewTest {
            title: "OOP Fundamentals Quiz".to_string(),
            duration_minutes: 0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_project_requires_description() {
        let request = NewProject {
            title: "Hello World".to_string(),
            description: String::new(),
            deadline: NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date"),
            student_id: 1,
            teacher_id: 1,
        };
        assert!(request.validate().is_err());
    }
}
