use serde::{Deserialize, Serialize};

use crate::models::dto::request::{NewStudent, NewTeacher};

/// Identity and credential fields shared by every principal.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Account {
    pub id: u32,
    pub username: String,
    /// Stored as plaintext, exactly as entered. A known weakness of the
    /// system this store backs, kept rather than silently hardened.
    pub password: String,
    pub email: String,
    pub full_name: String,
}

impl Account {
    pub fn new(id: u32, username: &str, password: &str, email: &str, full_name: &str) -> Self {
        Account {
            id,
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
        }
    }

    /// Exact, case-sensitive match on both fields. No normalization, no
    /// lockout, no rate limiting.
    pub fn validate_login(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Teacher,
}

/// A learner. Owns projects (by id) and accumulates a cognitive score from
/// test results; both fields are maintained by the record store.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Student {
    #[serde(flatten)]
    pub account: Account,
    pub student_number: String,
    pub class_name: String,
    /// Running mean over all of this student's recorded test scores.
    pub cognitive_score: f64,
    /// Ordered, de-duplicated ids of owned projects.
    pub project_ids: Vec<u32>,
}

impl Student {
    pub fn new(
        id: u32,
        username: &str,
        password: &str,
        email: &str,
        full_name: &str,
        student_number: &str,
        class_name: &str,
    ) -> Self {
        Student {
            account: Account::new(id, username, password, email, full_name),
            student_number: student_number.to_string(),
            class_name: class_name.to_string(),
            cognitive_score: 0.0,
            project_ids: Vec::new(),
        }
    }

    pub fn from_request(id: u32, request: NewStudent) -> Self {
        Student {
            account: Account {
                id,
                username: request.username,
                password: request.password,
                email: request.email,
                full_name: request.full_name,
            },
            student_number: request.student_number,
            class_name: request.class_name,
            cognitive_score: 0.0,
            project_ids: Vec::new(),
        }
    }

    /// Appends the id unless it is already present.
    pub fn add_project_id(&mut self, project_id: u32) {
        if !self.project_ids.contains(&project_id) {
            self.project_ids.push(project_id);
        }
    }

    pub fn remove_project_id(&mut self, project_id: u32) {
        self.project_ids.retain(|id| *id != project_id);
    }
}

/// A staff principal: authors materials, tests, and projects, and grades
/// submissions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Teacher {
    #[serde(flatten)]
    pub account: Account,
    pub staff_number: String,
    pub subject: String,
}

impl Teacher {
    pub fn new(
        id: u32,
        username: &str,
        password: &str,
        email: &str,
        full_name: &str,
        staff_number: &str,
        subject: &str,
    ) -> Self {
        Teacher {
            account: Account::new(id, username, password, email, full_name),
            staff_number: staff_number.to_string(),
            subject: subject.to_string(),
        }
    }

    pub fn from_request(id: u32, request: NewTeacher) -> Self {
        Teacher {
            account: Account {
                id,
                username: request.username,
                password: request.password,
                email: request.email,
                full_name: request.full_name,
            },
            staff_number: request.staff_number,
            subject: request
                .subject
                .unwrap_or_else(|| "Object-Oriented Programming".to_string()),
        }
    }
}

/// A principal as returned by authentication: a shared core record plus a
/// role-specific payload. Callers that need role-specific fields go through
/// `as_student` / `as_teacher`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum User {
    Student(Student),
    Teacher(Teacher),
}

impl User {
    pub fn account(&self) -> &Account {
        match self {
            User::Student(student) => &student.account,
            User::Teacher(teacher) => &teacher.account,
        }
    }

    pub fn id(&self) -> u32 {
        self.account().id
    }

    pub fn username(&self) -> &str {
        &self.account().username
    }

    pub fn full_name(&self) -> &str {
        &self.account().full_name
    }

    pub fn role(&self) -> Role {
        match self {
            User::Student(_) => Role::Student,
            User::Teacher(_) => Role::Teacher,
        }
    }

    pub fn validate_login(&self, username: &str, password: &str) -> bool {
        self.account().validate_login(username, password)
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            User::Student(student) => Some(student),
            User::Teacher(_) => None,
        }
    }

    pub fn as_teacher(&self) -> Option<&Teacher> {
        match self {
            User::Teacher(teacher) => Some(teacher),
            User::Student(_) => None,
        }
    }
}
