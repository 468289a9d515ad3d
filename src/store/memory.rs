use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{info, warn};
use validator::Validate;

use crate::config::{Config, MissingStudentPolicy};
use crate::errors::{StoreError, StoreResult};
use crate::models::domain::{
    Choice, CognitiveTest, Material, Project, Question, Role, Student, Teacher, User,
};
use crate::models::dto::request::{
    NewMaterial, NewProject, NewQuestion, NewStudent, NewTeacher, NewTest,
};
use crate::store::contract::RecordStore;
use crate::store::seed;

/// Per-kind id counters. Sequential from 1, never rewound.
#[derive(Debug)]
struct Counters {
    student: u32,
    teacher: u32,
    material: u32,
    test: u32,
    question: u32,
    project: u32,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            student: 1,
            teacher: 1,
            material: 1,
            test: 1,
            question: 1,
            project: 1,
        }
    }
}

impl Counters {
    fn next(counter: &mut u32) -> u32 {
        let id = *counter;
        *counter += 1;
        id
    }
}

/// Everything the store owns, guarded by one lock so that writes are
/// serialized and cross-entity updates happen in a single critical section.
#[derive(Debug, Default)]
struct StoreState {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    materials: Vec<Material>,
    tests: Vec<CognitiveTest>,
    projects: Vec<Project>,
    /// student id -> test id -> score
    test_results: HashMap<u32, HashMap<u32, f64>>,
    /// Opaque per-project blobs, independent of the `Project` entity.
    project_code: HashMap<u32, String>,
    /// Single-slot session: at most one logged-in principal per store
    /// instance. A server reuse would have to scope this per connection.
    session: Option<(Role, u32)>,
    counters: Counters,
}

impl StoreState {
    fn username_taken(&self, username: &str, exclude: Option<(Role, u32)>) -> bool {
        let excluded = |role: Role, id: u32| exclude == Some((role, id));
        self.students
            .iter()
            .any(|s| s.account.username == username && !excluded(Role::Student, s.account.id))
            || self
                .teachers
                .iter()
                .any(|t| t.account.username == username && !excluded(Role::Teacher, t.account.id))
    }

    fn student_mut(&mut self, id: u32) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.account.id == id)
    }

    fn user(&self, role: Role, id: u32) -> Option<User> {
        match role {
            Role::Student => self
                .students
                .iter()
                .find(|s| s.account.id == id)
                .cloned()
                .map(User::Student),
            Role::Teacher => self
                .teachers
                .iter()
                .find(|t| t.account.id == id)
                .cloned()
                .map(User::Teacher),
        }
    }
}

/// The process-memory record store. Data lives for the lifetime of the
/// instance; construct it once at startup and pass it (by reference or
/// `Arc`) to every consumer.
pub struct InMemoryRecordStore {
    config: Config,
    state: RwLock<StoreState>,
}

impl InMemoryRecordStore {
    /// A store pre-populated with the demo dataset.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let store = Self::empty_with_config(config);
        seed::populate_sample_data(&store);
        store
    }

    /// A blank store. Mostly useful as a test fixture.
    pub fn empty() -> Self {
        Self::empty_with_config(Config::default())
    }

    pub fn empty_with_config(config: Config) -> Self {
        InMemoryRecordStore {
            config,
            state: RwLock::new(StoreState::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().expect("record store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().expect("record store lock poisoned")
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn login(&self, username: &str, password: &str) -> Option<User> {
        let mut state = self.write();

        let student = state
            .students
            .iter()
            .find(|s| s.account.validate_login(username, password))
            .cloned();
        if let Some(student) = student {
            state.session = Some((Role::Student, student.account.id));
            info!("login ok: {} (student)", student.account.full_name);
            return Some(User::Student(student));
        }

        let teacher = state
            .teachers
            .iter()
            .find(|t| t.account.validate_login(username, password))
            .cloned();
        if let Some(teacher) = teacher {
            state.session = Some((Role::Teacher, teacher.account.id));
            info!("login ok: {} (teacher)", teacher.account.full_name);
            return Some(User::Teacher(teacher));
        }

        warn!("login failed for '{}'", username);
        None
    }

    fn logout(&self) {
        let mut state = self.write();
        if let Some((role, id)) = state.session.take() {
            if let Some(user) = state.user(role, id) {
                info!("logout: {}", user.full_name());
            }
        }
    }

    fn current_user(&self) -> Option<User> {
        let state = self.read();
        // resolved against the live collections, so updates made after
        // login are visible through the session
        state.session.and_then(|(role, id)| state.user(role, id))
    }

    fn is_logged_in(&self) -> bool {
        self.read().session.is_some()
    }

    fn add_student(&self, request: NewStudent) -> StoreResult<Student> {
        request.validate()?;
        let mut state = self.write();
        if state.username_taken(&request.username, None) {
            return Err(StoreError::AlreadyExists(format!(
                "User with username '{}' already exists",
                request.username
            )));
        }
        let id = Counters::next(&mut state.counters.student);
        let student = Student::from_request(id, request);
        state.students.push(student.clone());
        Ok(student)
    }

    fn all_students(&self) -> Vec<Student> {
        self.read().students.clone()
    }

    fn student_by_id(&self, id: u32) -> Option<Student> {
        self.read()
            .students
            .iter()
            .find(|s| s.account.id == id)
            .cloned()
    }

    fn update_student(&self, student: Student) -> StoreResult<Student> {
        let mut state = self.write();
        if state.username_taken(
            &student.account.username,
            Some((Role::Student, student.account.id)),
        ) {
            return Err(StoreError::AlreadyExists(format!(
                "User with username '{}' already exists",
                student.account.username
            )));
        }
        let id = student.account.id;
        let slot = state.student_mut(id).ok_or_else(|| {
            StoreError::NotFound(format!("Student with id {} not found", id))
        })?;
        *slot = student.clone();
        Ok(student)
    }

    fn add_teacher(&self, request: NewTeacher) -> StoreResult<Teacher> {
        request.validate()?;
        let mut state = self.write();
        if state.username_taken(&request.username, None) {
            return Err(StoreError::AlreadyExists(format!(
                "User with username '{}' already exists",
                request.username
            )));
        }
        let id = Counters::next(&mut state.counters.teacher);
        let teacher = Teacher::from_request(id, request);
        state.teachers.push(teacher.clone());
        Ok(teacher)
    }

    fn all_teachers(&self) -> Vec<Teacher> {
        self.read().teachers.clone()
    }

    fn teacher_by_id(&self, id: u32) -> Option<Teacher> {
        self.read()
            .teachers
            .iter()
            .find(|t| t.account.id == id)
            .cloned()
    }

    fn update_teacher(&self, teacher: Teacher) -> StoreResult<Teacher> {
        let mut state = self.write();
        if state.username_taken(
            &teacher.account.username,
            Some((Role::Teacher, teacher.account.id)),
        ) {
            return Err(StoreError::AlreadyExists(format!(
                "User with username '{}' already exists",
                teacher.account.username
            )));
        }
        let slot = state
            .teachers
            .iter_mut()
            .find(|t| t.account.id == teacher.account.id)
            .ok_or_else(|| {
                StoreError::NotFound(format!("Teacher with id {} not found", teacher.account.id))
            })?;
        *slot = teacher.clone();
        Ok(teacher)
    }

    fn add_material(&self, request: NewMaterial) -> StoreResult<Material> {
        request.validate()?;
        let mut state = self.write();
        if !state.teachers.iter().any(|t| t.account.id == request.author_id) {
            return Err(StoreError::IntegrityViolation(format!(
                "Material author {} does not reference a known teacher",
                request.author_id
            )));
        }
        let id = Counters::next(&mut state.counters.material);
        let material = Material::from_request(id, request);
        state.materials.push(material.clone());
        Ok(material)
    }

    fn all_materials(&self) -> Vec<Material> {
        self.read().materials.clone()
    }

    fn material_by_id(&self, id: u32) -> Option<Material> {
        self.read().materials.iter().find(|m| m.id == id).cloned()
    }

    fn update_material(&self, material: Material) -> StoreResult<Material> {
        let mut state = self.write();
        let slot = state
            .materials
            .iter_mut()
            .find(|m| m.id == material.id)
            .ok_or_else(|| {
                StoreError::NotFound(format!("Material with id {} not found", material.id))
            })?;
        *slot = material.clone();
        Ok(material)
    }

    fn materials_by_topic(&self, topic: &str) -> Vec<Material> {
        self.read()
            .materials
            .iter()
            .filter(|m| m.topic.eq_ignore_ascii_case(topic))
            .cloned()
            .collect()
    }

    fn add_test(&self, request: NewTest) -> StoreResult<CognitiveTest> {
        request.validate()?;
        let mut state = self.write();
        let id = Counters::next(&mut state.counters.test);
        let test = CognitiveTest::from_request(id, request);
        state.tests.push(test.clone());
        Ok(test)
    }

    fn all_tests(&self) -> Vec<CognitiveTest> {
        self.read().tests.clone()
    }

    fn test_by_id(&self, id: u32) -> Option<CognitiveTest> {
        self.read().tests.iter().find(|t| t.id == id).cloned()
    }

    fn update_test(&self, test: CognitiveTest) -> StoreResult<CognitiveTest> {
        let mut state = self.write();
        if test.questions.iter().any(|q| q.test_id != test.id) {
            return Err(StoreError::IntegrityViolation(format!(
                "Test {} contains questions owned by another test",
                test.id
            )));
        }
        let slot = state
            .tests
            .iter_mut()
            .find(|t| t.id == test.id)
            .ok_or_else(|| StoreError::NotFound(format!("Test with id {} not found", test.id)))?;
        *slot = test.clone();
        Ok(test)
    }

    fn active_tests(&self) -> Vec<CognitiveTest> {
        self.read()
            .tests
            .iter()
            .filter(|t| t.is_active())
            .cloned()
            .collect()
    }

    fn add_question(&self, test_id: u32, request: NewQuestion) -> StoreResult<Question> {
        request.validate()?;
        let correct_choice: Choice = request.correct_choice.parse()?;

        let mut state = self.write();
        let index = state
            .tests
            .iter()
            .position(|t| t.id == test_id)
            .ok_or_else(|| StoreError::NotFound(format!("Test with id {} not found", test_id)))?;

        let id = Counters::next(&mut state.counters.question);
        let question = Question::new(
            id,
            &request.prompt,
            &request.choice_a,
            &request.choice_b,
            &request.choice_c,
            &request.choice_d,
            correct_choice,
        );
        let test = &mut state.tests[index];
        test.add_question(question);
        Ok(test
            .questions
            .last()
            .expect("question was just attached")
            .clone())
    }

    fn add_project(&self, request: NewProject) -> StoreResult<Project> {
        request.validate()?;
        let mut state = self.write();

        let student_known = state
            .students
            .iter()
            .any(|s| s.account.id == request.student_id);
        if !student_known {
            match self.config.missing_student_policy {
                MissingStudentPolicy::Fail => {
                    return Err(StoreError::IntegrityViolation(format!(
                        "Project owner {} does not reference a known student",
                        request.student_id
                    )));
                }
                MissingStudentPolicy::SilentSkip => {
                    warn!(
                        "project owner {} unknown; storing project without a student link",
                        request.student_id
                    );
                }
            }
        }

        let id = Counters::next(&mut state.counters.project);
        let project = Project::from_request(id, request);
        state.projects.push(project.clone());
        if student_known {
            let student = state
                .student_mut(project.student_id)
                .expect("student existence checked above");
            student.add_project_id(id);
        }
        Ok(project)
    }

    fn all_projects(&self) -> Vec<Project> {
        self.read().projects.clone()
    }

    fn project_by_id(&self, id: u32) -> Option<Project> {
        self.read().projects.iter().find(|p| p.id == id).cloned()
    }

    fn update_project(&self, project: Project) -> StoreResult<Project> {
        let mut state = self.write();
        let slot = state
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| {
                StoreError::NotFound(format!("Project with id {} not found", project.id))
            })?;
        *slot = project.clone();
        Ok(project)
    }

    fn delete_project(&self, id: u32) -> bool {
        let mut state = self.write();
        let Some(index) = state.projects.iter().position(|p| p.id == id) else {
            return false;
        };
        let project = state.projects.remove(index);
        if let Some(student) = state.student_mut(project.student_id) {
            student.remove_project_id(id);
        }
        info!("project {} deleted", id);
        true
    }

    fn projects_by_student(&self, student_id: u32) -> Vec<Project> {
        self.read()
            .projects
            .iter()
            .filter(|p| p.student_id == student_id)
            .cloned()
            .collect()
    }

    fn save_test_result(&self, student_id: u32, test_id: u32, score: f64) -> StoreResult<()> {
        if !(0.0..=100.0).contains(&score) {
            return Err(StoreError::ValidationError(format!(
                "score {} is outside the 0-100 range",
                score
            )));
        }
        let mut state = self.write();
        if !state.students.iter().any(|s| s.account.id == student_id) {
            return Err(StoreError::NotFound(format!(
                "Student with id {} not found",
                student_id
            )));
        }

        let results = state.test_results.entry(student_id).or_default();
        results.insert(test_id, score);
        // mean over every recorded result, not just this one
        let mean = results.values().sum::<f64>() / results.len() as f64;

        let student = state
            .student_mut(student_id)
            .expect("student existence checked above");
        student.cognitive_score = mean;
        info!(
            "saved test result (student {}, test {}): {} -> cognitive score {}",
            student_id, test_id, score, mean
        );
        Ok(())
    }

    fn test_result(&self, student_id: u32, test_id: u32) -> Option<f64> {
        self.read()
            .test_results
            .get(&student_id)
            .and_then(|scores| scores.get(&test_id))
            .copied()
    }

    fn save_project_code(&self, project_id: u32, code: &str) {
        self.write().project_code.insert(project_id, code.to_string());
    }

    fn saved_project_code(&self, project_id: u32) -> Option<String> {
        self.read().project_code.get(&project_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn test_empty_store_assigns_sequential_ids_per_kind() {
        crate::test_utils::init_logging();
        let store = InMemoryRecordStore::empty();

        let first = store
            .add_student(fixtures::new_student("alice"))
            .expect("add should succeed");
        let second = store
            .add_student(fixtures::new_student("bob"))
            .expect("add should succeed");
        let teacher = store
            .add_teacher(fixtures::new_teacher("carol"))
            .expect("add should succeed");

        assert_eq!(first.account.id, 1);
        assert_eq!(second.account.id, 2);
        // teacher ids count independently of student ids
        assert_eq!(teacher.account.id, 1);
    }

    #[test]
    fn test_project_ids_are_not_reused_after_delete() {
        let store = InMemoryRecordStore::empty();
        let student = store
            .add_student(fixtures::new_student("alice"))
            .expect("add should succeed");
        let teacher = store
            .add_teacher(fixtures::new_teacher("carol"))
            .expect("add should succeed");

        let first = store
            .add_project(fixtures::new_project(
                "First",
                student.account.id,
                teacher.account.id,
            ))
            .expect("add should succeed");
        assert!(store.delete_project(first.id));

        let second = store
            .add_project(fixtures::new_project(
                "Second",
                student.account.id,
                teacher.account.id,
            ))
            .expect("add should succeed");
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_current_user_reflects_later_updates() {
        let store = InMemoryRecordStore::empty();
        let mut student = store
            .add_student(fixtures::new_student("alice"))
            .expect("add should succeed");

        assert!(store.login("alice", "123").is_some());
        assert!(store.is_logged_in());

        student.account.full_name = "Alice Renamed".to_string();
        store.update_student(student).expect("update should succeed");

        let current = store.current_user().expect("session should be set");
        assert_eq!(current.full_name(), "Alice Renamed");

        store.logout();
        assert!(!store.is_logged_in());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_logout_without_session_is_a_noop() {
        let store = InMemoryRecordStore::empty();
        store.logout();
        assert!(!store.is_logged_in());
    }
}
