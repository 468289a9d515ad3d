use crate::errors::StoreResult;
use crate::models::domain::{CognitiveTest, Material, Project, Question, Student, Teacher, User};
use crate::models::dto::request::{
    NewMaterial, NewProject, NewQuestion, NewStudent, NewTeacher, NewTest,
};

/// The operation surface the presentation layer is allowed to call.
///
/// Every method is synchronous and completes immediately; backends must
/// serialize writes against each other (reads may run concurrently with
/// other reads). Collection-returning methods hand out defensive copies:
/// mutating a returned value never changes stored state until it is pushed
/// back through an `update_*` call, which replaces the stored entity
/// wholesale by id.
///
/// Ids are assigned by `add_*`, sequentially per entity kind, and are never
/// reused, not even after deletion.
pub trait RecordStore: Send + Sync {
    /// Scans students first, then teachers, and logs the first principal
    /// whose credentials match into the store's single session slot. On a
    /// (misconfigured) username shared between the two kinds, the student
    /// account wins by scan order.
    fn login(&self, username: &str, password: &str) -> Option<User>;

    /// Clears the session. A no-op when nobody is logged in.
    fn logout(&self);

    fn current_user(&self) -> Option<User>;

    fn is_logged_in(&self) -> bool;

    fn add_student(&self, request: NewStudent) -> StoreResult<Student>;
    fn all_students(&self) -> Vec<Student>;
    fn student_by_id(&self, id: u32) -> Option<Student>;
    fn update_student(&self, student: Student) -> StoreResult<Student>;

    fn add_teacher(&self, request: NewTeacher) -> StoreResult<Teacher>;
    fn all_teachers(&self) -> Vec<Teacher>;
    fn teacher_by_id(&self, id: u32) -> Option<Teacher>;
    fn update_teacher(&self, teacher: Teacher) -> StoreResult<Teacher>;

    /// The author must reference an existing teacher.
    fn add_material(&self, request: NewMaterial) -> StoreResult<Material>;
    fn all_materials(&self) -> Vec<Material>;
    fn material_by_id(&self, id: u32) -> Option<Material>;
    fn update_material(&self, material: Material) -> StoreResult<Material>;

    /// Case-insensitive exact match on the topic tag.
    fn materials_by_topic(&self, topic: &str) -> Vec<Material>;

    fn add_test(&self, request: NewTest) -> StoreResult<CognitiveTest>;
    fn all_tests(&self) -> Vec<CognitiveTest>;
    fn test_by_id(&self, id: u32) -> Option<CognitiveTest>;
    fn update_test(&self, test: CognitiveTest) -> StoreResult<CognitiveTest>;

    /// Tests a student is currently allowed to take.
    fn active_tests(&self) -> Vec<CognitiveTest>;

    /// Creates a question (assigning its id) and attaches it to the test,
    /// stamping the question's back-reference.
    fn add_question(&self, test_id: u32, request: NewQuestion) -> StoreResult<Question>;

    /// Inserts the project and links its id into the owning student's
    /// project list in the same critical section. When the student does not
    /// exist the configured policy decides between failing atomically and
    /// storing the project unlinked.
    fn add_project(&self, request: NewProject) -> StoreResult<Project>;
    fn all_projects(&self) -> Vec<Project>;
    fn project_by_id(&self, id: u32) -> Option<Project>;
    fn update_project(&self, project: Project) -> StoreResult<Project>;

    /// Removes the project and unlinks it from its owner. Returns whether
    /// anything was deleted.
    fn delete_project(&self, id: u32) -> bool;

    fn projects_by_student(&self, student_id: u32) -> Vec<Project>;

    /// Records the score for `(student_id, test_id)`, overwriting any
    /// earlier attempt at the same test, then recomputes the student's
    /// cognitive score as the mean over all of their recorded results.
    fn save_test_result(&self, student_id: u32, test_id: u32, score: f64) -> StoreResult<()>;

    /// `None` when the student has never taken the test; a recorded zero
    /// comes back as `Some(0.0)`.
    fn test_result(&self, student_id: u32, test_id: u32) -> Option<f64>;

    /// Opaque per-project blob (typically the code a student is drafting),
    /// independent of the project entity itself.
    fn save_project_code(&self, project_id: u32, code: &str);
    fn saved_project_code(&self, project_id: u32) -> Option<String>;
}
