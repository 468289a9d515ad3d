use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{StoreError, StoreResult};
use crate::models::dto::request::NewProject;

/// Lifecycle of a project:
/// `BELUM_DIKERJAKAN` (not started) -> `DIKERJAKAN` (in progress) ->
/// `SELESAI` (submitted) -> `TERVALIDASI` (graded, terminal).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    BelumDikerjakan,
    Dikerjakan,
    Selesai,
    Tervalidasi,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::BelumDikerjakan => "BELUM_DIKERJAKAN",
            ProjectStatus::Dikerjakan => "DIKERJAKAN",
            ProjectStatus::Selesai => "SELESAI",
            ProjectStatus::Tervalidasi => "TERVALIDASI",
        };
        f.write_str(label)
    }
}

/// An assignment with a deadline, a lifecycle status, and a score.
///
/// `status`, `score`, and the submitted artifact are private: the only way
/// to move a project through its lifecycle is `start` / `submit` /
/// `validate`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    status: ProjectStatus,
    score: f64,
    /// Owning student.
    pub student_id: u32,
    /// Assigning teacher.
    pub teacher_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    artifact_path: Option<String>,
}

impl Project {
    pub fn new(
        id: u32,
        title: &str,
        description: &str,
        deadline: NaiveDate,
        student_id: u32,
        teacher_id: u32,
    ) -> Self {
        Project {
            id,
            title: title.to_string(),
            description: description.to_string(),
            deadline,
            status: ProjectStatus::BelumDikerjakan,
            score: 0.0,
            student_id,
            teacher_id,
            artifact_path: None,
        }
    }

    pub fn from_request(id: u32, request: NewProject) -> Self {
        Project {
            id,
            title: request.title,
            description: request.description,
            deadline: request.deadline,
            status: ProjectStatus::BelumDikerjakan,
            score: 0.0,
            student_id: request.student_id,
            teacher_id: request.teacher_id,
            artifact_path: None,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Only meaningful once the project has reached SELESAI/TERVALIDASI.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn artifact_path(&self) -> Option<&str> {
        self.artifact_path.as_deref()
    }

    /// BELUM_DIKERJAKAN -> DIKERJAKAN. From any other state this is a
    /// no-op; the returned status tells the caller where the project is.
    pub fn start(&mut self) -> ProjectStatus {
        if self.status == ProjectStatus::BelumDikerjakan {
            self.status = ProjectStatus::Dikerjakan;
            log::info!("project '{}' started", self.title);
        }
        self.status
    }

    /// DIKERJAKAN -> SELESAI, keeping a reference to the submitted artifact.
    pub fn submit(&mut self, artifact_path: &str) -> StoreResult<()> {
        if self.status != ProjectStatus::Dikerjakan {
            return Err(StoreError::InvalidTransition(format!(
                "project '{}' must be {} to be submitted (currently {})",
                self.title,
                ProjectStatus::Dikerjakan,
                self.status
            )));
        }
        self.status = ProjectStatus::Selesai;
        self.artifact_path = Some(artifact_path.to_string());
        log::info!("project '{}' submitted", self.title);
        Ok(())
    }

    /// SELESAI -> TERVALIDASI, recording the grade. Terminal.
    pub fn validate(&mut self, score_given: f64) -> StoreResult<()> {
        if !(0.0..=100.0).contains(&score_given) {
            return Err(StoreError::ValidationError(format!(
                "score {} is outside the 0-100 range",
                score_given
            )));
        }
        if self.status != ProjectStatus::Selesai {
            return Err(StoreError::InvalidTransition(format!(
                "project '{}' must be {} to be graded (currently {})",
                self.title,
                ProjectStatus::Selesai,
                self.status
            )));
        }
        self.status = ProjectStatus::Tervalidasi;
        self.score = score_given;
        log::info!("project '{}' graded with {}", self.title, score_given);
        Ok(())
    }

    /// Past the deadline and not yet graded. Informational only: an overdue
    /// project can still be submitted and graded.
    pub fn is_overdue(&self) -> bool {
        let today = Local::now().date_naive();
        today > self.deadline && self.status != ProjectStatus::Tervalidasi
    }

    /// Signed day count until the deadline; negative once past it.
    pub fn days_remaining(&self) -> i64 {
        self.deadline
            .signed_duration_since(Local::now().date_naive())
            .num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn project_due_in(days: i64) -> Project {
        let deadline = Local::now().date_naive() + Duration::days(days);
        Project::new(1, "Hello World - First Program", "print a greeting", deadline, 1, 1)
    }

    #[test]
    fn test_happy_path_start_submit_validate() {
        let mut project = project_due_in(7);
        assert_eq!(project.status(), ProjectStatus::BelumDikerjakan);

        assert_eq!(project.start(), ProjectStatus::Dikerjakan);
        project.submit("solutions/hello.zip").expect("submit should succeed");
        assert_eq!(project.status(), ProjectStatus::Selesai);
        assert_eq!(project.artifact_path(), Some("solutions/hello.zip"));

        project.validate(92.5).expect("validate should succeed");
        assert_eq!(project.status(), ProjectStatus::Tervalidasi);
        assert_eq!(project.score(), 92.5);
    }

    #[test]
    fn test_start_twice_is_idempotent() {
        let mut project = project_due_in(7);
        assert_eq!(project.start(), ProjectStatus::Dikerjakan);
        // second call reports the current state without complaint
        assert_eq!(project.start(), ProjectStatus::Dikerjakan);
    }

    #[test]
    fn test_submit_requires_in_progress() {
        let mut project = project_due_in(7);
        let err = project.submit("early.zip");
        assert!(matches!(err, Err(StoreError::InvalidTransition(_))));
        assert_eq!(project.status(), ProjectStatus::BelumDikerjakan);
        assert!(project.artifact_path().is_none());
    }

    #[test]
    fn test_validate_requires_submitted() {
        let mut project = project_due_in(7);
        project.start();
        let err = project.validate(80.0);
        assert!(matches!(err, Err(StoreError::InvalidTransition(_))));
        assert_eq!(project.status(), ProjectStatus::Dikerjakan);
        assert_eq!(project.score(), 0.0);
    }

    #[test]
    fn test_validate_rejects_out_of_range_score() {
        let mut project = project_due_in(7);
        project.start();
        project.submit("done.zip").expect("submit should succeed");

        assert!(matches!(
            project.validate(100.5),
            Err(StoreError::ValidationError(_))
        ));
        assert!(matches!(
            project.validate(-1.0),
            Err(StoreError::ValidationError(_))
        ));
        // still submittable state, nothing was recorded
        assert_eq!(project.status(), ProjectStatus::Selesai);

        project.validate(100.0).expect("boundary score should be accepted");
    }

    #[test]
    fn test_overdue_and_days_remaining() {
        let future = project_due_in(7);
        assert!(!future.is_overdue());
        assert_eq!(future.days_remaining(), 7);

        let mut past = project_due_in(-3);
        assert!(past.is_overdue());
        assert_eq!(past.days_remaining(), -3);

        // an overdue project can still be graded, and then stops being overdue
        past.start();
        past.submit("late.zip").expect("submit should succeed");
        past.validate(60.0).expect("validate should succeed");
        assert!(!past.is_overdue());
    }

    #[test]
    fn test_status_serializes_with_source_vocabulary() {
        let json = serde_json::to_string(&ProjectStatus::BelumDikerjakan)
            .expect("status should serialize");
        assert_eq!(json, "\"BELUM_DIKERJAKAN\"");
        let json = serde_json::to_string(&ProjectStatus::Tervalidasi)
            .expect("status should serialize");
        assert_eq!(json, "\"TERVALIDASI\"");
    }
}
