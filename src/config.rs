use std::env;

/// What `add_project` does when the referenced student does not exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingStudentPolicy {
    /// Reject the whole operation with an integrity error; nothing is inserted.
    #[default]
    Fail,
    /// Insert the project anyway, without linking it to any student.
    SilentSkip,
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub missing_student_policy: MissingStudentPolicy,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            missing_student_policy: env::var("EDURECORD_MISSING_STUDENT_POLICY")
                .map(|value| parse_policy(&value))
                .unwrap_or_default(),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            missing_student_policy: MissingStudentPolicy::Fail,
        }
    }
}

fn parse_policy(value: &str) -> MissingStudentPolicy {
    match value.to_ascii_lowercase().as_str() {
        "skip" | "silent-skip" => MissingStudentPolicy::SilentSkip,
        "fail" => MissingStudentPolicy::Fail,
        other => {
            log::warn!(
                "unknown EDURECORD_MISSING_STUDENT_POLICY '{}', falling back to fail",
                other
            );
            MissingStudentPolicy::Fail
        }
    }
}
