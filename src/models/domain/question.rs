use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// One of the four answer labels of a multiple-choice question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub fn letter(&self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Choice {
    type Err = StoreError;

    /// Accepts any case; everything outside A-D is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            "C" => Ok(Choice::C),
            "D" => Ok(Choice::D),
            other => Err(StoreError::ValidationError(format!(
                "'{}' is not an answer choice (expected A-D)",
                other
            ))),
        }
    }
}

/// A four-choice question inside a cognitive test.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: u32,
    /// Owning test. 0 until the question is attached to one.
    pub test_id: u32,
    pub prompt: String,
    pub choice_a: String,
    pub choice_b: String,
    pub choice_c: String,
    pub choice_d: String,
    pub correct_choice: Choice,
}

impl Question {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        prompt: &str,
        choice_a: &str,
        choice_b: &str,
        choice_c: &str,
        choice_d: &str,
        correct_choice: Choice,
    ) -> Self {
        Question {
            id,
            test_id: 0,
            prompt: prompt.to_string(),
            choice_a: choice_a.to_string(),
            choice_b: choice_b.to_string(),
            choice_c: choice_c.to_string(),
            choice_d: choice_d.to_string(),
            correct_choice,
        }
    }

    pub fn choice_text(&self, choice: Choice) -> &str {
        match choice {
            Choice::A => &self.choice_a,
            Choice::B => &self.choice_b,
            Choice::C => &self.choice_c,
            Choice::D => &self.choice_d,
        }
    }

    /// Case-insensitive single-letter match against the correct choice.
    /// Anything that is not a letter A-D simply does not match.
    pub fn check_answer(&self, answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case(self.correct_choice.letter())
    }
}
