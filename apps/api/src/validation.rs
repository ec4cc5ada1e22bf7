//! Field-length rules for create payloads. Runs before any remote call.
//!
//! Lengths are counted in characters, not bytes, and values are not trimmed.

use crate::errors::AppError;
use crate::models::icebreaker::CreateIcebreakerRequest;
use crate::models::transcript::CreateTranscriptRequest;

const NAME_MAX: usize = 100;
const ATTENDEES_MAX: usize = 500;
const ROLE_LEVEL_MAX: usize = 50;
const BODY_MIN: usize = 10;

#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn check(&mut self, field: &str, value: &str, min: usize, max: Option<usize>) {
        let len = value.chars().count();
        if len < min {
            self.0.push(match min {
                1 => format!("{field} must not be empty"),
                _ => format!("{field} must be at least {min} characters (got {len})"),
            });
        }
        if let Some(max) = max {
            if len > max {
                self.0
                    .push(format!("{field} must be at most {max} characters (got {len})"));
            }
        }
    }

    fn into_result(self) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.0.join("; ")))
        }
    }
}

pub fn validate_transcript(req: &CreateTranscriptRequest) -> Result<(), AppError> {
    let mut v = Violations::default();
    v.check("company_name", &req.company_name, 1, Some(NAME_MAX));
    v.check("attendees", &req.attendees, 1, Some(ATTENDEES_MAX));
    v.check("transcript", &req.transcript, BODY_MIN, None);
    v.into_result()
}

pub fn validate_icebreaker(req: &CreateIcebreakerRequest) -> Result<(), AppError> {
    let mut v = Violations::default();
    v.check("prospect_name", &req.prospect_name, 1, Some(NAME_MAX));
    v.check("company_name", &req.company_name, 1, Some(NAME_MAX));
    v.check("linkedin_bio", &req.linkedin_bio, BODY_MIN, None);
    v.check("pitch_deck", &req.pitch_deck, BODY_MIN, None);
    v.check("role_level", &req.role_level, 0, Some(ROLE_LEVEL_MAX));
    v.into_result()
}
