use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Volunteer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub submitted_at: NaiveDateTime,
}

/// Public registration form submitted from the volunteer page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVolunteerRequest {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is not a valid address"))]
    pub email: String,
    #[validate(length(max = 50, message = "phone is too long"))]
    pub phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volunteer_validation() {
        let ok = CreateVolunteerRequest {
            name: "Asha".to_string(),
            email: "asha@example.org".to_string(),
            phone: "+91 98765 43210".to_string(),
            message: "Weekends".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = CreateVolunteerRequest {
            email: "not-an-email".to_string(),
            ..ok
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
