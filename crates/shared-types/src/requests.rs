use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationError};

use crate::{AppError, InvestorPatch, StartupPatch, User, UserPatch, UserRole};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required"))
    } else {
        Ok(())
    }
}

fn accepted(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(ValidationError::new("required"))
    }
}

/// Field-level messages for `form`; empty when it passes.
fn check(form: &impl Validate) -> HashMap<String, String> {
    match form.validate() {
        Ok(()) => HashMap::new(),
        Err(errors) => AppError::from(errors).field_errors,
    }
}

/// Credentials entered on the login page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Field-level messages; empty when the form can be submitted.
    pub fn field_errors(&self) -> HashMap<String, String> {
        check(self)
    }
}

/// The three pages of the sign-up wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStep {
    ChooseRole,
    BasicInfo,
    AccountSetup,
}

impl RegisterStep {
    pub const ALL: [RegisterStep; 3] = [
        RegisterStep::ChooseRole,
        RegisterStep::BasicInfo,
        RegisterStep::AccountSetup,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RegisterStep::ChooseRole => "Choose Role",
            RegisterStep::BasicInfo => "Basic Info",
            RegisterStep::AccountSetup => "Account Setup",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            RegisterStep::ChooseRole => 0,
            RegisterStep::BasicInfo => 1,
            RegisterStep::AccountSetup => 2,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            RegisterStep::ChooseRole => Some(RegisterStep::BasicInfo),
            RegisterStep::BasicInfo => Some(RegisterStep::AccountSetup),
            RegisterStep::AccountSetup => None,
        }
    }

    pub fn back(&self) -> Option<Self> {
        match self {
            RegisterStep::ChooseRole => None,
            RegisterStep::BasicInfo => Some(RegisterStep::ChooseRole),
            RegisterStep::AccountSetup => Some(RegisterStep::BasicInfo),
        }
    }

    /// Form fields validated before leaving this step.
    fn fields(&self) -> &'static [&'static str] {
        match self {
            RegisterStep::ChooseRole => &["role"],
            RegisterStep::BasicInfo => &["name", "email", "phone_number"],
            RegisterStep::AccountSetup => &["password", "confirm_password", "agree_to_terms"],
        }
    }
}

/// Everything collected by the sign-up wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    pub role: Option<UserRole>,
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Phone number is required"))]
    pub phone_number: String,
    pub company: String,
    pub industry: String,
    #[validate(
        custom(function = "not_blank", message = "Password is required"),
        length(min = 8, message = "Password must be at least 8 characters")
    )]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
    #[validate(custom(
        function = "accepted",
        message = "You must agree to the terms and conditions"
    ))]
    pub agree_to_terms: bool,
}

impl RegisterForm {
    /// Start the wizard, optionally with the role already chosen.
    pub fn with_role(role: Option<UserRole>) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    /// First step to show: a preselected role skips the role picker.
    pub fn initial_step(&self) -> RegisterStep {
        if self.role.is_some() {
            RegisterStep::BasicInfo
        } else {
            RegisterStep::ChooseRole
        }
    }

    /// Messages for the fields owned by `step` only.
    pub fn validate_step(&self, step: RegisterStep) -> HashMap<String, String> {
        let mut errors = check(self);
        if self.role.is_none() {
            errors.insert("role".to_string(), "Please choose a role".to_string());
        }
        let fields = step.fields();
        errors.retain(|field, _| fields.contains(&field.as_str()));
        errors
    }

    /// Partial user data handed to registration.
    pub fn to_patch(&self) -> UserPatch {
        let industry = if self.industry.trim().is_empty() {
            None
        } else {
            Some(vec![self.industry.trim().to_string()])
        };
        let company = (!self.company.trim().is_empty()).then(|| self.company.trim().to_string());

        let mut patch = UserPatch {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            phone_number: Some(self.phone_number.trim().to_string()),
            ..Default::default()
        };
        match self.role {
            Some(UserRole::Investor) => {
                patch.investor = Some(InvestorPatch {
                    investor_type: company,
                    industry,
                    ..Default::default()
                });
            }
            _ => {
                patch.startup = Some(StartupPatch {
                    startup_name: company,
                    industry,
                    ..Default::default()
                });
            }
        }
        patch
    }
}

/// Editable subset of the profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
    pub phone_number: String,
    pub linkedin_profile: String,
    /// Startup name or investor type.
    pub organization: String,
    /// Headquarters for startups, risk appetite for investors.
    pub detail: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        let account = user.account();
        let detail = match user {
            User::Startup(u) => u.profile.headquarters.clone(),
            User::Investor(u) => u.profile.risk_appetite.clone(),
        };
        Self {
            name: account.name.clone(),
            email: account.email.clone(),
            phone_number: account.phone_number.clone(),
            linkedin_profile: account.linkedin_profile.clone(),
            organization: user.organization().to_string(),
            detail,
        }
    }

    pub fn field_errors(&self) -> HashMap<String, String> {
        check(self)
    }

    pub fn to_patch(&self, role: UserRole) -> UserPatch {
        let mut patch = UserPatch {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            phone_number: Some(self.phone_number.trim().to_string()),
            linkedin_profile: Some(self.linkedin_profile.trim().to_string()),
            ..Default::default()
        };
        match role {
            UserRole::Startup => {
                patch.startup = Some(StartupPatch {
                    startup_name: Some(self.organization.trim().to_string()),
                    headquarters: Some(self.detail.trim().to_string()),
                    ..Default::default()
                });
            }
            UserRole::Investor => {
                patch.investor = Some(InvestorPatch {
                    investor_type: Some(self.organization.trim().to_string()),
                    risk_appetite: Some(self.detail.trim().to_string()),
                    ..Default::default()
                });
            }
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> RegisterForm {
        RegisterForm {
            role: Some(UserRole::Startup),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone_number: "555-0100".into(),
            company: "Acme".into(),
            industry: "Fintech".into(),
            password: "password123".into(),
            confirm_password: "password123".into(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn blank_login_reports_required_messages() {
        let errors = LoginForm::default().field_errors();
        assert_eq!(errors.get("email").unwrap(), "Email is required");
        assert_eq!(errors.get("password").unwrap(), "Password is required");
    }

    #[test]
    fn malformed_email_reports_format_message() {
        let errors = LoginForm::new("not-an-email", "secret").field_errors();
        assert_eq!(errors.get("email").unwrap(), "Please enter a valid email");
        assert!(!errors.contains_key("password"));
    }

    #[test]
    fn valid_login_has_no_errors() {
        assert!(LoginForm::new("startup@example.com", "x")
            .field_errors()
            .is_empty());
    }

    #[test]
    fn preselected_role_skips_first_step() {
        assert_eq!(
            RegisterForm::with_role(Some(UserRole::Investor)).initial_step(),
            RegisterStep::BasicInfo
        );
        assert_eq!(
            RegisterForm::with_role(None).initial_step(),
            RegisterStep::ChooseRole
        );
    }

    #[test]
    fn step_validation_only_reports_own_fields() {
        let form = RegisterForm {
            role: Some(UserRole::Startup),
            ..Default::default()
        };
        let basic = form.validate_step(RegisterStep::BasicInfo);
        assert_eq!(basic.len(), 3);
        assert_eq!(basic.get("name").unwrap(), "Name is required");
        assert_eq!(basic.get("phone_number").unwrap(), "Phone number is required");
        assert!(form.validate_step(RegisterStep::ChooseRole).is_empty());
    }

    #[test]
    fn account_setup_messages() {
        let mut form = filled_form();
        form.password = "short".into();
        form.confirm_password = "other".into();
        form.agree_to_terms = false;
        let errors = form.validate_step(RegisterStep::AccountSetup);
        assert_eq!(
            errors.get("password").unwrap(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            errors.get("confirm_password").unwrap(),
            "Passwords do not match"
        );
        assert_eq!(
            errors.get("agree_to_terms").unwrap(),
            "You must agree to the terms and conditions"
        );

        form.password.clear();
        let errors = form.validate_step(RegisterStep::AccountSetup);
        assert_eq!(errors.get("password").unwrap(), "Password is required");
    }

    #[test]
    fn missing_role_blocks_first_step() {
        let form = RegisterForm::default();
        assert_eq!(
            form.validate_step(RegisterStep::ChooseRole)
                .get("role")
                .unwrap(),
            "Please choose a role"
        );
    }

    #[test]
    fn register_patch_targets_chosen_role() {
        let patch = filled_form().to_patch();
        let startup = patch.startup.unwrap();
        assert_eq!(startup.startup_name.as_deref(), Some("Acme"));
        assert_eq!(startup.industry, Some(vec!["Fintech".to_string()]));
        assert!(patch.investor.is_none());

        let mut form = filled_form();
        form.role = Some(UserRole::Investor);
        form.industry.clear();
        let patch = form.to_patch();
        let investor = patch.investor.unwrap();
        assert_eq!(investor.investor_type.as_deref(), Some("Acme"));
        assert_eq!(investor.industry, None);
    }

    #[test]
    fn wizard_steps_walk_in_order() {
        let mut step = RegisterStep::ChooseRole;
        let mut seen = vec![step.label()];
        while let Some(next) = step.next() {
            step = next;
            seen.push(step.label());
        }
        assert_eq!(seen, vec!["Choose Role", "Basic Info", "Account Setup"]);
        assert_eq!(step.back(), Some(RegisterStep::BasicInfo));
    }
}
