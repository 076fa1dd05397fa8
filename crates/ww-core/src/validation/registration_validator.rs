use crate::{
    CoreError, MIN_PASSWORD_LENGTH, MIN_PHONE_DIGITS, PropertyDraft, Registration,
    Result as CoreErrorResult,
};

/// Validates sign-up input before it reaches the identity provider.
///
/// Rules match the registration screens: name and email required, email of
/// the form `local@domain.tld`, password of at least [`MIN_PASSWORD_LENGTH`]
/// characters with at least one letter and one digit, confirmation equal to
/// the password, and an optional phone with at least [`MIN_PHONE_DIGITS`] digits.
pub struct RegistrationValidator;

impl RegistrationValidator {
    #[track_caller]
    pub fn validate(registration: &Registration, confirm_password: &str) -> CoreErrorResult<()> {
        if registration.display_name.trim().is_empty() {
            return Err(CoreError::validation("display_name", "name is required"));
        }

        Self::validate_email(&registration.email)?;
        Self::validate_password(&registration.password)?;

        if registration.password != confirm_password {
            return Err(CoreError::validation(
                "confirm_password",
                "passwords do not match",
            ));
        }

        if let Some(phone) = &registration.phone {
            Self::validate_phone(phone)?;
        }

        if let Some(property) = &registration.property {
            Self::validate_property(property)?;
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_email(email: &str) -> CoreErrorResult<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CoreError::validation("email", "email is required"));
        }

        if email.chars().any(char::is_whitespace) {
            return Err(CoreError::validation("email", "email must not contain spaces"));
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Err(CoreError::validation("email", "email must contain '@'"));
        };

        if local.is_empty() || domain.contains('@') {
            return Err(CoreError::validation("email", "invalid email address"));
        }

        // domain needs a non-empty label on both sides of some dot
        let has_tld = domain
            .rsplit_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
        if !has_tld {
            return Err(CoreError::validation("email", "invalid email domain"));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_password(password: &str) -> CoreErrorResult<()> {
        if password.is_empty() {
            return Err(CoreError::validation("password", "password is required"));
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::validation(
                "password",
                format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }

        let has_letter = password.chars().any(char::is_alphabetic);
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if !has_letter || !has_digit {
            return Err(CoreError::validation(
                "password",
                "password must contain at least one letter and one number",
            ));
        }

        Ok(())
    }

    /// Formatting characters are ignored; only digits are counted.
    #[track_caller]
    pub fn validate_phone(phone: &str) -> CoreErrorResult<()> {
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if digits < MIN_PHONE_DIGITS {
            return Err(CoreError::validation(
                "phone",
                format!("phone must have at least {MIN_PHONE_DIGITS} digits"),
            ));
        }
        Ok(())
    }

    #[track_caller]
    pub fn validate_property(draft: &PropertyDraft) -> CoreErrorResult<()> {
        if draft.name.trim().is_empty() {
            return Err(CoreError::validation("property.name", "property name is required"));
        }

        if draft.address.street.trim().is_empty() {
            return Err(CoreError::validation(
                "property.address",
                "property address is required",
            ));
        }

        if let Some(area) = draft.area_ha
            && (!area.is_finite() || area <= 0.0)
        {
            return Err(CoreError::validation(
                "property.area",
                "area must be a positive number of hectares",
            ));
        }

        Ok(())
    }
}
