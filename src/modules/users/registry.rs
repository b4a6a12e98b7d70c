use super::model::User;

/// Reasons a user registration is refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    EmptyNationalId,
    DuplicateNationalId(String),
    EmptyName,
    EmptyBirthDate,
    EmptyAddress,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserError::EmptyNationalId => write!(f, "National id cannot be empty!"),
            UserError::DuplicateNationalId(national_id) => {
                write!(f, "A user with national id {} already exists!", national_id)
            }
            UserError::EmptyName => write!(f, "Name cannot be empty!"),
            UserError::EmptyBirthDate => write!(f, "Birth date cannot be empty!"),
            UserError::EmptyAddress => write!(f, "Address cannot be empty!"),
        }
    }
}

impl std::error::Error for UserError {}

/// Find the first user registered under `national_id`
pub fn find_user<'a>(national_id: &str, users: &'a [User]) -> Option<&'a User> {
    users.iter().find(|user| user.national_id == national_id)
}

/// Check an identifier before asking for the rest of the registration
pub fn validate_national_id(national_id: &str, users: &[User]) -> Result<(), UserError> {
    let national_id = national_id.trim();
    if national_id.is_empty() {
        return Err(UserError::EmptyNationalId);
    }
    if find_user(national_id, users).is_some() {
        return Err(UserError::DuplicateNationalId(national_id.to_string()));
    }
    Ok(())
}

/// Reject a blank required field with the given reason
pub fn require_field(value: &str, missing: UserError) -> Result<String, UserError> {
    let value = value.trim();
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value.to_string())
    }
}

/// Validate and register a new user; nothing is added on rejection
pub fn create_user<'a>(
    national_id: &str,
    name: &str,
    birth_date: &str,
    address: &str,
    users: &'a mut Vec<User>,
) -> Result<&'a User, UserError> {
    validate_national_id(national_id, users)?;

    let user = User {
        national_id: national_id.trim().to_string(),
        name: require_field(name, UserError::EmptyName)?,
        birth_date: require_field(birth_date, UserError::EmptyBirthDate)?,
        address: require_field(address, UserError::EmptyAddress)?,
    };

    users.push(user);
    Ok(&users[users.len() - 1])
}
