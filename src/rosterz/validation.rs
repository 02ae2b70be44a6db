//! Record field validation.
//!
//! Valid records:
//! - Name: non-empty, at least [`MIN_NAME_LEN`] characters
//! - Id: one or more ASCII decimal digits, unique across the roster
//!
//! When several fields are invalid the name error is reported first, so a
//! caller can move focus to the name input before anything else.

use crate::error::{Result, RosterError};

/// Minimum accepted name length, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// The input field a validation error belongs to, so a caller can route
/// the error text to the right input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Id,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Id => write!(f, "id"),
        }
    }
}

/// Error type for record field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty
    NameRequired,
    /// Name is shorter than [`MIN_NAME_LEN`] characters (carries the actual length)
    NameTooShort(usize),
    /// Id is empty
    IdRequired,
    /// Id contains a non-digit character
    IdNotNumeric(char),
}

impl ValidationError {
    /// The field the error should be attached to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NameRequired | ValidationError::NameTooShort(_) => Field::Name,
            ValidationError::IdRequired | ValidationError::IdNotNumeric(_) => Field::Id,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NameRequired => write!(f, "name is required"),
            ValidationError::NameTooShort(len) => {
                write!(
                    f,
                    "name must be at least {} characters, got {}",
                    MIN_NAME_LEN, len
                )
            }
            ValidationError::IdRequired => write!(f, "id is required"),
            ValidationError::IdNotNumeric(ch) => {
                write!(f, "id must contain only digits, found '{}'", ch)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a record name.
///
/// # Examples
/// ```
/// use rosterz::validation::validate_name;
///
/// assert!(validate_name("Alice").is_ok());
/// assert!(validate_name("Al").is_ok());
///
/// assert!(validate_name("").is_err());
/// assert!(validate_name("A").is_err());
/// ```
pub fn validate_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    let len = name.chars().count();
    if len < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort(len));
    }
    Ok(())
}

/// Validates a record id.
///
/// # Examples
/// ```
/// use rosterz::validation::validate_id;
///
/// assert!(validate_id("0").is_ok());
/// assert!(validate_id("2024").is_ok());
///
/// assert!(validate_id("").is_err());
/// assert!(validate_id("12a").is_err());
/// assert!(validate_id("-3").is_err());
/// ```
pub fn validate_id(id: &str) -> std::result::Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::IdRequired);
    }
    if let Some(ch) = id.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ValidationError::IdNotNumeric(ch));
    }
    Ok(())
}

/// Full insertion policy: field formats plus id uniqueness against the ids
/// already in the roster. Name errors win the tie-break.
pub fn validate_for_insert<'a, I>(name: &str, id: &str, existing_ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    validate_name(name)?;
    validate_id(id)?;
    if existing_ids.into_iter().any(|existing| existing == id) {
        return Err(RosterError::DuplicateId(id.to_string()));
    }
    Ok(())
}

/// Edit policy: same field rules, but `other_ids` must not include the id
/// of the record being edited, so a record may keep its own id unchanged.
pub fn validate_for_edit<'a, I>(name: &str, id: &str, other_ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    validate_for_insert(name, id, other_ids)
}
