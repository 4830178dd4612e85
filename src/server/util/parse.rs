use crate::server::error::AppError;

/// Parses an opaque string id into a numeric row id
///
/// # Arguments
/// - `value` - The id as received from the caller
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The value is not a positive integer
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("Invalid id '{}'", value))),
    }
}
