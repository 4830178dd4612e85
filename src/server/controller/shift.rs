use crate::{
    model::{
        api::ErrorDto,
        shift::{EndShiftDto, ShiftDto, ShiftTotalsDto, StartShiftDto},
    },
    server::{
        middleware::auth::AuthGuard,
        model::{
            identity::{Identity, Role},
            shift::ShiftSummary,
        },
        state::AppState,
        util::parse::parse_id,
    },
};

/// Open a shift for the calling driver.
///
/// # Access Control
/// - `Driver`
///
/// # Returns
/// - `Ok(StartShiftDto)` - Id of the new shift
/// - `Err(ErrorDto)` - `shift_already_active`, `not_found`, `forbidden` or
///   `storage_failure`
pub async fn start_shift(state: &AppState, identity: &Identity) -> Result<StartShiftDto, ErrorDto> {
    let driver_id = AuthGuard::new(identity).require(Role::Driver)?;

    let shift = state.shifts().start_shift(driver_id).await?;

    Ok(StartShiftDto {
        shift_id: shift.id.to_string(),
        message: "Shift started successfully".to_string(),
    })
}

/// Get the calling driver's active shift with its live totals.
///
/// # Access Control
/// - `Driver`
///
/// # Returns
/// - `Ok(Some(ShiftDto))` - The active shift
/// - `Ok(None)` - The driver has no active shift
pub async fn get_active_shift(
    state: &AppState,
    identity: &Identity,
) -> Result<Option<ShiftDto>, ErrorDto> {
    let driver_id = AuthGuard::new(identity).require(Role::Driver)?;
    let shifts = state.shifts();

    let Some(shift) = shifts.get_active_shift(driver_id).await? else {
        return Ok(None);
    };

    let totals = shifts.aggregate(shift.id).await?;

    Ok(Some(ShiftSummary { shift, totals }.into_dto()))
}

/// Get the totals of one of the calling driver's shifts.
///
/// # Access Control
/// - `Driver` - Must own the shift
pub async fn get_shift_totals(
    state: &AppState,
    identity: &Identity,
    shift_id: &str,
) -> Result<ShiftTotalsDto, ErrorDto> {
    let driver_id = AuthGuard::new(identity).require(Role::Driver)?;
    let shift_id = parse_id(shift_id)?;

    let totals = state
        .shifts()
        .totals_for_driver(shift_id, driver_id)
        .await?;

    Ok(totals.into_dto(shift_id))
}

/// End one of the calling driver's active shifts and freeze its totals.
///
/// # Access Control
/// - `Driver` - Must own the shift
pub async fn end_shift(
    state: &AppState,
    identity: &Identity,
    shift_id: &str,
) -> Result<EndShiftDto, ErrorDto> {
    let driver_id = AuthGuard::new(identity).require(Role::Driver)?;
    let shift_id = parse_id(shift_id)?;

    let summary = state.shifts().end_shift(shift_id, driver_id).await?;

    Ok(summary.into_end_dto())
}

/// List the calling driver's shifts, most recent first.
///
/// # Access Control
/// - `Driver`
pub async fn list_shifts(state: &AppState, identity: &Identity) -> Result<Vec<ShiftDto>, ErrorDto> {
    let driver_id = AuthGuard::new(identity).require(Role::Driver)?;

    let shifts = state.shifts().list_shifts(driver_id).await?;

    Ok(shifts.into_iter().map(ShiftSummary::into_dto).collect())
}
