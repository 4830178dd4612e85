use super::*;

/// Tests starting a shift.
///
/// Expected: Ok(shift) active and returned by `get_active_shift`
#[tokio::test]
async fn starts_active_shift() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let service = ShiftService::new(db);

    let shift = service.start_shift(&driver.id).await?;

    assert!(shift.is_active());
    assert_eq!(shift.driver_id, driver.id);
    let active = service.get_active_shift(&driver.id).await?;
    assert_eq!(active.map(|shift| shift.id), Some(shift.id));

    Ok(())
}

/// Tests starting a shift twice in a row.
///
/// Expected: Err(ShiftAlreadyActive) and the first shift stays active
#[tokio::test]
async fn rejects_second_start() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let service = ShiftService::new(db);

    let first = service.start_shift(&driver.id).await?;
    let second = service.start_shift(&driver.id).await;

    assert_eq!(second.unwrap_err().kind(), ErrorKind::ShiftAlreadyActive);
    let active = service.get_active_shift(&driver.id).await?;
    assert_eq!(active.map(|shift| shift.id), Some(first.id));
    assert_eq!(entity::prelude::WorkShift::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests concurrent shift starts for the same driver.
///
/// The single-connection test pool serializes these transactions, so this checks the
/// service-level outcome only.
///
/// Expected: exactly one Ok, the rest Err(ShiftAlreadyActive)
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_starts_open_one_shift() -> Result<(), AppError> {
    const ATTEMPTS: usize = 6;

    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;

    let mut handles = Vec::with_capacity(ATTEMPTS);
    for _ in 0..ATTEMPTS {
        let db = db.clone();
        let driver_id = driver.id.clone();
        handles.push(tokio::spawn(async move {
            ShiftService::new(&db).start_shift(&driver_id).await
        }));
    }

    let mut started = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => started += 1,
            Err(err) => assert_eq!(err.kind(), ErrorKind::ShiftAlreadyActive),
        }
    }

    assert_eq!(started, 1);
    assert_eq!(entity::prelude::WorkShift::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests starting a shift for an unknown driver.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ShiftService::new(db).start_shift("ghost").await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);

    Ok(())
}

/// Tests a driver without an active shift.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_no_active_shift() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;

    assert!(ShiftService::new(db)
        .get_active_shift(&driver.id)
        .await?
        .is_none());

    Ok(())
}
