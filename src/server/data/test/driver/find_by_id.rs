use super::*;

/// Tests finding an existing driver.
///
/// Expected: Ok(Some(driver)) from both the plain and the locking read
#[tokio::test]
async fn returns_existing_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::driver::DriverFactory::new(db)
        .id("driver-find")
        .name("Ivan")
        .build()
        .await?;

    let repo = DriverRepository::new(db);

    let found = repo.find_by_id("driver-find").await?.unwrap();
    assert_eq!(found.id, driver.id);
    assert_eq!(found.email, driver.email);
    let locked = repo.lock_by_id("driver-find").await?.unwrap();
    assert_eq!(locked.name, "Ivan");

    Ok(())
}

/// Tests finding a driver that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriverRepository::new(db);

    assert!(repo.find_by_id("missing").await?.is_none());

    Ok(())
}
