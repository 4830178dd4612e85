use crate::server::{
    data::shift::ShiftRepository,
    model::{money::Money, shift::ShiftTotals},
};
use chrono::{Duration, Utc};
use entity::order::OrderStatus as StoredStatus;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, order::OrderFactory, work_shift::WorkShiftFactory},
};

mod link_order;
