use chrono::{Duration, Utc};

use crate::server::{
    error::AppError,
    model::user::User,
    service::dashboard::DashboardService,
};
use test_utils::{builder::TestBuilder, factory};

mod get;
