// GraphQL output types and error mapping shared by the cylinder test resolvers.

use async_graphql::{ErrorExtensions, SimpleObject};
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::cylinder_tests::application::errors::ApplicationError;
use crate::modules::cylinder_tests::core::record::TestRecord;
use crate::modules::cylinder_tests::core::stats::{MonthlyStats, WeeklyBucket};

#[derive(SimpleObject, Clone)]
pub struct GqlTestRecord {
    pub id: String,
    pub serial_number: String,
    pub test_date: NaiveDate,
    pub customer_name: String,
    pub mobile_number: String,
    pub vehicle_number: Option<String>,
    pub vehicle_type: Option<String>,
    pub cylinder_quantity: u32,
    pub amount: Option<f64>,
    pub payment_mode: String,
    pub reference_source: Option<String>,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub remarks: Option<String>,
    pub google_review: bool,
    pub auto_poster_fixed: bool,
    pub cng_mini_poster: bool,
    pub next_test_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TestRecord> for GqlTestRecord {
    fn from(r: TestRecord) -> Self {
        Self {
            id: r.id,
            serial_number: r.serial_number,
            test_date: r.test_date,
            customer_name: r.customer_name,
            mobile_number: r.mobile_number,
            vehicle_number: r.vehicle_number,
            vehicle_type: r.vehicle_type,
            cylinder_quantity: r.cylinder_quantity,
            amount: r.amount,
            payment_mode: r.payment_mode,
            reference_source: r.reference_source,
            in_time: r.in_time,
            out_time: r.out_time,
            remarks: r.remarks,
            google_review: r.google_review,
            auto_poster_fixed: r.auto_poster_fixed,
            cng_mini_poster: r.cng_mini_poster,
            next_test_date: r.next_test_date,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlWeeklyBucket {
    pub name: String,
    pub count: u64,
}

impl From<WeeklyBucket> for GqlWeeklyBucket {
    fn from(b: WeeklyBucket) -> Self {
        Self {
            name: b.name,
            count: b.count as u64,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMonthlyStats {
    pub month: u32,
    pub year: i32,
    pub total_count: u64,
    pub weekly_buckets: Vec<GqlWeeklyBucket>,
}

impl From<MonthlyStats> for GqlMonthlyStats {
    fn from(s: MonthlyStats) -> Self {
        Self {
            month: s.month,
            year: s.year,
            total_count: s.total_count as u64,
            weekly_buckets: s.weekly_buckets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Same classification as the HTTP mapping, exposed as an `extensions.code`.
pub fn to_gql_error(error: ApplicationError) -> async_graphql::Error {
    let (code, message) = match error {
        ApplicationError::Validation(msg) => ("BAD_USER_INPUT", msg),
        ApplicationError::InvalidQueryParameters(msg) => ("BAD_USER_INPUT", msg),
        ApplicationError::NotFound(msg) => ("NOT_FOUND", msg),
        ApplicationError::Store(error) => {
            tracing::error!(error = %error, "record store failure");
            ("INTERNAL_SERVER_ERROR", "Server Error".to_string())
        }
    };
    async_graphql::Error::new(message).extend_with(|_, extensions| extensions.set("code", code))
}
