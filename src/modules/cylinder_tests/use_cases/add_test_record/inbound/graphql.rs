use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::{Local, NaiveDate, Utc};
use uuid::Uuid;

use crate::modules::cylinder_tests::adapters::inbound::graphql::{GqlTestRecord, to_gql_error};
use crate::modules::cylinder_tests::use_cases::add_test_record::command::AddTestRecord;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct AddTestRecordInput {
    pub serial_number: Option<String>,
    pub test_date: Option<NaiveDate>,
    pub customer_name: String,
    pub mobile_number: String,
    pub vehicle_number: Option<String>,
    pub vehicle_type: Option<String>,
    pub cylinder_quantity: Option<u32>,
    pub amount: Option<f64>,
    pub payment_mode: Option<String>,
    pub reference_source: Option<String>,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub remarks: Option<String>,
    #[graphql(default)]
    pub google_review: bool,
    #[graphql(default)]
    pub auto_poster_fixed: bool,
    #[graphql(default)]
    pub cng_mini_poster: bool,
    pub next_test_date: Option<NaiveDate>,
}

#[derive(Default)]
pub struct AddTestRecordMutation;

#[Object]
impl AddTestRecordMutation {
    async fn add_test_record(
        &self,
        context: &Context<'_>,
        input: AddTestRecordInput,
    ) -> GqlResult<GqlTestRecord> {
        let state = context.data_unchecked::<AppState>();

        let command = AddTestRecord {
            record_id: Uuid::now_v7().to_string(),
            received_at: Utc::now(),
            received_on: Local::now().date_naive(),
            serial_number: input.serial_number,
            test_date: input.test_date,
            customer_name: input.customer_name,
            mobile_number: input.mobile_number,
            vehicle_number: input.vehicle_number,
            vehicle_type: input.vehicle_type,
            cylinder_quantity: input.cylinder_quantity,
            amount: input.amount,
            payment_mode: input.payment_mode,
            reference_source: input.reference_source,
            in_time: input.in_time,
            out_time: input.out_time,
            remarks: input.remarks,
            google_review: input.google_review,
            auto_poster_fixed: input.auto_poster_fixed,
            cng_mini_poster: input.cng_mini_poster,
            next_test_date: input.next_test_date,
        };

        let record = state
            .add_handler
            .handle(command)
            .await
            .map_err(to_gql_error)?;
        Ok(record.into())
    }
}
