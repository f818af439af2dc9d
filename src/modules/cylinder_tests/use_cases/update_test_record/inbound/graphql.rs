use async_graphql::{Context, ID, InputObject, MaybeUndefined, Object, Result as GqlResult};
use chrono::{NaiveDate, Utc};

use crate::modules::cylinder_tests::adapters::inbound::graphql::{GqlTestRecord, to_gql_error};
use crate::modules::cylinder_tests::use_cases::update_test_record::command::{
    TestRecordPatch, UpdateTestRecord,
};
use crate::shell::state::AppState;

/// An explicit null clears `amount` or `nextTestDate`. Leaving the field out keeps it.
#[derive(InputObject, Default)]
pub struct TestRecordPatchInput {
    pub serial_number: Option<String>,
    pub test_date: Option<NaiveDate>,
    pub customer_name: Option<String>,
    pub mobile_number: Option<String>,
    pub vehicle_number: Option<String>,
    pub vehicle_type: Option<String>,
    pub cylinder_quantity: Option<u32>,
    pub amount: MaybeUndefined<f64>,
    pub payment_mode: Option<String>,
    pub reference_source: Option<String>,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub remarks: Option<String>,
    pub google_review: Option<bool>,
    pub auto_poster_fixed: Option<bool>,
    pub cng_mini_poster: Option<bool>,
    pub next_test_date: MaybeUndefined<NaiveDate>,
}

fn nullable<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

impl From<TestRecordPatchInput> for TestRecordPatch {
    fn from(i: TestRecordPatchInput) -> Self {
        Self {
            serial_number: i.serial_number,
            test_date: i.test_date,
            customer_name: i.customer_name,
            mobile_number: i.mobile_number,
            vehicle_number: i.vehicle_number,
            vehicle_type: i.vehicle_type,
            cylinder_quantity: i.cylinder_quantity,
            amount: nullable(i.amount),
            payment_mode: i.payment_mode,
            reference_source: i.reference_source,
            in_time: i.in_time,
            out_time: i.out_time,
            remarks: i.remarks,
            google_review: i.google_review,
            auto_poster_fixed: i.auto_poster_fixed,
            cng_mini_poster: i.cng_mini_poster,
            next_test_date: nullable(i.next_test_date),
        }
    }
}

#[derive(Default)]
pub struct UpdateTestRecordMutation;

#[Object]
impl UpdateTestRecordMutation {
    async fn update_test_record(
        &self,
        context: &Context<'_>,
        id: ID,
        patch: TestRecordPatchInput,
    ) -> GqlResult<GqlTestRecord> {
        let state = context.data_unchecked::<AppState>();

        let command = UpdateTestRecord {
            record_id: id.0,
            received_at: Utc::now(),
            patch: patch.into(),
        };

        let record = state
            .update_handler
            .handle(command)
            .await
            .map_err(to_gql_error)?;
        Ok(record.into())
    }
}
