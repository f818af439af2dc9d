use crate::modules::cylinder_tests::core::record::TestRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("customerName is required")]
    MissingCustomerName,

    #[error("mobileNumber is required")]
    MissingMobileNumber,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { record: Box<TestRecord> },
    Rejected { reason: DecideError },
}
