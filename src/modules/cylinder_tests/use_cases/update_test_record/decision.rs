use crate::modules::cylinder_tests::core::record::TestRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("customerName cannot be blank")]
    BlankCustomerName,

    #[error("mobileNumber cannot be blank")]
    BlankMobileNumber,

    #[error("serialNumber cannot be blank")]
    BlankSerialNumber,

    #[error("paymentMode cannot be blank")]
    BlankPaymentMode,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { record: Box<TestRecord> },
    Rejected { reason: DecideError },
}
