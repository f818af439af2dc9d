pub mod add_test_record;
