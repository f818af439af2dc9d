pub mod config;

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod cylinder_tests {
        pub mod core {
            pub mod alerts;
            pub mod due_date;
            pub mod history;
            pub mod record;
            pub mod serial_number;
            pub mod stats;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod add_test_record {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_test_record {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_history {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_alerts {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod monthly_stats {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
                pub mod lenient;
            }
            pub mod outbound {
                pub mod record_store;
                pub mod record_store_in_memory;
                pub mod record_store_json_file;
            }
        }
    }
}

pub mod shell;
