pub mod modules {
    pub mod users {
        pub mod core {
            pub mod model;
            pub mod store;
        }
        pub mod use_cases {
            pub mod create_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_users {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_user {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod users_in_memory;
            }
        }
    }
}

pub mod shell;
