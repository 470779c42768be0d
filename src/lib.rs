pub mod shared {
    pub mod infrastructure {
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod calculator {
        pub mod core {
            pub mod evaluate;
            pub mod evolve;
            pub mod format;
            pub mod history;
            pub mod input;
            pub mod operator;
            pub mod state;
        }
        pub mod use_cases {
            pub mod handle_input {
                pub mod handler;
                pub mod history_port;
                pub mod view;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod history_repository;
            }
        }
    }
}

pub mod shell;
