pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub(crate) mod resolve;
        pub mod update_quantity;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_stats;
        pub mod update;
    }
    pub mod user {
        pub mod get_profile;
        pub mod login;
        pub mod signup;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod validation;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_stats;
            pub mod update;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_profile;
            pub mod login;
            pub mod signup;
        }
    }
}
