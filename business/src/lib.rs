pub mod application {
    pub mod movie {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod get_featured;
        pub mod search;
        pub mod update;
    }
    pub mod review {
        pub mod create;
        pub mod delete;
        pub mod get_by_movie;
        pub mod update;
    }
    pub mod cart {
        pub mod add_item;
        pub mod get;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod order {
        pub mod get_all;
        pub mod get_by_id;
        pub mod place;
        pub mod update_payment_status;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod money;
        pub mod validation;
        pub mod value_objects;
    }
    pub mod movie {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod get_featured;
            pub mod search;
            pub mod update;
        }
    }
    pub mod review {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_movie;
            pub mod update;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod get;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod place;
            pub mod update_payment_status;
        }
    }
}

#[cfg(test)]
mod test_support;
