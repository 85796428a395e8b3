pub mod application {
    pub mod catalog {
        pub mod controller;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod filter_by_category;
        pub mod get_all;
        pub mod get_by_id;
        pub mod search;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod filter;
        pub mod view;
    }
    pub mod product {
        pub mod draft;
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod filter_by_category;
            pub mod get_all;
            pub mod get_by_id;
            pub mod search;
            pub mod update;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
