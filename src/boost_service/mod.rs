//! Remote access to the Boost Note folder and document endpoints

pub mod boost_client;
pub mod boost_models;
pub mod http_client;
