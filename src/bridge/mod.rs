pub mod check;
pub mod cleanup;
pub mod configuration;
pub mod crypt;
pub mod result_error;
pub mod source;
pub mod store;
pub mod sync;
pub mod target;
pub mod translator;
pub mod translator_config;
pub mod validate;
