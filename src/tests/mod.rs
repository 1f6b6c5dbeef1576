mod config_tests;
mod errors_tests;
mod models_validation_tests;
mod seed_tests;
