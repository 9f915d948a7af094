mod reload_tests;
mod target_tests;
