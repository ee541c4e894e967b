pub mod helpers;

mod attack_scenarios;
mod breaker_and_emergency;
mod pipeline_unit_tests;
