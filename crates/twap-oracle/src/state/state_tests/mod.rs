pub mod observation_log_tests;
