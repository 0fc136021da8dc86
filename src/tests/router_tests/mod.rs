mod api_tests;
mod estimate_tests;
mod home_tests;
