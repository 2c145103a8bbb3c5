mod generate_test;
mod record_test;
mod scan_test;
