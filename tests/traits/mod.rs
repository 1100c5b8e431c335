pub mod collected_error;
