pub mod a001_log_record;
