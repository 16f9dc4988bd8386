pub mod timing_log;
