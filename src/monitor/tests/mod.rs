//! Test suites for the monitor module.
