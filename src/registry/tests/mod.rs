//! Unit tests for the registry module.

mod domain_tests;
