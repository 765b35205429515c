//! Shared fixtures for fl-engine unit tests.
