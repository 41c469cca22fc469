/// CRUD operations tests for all entities; need a reachable Postgres.
pub mod crud_tests;
