pub mod health_postgres_repository;
