pub mod restaurant_postgres_repository;
