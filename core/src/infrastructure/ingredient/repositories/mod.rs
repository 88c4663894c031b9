pub mod ingredient_postgres_repository;
