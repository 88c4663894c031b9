pub mod dish_postgres_repository;
