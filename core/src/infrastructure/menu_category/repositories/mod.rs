pub mod menu_category_postgres_repository;
