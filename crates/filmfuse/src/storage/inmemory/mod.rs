mod repository;

pub use repository::InMemoryFilmRepository;
