pub mod inmemory_customer_repository;

pub use inmemory_customer_repository::InMemoryCustomerRepository;
