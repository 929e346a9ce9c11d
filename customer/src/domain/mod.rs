pub mod address;
pub mod customer;
pub mod customer_repository;

pub use address::Address;
pub use customer::{Customer, CustomerId};
pub use customer_repository::CustomerRepository;
