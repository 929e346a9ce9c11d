pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod context;
pub mod error;
pub mod inmemory_command_bus;

pub use inmemory_command_bus::InMemoryCommandBus;
