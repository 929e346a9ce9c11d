pub mod change_customer_address;

pub use change_customer_address::{
    ChangeCustomerAddress, ChangeCustomerAddressCommand, ChangeCustomerAddressCommandHandler,
};
