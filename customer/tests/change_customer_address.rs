use customer::application::{
    ChangeCustomerAddress, ChangeCustomerAddressCommand, ChangeCustomerAddressCommandHandler,
};
use customer::domain::{Address, Customer, CustomerId};
use customer::infrastructure::InMemoryCustomerRepository;
use ddd_application::InMemoryCommandBus;
use ddd_application::command_bus::CommandBus;
use ddd_application::command_handler::CommandHandler;
use ddd_application::context::AppContext;
use ddd_domain::business_context::BusinessContext;
use ddd_domain::entity::Entity;
use std::sync::Arc;
use tokio::task::JoinSet;

fn home() -> Address {
    Address::new("1 Old Road", "Leeds", "LS1 1AA", "GB").unwrap()
}

fn new_home() -> Address {
    Address::new("742 Evergreen Terrace", "Springfield", "49007", "US").unwrap()
}

fn seeded_customer() -> Customer {
    let mut c = Customer::new("C-1".parse().unwrap());
    c.rename("Ada");
    c.relocate(home());
    c
}

fn ctx() -> AppContext {
    AppContext::new(
        BusinessContext::builder()
            .correlation_id("cor-1")
            .actor_type("user")
            .actor_id("u-1")
            .build(),
    )
    .with_idempotency_key("idem-1")
}

#[test]
fn command_fields_round_trip_through_view() {
    let mut cmd = ChangeCustomerAddressCommand::new("", Address::default());
    cmd.customer_id = "C-1".into();
    cmd.new_address = new_home();

    assert_eq!(cmd.customer_id(), "C-1");
    assert_eq!(cmd.new_address(), &new_home());
}

#[tokio::test]
async fn handle_is_a_no_op_for_existing_customer() {
    let repo = Arc::new(InMemoryCustomerRepository::with_customers([seeded_customer()]));
    let handler = ChangeCustomerAddressCommandHandler::new(repo.clone());

    handler
        .handle(&ctx(), ChangeCustomerAddressCommand::new("C-1", new_home()))
        .await
        .unwrap();

    assert_eq!(repo.operations(), 0);
    let id: CustomerId = "C-1".parse().unwrap();
    let stored = repo.snapshot(&id).unwrap();
    assert_eq!(stored, seeded_customer());
    assert_eq!(stored.address(), Some(&home()));
    assert_eq!(stored.version(), 2);
}

#[tokio::test]
async fn handle_accepts_unknown_customer_and_unvalidated_address() {
    let repo = Arc::new(InMemoryCustomerRepository::new());
    let handler = ChangeCustomerAddressCommandHandler::new(repo.clone());

    // 命令本身不做校验：空地址与不存在的客户同样直接完成
    handler
        .handle(
            &AppContext::default(),
            ChangeCustomerAddressCommand::new("nobody", Address::default()),
        )
        .await
        .unwrap();

    assert_eq!(repo.operations(), 0);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn dispatch_through_bus_reaches_handler() {
    let repo = Arc::new(InMemoryCustomerRepository::with_customers([seeded_customer()]));
    let bus = InMemoryCommandBus::new();
    bus.register::<ChangeCustomerAddressCommand, _>(Arc::new(
        ChangeCustomerAddressCommandHandler::new(repo.clone()),
    ))
    .unwrap();

    assert_eq!(bus.registered_commands(), vec!["customer.change_address"]);

    bus.dispatch(&ctx(), ChangeCustomerAddressCommand::new("C-1", new_home()))
        .await
        .unwrap();

    assert_eq!(repo.operations(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_invocations_are_independent() {
    let repo = Arc::new(InMemoryCustomerRepository::with_customers([seeded_customer()]));
    let handler = Arc::new(ChangeCustomerAddressCommandHandler::new(repo.clone()));

    let mut set = JoinSet::new();
    for i in 0..50 {
        let handler = handler.clone();
        set.spawn(async move {
            let cmd = ChangeCustomerAddressCommand::new(format!("C-{i}"), new_home());
            handler.handle(&AppContext::default(), cmd).await
        });
    }
    while let Some(res) = set.join_next().await {
        res.unwrap().unwrap();
    }

    assert_eq!(repo.operations(), 0);
    assert_eq!(repo.len(), 1);
}
