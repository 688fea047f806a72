//! Basic subscribe/publish/unsubscribe flow.
//!
//! Run with: `cargo run --example basic`

use eventry::{Listener, Registry};

fn main() {
    let registry = Registry::new();

    let greeter = Listener::new(|name: Option<&String>| match name {
        Some(name) => println!("welcome, {name}"),
        None => println!("welcome, stranger"),
    });
    let auditor = Listener::unit(|| println!("(audit) first user.joined dispatch"));

    registry.subscribe("user.joined", &greeter);
    registry.subscribe_once("user.joined", &auditor);

    registry.publish("user.joined", &String::from("ada"));
    registry.publish("user.joined", &String::from("grace"));
    registry.notify("user.joined");

    registry.unsubscribe("user.joined", &greeter);
    registry.notify("user.joined"); // nothing left, silent no-op

    println!("remaining topics: {:?}", registry.topics());
}
