//! Typed and untyped listeners sharing one topic.
//!
//! Run with: `cargo run --example typed_payload`

use eventry::{Listener, Payload, Registry};

#[derive(Debug)]
struct Metric {
    name: &'static str,
    value: f64,
}

fn main() {
    let registry = Registry::new();

    // Typed facade: foreign payload types show up as None.
    let typed = Listener::new(|metric: Option<&Metric>| {
        if let Some(metric) = metric {
            println!("typed: {} = {}", metric.name, metric.value);
        } else {
            println!("typed: not a metric, ignoring");
        }
    });

    // Untyped form: inspect the payload and surface mismatches explicitly.
    let raw = Listener::raw(|payload: Option<Payload<'_>>| {
        let Some(payload) = payload else {
            println!("raw: no payload");
            return;
        };
        match payload.get::<Metric>() {
            Ok(metric) => println!("raw: {metric:?}"),
            Err(err) => println!("raw: {} ({err})", err.as_label()),
        }
    });

    registry.subscribe("metrics.sample", &typed);
    registry.subscribe("metrics.sample", &raw);

    registry.publish(
        "metrics.sample",
        &Metric {
            name: "latency_ms",
            value: 42.0,
        },
    );
    registry.publish("metrics.sample", &"not a metric");
    registry.notify("metrics.sample");
}
