use std::sync::Arc;

use common::EntityId;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    CustomerEvent, EventDispatcher, FirstCustomerCreatedLogHandler,
    SecondCustomerCreatedLogHandler,
};

fn bench_notify_fan_out(c: &mut Criterion) {
    let mut dispatcher: EventDispatcher<CustomerEvent> = EventDispatcher::new();
    for _ in 0..8 {
        dispatcher.register(CustomerEvent::CREATED, Arc::new(FirstCustomerCreatedLogHandler));
        dispatcher.register(CustomerEvent::CREATED, Arc::new(SecondCustomerCreatedLogHandler));
    }
    let event = CustomerEvent::customer_created(EntityId::new("bench"), "Bench Customer", None);

    c.bench_function("dispatcher/notify_16_handlers", |b| {
        b.iter(|| dispatcher.notify(&event).unwrap());
    });
}

fn bench_notify_unregistered(c: &mut Criterion) {
    let dispatcher: EventDispatcher<CustomerEvent> = EventDispatcher::new();
    let event = CustomerEvent::customer_created(EntityId::new("bench"), "Bench Customer", None);

    c.bench_function("dispatcher/notify_no_handlers", |b| {
        b.iter(|| dispatcher.notify(&event).unwrap());
    });
}

fn bench_register_unregister(c: &mut Criterion) {
    let handler = Arc::new(FirstCustomerCreatedLogHandler);

    c.bench_function("dispatcher/register_unregister", |b| {
        b.iter(|| {
            let mut dispatcher: EventDispatcher<CustomerEvent> = EventDispatcher::new();
            dispatcher.register(CustomerEvent::CREATED, handler.clone());
            dispatcher.unregister(CustomerEvent::CREATED, &handler);
        });
    });
}

criterion_group!(
    benches,
    bench_notify_fan_out,
    bench_notify_unregistered,
    bench_register_unregister
);
criterion_main!(benches);
