//! # Example: basic
//!
//! Registers a few handlers, dispatches events, and watches failures land in the log.
//!
//! Demonstrates how to:
//! - Define events with [`Event`] and an optional [`Cancellable`] flag.
//! - Register closures via [`HandlerFn`] and a handler type with its own priority.
//! - Route swallowed failures to `tracing` through [`LogSink`].
//!
//! ## Flow
//! ```text
//! Registry::register(h) ──► arrange by priority ──► reindex slots
//! Registry::call(&mut ev)
//!     ├─► handler (prio 10)
//!     ├─► handler (prio 0)   panics? ──► LogSink ──► tracing::error!
//!     └─► handler (prio -5)
//! Registry::unregister(&h) ──► slot lookup ──► remove ──► reindex survivors
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=tinyevents=debug cargo run --example basic
//! ```

use std::fmt;
use std::rc::Rc;

use tinyevents::{
    Cancellable, Event, Handler, HandlerFn, HandlerRef, LogSink, Registry, RegistryConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, PartialEq)]
struct Greeting {
    text: String,
    reply: String,
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Greeting[text='{}', reply='{}']", self.text, self.reply)
    }
}

impl Event for Greeting {}

#[derive(Debug, PartialEq)]
struct Swap {
    left: i32,
    right: i32,
    cancelled: bool,
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap[left='{}', right='{}', cancelled='{}']",
            self.left, self.right, self.cancelled
        )
    }
}

impl Event for Swap {}

impl Cancellable for Swap {
    fn cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, state: bool) {
        self.cancelled = state;
    }
}

/// Handler type with an explicit priority.
struct Shouter;

impl Handler<Greeting> for Shouter {
    fn handle(&self, event: &mut Greeting) {
        event.text = event.text.to_uppercase();
    }

    fn priority(&self) -> i16 {
        10
    }

    fn name(&self) -> &'static str {
        "shouter"
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tinyevents=debug")),
        )
        .init();

    let mut registry = Registry::builder(RegistryConfig::default())
        .with_error_sink(Rc::new(LogSink::new()))
        .build();

    let shouter: HandlerRef<Greeting> = Rc::new(Shouter);
    let replier: HandlerRef<Greeting> = HandlerFn::rc("replier", |g: &mut Greeting| {
        g.reply = format!("you said: {}", g.text);
    });
    let grumpy: HandlerRef<Greeting> = HandlerFn::new("grumpy", |_: &mut Greeting| {
        panic!("not in the mood")
    })
    .with_priority(-5)
    .into_rc();

    // registration order does not matter: priority decides
    registry.register(replier.clone());
    registry.register(grumpy.clone());
    registry.register(shouter.clone());
    println!("greeting handlers: {:?}", registry.handler_names::<Greeting>());

    let mut greeting = Greeting {
        text: "hello there".into(),
        reply: String::new(),
    };
    registry.call(&mut greeting);
    println!("after call: {greeting}");

    let swapper: HandlerRef<Swap> = HandlerFn::rc("swapper", |s: &mut Swap| {
        if s.cancelled() {
            return;
        }
        std::mem::swap(&mut s.left, &mut s.right);
        s.cancel();
    });
    registry.register(swapper.clone());

    let mut swap = Swap {
        left: 9090,
        right: 1337,
        cancelled: false,
    };
    registry.call(&mut swap);
    registry.call(&mut swap);
    println!("after two calls: {swap}");

    // second removal of the same handler is reported, not returned
    registry.unregister(&grumpy);
    registry.unregister(&grumpy);

    registry.unregister(&shouter);
    registry.unregister(&replier);
    registry.unregister(&swapper);
    println!("kinds left: {}", registry.len());
}
