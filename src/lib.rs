//! A bounded, thread-safe multi-producer/multi-consumer message queue with
//! backpressure, timeouts and orderly shutdown.
//!
//! The queue carries [`Envelope`] values — a topic, an optional routing key,
//! a byte payload and metadata — through a fixed-capacity FIFO shared across
//! any number of producer and consumer threads. Producers block (or time out,
//! or fail fast) when the queue is full; consumers block (or time out, or
//! fail fast) when it's empty. [`Queue::shutdown`] wakes every blocked thread
//! at once and lets already-enqueued envelopes drain before further pops fail.
//!
//! # Example
//!
//! ```
//! use pubsub_queue::{Envelope, Queue};
//! use std::thread;
//!
//! let queue: Queue<Envelope> = Queue::new(16);
//!
//! let producer = queue.clone();
//! let handle = thread::spawn(move || {
//!     let msg = Envelope::create_string("orders.created", "order #1").unwrap();
//!     producer.push(msg).unwrap();
//!     producer.shutdown();
//! });
//!
//! loop {
//!     match queue.pop() {
//!         Ok(msg) => println!("received on {}: {:?}", msg.topic(), msg.payload()),
//!         Err(_) => break,
//!     }
//! }
//! handle.join().unwrap();
//! ```

mod envelope;
mod error;
mod invariants;
mod metrics;
mod queue;

pub use envelope::{Envelope, MAX_KEY_LEN, MAX_PAYLOAD_SIZE, MAX_TOPIC_LEN};
pub use error::{
    EnvelopeError, ErrorCode, PopError, PopTimeoutError, PushError, PushTimeoutError, TryPopError,
    TryPushError,
};
pub use metrics::{QueueMetrics, QueueMetricsSnapshot};
pub use queue::Queue;
