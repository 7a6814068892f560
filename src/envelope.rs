//! The immutable message envelope transported by [`crate::Queue`].

use crate::error::EnvelopeError;
use std::time::{SystemTime, UNIX_EPOCH};

/// Topic names must be non-empty and fit under this many bytes.
pub const MAX_TOPIC_LEN: usize = 256;
/// Routing keys, when present, must fit under this many bytes.
pub const MAX_KEY_LEN: usize = 128;
/// Payloads must not exceed this many bytes.
pub const MAX_PAYLOAD_SIZE: usize = 65_536;

/// An immutable, sole-owned message: a topic, an optional routing key, an
/// opaque byte payload, a creation timestamp, and a partition hint reserved
/// for future sharding.
///
/// Once constructed an envelope cannot be mutated — it is handed to a
/// [`crate::Queue`] by value and ownership moves with it. There is no
/// separate `destroy` call: dropping the envelope (explicitly, or because its
/// owner — producer, queue, or consumer — was dropped) releases the payload.
#[derive(Debug, PartialEq, Eq)]
pub struct Envelope {
    topic: String,
    key: Option<String>,
    payload: Vec<u8>,
    timestamp_ms: u64,
    partition_id: u32,
}

impl Envelope {
    /// Creates a new envelope owning a copy of `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::InvalidTopic`] if `topic` is empty or its
    /// length is ≥ [`MAX_TOPIC_LEN`] bytes, [`EnvelopeError::InvalidKey`] if
    /// `key` is supplied and its length is ≥ [`MAX_KEY_LEN`] bytes, and
    /// [`EnvelopeError::Allocation`] if `payload` exceeds [`MAX_PAYLOAD_SIZE`]
    /// bytes.
    pub fn create(topic: &str, payload: &[u8], key: Option<&str>) -> Result<Self, EnvelopeError> {
        if topic.is_empty() || topic.len() >= MAX_TOPIC_LEN {
            log::warn!("rejecting envelope: invalid topic ({} bytes)", topic.len());
            return Err(EnvelopeError::InvalidTopic);
        }
        if let Some(k) = key {
            if k.len() >= MAX_KEY_LEN {
                log::warn!("rejecting envelope: invalid key ({} bytes)", k.len());
                return Err(EnvelopeError::InvalidKey);
            }
        }
        if payload.len() > MAX_PAYLOAD_SIZE {
            log::warn!("rejecting envelope: payload too large ({} bytes)", payload.len());
            return Err(EnvelopeError::Allocation);
        }

        Ok(Self {
            topic: topic.to_owned(),
            key: key.filter(|k| !k.is_empty()).map(str::to_owned),
            payload: payload.to_vec(),
            timestamp_ms: current_timestamp_ms(),
            partition_id: 0,
        })
    }

    /// Convenience over [`Envelope::create`] for UTF-8 text payloads with no key.
    ///
    /// # Errors
    ///
    /// See [`Envelope::create`].
    pub fn create_string(topic: &str, text: &str) -> Result<Self, EnvelopeError> {
        Self::create(topic, text.as_bytes(), None)
    }

    /// The logical channel this message belongs to.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The routing key, or `None` if unset.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The message payload.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The payload length in bytes.
    #[must_use]
    pub fn payload_size(&self) -> usize {
        self.payload.len()
    }

    /// Wall-clock construction time, milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// The partition hint, reserved for future sharding. Defaults to 0.
    #[must_use]
    pub fn partition_id(&self) -> u32 {
        self.partition_id
    }

    /// Sets the partition hint. Exposed for a future sharding layer; the
    /// queue itself never reads this field.
    pub fn set_partition_id(&mut self, partition_id: u32) {
        self.partition_id = partition_id;
    }
}

impl Clone for Envelope {
    /// Deep-copies the envelope: equivalent to re-running [`Envelope::create`]
    /// on the source's topic, payload and key, then copying over
    /// `partition_id` (preserved, unlike the original C `pubsub_message_clone`
    /// — see DESIGN.md). The timestamp is recomputed: a clone is a new
    /// envelope, not a snapshot of the old one's creation time.
    fn clone(&self) -> Self {
        let mut cloned = Self::create(&self.topic, &self.payload, self.key.as_deref())
            .expect("cloning a previously-valid envelope cannot fail validation");
        cloned.partition_id = self.partition_id;
        cloned
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
