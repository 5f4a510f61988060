//! Streaming primitives for delivering work across threads.
//!
//! Producers hold a [`DataStream`] bound to one generation id and push
//! payloads into an [`mpsc`] channel. Consumers receive [`StreamEnvelope`]s,
//! compare the id against whatever generation they consider current and
//! either apply or discard the payload. When the payload is a
//! [`ViewAction`], the consumer executes it against a view living on its own
//! thread, which keeps the producer ignorant of the concrete view type.
//!
//! [`mpsc`]: std::sync::mpsc

use std::fmt;
use std::sync::mpsc::Sender;

type ViewHandler<T> =
	Box<dyn for<'target> FnOnce(&'target mut <T as ViewTarget>::View<'target>) + Send>;

/// Message emitted by a background producer.
pub struct StreamEnvelope<P> {
	/// Generation the payload belongs to.
	pub id: u64,
	/// Payload delivered to the consumer.
	pub payload: P,
	/// Whether the producer finished streaming for this generation.
	pub complete: bool,
}

impl<P: fmt::Debug> fmt::Debug for StreamEnvelope<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StreamEnvelope")
			.field("id", &self.id)
			.field("payload", &self.payload)
			.field("complete", &self.complete)
			.finish()
	}
}

/// Marker describing a dynamic view that actions can operate on.
pub trait ViewTarget {
	/// Trait object exposed to the action when executing on the UI thread.
	type View<'target>: ?Sized;
}

/// Executable payload that mutates a view supplied by [`ViewTarget`].
pub struct ViewAction<T: ViewTarget> {
	handler: ViewHandler<T>,
}

impl<T: ViewTarget> ViewAction<T> {
	pub fn new(
		handler: impl for<'target> FnOnce(&'target mut T::View<'target>) + Send + 'static,
	) -> Self {
		Self {
			handler: Box::new(handler),
		}
	}

	/// Apply the action to the provided view.
	pub fn apply<'view>(self, view: &'view mut T::View<'view>) {
		(self.handler)(view);
	}
}

impl<T: ViewTarget> StreamEnvelope<ViewAction<T>> {
	/// Execute the embedded action against the provided view.
	pub fn dispatch<'view>(self, view: &'view mut T::View<'view>) {
		self.payload.apply(view);
	}
}

impl<T: ViewTarget> fmt::Debug for ViewAction<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("ViewAction(..)")
	}
}

/// Handle for producing stream messages backed by an [`mpsc::Sender`].
///
/// [`mpsc::Sender`]: std::sync::mpsc::Sender
pub struct DataStream<'a, P> {
	tx: &'a Sender<StreamEnvelope<P>>,
	id: u64,
}

impl<'a, P: Send + 'static> DataStream<'a, P> {
	#[must_use]
	pub fn new(tx: &'a Sender<StreamEnvelope<P>>, id: u64) -> Self {
		Self { tx, id }
	}

	/// Emit a payload to the consumer. Returns `false` once the receiver is gone.
	pub fn send(&self, payload: P, complete: bool) -> bool {
		self.tx
			.send(StreamEnvelope {
				id: self.id,
				payload,
				complete,
			})
			.is_ok()
	}
}

impl<'a, P: Send + 'static> Clone for DataStream<'a, P> {
	fn clone(&self) -> Self {
		Self {
			tx: self.tx,
			id: self.id,
		}
	}
}
