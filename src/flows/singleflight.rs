//! Generation-stamped gate that collapses concurrent authentications into one exchange.

// self
use crate::{_prelude::*, auth::AccessToken};

/// How a caller obtained the outcome returned by [`AuthGate::run`].
#[derive(Debug)]
pub(crate) enum Flight {
	/// The caller ran the exchange itself.
	Led(Result<AccessToken>),
	/// The caller waited on an attempt that finished while it was queued.
	Joined {
		/// Generation of the attempt that was reused.
		generation: u64,
		/// Cloned outcome of that attempt.
		outcome: Result<AccessToken>,
	},
}

#[derive(Debug, Default)]
struct Attempt {
	generation: u64,
	outcome: Option<Result<AccessToken>>,
}

/// Serializes authentication attempts and remembers the outcome of the latest one.
///
/// A caller samples [`AuthGate::generation`] before queueing. Once it holds the gate, a
/// generation newer than its sample means some other caller finished an attempt in the
/// meantime, and that attempt's outcome (token or error) is returned instead of starting a new
/// exchange.
#[derive(Debug, Default)]
pub(crate) struct AuthGate {
	flight: AsyncMutex<()>,
	last: Mutex<Attempt>,
}
impl AuthGate {
	/// Number of attempts completed so far.
	pub(crate) fn generation(&self) -> u64 {
		self.last.lock().generation
	}

	/// Runs `lead` unless an attempt completed after `seen`.
	pub(crate) async fn run<F, Fut>(&self, seen: u64, lead: F) -> Flight
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Result<AccessToken>>,
	{
		let _flight = self.flight.lock().await;

		if let Some((generation, outcome)) = self.completed_since(seen) {
			return Flight::Joined { generation, outcome };
		}

		let outcome = lead().await;

		self.record(outcome.clone());

		Flight::Led(outcome)
	}

	fn completed_since(&self, seen: u64) -> Option<(u64, Result<AccessToken>)> {
		let last = self.last.lock();

		if last.generation == seen {
			return None;
		}

		last.outcome.clone().map(|outcome| (last.generation, outcome))
	}

	fn record(&self, outcome: Result<AccessToken>) {
		let mut last = self.last.lock();

		last.generation += 1;
		last.outcome = Some(outcome);
	}
}
