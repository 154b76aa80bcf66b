// self
use crate::{
	_prelude::*,
	obs::{CallKind, CallPhase},
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used around outbound calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call kind + operation name.
	pub fn new(kind: CallKind, operation: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("mashery_client.call", kind = kind.as_str(), operation);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, operation);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a `debug` event for a call phase transition.
pub fn record_phase(operation: &str, phase: CallPhase) {
	#[cfg(feature = "tracing")]
	tracing::debug!(operation, phase = phase.as_str(), "call phase changed");
	#[cfg(not(feature = "tracing"))]
	let _ = (operation, phase);
}

/// Emits a `debug` event when a caller reuses an authentication it waited on.
pub fn record_coalesced(generation: u64) {
	#[cfg(feature = "tracing")]
	tracing::debug!(generation, "joined an in-flight authentication");
	#[cfg(not(feature = "tracing"))]
	let _ = generation;
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn phase_events_do_not_require_a_subscriber() {
		record_phase("fetch_service", CallPhase::PendingAuthCheck);
		record_coalesced(1);
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = CallSpan::new(CallKind::Authenticate, "authenticate");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
