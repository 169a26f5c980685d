pub mod gamma_events;

pub use gamma_events::{active_markets, EventSource, GammaEventsClient};

#[cfg(test)]
pub use gamma_events::MockEventSource;
