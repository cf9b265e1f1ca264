//! Shared test utilities for `randgraph-core`.

use randgraph_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::random::RandomStream;
use std::{
    collections::VecDeque,
    num::NonZeroU32,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `RANDGRAPH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`RandomStream`] that replays a fixed script of draws.
///
/// Uniform draws and bounded draws come from separate queues. Bounded
/// values are reduced modulo the requested bound. Running out of script
/// panics so tests notice unexpected consumption.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedStream {
    uniforms: VecDeque<f64>,
    bounded: VecDeque<u32>,
}

impl ScriptedStream {
    /// Creates a stream that replays `uniforms` for presence draws.
    #[must_use]
    pub(crate) fn uniforms(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            uniforms: values.into_iter().collect(),
            bounded: VecDeque::new(),
        }
    }

    /// Creates a stream that replays `values` for weight draws.
    #[must_use]
    pub(crate) fn bounded(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            uniforms: VecDeque::new(),
            bounded: values.into_iter().collect(),
        }
    }

    /// Returns `true` once every scripted draw has been consumed.
    #[must_use]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.uniforms.is_empty() && self.bounded.is_empty()
    }
}

impl RandomStream for ScriptedStream {
    fn next_uniform(&mut self) -> f64 {
        self.uniforms
            .pop_front()
            .expect("scripted stream ran out of uniform draws")
    }

    fn next_bounded(&mut self, bound: NonZeroU32) -> u32 {
        self.bounded
            .pop_front()
            .expect("scripted stream ran out of bounded draws")
            % bound.get()
    }
}

/// [`RandomStream`] wrapper that records how many draws pass through it.
#[derive(Clone, Debug)]
pub(crate) struct CountingStream<S> {
    inner: S,
    draws: Arc<AtomicUsize>,
}

impl<S: RandomStream> CountingStream<S> {
    /// Wraps `inner`, counting draws into `draws`.
    #[must_use]
    pub(crate) fn new(inner: S, draws: Arc<AtomicUsize>) -> Self {
        Self { inner, draws }
    }

    /// Returns the number of draws taken so far.
    #[must_use]
    pub(crate) fn draws(&self) -> usize {
        self.draws.load(Ordering::Relaxed)
    }
}

impl<S: RandomStream> RandomStream for CountingStream<S> {
    fn next_uniform(&mut self) -> f64 {
        self.draws.fetch_add(1, Ordering::Relaxed);
        self.inner.next_uniform()
    }

    fn next_bounded(&mut self, bound: NonZeroU32) -> u32 {
        self.draws.fetch_add(1, Ordering::Relaxed);
        self.inner.next_bounded(bound)
    }
}
