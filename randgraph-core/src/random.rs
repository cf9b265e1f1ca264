//! Pseudo-random streams driving graph generation.
//!
//! Generation consumes two independent streams: one decides whether an edge
//! exists and the other draws its weight. Both are modelled by the
//! [`RandomStream`] trait so tests and benchmarks can inject their own
//! sources. [`JavaRandom`] is the default stream; it reproduces the 48-bit
//! linear congruential generator whose sequences the reference outputs were
//! recorded with, so a given seed always yields the same graph.

use std::num::NonZeroU32;

/// A stateful source of uniform draws.
///
/// Implementations must be deterministic for a fixed initial state.
pub trait RandomStream {
    /// Returns a uniformly distributed value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Returns a uniformly distributed value in `[0, bound)`.
    fn next_bounded(&mut self, bound: NonZeroU32) -> u32;
}

impl<S: RandomStream + ?Sized> RandomStream for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }

    fn next_bounded(&mut self, bound: NonZeroU32) -> u32 {
        (**self).next_bounded(bound)
    }
}

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const STATE_MASK: u64 = (1 << 48) - 1;
/// `2^-53`, the spacing of the 53-bit mantissa grid in `[0, 1)`.
const DOUBLE_UNIT: f64 = 1.110_223_024_625_156_5e-16;

/// The 48-bit linear congruential generator with Java's `java.util.Random`
/// constants and draw algorithms.
///
/// # Examples
/// ```
/// use std::num::NonZeroU32;
/// use randgraph_core::{JavaRandom, RandomStream};
///
/// let mut stream = JavaRandom::new(42);
/// assert_eq!(stream.next_uniform(), 0.7275636800328681);
///
/// let mut stream = JavaRandom::new(42);
/// let bound = NonZeroU32::new(10).expect("non-zero");
/// assert_eq!(stream.next_bounded(bound), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JavaRandom {
    state: u64,
}

impl JavaRandom {
    /// Creates a stream from a signed 64-bit seed.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self {
            state: (seed.cast_unsigned() ^ MULTIPLIER) & STATE_MASK,
        }
    }

    /// Creates the edge-presence and edge-weight streams for `seed`.
    ///
    /// The weight stream is seeded with `seed * 2` in 32-bit wrapping
    /// arithmetic.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::JavaRandom;
    ///
    /// let (presence, weight) = JavaRandom::pair(1_500_000_000);
    /// assert_eq!(presence, JavaRandom::new(1_500_000_000));
    /// assert_eq!(weight, JavaRandom::new(-1_294_967_296));
    /// ```
    #[must_use]
    pub const fn pair(seed: i32) -> (Self, Self) {
        (
            Self::new(seed as i64),
            Self::new(seed.wrapping_mul(2) as i64),
        )
    }

    /// Advances the state and returns its top `bits` bits (`bits <= 32`).
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the draw keeps only the low 32 bits of the shifted state"
    )]
    fn next_bits(&mut self, bits: u32) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(ADDEND)
            & STATE_MASK;
        (self.state >> (48 - bits)) as u32
    }
}

impl RandomStream for JavaRandom {
    fn next_uniform(&mut self) -> f64 {
        let high = u64::from(self.next_bits(26));
        let low = u64::from(self.next_bits(27));
        let mantissa = (high << 27) + low;
        #[expect(
            clippy::cast_precision_loss,
            reason = "mantissa holds at most 53 significant bits"
        )]
        let value = mantissa as f64;
        value * DOUBLE_UNIT
    }

    fn next_bounded(&mut self, bound: NonZeroU32) -> u32 {
        let bound = bound.get();
        if bound.is_power_of_two() {
            let bits = u64::from(self.next_bits(31));
            #[expect(
                clippy::cast_possible_truncation,
                reason = "bound * bits >> 31 is below bound"
            )]
            let value = ((u64::from(bound) * bits) >> 31) as u32;
            return value;
        }
        loop {
            let bits = self.next_bits(31);
            let value = bits % bound;
            // Reject draws from the final, incomplete block of the 31-bit
            // range so every residue is equally likely.
            if u64::from(bits - value) + u64::from(bound - 1) <= u64::from(i32::MAX.cast_unsigned())
            {
                return value;
            }
        }
    }
}

/// Adapts any [`rand::RngCore`] generator into a [`RandomStream`].
///
/// # Examples
/// ```
/// use std::num::NonZeroU32;
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::{RandomStream, RngStream};
///
/// let mut stream = RngStream::new(SmallRng::seed_from_u64(7));
/// let bound = NonZeroU32::new(4).expect("non-zero");
/// assert!(stream.next_bounded(bound) < 4);
/// ```
#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
#[derive(Clone, Debug)]
pub struct RngStream<R> {
    rng: R,
}

#[cfg(feature = "rand")]
impl<R: rand::RngCore> RngStream<R> {
    /// Wraps `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "rand")]
impl<R: rand::RngCore> RandomStream for RngStream<R> {
    fn next_uniform(&mut self) -> f64 {
        use rand::Rng;
        self.rng.r#gen::<f64>()
    }

    fn next_bounded(&mut self, bound: NonZeroU32) -> u32 {
        use rand::Rng;
        self.rng.gen_range(0..bound.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn bound(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).expect("test bounds are non-zero")
    }

    #[rstest]
    #[case::seed_42(42, [0.727_563_680_032_868_1, 0.683_223_471_759_845_4, 0.308_719_455_332_659_76])]
    fn uniform_draws_match_reference_sequence(#[case] seed: i64, #[case] expected: [f64; 3]) {
        let mut stream = JavaRandom::new(seed);
        let drawn = [
            stream.next_uniform(),
            stream.next_uniform(),
            stream.next_uniform(),
        ];
        assert_eq!(drawn, expected);
    }

    #[rstest]
    #[case::rejection_path(42, 10, vec![0, 3, 8, 4, 0])]
    #[case::power_of_two(0, 16, vec![11, 13, 3, 9, 10])]
    fn bounded_draws_match_reference_sequence(
        #[case] seed: i64,
        #[case] upper: u32,
        #[case] expected: Vec<u32>,
    ) {
        let mut stream = JavaRandom::new(seed);
        let drawn: Vec<u32> = (0..expected.len())
            .map(|_| stream.next_bounded(bound(upper)))
            .collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn negative_seeds_are_accepted() {
        let mut stream = JavaRandom::new(-5);
        assert_eq!(stream.next_uniform(), 0.269_300_957_969_324_85);
        assert_eq!(stream.next_bounded(bound(7)), 2);
    }

    #[test]
    fn pair_doubles_the_seed_with_wrapping() {
        let (presence, weight) = JavaRandom::pair(i32::MAX);
        assert_eq!(presence, JavaRandom::new(i64::from(i32::MAX)));
        assert_eq!(weight, JavaRandom::new(-2));
    }

    #[test]
    fn uniform_draws_stay_in_unit_interval() {
        let mut stream = JavaRandom::new(123_456);
        for _ in 0..1_000 {
            let value = stream.next_uniform();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn streams_are_usable_through_mutable_references() {
        let mut owned = JavaRandom::new(42);
        let mut borrowed = &mut owned;
        assert_eq!(
            RandomStream::next_uniform(&mut borrowed),
            0.727_563_680_032_868_1
        );
    }

    #[cfg(feature = "rand")]
    #[test]
    fn rng_stream_respects_bounds() {
        use rand::{SeedableRng, rngs::SmallRng};

        let mut stream = RngStream::new(SmallRng::seed_from_u64(99));
        for _ in 0..1_000 {
            assert!(stream.next_bounded(bound(5)) < 5);
            assert!((0.0..1.0).contains(&stream.next_uniform()));
        }
    }
}
