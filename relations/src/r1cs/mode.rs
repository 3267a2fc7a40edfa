use crate::utils::Result;
use core::{fmt::Debug, marker::PhantomData};

/// The mode in which a constraint system is being built.
///
/// The mode decides, at the type level, whether values carried next to
/// variables exist. In [`Prove`] mode `Value<T>` is `T` itself; in [`Setup`]
/// mode it is a zero-sized [`PhantomData`], so reading a witness that was
/// never computed cannot type-check into anything but an explicit
/// [`get`](SynthesisMode::get) returning `None`.
pub trait SynthesisMode:
    'static + Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync
{
    /// The witness carried alongside a variable in this mode.
    type Value<T: Clone + Debug>: Clone + Debug;

    /// A short name for logging.
    const NAME: &'static str;

    /// Lift a known constant into a witness.
    fn constant<T: Clone + Debug>(value: T) -> Self::Value<T>;

    /// Produce a witness from `f`. `f` is only invoked in modes that keep
    /// witnesses, and its error is propagated.
    fn assign<T: Clone + Debug>(f: impl FnOnce() -> Result<T>) -> Result<Self::Value<T>>;

    /// Apply `f` to a witness.
    fn map<T: Clone + Debug, U: Clone + Debug>(
        value: &Self::Value<T>,
        f: impl FnOnce(&T) -> U,
    ) -> Self::Value<U>;

    /// Combine two witnesses with `f`.
    fn zip_with<T: Clone + Debug, U: Clone + Debug, V: Clone + Debug>(
        a: &Self::Value<T>,
        b: &Self::Value<U>,
        f: impl FnOnce(&T, &U) -> V,
    ) -> Self::Value<V>;

    /// Extract the witness, if this mode keeps one.
    fn get<T: Clone + Debug>(value: &Self::Value<T>) -> Option<T>;
}

/// A shorthand for the witness of type `T` under mode `M`.
pub type Witness<M, T> = <M as SynthesisMode>::Value<T>;

/// Build the constraint system together with a full assignment, as a prover
/// does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Prove;

/// Build only the shape of the constraint system, as the setup and the
/// verifier do. Witness closures are never evaluated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Setup;

impl SynthesisMode for Prove {
    type Value<T: Clone + Debug> = T;

    const NAME: &'static str = "prove";

    #[inline(always)]
    fn constant<T: Clone + Debug>(value: T) -> T {
        value
    }

    #[inline(always)]
    fn assign<T: Clone + Debug>(f: impl FnOnce() -> Result<T>) -> Result<T> {
        f()
    }

    #[inline(always)]
    fn map<T: Clone + Debug, U: Clone + Debug>(value: &T, f: impl FnOnce(&T) -> U) -> U {
        f(value)
    }

    #[inline(always)]
    fn zip_with<T: Clone + Debug, U: Clone + Debug, V: Clone + Debug>(
        a: &T,
        b: &U,
        f: impl FnOnce(&T, &U) -> V,
    ) -> V {
        f(a, b)
    }

    #[inline(always)]
    fn get<T: Clone + Debug>(value: &T) -> Option<T> {
        Some(value.clone())
    }
}

impl SynthesisMode for Setup {
    type Value<T: Clone + Debug> = PhantomData<T>;

    const NAME: &'static str = "setup";

    #[inline(always)]
    fn constant<T: Clone + Debug>(_: T) -> PhantomData<T> {
        PhantomData
    }

    #[inline(always)]
    fn assign<T: Clone + Debug>(_: impl FnOnce() -> Result<T>) -> Result<PhantomData<T>> {
        Ok(PhantomData)
    }

    #[inline(always)]
    fn map<T: Clone + Debug, U: Clone + Debug>(
        _: &PhantomData<T>,
        _: impl FnOnce(&T) -> U,
    ) -> PhantomData<U> {
        PhantomData
    }

    #[inline(always)]
    fn zip_with<T: Clone + Debug, U: Clone + Debug, V: Clone + Debug>(
        _: &PhantomData<T>,
        _: &PhantomData<U>,
        _: impl FnOnce(&T, &U) -> V,
    ) -> PhantomData<V> {
        PhantomData
    }

    #[inline(always)]
    fn get<T: Clone + Debug>(_: &PhantomData<T>) -> Option<T> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SynthesisError;

    #[test]
    fn prove_keeps_values() -> Result<()> {
        let a = Prove::assign(|| Ok(3u64))?;
        let b = Prove::constant(4u64);
        let sum = Prove::zip_with(&a, &b, |a, b| a + b);
        assert_eq!(Prove::get(&Prove::map(&sum, |s| s * 2)), Some(14));

        let missing = Prove::assign::<u64>(|| Err(SynthesisError::AssignmentMissing));
        assert_eq!(missing, Err(SynthesisError::AssignmentMissing));
        Ok(())
    }

    #[test]
    fn setup_never_evaluates() -> Result<()> {
        let a: Witness<Setup, u64> =
            Setup::assign(|| -> Result<u64> { unreachable!("setup evaluated a witness") })?;
        let b = Setup::constant(4u64);
        let sum = Setup::zip_with(&a, &b, |_, _| -> u64 { unreachable!() });
        assert_eq!(Setup::get(&sum), None);
        Ok(())
    }
}
