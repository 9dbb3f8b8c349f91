//! The `parameter` module contains the typed sampling ranges for the numeric
//! parameters of the reaction network.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;

use super::helper::RandomSource;

lazy_static! {
    /// The process wide default [`RangeRegistry`]. It is populated with the
    /// parameter keys of all built in species and interaction variants and may
    /// be extended or overridden during process setup. Registrations must
    /// complete before concurrent mutation rounds start reading snapshots.
    pub static ref DEFAULT_RANGES: RwLock<RangeRegistry> =
        RwLock::new(RangeRegistry::with_defaults());
}

/// Registers the specified range in the process wide default registry,
/// overwriting any previously registered range for the same key.
///
/// # Parameters
///
/// * `key` - the parameter key to register the range under
/// * `range` - the sampling range to register
pub fn register_default_range<S: Into<String>>(key: S, range: ParameterRange) {
    let key = key.into();
    log::debug!("Registering default parameter range {:?} for key {}.", range, key);
    DEFAULT_RANGES.write().register(key, range);
}

/// Returns a snapshot of the process wide default registry.
pub fn default_ranges() -> RangeRegistry {
    DEFAULT_RANGES.read().clone()
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
/// A `ParameterRange` is the sampling rule bound to a parameter key.
/// The variant selects the sampling semantics, so the same numeric value
/// stored as `Discrete` samples categorically different from `Continuous`.
pub enum ParameterRange {
    /// Samples `draw * scale` for a uniformly distributed draw.
    Continuous(f64),
    /// Samples `floor(draw * scale)` as an integer for a uniformly
    /// distributed draw.
    Discrete(u64),
    /// Samples by linear interpolation between the specified lower and upper
    /// bound.
    Interval(f64, f64),
}

impl ParameterRange {
    /// Samples a value from this range, consuming a single draw from the
    /// supplied random source.
    ///
    /// # Parameters
    ///
    /// * `random_source` - the source of randomness for the sampling
    pub fn sample<R: RandomSource + ?Sized>(&self, random_source: &mut R) -> ParameterValue {
        let draw = random_source.draw();
        match self {
            ParameterRange::Continuous(scale) => ParameterValue::Real(draw * scale),
            ParameterRange::Discrete(scale) => {
                ParameterValue::Integer((draw * (*scale as f64)).floor() as u64)
            }
            ParameterRange::Interval(low, high) => {
                ParameterValue::Real(low + draw * (high - low))
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
/// A `ParameterValue` is a single value drawn from a [`ParameterRange`].
/// It preserves the discrete or continuous nature of the range it was drawn
/// from.
pub enum ParameterValue {
    /// A value drawn from a continuous range.
    Real(f64),
    /// A value drawn from a discrete range.
    Integer(u64),
}

impl ParameterValue {
    /// Returns the value as a floating point number.
    pub fn as_f64(&self) -> f64 {
        match self {
            ParameterValue::Real(value) => *value,
            ParameterValue::Integer(value) => *value as f64,
        }
    }

    /// Returns the value as an integer, flooring continuous values.
    pub fn as_u64(&self) -> u64 {
        match self {
            ParameterValue::Real(value) => value.floor() as u64,
            ParameterValue::Integer(value) => *value,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
/// A `RangeRegistry` maps parameter keys to their sampling ranges.
/// Keys are either bare attribute names or class specific overrides of the
/// form `Class.attribute`.
pub struct RangeRegistry {
    ranges: HashMap<String, ParameterRange>,
}

impl RangeRegistry {
    /// Creates an empty `RangeRegistry`.
    pub fn new() -> Self {
        RangeRegistry {
            ranges: HashMap::new(),
        }
    }

    /// Creates a `RangeRegistry` prepopulated with the parameter keys declared
    /// by the built in species and interaction variants.
    pub fn with_defaults() -> Self {
        let mut registry = RangeRegistry::new();
        registry.register("Species.degradation", ParameterRange::Continuous(1.0));
        registry.register("Species.activity", ParameterRange::Interval(0.0, 1.0));
        registry.register("PPI.association", ParameterRange::Continuous(1.0));
        registry.register("PPI.dissociation", ParameterRange::Continuous(1.0));
        registry.register("TFHill.hill", ParameterRange::Interval(1.0, 5.0));
        registry.register("TFHill.threshold", ParameterRange::Continuous(1.0));
        registry.register("TFHill.rate", ParameterRange::Continuous(2.0));
        registry.register("CorePromoter.delay", ParameterRange::Discrete(10));
        registry
    }

    /// Returns the number of registered ranges.
    pub fn size(&self) -> usize {
        self.ranges.len()
    }

    /// Stores the specified range under the specified key, overwriting any
    /// previously registered range for the same key.
    ///
    /// # Parameters
    ///
    /// * `key` - the parameter key to register the range under
    /// * `range` - the sampling range to register
    pub fn register<S: Into<String>>(&mut self, key: S, range: ParameterRange) {
        self.ranges.insert(key.into(), range);
    }

    /// Returns the range registered under the specified key if any.
    ///
    /// # Parameters
    ///
    /// * `key` - the parameter key to look up
    pub fn get(&self, key: &str) -> Option<ParameterRange> {
        self.ranges.get(key).copied()
    }

    /// Samples a value for the specified key, consuming a single draw from the
    /// supplied random source. An error will be returned if no range is
    /// registered under the key, regardless of the draw.
    ///
    /// # Parameters
    ///
    /// * `key` - the parameter key to sample
    /// * `random_source` - the source of randomness for the sampling
    pub fn sample<R: RandomSource + ?Sized>(
        &self,
        key: &str,
        random_source: &mut R,
    ) -> Result<ParameterValue, UnknownParameterError> {
        self.ranges
            .get(key)
            .map(|range| range.sample(random_source))
            .ok_or_else(|| UnknownParameterError::new(key))
    }

    /// Samples a value for the specified attribute of a variant.
    /// A class specific override of the form `Class.attribute` takes
    /// precedence over a range registered under the bare attribute name.
    ///
    /// # Parameters
    ///
    /// * `class_name` - the name of the variant the attribute belongs to
    /// * `attribute` - the name of the attribute to sample
    /// * `random_source` - the source of randomness for the sampling
    pub fn sample_attribute<R: RandomSource + ?Sized>(
        &self,
        class_name: &str,
        attribute: &str,
        random_source: &mut R,
    ) -> Result<ParameterValue, UnknownParameterError> {
        let override_key = format!("{}.{}", class_name, attribute);
        self.ranges
            .get(&override_key)
            .or_else(|| self.ranges.get(attribute))
            .map(|range| range.sample(random_source))
            .ok_or_else(|| UnknownParameterError::new(&override_key))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
/// An `UnknownParameterError` is returned when sampling a parameter key
/// without a registered [`ParameterRange`].
pub struct UnknownParameterError {
    description: String,
}

impl UnknownParameterError {
    /// Creates an `UnknownParameterError` from the specified parameter key.
    ///
    /// # Parameters
    ///
    /// * `key` - the parameter key without a registered range
    pub fn new(key: &str) -> Self {
        UnknownParameterError {
            description: format!("No sampling range is registered for the parameter key {}.", key),
        }
    }
}

impl std::fmt::Display for UnknownParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl Error for UnknownParameterError {
    fn description(&self) -> &str {
        &self.description
    }
}
