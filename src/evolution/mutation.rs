//! The `mutation` module contains the stochastic engine mutating reaction
//! networks based on caller supplied operation rates.

use derive_builder::Builder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;

use super::helper::{random_index, PseudoRandomSource, RandomSource};
use super::network::{
    MutableNetwork, NetworkError, SpeciesTag, TYPE_NAME_CORE_PROMOTER, TYPE_NAME_PPI,
    TYPE_NAME_SPECIES, TYPE_NAME_TF_HILL,
};
use super::parameter::{RangeRegistry, UnknownParameterError};

/// The descriptor prefix of node parameter mutations.
const PREFIX_MUTATE_NODE: &str = "mutate_Node";
/// The descriptor prefix of interaction removals.
const PREFIX_REMOVE_INTERACTION: &str = "remove_Interaction";
/// The descriptor prefix of random node creations.
const PREFIX_RANDOM_INTERACTION: &str = "random_Interaction";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
/// A `MutationCategory` groups the mutation operations a rate table can
/// enable.
pub enum MutationCategory {
    /// Perturbs the parameters of an existing node.
    MutateNode,
    /// Removes an existing removable interaction.
    RemoveInteraction,
    /// Creates a new randomly parameterised node.
    RandomInteraction,
}

impl MutationCategory {
    /// Returns the category encoded by the specified descriptor prefix if the
    /// prefix is recognised.
    ///
    /// # Parameters
    ///
    /// * `prefix` - the descriptor prefix to resolve
    pub fn from_prefix(prefix: &str) -> Option<MutationCategory> {
        match prefix {
            PREFIX_MUTATE_NODE => Some(MutationCategory::MutateNode),
            PREFIX_REMOVE_INTERACTION => Some(MutationCategory::RemoveInteraction),
            PREFIX_RANDOM_INTERACTION => Some(MutationCategory::RandomInteraction),
            _ => None,
        }
    }

    /// Returns the descriptor prefix encoding this category.
    pub fn prefix(&self) -> &'static str {
        match self {
            MutationCategory::MutateNode => PREFIX_MUTATE_NODE,
            MutationCategory::RemoveInteraction => PREFIX_REMOVE_INTERACTION,
            MutationCategory::RandomInteraction => PREFIX_RANDOM_INTERACTION,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
/// A `MutationDescriptor` is the structured form of an operation descriptor
/// string such as `mutate_Node('Species')`. Descriptors are parsed and
/// validated once when a rate table is created rather than on every use.
pub struct MutationDescriptor {
    category: MutationCategory,
    type_name: String,
}

impl MutationDescriptor {
    /// Creates a new `MutationDescriptor` for the specified category and
    /// target type.
    ///
    /// # Parameters
    ///
    /// * `category` - the operation category
    /// * `type_name` - the name of the targeted type
    pub fn new<S: Into<String>>(category: MutationCategory, type_name: S) -> Self {
        MutationDescriptor {
            category,
            type_name: type_name.into(),
        }
    }

    /// Parses a descriptor string of the form `<category>('<TypeName>')`.
    /// Descriptors with an unrecognised category prefix are ignored for
    /// forward compatibility, so `None` is returned for them. An error will
    /// be returned if the quoting of the type name is malformed.
    ///
    /// # Parameters
    ///
    /// * `descriptor` - the descriptor string to parse
    pub fn parse(descriptor: &str) -> Result<Option<MutationDescriptor>, MalformedDescriptorError> {
        let (prefix, argument) = match descriptor.find('(') {
            Some(position) => descriptor.split_at(position),
            None => return Err(MalformedDescriptorError::new(descriptor)),
        };
        let type_name = argument
            .strip_prefix("('")
            .and_then(|stripped| stripped.strip_suffix("')"))
            .ok_or_else(|| MalformedDescriptorError::new(descriptor))?;
        if type_name.is_empty() || type_name.contains('\'') {
            return Err(MalformedDescriptorError::new(descriptor));
        }
        Ok(MutationCategory::from_prefix(prefix)
            .map(|category| MutationDescriptor::new(category, type_name)))
    }

    /// Returns the operation category of this descriptor.
    pub fn category(&self) -> MutationCategory {
        self.category
    }

    /// Returns the name of the type targeted by this descriptor.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl std::fmt::Display for MutationDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", self.category.prefix(), self.type_name)
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
/// A `RateEntry` is a single mutation operation together with its firing
/// probability.
pub struct RateEntry {
    descriptor: MutationDescriptor,
    rate: f64,
}

impl RateEntry {
    /// Returns the descriptor of the operation.
    pub fn descriptor(&self) -> &MutationDescriptor {
        &self.descriptor
    }

    /// Returns the firing probability of the operation.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
/// A `RateTable` holds the per round firing probabilities of all enabled
/// mutation operations in a fixed order. The entry order determines the order
/// in which random draws are consumed during a round, so two rounds over the
/// same table with identically seeded random sources behave identically.
pub struct RateTable {
    entries: Vec<RateEntry>,
}

impl RateTable {
    /// Creates an empty `RateTable`.
    pub fn new() -> Self {
        RateTable {
            entries: Vec::new(),
        }
    }

    /// Parses descriptor strings into a `RateTable`, preserving the supplied
    /// order. Rates are clamped to `[0, 1]`. Descriptors with an unrecognised
    /// category prefix are skipped, while malformed quoting fails.
    ///
    /// # Parameters
    ///
    /// * `entries` - the descriptor strings and their rates
    pub fn parse<'a, I>(entries: I) -> Result<RateTable, MalformedDescriptorError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut table = RateTable::new();
        for (descriptor, rate) in entries {
            if let Some(descriptor) = MutationDescriptor::parse(descriptor)? {
                table.push(descriptor, rate);
            }
        }
        Ok(table)
    }

    /// Appends the specified operation to this `RateTable`, clamping the rate
    /// to `[0, 1]`.
    ///
    /// # Parameters
    ///
    /// * `descriptor` - the descriptor of the operation
    /// * `rate` - the firing probability of the operation
    pub fn push(&mut self, descriptor: MutationDescriptor, rate: f64) {
        self.entries.push(RateEntry {
            descriptor,
            rate: rate.clamp(0.0, 1.0),
        });
    }

    /// Returns the entries of this `RateTable` in draw consumption order.
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    /// Returns the number of entries in this `RateTable`.
    pub fn size(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
/// A `MutationCatalog` groups the type names of a [`RateTable`] by operation
/// category. Membership is deduplicated, so the lists answer which types an
/// operation may target, not how often they were mentioned.
pub struct MutationCatalog {
    mutable_node_types: Vec<String>,
    removable_interaction_types: Vec<String>,
    creatable_interaction_types: Vec<String>,
}

impl MutationCatalog {
    /// Returns the node types whose parameters may be mutated.
    pub fn mutable_node_types(&self) -> &[String] {
        &self.mutable_node_types
    }

    /// Returns the interaction types that may be removed.
    pub fn removable_interaction_types(&self) -> &[String] {
        &self.removable_interaction_types
    }

    /// Returns the types that may be randomly created.
    pub fn creatable_interaction_types(&self) -> &[String] {
        &self.creatable_interaction_types
    }
}

/// Groups the type names of the specified rate table into mutable, removable
/// and creatable types. The grouping is purely structural, so the rates of the
/// table are not consumed. An empty table yields three empty lists.
///
/// # Parameters
///
/// * `rates` - the rate table to classify
pub fn build_lists(rates: &RateTable) -> MutationCatalog {
    let mut catalog = MutationCatalog::default();
    for entry in rates.entries() {
        let type_name = entry.descriptor().type_name();
        let list = match entry.descriptor().category() {
            MutationCategory::MutateNode => &mut catalog.mutable_node_types,
            MutationCategory::RemoveInteraction => &mut catalog.removable_interaction_types,
            MutationCategory::RandomInteraction => &mut catalog.creatable_interaction_types,
        };
        if !list.iter().any(|existing| existing == type_name) {
            list.push(type_name.to_string());
        }
    }
    catalog
}

#[derive(Builder, Debug, PartialEq, Clone, Serialize, Deserialize)]
#[builder(default)]
/// The caller configurable policies of the [`MutationEngine`].
pub struct MutationSettings {
    /// Whether species left without incident edges are deleted after a round
    /// that modified the network. Input and output species are always
    /// retained.
    remove_orphaned_species: bool,
    /// Whether node identifiers are renumbered after a round that modified
    /// the network.
    renumber_identifiers: bool,
}

impl MutationSettings {
    /// Returns whether orphaned species are deleted after a modifying round.
    pub fn remove_orphaned_species(&self) -> bool {
        self.remove_orphaned_species
    }

    /// Returns whether node identifiers are renumbered after a modifying
    /// round.
    pub fn renumber_identifiers(&self) -> bool {
        self.renumber_identifiers
    }
}

impl Default for MutationSettings {
    fn default() -> Self {
        MutationSettings {
            remove_orphaned_species: false,
            renumber_identifiers: false,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
/// A `MutationOutcome` is the effect a single firing operation had on the
/// network.
pub enum MutationOutcome {
    /// The parameters of the node were redrawn.
    Mutated {
        /// The name of the mutated node's type.
        type_name: String,
        /// The identifier of the mutated node.
        node: usize,
    },
    /// The interaction and its incident edges were removed.
    Removed {
        /// The name of the removed interaction's type.
        type_name: String,
        /// The identifier of the removed interaction.
        node: usize,
    },
    /// A new node was created and wired.
    Created {
        /// The name of the created node's type.
        type_name: String,
        /// The identifier of the created node.
        node: usize,
    },
    /// The operation fired, but no eligible candidate existed.
    /// This is a normal outcome of stochastic selection, not a failure.
    Skipped {
        /// The category of the skipped operation.
        category: MutationCategory,
        /// The name of the targeted type.
        type_name: String,
    },
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
/// A `MutationReport` lists the outcome of every operation that fired during
/// a mutation round, distinguishing applied modifications from candidate-less
/// no-ops.
pub struct MutationReport {
    outcomes: Vec<MutationOutcome>,
}

impl MutationReport {
    /// Returns the outcomes of all fired operations in application order.
    pub fn outcomes(&self) -> &[MutationOutcome] {
        &self.outcomes
    }

    /// Returns the number of operations that fired during the round.
    pub fn size(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns the number of fired operations that modified the network.
    pub fn number_of_applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| !matches!(outcome, MutationOutcome::Skipped { .. }))
            .count()
    }

    /// Returns the number of fired operations without an eligible candidate.
    pub fn number_of_skipped(&self) -> usize {
        self.size() - self.number_of_applied()
    }

    fn record(&mut self, outcome: MutationOutcome) {
        self.outcomes.push(outcome);
    }
}

/// A `MutationEngine` applies rounds of randomised mutations to
/// [`MutableNetwork`]s based on a caller supplied [`RateTable`].
///
/// All stochastic decisions of a round are drawn from the single injected
/// [`RandomSource`] in a fixed order: every rate table entry consumes one
/// firing draw, followed by the candidate selection draws and parameter draws
/// of the operation if it fired. A round over the same network and table with
/// an identically seeded source therefore produces the identical result.
#[derive(Debug, Clone)]
pub struct MutationEngine<'a> {
    ranges: &'a RangeRegistry,
    settings: MutationSettings,
}

impl<'a> MutationEngine<'a> {
    /// Creates a new `MutationEngine` sampling parameters from the specified
    /// registry with default [`MutationSettings`].
    ///
    /// # Parameters
    ///
    /// * `ranges` - the registry to sample all mutation parameters from
    pub fn new(ranges: &'a RangeRegistry) -> Self {
        MutationEngine {
            ranges,
            settings: MutationSettings::default(),
        }
    }

    /// Creates a new `MutationEngine` sampling parameters from the specified
    /// registry with the specified settings.
    ///
    /// # Parameters
    ///
    /// * `ranges` - the registry to sample all mutation parameters from
    /// * `settings` - the policies to apply
    pub fn with_settings(ranges: &'a RangeRegistry, settings: MutationSettings) -> Self {
        MutationEngine { ranges, settings }
    }

    /// Returns the settings of this `MutationEngine`.
    pub fn settings(&self) -> &MutationSettings {
        &self.settings
    }

    /// Returns the registry this `MutationEngine` samples parameters from.
    pub fn ranges(&self) -> &RangeRegistry {
        self.ranges
    }

    /// Performs one mutation round on the specified network. Every rate table
    /// entry is an independent Bernoulli trial, so multiple operations may
    /// fire in the same round. Fired operations without an eligible candidate
    /// are recorded as skipped, never raised as errors.
    ///
    /// # Parameters
    ///
    /// * `network` - the network to mutate
    /// * `rates` - the firing probabilities of all enabled operations
    /// * `random_source` - the source of randomness for the whole round
    pub fn mutate_round<R: RandomSource + ?Sized>(
        &self,
        network: &mut MutableNetwork,
        rates: &RateTable,
        random_source: &mut R,
    ) -> Result<MutationReport, MutationError> {
        log::trace!("Starting a mutation round over the catalog {:?}.", build_lists(rates));
        let mut report = MutationReport::default();
        for entry in rates.entries() {
            if random_source.draw() >= entry.rate() {
                continue;
            }
            let outcome = match entry.descriptor().category() {
                MutationCategory::MutateNode => {
                    self.mutate_node(network, entry.descriptor().type_name(), random_source)?
                }
                MutationCategory::RemoveInteraction => self.remove_random_interaction(
                    network,
                    entry.descriptor().type_name(),
                    random_source,
                )?,
                MutationCategory::RandomInteraction => self.create_random_interaction(
                    network,
                    entry.descriptor().type_name(),
                    random_source,
                )?,
            };
            log::debug!("The operation {} resulted in {:?}.", entry.descriptor(), outcome);
            report.record(outcome);
        }
        if report.number_of_applied() > 0 {
            if self.settings.remove_orphaned_species() {
                network.remove_orphaned_species();
            }
            if self.settings.renumber_identifiers() {
                network.write_id();
            }
        }
        Ok(report)
    }

    /// Selects a uniformly distributed node of the specified type and redraws
    /// its parameters.
    fn mutate_node<R: RandomSource + ?Sized>(
        &self,
        network: &mut MutableNetwork,
        type_name: &str,
        random_source: &mut R,
    ) -> Result<MutationOutcome, MutationError> {
        let candidates: Vec<usize> = network
            .nodes()
            .iter()
            .filter(|node| node.type_name() == type_name)
            .map(|node| {
                node.identifier()
                    .expect("Registered nodes always carry an identifier.")
            })
            .collect();
        match random_index(candidates.len(), random_source) {
            None => Ok(MutationOutcome::Skipped {
                category: MutationCategory::MutateNode,
                type_name: type_name.to_string(),
            }),
            Some(index) => {
                let identifier = candidates[index];
                network.resample_node_parameters(identifier, self.ranges, random_source)?;
                Ok(MutationOutcome::Mutated {
                    type_name: type_name.to_string(),
                    node: identifier,
                })
            }
        }
    }

    /// Selects a uniformly distributed removable interaction of the specified
    /// type and removes it.
    fn remove_random_interaction<R: RandomSource + ?Sized>(
        &self,
        network: &mut MutableNetwork,
        type_name: &str,
        random_source: &mut R,
    ) -> Result<MutationOutcome, MutationError> {
        let candidates: Vec<usize> = network
            .nodes()
            .iter()
            .filter_map(|node| node.as_interaction())
            .filter(|interaction| {
                interaction.type_name() == type_name && interaction.is_removable()
            })
            .map(|interaction| {
                interaction
                    .identifier()
                    .expect("Registered nodes always carry an identifier.")
            })
            .collect();
        match random_index(candidates.len(), random_source) {
            None => Ok(MutationOutcome::Skipped {
                category: MutationCategory::RemoveInteraction,
                type_name: type_name.to_string(),
            }),
            Some(index) => {
                let identifier = candidates[index];
                network.remove_interaction(identifier)?;
                Ok(MutationOutcome::Removed {
                    type_name: type_name.to_string(),
                    node: identifier,
                })
            }
        }
    }

    /// Creates a randomly parameterised node of the specified type, selecting
    /// compatible endpoints uniformly among the eligible species.
    fn create_random_interaction<R: RandomSource + ?Sized>(
        &self,
        network: &mut MutableNetwork,
        type_name: &str,
        random_source: &mut R,
    ) -> Result<MutationOutcome, MutationError> {
        if type_name == TYPE_NAME_SPECIES {
            let degradation = self
                .ranges
                .sample_attribute(TYPE_NAME_SPECIES, "degradation", random_source)?
                .as_f64();
            let node = network.new_species(vec![SpeciesTag::Degradable(degradation)]);
            return Ok(MutationOutcome::Created {
                type_name: type_name.to_string(),
                node,
            });
        }
        let skipped = |type_name: &str| MutationOutcome::Skipped {
            category: MutationCategory::RandomInteraction,
            type_name: type_name.to_string(),
        };
        let (inputs, outputs) = match type_name {
            TYPE_NAME_PPI => {
                let species = network.species_identifiers();
                let first = match random_index(species.len(), random_source) {
                    None => return Ok(skipped(type_name)),
                    Some(index) => species[index],
                };
                let second = species[random_index(species.len(), random_source)
                    .expect("The candidate list was checked to be non empty.")];
                // The complex produced by the association.
                let degradation = self
                    .ranges
                    .sample_attribute(TYPE_NAME_SPECIES, "degradation", random_source)?
                    .as_f64();
                let complex = network
                    .new_species(vec![SpeciesTag::Complexable, SpeciesTag::Degradable(degradation)]);
                (vec![first, second], vec![complex])
            }
            TYPE_NAME_TF_HILL => {
                let factors = network.transcription_factor_identifiers();
                let factor = match random_index(factors.len(), random_source) {
                    None => return Ok(skipped(type_name)),
                    Some(index) => factors[index],
                };
                let targets = network.species_identifiers();
                let target = targets[random_index(targets.len(), random_source)
                    .expect("At least the selected factor is a species.")];
                (vec![factor], vec![target])
            }
            TYPE_NAME_CORE_PROMOTER => {
                let genes = network.species_identifiers();
                let gene = match random_index(genes.len(), random_source) {
                    None => return Ok(skipped(type_name)),
                    Some(index) => genes[index],
                };
                // The gene product transcribed after the delay.
                let degradation = self
                    .ranges
                    .sample_attribute(TYPE_NAME_SPECIES, "degradation", random_source)?
                    .as_f64();
                let product = network.new_species(vec![SpeciesTag::Degradable(degradation)]);
                (vec![gene], vec![product])
            }
            _ => {
                return Err(MutationError::Network(NetworkError::UnknownType(
                    type_name.to_string(),
                )))
            }
        };
        let node = network.add_interaction(type_name, inputs, outputs, self.ranges, random_source)?;
        Ok(MutationOutcome::Created {
            type_name: type_name.to_string(),
            node,
        })
    }
}

/// Mutates every network of a population independently in parallel. Each
/// network is processed with its own random source derived from the specified
/// base seed and the network's position, so the result does not depend on
/// scheduling order.
///
/// # Parameters
///
/// * `networks` - the networks of the population
/// * `rates` - the firing probabilities of all enabled operations
/// * `ranges` - the registry to sample all mutation parameters from
/// * `settings` - the policies to apply to every round
/// * `base_seed` - the seed the per network sources are derived from
pub fn mutate_population(
    networks: &mut [MutableNetwork],
    rates: &RateTable,
    ranges: &RangeRegistry,
    settings: &MutationSettings,
    base_seed: u64,
) -> Result<Vec<MutationReport>, MutationError> {
    networks
        .par_iter_mut()
        .enumerate()
        .map(|(index, network)| {
            let engine = MutationEngine::with_settings(ranges, settings.clone());
            let mut random_source =
                PseudoRandomSource::from_seed(base_seed.wrapping_add(index as u64));
            engine.mutate_round(network, rates, &mut random_source)
        })
        .collect()
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
/// A `MalformedDescriptorError` is returned when an operation descriptor
/// string cannot be parsed.
pub struct MalformedDescriptorError {
    description: String,
}

impl MalformedDescriptorError {
    /// Creates a `MalformedDescriptorError` from the specified descriptor
    /// string.
    ///
    /// # Parameters
    ///
    /// * `descriptor` - the descriptor string that failed to parse
    pub fn new(descriptor: &str) -> Self {
        MalformedDescriptorError {
            description: format!(
                "The operation descriptor {} does not match the form <category>('<TypeName>').",
                descriptor
            ),
        }
    }
}

impl std::fmt::Display for MalformedDescriptorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl Error for MalformedDescriptorError {
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, PartialEq, Clone)]
/// A `MutationError` aborts a mutation round.
pub enum MutationError {
    /// An operation descriptor string could not be parsed.
    MalformedDescriptor(MalformedDescriptorError),
    /// A graph operation failed.
    Network(NetworkError),
    /// A parameter key has no registered sampling range.
    UnknownParameter(UnknownParameterError),
}

impl std::fmt::Display for MutationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationError::MalformedDescriptor(error) => write!(f, "{}", error),
            MutationError::Network(error) => write!(f, "{}", error),
            MutationError::UnknownParameter(error) => write!(f, "{}", error),
        }
    }
}

impl Error for MutationError {}

impl From<MalformedDescriptorError> for MutationError {
    fn from(error: MalformedDescriptorError) -> Self {
        MutationError::MalformedDescriptor(error)
    }
}

impl From<NetworkError> for MutationError {
    fn from(error: NetworkError) -> Self {
        MutationError::Network(error)
    }
}

impl From<UnknownParameterError> for MutationError {
    fn from(error: UnknownParameterError) -> Self {
        MutationError::UnknownParameter(error)
    }
}
