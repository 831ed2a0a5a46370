//! Test registry for named procedure lookup.

use core::fmt;

use heapless::Vec;

use crate::error::{AcquisitionError, Error, RegistryError, Result};
use crate::runner::{RunContext, Termination};

use super::naming::{display_name, is_test_identifier, DisplayName, MAX_NAME_LEN};

/// Maximum number of procedures in the registry.
pub const MAX_PROCEDURES: usize = 32;

/// Outcome of a procedure; acquisition failures end it early.
pub type ProcedureResult = core::result::Result<Termination, AcquisitionError>;

/// A conformance test procedure, called with its display name.
pub type Procedure = fn(&str, &mut RunContext<'_>) -> ProcedureResult;

/// A procedure exposed for discovery under its identifier.
#[derive(Clone, Copy)]
pub struct ProcedureEntry {
    /// Identifier following the `test_<EncodedName>` convention.
    pub identifier: &'static str,
    /// The procedure.
    pub procedure: Procedure,
}

/// A registered test.
#[derive(Clone)]
pub struct TestEntry {
    name: DisplayName,
    identifier: heapless::String<MAX_NAME_LEN>,
    procedure: Procedure,
}

impl fmt::Debug for ProcedureEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcedureEntry")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for TestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestEntry")
            .field("name", &self.name)
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

impl TestEntry {
    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Identifier the display name was built from.
    #[inline]
    pub fn identifier(&self) -> &str {
        self.identifier.as_str()
    }

    /// The procedure.
    #[inline]
    pub fn procedure(&self) -> Procedure {
        self.procedure
    }
}

/// Catalog of named test procedures, kept sorted by display name.
#[derive(Debug, Clone, Default)]
pub struct TestRegistry {
    entries: Vec<TestEntry, MAX_PROCEDURES>,
}

impl TestRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Build a registry from every discoverable procedure whose identifier
    /// starts with `test_`. Other identifiers are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate display names or when the registry is full.
    pub fn build_from_discoverable<'s, I>(source: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'s ProcedureEntry>,
    {
        let mut registry = Self::new();
        for entry in source {
            if !is_test_identifier(entry.identifier) {
                tracing::debug!(identifier = entry.identifier, "skipping non-test procedure");
                continue;
            }
            registry.register(entry.identifier, entry.procedure)?;
        }
        tracing::info!(count = registry.len(), "test registry built");
        Ok(registry)
    }

    /// Build a registry holding the standard conformance procedures.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalog has conflicting names.
    pub fn standard() -> Result<Self> {
        Self::build_from_discoverable(crate::procedures::CATALOG)
    }

    /// Register a procedure under the display name built from its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is malformed, the display name is
    /// already registered, or the registry is full.
    pub fn register(&mut self, identifier: &str, procedure: Procedure) -> Result<()> {
        let name = display_name(identifier)?;

        if self.position(name.as_str()).is_ok() {
            return Err(Error::Registry(RegistryError::DuplicateName(name)));
        }

        let identifier =
            heapless::String::try_from(identifier).map_err(|_| RegistryError::NameTooLong)?;

        tracing::debug!(name = name.as_str(), "registering test");

        self.entries
            .push(TestEntry {
                name,
                identifier,
                procedure,
            })
            .map_err(|_| Error::Registry(RegistryError::Full))?;
        self.entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));

        Ok(())
    }

    /// Display names in ascending lexicographic order.
    pub fn list(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Look up a procedure by display name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no test has this name.
    pub fn lookup(&self, name: &str) -> Result<Procedure> {
        self.entry(name).map(TestEntry::procedure)
    }

    /// Look up a registered test by display name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no test has this name.
    pub fn entry(&self, name: &str) -> Result<&TestEntry> {
        match self.position(name) {
            Ok(index) => Ok(&self.entries[index]),
            Err(_) => {
                let mut missing = DisplayName::new();
                for c in name.chars() {
                    if missing.push(c).is_err() {
                        break;
                    }
                }
                Err(Error::Registry(RegistryError::NotFound(missing)))
            }
        }
    }

    /// Check if a test exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_ok()
    }

    /// Get the number of registered tests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered tests in display name order.
    pub fn iter(&self) -> impl Iterator<Item = &TestEntry> {
        self.entries.iter()
    }

    fn position(&self, name: &str) -> core::result::Result<usize, usize> {
        self.entries.binary_search_by(|e| e.name.as_str().cmp(name))
    }
}
