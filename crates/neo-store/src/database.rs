//! The in-memory NEO database.
//!
//! [`NeoDatabase`] holds every NEO and every close approach, links the two
//! by designation, and answers lookups and filtered queries.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use neo_seeker::{Filters, Matching};
use tracing::{debug, warn};

use crate::error::Result;
use crate::extract::{load_approaches, load_neos};
use crate::models::{CloseApproach, NearEarthObject};

/// A collection of NEOs and their close approaches.
#[derive(Debug, Clone, Default)]
pub struct NeoDatabase {
    neos: Vec<Arc<NearEarthObject>>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    // approach indices per NEO index
    approaches_by_neo: Vec<Vec<usize>>,
}

impl NeoDatabase {
    /// Builds a database, linking every approach to its NEO.
    ///
    /// Approaches whose designation matches no NEO are dropped. When two
    /// NEOs share a designation or a name, the first one wins lookups.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Self {
        let neos: Vec<Arc<NearEarthObject>> = neos.into_iter().map(Arc::new).collect();

        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();
        for (index, neo) in neos.iter().enumerate() {
            by_designation.entry(neo.designation.clone()).or_insert(index);
            if let Some(name) = &neo.name {
                by_name.entry(name.clone()).or_insert(index);
            }
        }

        let mut approaches_by_neo = vec![Vec::new(); neos.len()];
        let mut linked = Vec::with_capacity(approaches.len());
        let mut orphans = 0usize;
        for mut approach in approaches {
            match by_designation.get(&approach.designation) {
                Some(&index) => {
                    approach.neo = Some(Arc::clone(&neos[index]));
                    approaches_by_neo[index].push(linked.len());
                    linked.push(approach);
                }
                None => orphans += 1,
            }
        }
        if orphans > 0 {
            warn!(orphans, "dropped close approaches with no matching NEO");
        }
        debug!(
            neos = neos.len(),
            approaches = linked.len(),
            "linked NEO database"
        );

        NeoDatabase {
            neos,
            approaches: linked,
            by_designation,
            by_name,
            approaches_by_neo,
        }
    }

    /// Loads NEOs from a CSV file and approaches from a JSON file.
    pub fn load(neo_path: impl AsRef<Path>, cad_path: impl AsRef<Path>) -> Result<Self> {
        let neos = load_neos(neo_path)?;
        let approaches = load_approaches(cad_path)?;
        Ok(NeoDatabase::new(neos, approaches))
    }

    /// All NEOs, in load order.
    pub fn neos(&self) -> impl Iterator<Item = &NearEarthObject> {
        self.neos.iter().map(|neo| neo.as_ref())
    }

    /// All linked close approaches, in load order.
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Finds a NEO by its primary designation (exact match).
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|&index| self.neos[index].as_ref())
    }

    /// Finds a NEO by its IAU name (exact match). Unnamed NEOs never match.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name
            .get(name)
            .map(|&index| self.neos[index].as_ref())
    }

    /// Close approaches of the NEO with the given designation, in load order.
    pub fn approaches_for(&self, designation: &str) -> impl Iterator<Item = &CloseApproach> {
        self.by_designation
            .get(designation)
            .map(|&index| self.approaches_by_neo[index].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.approaches[i])
    }

    /// Lazily yields the close approaches that satisfy every criterion.
    ///
    /// Fails up front if a criterion has no field to read.
    pub fn query<'a>(
        &'a self,
        filters: &'a Filters,
    ) -> Result<Matching<'a, std::slice::Iter<'a, CloseApproach>>> {
        debug!(filters = %filters, "querying close approaches");
        Ok(filters.filter(self.approaches.iter())?)
    }
}
