//! Search parameters sent in the header of a Mascot search submission.
//!
//! The values are carried as text and are never interpreted. A single
//! [`SearchParameters::default`] value describes a reasonable tryptic search,
//! and [`SearchParametersBuilder`] overrides individual fields.
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered set of precursor charge states, rendered the way the search form
/// expects them, e.g. `"1+, 2+ and 3+"`.
///
/// Charges are sorted ascending on construction. Positive charges print with a
/// `+` suffix, everything else prints its magnitude with a `-` suffix, so `0`
/// becomes `"0-"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<i32>", into = "Vec<i32>"))]
pub struct ChargeList(Vec<i32>);

impl ChargeList {
    pub fn new(mut charges: Vec<i32>) -> Self {
        charges.sort();
        Self(charges)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.0.iter()
    }
}

impl Display for ChargeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.len();
        for (i, z) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(if i + 1 == n { " and " } else { ", " })?;
            }
            let sign = if *z > 0 { '+' } else { '-' };
            write!(f, "{}{}", z.unsigned_abs(), sign)?;
        }
        Ok(())
    }
}

impl From<Vec<i32>> for ChargeList {
    fn from(value: Vec<i32>) -> Self {
        Self::new(value)
    }
}

impl From<&[i32]> for ChargeList {
    fn from(value: &[i32]) -> Self {
        Self::new(value.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for ChargeList {
    fn from(value: [i32; N]) -> Self {
        Self::new(value.to_vec())
    }
}

impl From<ChargeList> for Vec<i32> {
    fn from(value: ChargeList) -> Self {
        value.0
    }
}

impl FromIterator<i32> for ChargeList {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The parameters of a Mascot MS/MS ion search.
///
/// | Field | Form name | Default |
/// |-------|-----------|---------|
/// | `database` | `DB` | `MSDB` |
/// | `search_type` | `SEARCH` | `MIS` |
/// | `report` | `REPORT` | `AUTO` |
/// | `cleavage` | `CLE` | `Trypsin` |
/// | `mass_type` | `MASS` | `Monoisotopic` |
/// | `fixed_modifications` | `MODS` | none |
/// | `variable_modifications` | `IT_MODS` | none |
/// | `instrument` | `INSTRUMENT` | `Default` |
/// | `missed_cleavages` | `PFA` | `1` |
/// | `precursor_mass_tolerance` | `TOL` | `2.0` Da |
/// | `fragment_mass_tolerance` | `ITOL` | `1.0` Da |
/// | `taxonomy` | `TAXONOMY` | `All entries` |
/// | `form_version` | `FORMVER` | `1.01` |
/// | `charges` | `CHARGE` | `1+, 2+ and 3+` |
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParameters {
    database: String,
    search_type: String,
    report: String,
    cleavage: String,
    mass_type: String,
    fixed_modifications: Vec<String>,
    variable_modifications: Vec<String>,
    instrument: String,
    missed_cleavages: u32,
    precursor_mass_tolerance: f64,
    fragment_mass_tolerance: f64,
    taxonomy: String,
    form_version: String,
    charges: ChargeList,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            database: "MSDB".to_string(),
            search_type: "MIS".to_string(),
            report: "AUTO".to_string(),
            cleavage: "Trypsin".to_string(),
            mass_type: "Monoisotopic".to_string(),
            fixed_modifications: Vec::new(),
            variable_modifications: Vec::new(),
            instrument: "Default".to_string(),
            missed_cleavages: 1,
            precursor_mass_tolerance: 2.0,
            fragment_mass_tolerance: 1.0,
            taxonomy: "All entries".to_string(),
            form_version: "1.01".to_string(),
            charges: ChargeList::new(vec![1, 2, 3]),
        }
    }
}

impl SearchParameters {
    pub fn builder() -> SearchParametersBuilder {
        SearchParametersBuilder::default()
    }

    /// Start a builder from a copy of these parameters
    pub fn to_builder(&self) -> SearchParametersBuilder {
        SearchParametersBuilder {
            params: self.clone(),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn search_type(&self) -> &str {
        &self.search_type
    }

    pub fn report(&self) -> &str {
        &self.report
    }

    pub fn cleavage(&self) -> &str {
        &self.cleavage
    }

    pub fn mass_type(&self) -> &str {
        &self.mass_type
    }

    pub fn fixed_modifications(&self) -> &[String] {
        &self.fixed_modifications
    }

    pub fn variable_modifications(&self) -> &[String] {
        &self.variable_modifications
    }

    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    pub fn missed_cleavages(&self) -> u32 {
        self.missed_cleavages
    }

    /// The precursor mass tolerance in Daltons
    pub fn precursor_mass_tolerance(&self) -> f64 {
        self.precursor_mass_tolerance
    }

    /// The fragment ion mass tolerance in Daltons
    pub fn fragment_mass_tolerance(&self) -> f64 {
        self.fragment_mass_tolerance
    }

    pub fn taxonomy(&self) -> &str {
        &self.taxonomy
    }

    pub fn form_version(&self) -> &str {
        &self.form_version
    }

    pub fn charges(&self) -> &ChargeList {
        &self.charges
    }
}

/// Builds [`SearchParameters`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct SearchParametersBuilder {
    params: SearchParameters,
}

impl SearchParametersBuilder {
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.params.database = database.into();
        self
    }

    pub fn search_type(mut self, search_type: impl Into<String>) -> Self {
        self.params.search_type = search_type.into();
        self
    }

    pub fn report(mut self, report: impl Into<String>) -> Self {
        self.params.report = report.into();
        self
    }

    pub fn cleavage(mut self, cleavage: impl Into<String>) -> Self {
        self.params.cleavage = cleavage.into();
        self
    }

    pub fn mass_type(mut self, mass_type: impl Into<String>) -> Self {
        self.params.mass_type = mass_type.into();
        self
    }

    /// Append one fixed modification
    pub fn fixed_modification(mut self, modification: impl Into<String>) -> Self {
        self.params.fixed_modifications.push(modification.into());
        self
    }

    /// Replace the fixed modification list
    pub fn fixed_modifications<I, S>(mut self, modifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.fixed_modifications = modifications.into_iter().map(Into::into).collect();
        self
    }

    /// Append one variable modification
    pub fn variable_modification(mut self, modification: impl Into<String>) -> Self {
        self.params.variable_modifications.push(modification.into());
        self
    }

    /// Replace the variable modification list
    pub fn variable_modifications<I, S>(mut self, modifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.variable_modifications = modifications.into_iter().map(Into::into).collect();
        self
    }

    pub fn instrument(mut self, instrument: impl Into<String>) -> Self {
        self.params.instrument = instrument.into();
        self
    }

    pub fn missed_cleavages(mut self, missed_cleavages: u32) -> Self {
        self.params.missed_cleavages = missed_cleavages;
        self
    }

    pub fn precursor_mass_tolerance(mut self, tolerance: f64) -> Self {
        self.params.precursor_mass_tolerance = tolerance;
        self
    }

    pub fn fragment_mass_tolerance(mut self, tolerance: f64) -> Self {
        self.params.fragment_mass_tolerance = tolerance;
        self
    }

    pub fn taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.params.taxonomy = taxonomy.into();
        self
    }

    pub fn form_version(mut self, form_version: impl Into<String>) -> Self {
        self.params.form_version = form_version.into();
        self
    }

    pub fn charges(mut self, charges: impl Into<ChargeList>) -> Self {
        self.params.charges = charges.into();
        self
    }

    pub fn build(self) -> SearchParameters {
        self.params
    }
}
